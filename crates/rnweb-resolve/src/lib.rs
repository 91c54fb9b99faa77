//! Module-resolution rules for compiling React Native code for the web.
//!
//! Three independent pieces, all evaluated by the bundler while it resolves
//! and compiles modules:
//!
//! - [`inclusion`]: which files get the project's JavaScript transform
//! - [`redirect`]: platform modules requested from React Native's sources are
//!   redirected to web implementations
//! - [`alias`]: bare React Native imports map to `react-native-web`

pub mod alias;
pub mod error;
pub mod inclusion;
pub mod redirect;

pub use alias::{AliasEntry, AliasTable, AliasTableBuilder, AliasTier};
pub use error::{ResolveError, Result};
pub use inclusion::{Decision, InclusionRule, InclusionRules, Predicate, Verdict};
pub use redirect::{ModuleReference, RedirectionRule, RedirectionRules};
