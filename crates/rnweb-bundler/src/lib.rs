//! # rnweb-bundler
//!
//! Assembles the configuration an external JavaScript bundler needs to
//! compile a React Native / Expo project for the browser.
//!
//! The project descriptor, client environment and HTML shell come from
//! [`rnweb_config`]; inclusion, redirection and alias rules come from
//! [`rnweb_resolve`]. This crate combines them with the fixed output naming,
//! loader rules and plugin settings into one [`BundlerConfig`].
//!
//! ```no_run
//! use rnweb_bundler::{Mode, synthesize};
//! use std::path::Path;
//!
//! let config = synthesize("./my-app", Mode::Production)?;
//! assert!(config.compiles(Path::new("./my-app/App.js")));
//! # Ok::<(), rnweb_bundler::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod plugins;
pub mod rules;
mod synthesize;

pub use config::{
    BundlerConfig, ModuleConfig, OptimizationConfig, OutputConfig, ResolutionConfig,
    RESOLVE_EXTENSIONS,
};
pub use error::{Error, Result};
pub use plugins::{PluginConfig, ServiceWorkerOptions};
pub use rules::{LoaderUse, ModuleRule, RuleInclude};
pub use synthesize::{WebBuildOptions, synthesize};

// Re-export the types callers need to drive synthesis
pub use rnweb_config::{ClientEnvironment, Mode, ShellDocument};
pub use rnweb_resolve::{AliasTable, ModuleReference};
