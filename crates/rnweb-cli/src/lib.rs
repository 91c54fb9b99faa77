//! rnweb CLI - synthesizes the configuration a JavaScript bundler needs to
//! compile a React Native / Expo project for the web.
//!
//! # Architecture
//!
//! - [`cli`] - argument definitions (clap derive)
//! - [`config`] - layered settings: defaults, `rnweb.config.json`, `RNWEB_*`
//!   environment, command-line flags
//! - [`commands`] - `config`, `env`, `check` and `resolve`
//! - [`error`] - error types and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - colored status messages
//!
//! # Example
//!
//! ```rust,no_run
//! use rnweb_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use config::RnwebSettings;
pub use error::{CliError, Result, SettingsError};
