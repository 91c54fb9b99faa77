//! Build-time inputs for compiling a React Native project for the web.
//!
//! - [`descriptor`] reads `app.json`
//! - [`env`] derives the client environment (`process.env`, `__DEV__`)
//! - [`shell`] derives the HTML entry document
//! - [`locations`] holds every fixed path under the project root

pub mod descriptor;
pub mod env;
pub mod error;
pub mod locations;
pub mod manifest;
pub mod shell;

pub use descriptor::{DescriptorReader, ProjectDescriptor, read_descriptor};
pub use env::{ClientEnvironment, EnvironmentBag, EnvironmentSynthesizer, Mode, is_client_env_var};
pub use error::{ConfigError, Result};
pub use locations::{Locations, ProductionLocations, TemplateLocations};
pub use manifest::AppManifest;
pub use shell::{DEFAULT_DESCRIPTION, DEFAULT_THEME_COLOR, MinifyOptions, ShellDocument};
