//! Command implementations.
//!
//! Each command loads the layered settings, synthesizes what it needs and
//! prints a result to stdout. Status lines go to stderr.

pub mod check;
pub mod config;
pub mod env;
pub mod resolve;

pub use check::execute as check_execute;
pub use config::execute as config_execute;
pub use env::execute as env_execute;
pub use resolve::execute as resolve_execute;

use std::path::PathBuf;

use rnweb_bundler::BundlerConfig;

use crate::cli::ProjectArgs;
use crate::config::RnwebSettings;
use crate::error::Result;

/// Absolute project root; inclusion checks compare against it.
pub(crate) fn project_root(project: &ProjectArgs) -> Result<PathBuf> {
    Ok(std::path::absolute(&project.project_root)?)
}

/// Load settings and synthesize the project's configuration.
pub(crate) fn synthesize(project: &ProjectArgs) -> Result<BundlerConfig> {
    let root = project_root(project)?;
    let settings = RnwebSettings::from_args(project)?;
    tracing::debug!(?settings, root = %root.display(), "resolved settings");
    Ok(settings.build_options(root).synthesize()?)
}
