//! Error types for the rnweb CLI.
//!
//! - [`CliError`] is returned by every command
//! - [`SettingsError`] covers loading the layered settings
//!
//! Synthesis failures keep their [`rnweb_bundler::Error`] so `main` can
//! render them with their diagnostic code and help text.

mod miette;

use std::path::PathBuf;

use thiserror::Error;

pub use self::miette::cli_error_to_miette;

#[derive(Debug, Error)]
pub enum CliError {
    /// Descriptor, alias or rule failure during synthesis
    #[error(transparent)]
    Bundler(#[from] rnweb_bundler::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    /// Project root does not exist or is not a directory
    #[error("Project root not found: {}\n\nHint: Pass --project-root <DIR> pointing at the directory that holds app.json", .0.display())]
    ProjectRootNotFound(PathBuf),

    /// A settings source has a bad value or type
    #[error("Invalid settings: {source}\n\nHint: Check {} and RNWEB_* environment variables", .file.display())]
    Invalid {
        file: PathBuf,
        #[source]
        source: Box<figment::Error>,
    },
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }
}
