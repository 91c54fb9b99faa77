//! Errors raised while synthesizing a bundler configuration.

use rnweb_config::ConfigError;
use rnweb_resolve::ResolveError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Any failure aborts synthesis; no partial configuration is produced.
#[derive(Debug, Error)]
pub enum Error {
    /// Descriptor could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Resolution rules could not be built.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Invalid loader rule pattern.
    #[error("invalid module rule pattern '{pattern}': {source}")]
    InvalidRule {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Configuration could not be serialized.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl miette::Diagnostic for Error {
    fn code(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        Some(Box::new(match self {
            Error::Config(ConfigError::MissingDescriptor { .. }) => "MISSING_DESCRIPTOR",
            Error::Config(ConfigError::MalformedDescriptor { .. }) => "MALFORMED_DESCRIPTOR",
            Error::Config(_) => "CONFIG_ERROR",
            Error::Resolve(ResolveError::AliasCollision { .. }) => "ALIAS_COLLISION",
            Error::Resolve(ResolveError::InvalidPattern { .. }) => "INVALID_PATTERN",
            Error::InvalidRule { .. } => "INVALID_RULE",
            Error::Serialize(_) => "SERIALIZE_ERROR",
        }))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn help(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        match self {
            Error::Config(ConfigError::MissingDescriptor { .. }) => Some(Box::new(
                "Run this command from the project root or pass --project-root. The project needs an app.json file.",
            )),
            Error::Config(ConfigError::MalformedDescriptor { .. }) => Some(Box::new(
                "app.json must be a JSON object with a top-level \"expo\" section.",
            )),
            Error::Resolve(ResolveError::AliasCollision { name, .. }) => Some(Box::new(format!(
                "'{name}' is already aliased by default. Remove it from your aliases or rename it."
            ))),
            _ => None,
        }
    }
}
