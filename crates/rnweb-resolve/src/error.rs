//! Error types for resolution rule construction.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(
        "alias '{name}' is defined twice ('{existing}' and '{incoming}')\n\nHint: remove one of the definitions; aliases must be unique"
    )]
    AliasCollision {
        name: String,
        existing: String,
        incoming: String,
    },

    #[error("invalid module pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
