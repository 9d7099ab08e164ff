//! Error types for the documentation components

use thiserror::Error;

/// Main error type for docs-ui operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Session storage is not available")]
    StorageUnavailable,

    #[error("Session storage rejected the operation: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown technology '{0}'")]
    UnknownTechnology(String),
}

/// Result type for docs-ui operations
pub type Result<T> = std::result::Result<T, Error>;
