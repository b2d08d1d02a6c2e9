//! Error types for sigstore-trust-root

use thiserror::Error;

/// Errors that can occur when loading trusted material
#[derive(Error, Debug)]
pub enum Error {
    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while reading a trusted root file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A transparency log instance is missing a required field
    #[error("Invalid transparency log: {0}")]
    InvalidLog(String),

    /// Two transparency log instances share a key ID
    #[error("Duplicate transparency log key ID: {0}")]
    DuplicateLog(String),
}

/// Result type for trust root operations
pub type Result<T> = std::result::Result<T, Error>;
