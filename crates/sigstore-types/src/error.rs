//! Error types for sigstore-types

use thiserror::Error;

/// Errors that can occur when decoding core types
#[derive(Error, Debug)]
pub enum Error {
    /// Base64 decoding error
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Hex decoding error
    #[error("Hex error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Unknown hash algorithm name
    #[error("Unknown hash algorithm: {0}")]
    UnknownHashAlgorithm(String),
}

/// Result type for core type operations
pub type Result<T> = std::result::Result<T, Error>;
