//! Core types for Sigstore transparency log verification
//!
//! This crate provides the small value types shared by the trust root,
//! the Rekor client and the verifier: log key identifiers, hash
//! algorithms and serde helpers for base64-encoded byte fields.

pub mod encoding;
pub mod error;
pub mod hash;

pub use encoding::{base64_bytes, base64_bytes_option, LogKeyId};
pub use error::{Error, Result};
pub use hash::HashAlgorithm;
