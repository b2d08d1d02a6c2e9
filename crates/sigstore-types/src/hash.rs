//! Hash algorithms used by transparency logs

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hash algorithm a transparency log uses for its Merkle tree and signatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// SHA2-256
    #[default]
    #[serde(rename = "SHA2_256")]
    Sha2_256,
    /// SHA2-384
    #[serde(rename = "SHA2_384")]
    Sha2_384,
    /// SHA2-512
    #[serde(rename = "SHA2_512")]
    Sha2_512,
}

impl HashAlgorithm {
    /// Name as used in trusted root documents
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha2_256 => "SHA2_256",
            HashAlgorithm::Sha2_384 => "SHA2_384",
            HashAlgorithm::Sha2_512 => "SHA2_512",
        }
    }

    /// Digest length in bytes
    pub fn digest_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha2_256 => 32,
            HashAlgorithm::Sha2_384 => 48,
            HashAlgorithm::Sha2_512 => 64,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "SHA2_256" | "sha256" => Ok(HashAlgorithm::Sha2_256),
            "SHA2_384" | "sha384" => Ok(HashAlgorithm::Sha2_384),
            "SHA2_512" | "sha512" => Ok(HashAlgorithm::Sha2_512),
            _ => Err(Error::UnknownHashAlgorithm(s.to_string())),
        }
    }
}
