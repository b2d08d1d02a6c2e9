//! Sigstore trusted transparency log material
//!
//! This crate provides the trust anchors the transparency log verifier
//! resolves log entries against:
//! - [`TransparencyLog`]: base URL, public key and hash algorithm of one log
//! - [`TrustedMaterial`]: lookup of trusted logs by key ID
//! - [`TrustedRoot`]: trusted logs loaded from a Sigstore trusted root JSON document
//! - [`TrustedLogs`]: trusted logs assembled in code
//!
//! # Example
//!
//! ```no_run
//! use sigstore_trust_root::{TrustedMaterial, TrustedRoot};
//!
//! # fn example() -> Result<(), sigstore_trust_root::Error> {
//! let root = TrustedRoot::from_file("trusted_root.json")?;
//! for (key_id, log) in root.rekor_logs() {
//!     println!("{} -> {}", key_id, log.base_url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod material;
pub mod trusted_root;

pub use error::{Error, Result};
pub use material::{TransparencyLog, TrustedLogs, TrustedMaterial, ValidityPeriod};
pub use trusted_root::{
    LogId, PublicKey, TransparencyLogInstance, TrustedRoot, TRUSTED_ROOT_MEDIA_TYPE,
};
