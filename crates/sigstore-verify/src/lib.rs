//! Sigstore transparency log verification
//!
//! This crate decides whether an artifact was recorded in enough trusted
//! transparency logs. Each entry is resolved against the trusted logs,
//! proven to be included (offline from its promise/proof, or online by
//! querying the log), and cross-checked against the artifact's own
//! signature, key and validity window. Verification succeeds when at least
//! `threshold` entries pass.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use sigstore_trust_root::TrustedRoot;
//! use sigstore_verify::{TlogVerificationOptions, TlogVerifier};
//!
//! # async fn example(bundle: &MyBundle) -> Result<(), Box<dyn std::error::Error>> {
//! let trusted_root = TrustedRoot::from_file("trusted_root.json")?;
//! let verifier = TlogVerifier::new(
//!     Arc::new(MySetVerifier),
//!     Arc::new(MyInclusionVerifier),
//!     Arc::new(MyRemoteVerifier),
//! );
//!
//! let options = TlogVerificationOptions::default()
//!     .require_threshold(1)
//!     .trust_integrated_time();
//! let timestamps = verifier.verify(bundle, &trusted_root, &options).await?;
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod options;
mod verify;

// Private submodules for verification logic
mod verify_impl;

#[cfg(test)]
mod test_support;

// Re-export core types that users need
pub use sigstore_rekor as rekor;
pub use sigstore_trust_root as trust_root;
pub use sigstore_types as types;

pub use entity::{LogEntry, SignatureContent, SignedEntity, Timestamp, VerificationContent};
pub use error::{Error, Result};
pub use options::{LogMode, TlogVerificationOptions, DEFAULT_REMOTE_TIMEOUT};
pub use verify::TlogVerifier;
pub use verify_impl::admission::MAX_TLOG_ENTRIES;
pub use verify_impl::evidence::{
    EntryOutcome, EvidenceVerifier, InclusionVerifier, RemoteEntryVerifier, SetVerifier,
};
pub use verify_impl::rekor::OnlineEvidence;
pub use verify_impl::threshold::Tally;
pub use verify_impl::tlog::OfflineEvidence;
pub use verify_impl::validation::{EntryValidator, StructuralValidator};
