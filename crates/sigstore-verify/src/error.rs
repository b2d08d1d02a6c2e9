//! Error types for sigstore-verify

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during transparency log verification
///
/// Every variant is fatal: it aborts the whole verification. Entries that
/// are merely unverifiable with the current trust material are skipped
/// instead and never surface as errors.
#[derive(Error, Debug)]
pub enum Error {
    /// The entity carries more entries than are ever processed
    #[error("too many tlog entries: {count} > {max}")]
    TooManyEntries { count: usize, max: usize },

    /// Two entries share a log key ID and log index
    #[error("duplicate tlog entries found (log {log_key_id}, index {log_index})")]
    DuplicateEntries { log_key_id: String, log_index: i64 },

    /// An entry failed structural validation
    #[error("invalid tlog entry: {0}")]
    InvalidEntry(String),

    /// Offline verification needs a promise, a proof, or both
    #[error("entry must contain an inclusion proof and/or promise")]
    MissingInclusionEvidence,

    /// The inclusion proof did not verify against the log
    #[error("inclusion proof verification failed: {0}")]
    InclusionProof(String),

    /// The signed entry timestamp did not verify
    ///
    /// Returned by [`SetVerifier`](crate::SetVerifier) implementations and
    /// turned into a skipped entry by the verifier.
    #[error("SET verification failed: {0}")]
    SignedEntryTimestamp(String),

    /// The remote log has no entry at the queried index
    #[error("unable to locate log entry {0}")]
    EntryNotFound(i64),

    /// The remote log did not answer in time
    #[error("timed out after {timeout:?} querying transparency log {url}")]
    RemoteTimeout { url: String, timeout: Duration },

    /// Transport error talking to the remote log
    #[error("Rekor error: {0}")]
    Rekor(#[from] sigstore_rekor::Error),

    /// A record returned by the remote log did not verify
    #[error("remote log entry verification failed: {0}")]
    RemoteVerification(String),

    /// The entry's signature differs from the artifact's signature
    #[error("transparency log signature does not match")]
    SignatureMismatch,

    /// The entry's public key differs from the artifact's verification material
    #[error("transparency log certificate does not match")]
    CertificateMismatch,

    /// The entry was integrated outside the artifact's validity window
    #[error("integrated time {0} outside certificate validity")]
    IntegratedTimeOutsideValidity(i64),

    /// Fewer entries verified than the caller requires
    #[error("not enough verified log entries from transparency log: {verified} < {threshold}")]
    ThresholdNotMet { verified: usize, threshold: usize },

    /// The signed entity could not expose its content
    #[error("Entity error: {0}")]
    Entity(String),
}

/// Result type for verification operations
pub type Result<T> = std::result::Result<T, Error>;
