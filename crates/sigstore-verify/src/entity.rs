//! Capabilities the verifier needs from a signed artifact
//!
//! The verifier does not parse bundles. Callers expose their artifact
//! through [`SignedEntity`], and its log entries through [`LogEntry`].

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sigstore_trust_root::{TransparencyLog, TrustedMaterial};

/// A transparency log entry recorded for an artifact
pub trait LogEntry: Send + Sync {
    /// Raw key ID of the log that recorded the entry
    fn log_key_id(&self) -> &[u8];

    /// Index of the entry in the log
    fn log_index(&self) -> i64;

    /// Time the log integrated the entry (Unix seconds)
    fn integrated_time(&self) -> i64;

    /// Signature recorded in the entry body
    fn signature(&self) -> &[u8];

    /// Public key or certificate recorded in the entry body
    fn public_key(&self) -> &[u8];

    fn has_inclusion_promise(&self) -> bool;

    fn has_inclusion_proof(&self) -> bool;
}

/// Signature carried by the artifact
pub trait SignatureContent: Send + Sync {
    fn signature(&self) -> &[u8];
}

/// Verification material (certificate or key) carried by the artifact
pub trait VerificationContent: Send + Sync {
    /// Check that `public_key` is the artifact's key
    fn compare_key(&self, public_key: &[u8], trusted_material: &dyn TrustedMaterial) -> bool;

    /// Check that `time` falls inside the material's validity window
    fn valid_at_time(&self, time: DateTime<Utc>, trusted_material: &dyn TrustedMaterial) -> bool;
}

/// A signed artifact together with its transparency log evidence
pub trait SignedEntity: Send + Sync {
    type Entry: LogEntry;
    type Signature: SignatureContent;
    type Verification: VerificationContent;

    fn tlog_entries(&self) -> Result<&[Self::Entry]>;

    fn signature_content(&self) -> Result<&Self::Signature>;

    fn verification_content(&self) -> Result<&Self::Verification>;
}

/// A trusted point in time established by a transparency log
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    /// Integrated time of the entry
    pub time: DateTime<Utc>,
    /// Base URL of the log that vouched for it
    pub uri: String,
}

impl Timestamp {
    /// Timestamp for an entry's integrated time as vouched for by `log`
    pub fn from_entry(entry: &dyn LogEntry, log: &TransparencyLog) -> Result<Self> {
        Ok(Self {
            time: integrated_time_utc(entry)?,
            uri: log.base_url.clone(),
        })
    }
}

/// Integrated time of an entry as a UTC datetime
pub(crate) fn integrated_time_utc(entry: &dyn LogEntry) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(entry.integrated_time(), 0).ok_or_else(|| {
        Error::InvalidEntry(format!(
            "integrated time {} is out of range",
            entry.integrated_time()
        ))
    })
}
