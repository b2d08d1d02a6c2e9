//! Evidence verification seams
//!
//! An [`EvidenceVerifier`] proves that an entry is in its log. The offline
//! and online strategies live in `tlog` and `rekor`; the cryptographic
//! checks they delegate to are injected through the traits below.

use crate::entity::{LogEntry, Timestamp};
use crate::error::Result;
use async_trait::async_trait;
use sigstore_rekor::LogEntry as RekorEntry;
use sigstore_trust_root::{TransparencyLog, TrustedMaterial};
use std::collections::HashMap;

/// Result of processing one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// The entry counts towards the threshold
    Verified {
        /// Trusted integrated time, when one was established and requested
        timestamp: Option<Timestamp>,
    },
    /// The entry names a log outside the trust material
    SkippedUnrecognizedLog,
    /// The entry's only evidence is a SET the trust material cannot verify
    SkippedUnverifiableTimestamp,
}

impl EntryOutcome {
    pub fn is_verified(&self) -> bool {
        matches!(self, EntryOutcome::Verified { .. })
    }
}

/// Verifies an entry's signed entry timestamp (inclusion promise)
pub trait SetVerifier: Send + Sync {
    fn verify_set(
        &self,
        entry: &dyn LogEntry,
        rekor_logs: &HashMap<String, TransparencyLog>,
    ) -> Result<()>;
}

/// Verifies an entry's Merkle inclusion proof against its log
pub trait InclusionVerifier: Send + Sync {
    fn verify_inclusion(&self, entry: &dyn LogEntry, log: &TransparencyLog) -> Result<()>;
}

/// Verifies a record fetched from a remote log
pub trait RemoteEntryVerifier: Send + Sync {
    fn verify_log_entry(&self, record: &RekorEntry, log: &TransparencyLog) -> Result<()>;
}

/// Strategy establishing an entry's inclusion in its (trusted) log
#[async_trait]
pub trait EvidenceVerifier: Send + Sync {
    async fn verify(
        &self,
        entry: &dyn LogEntry,
        log: &TransparencyLog,
        trusted_material: &dyn TrustedMaterial,
    ) -> Result<EntryOutcome>;
}
