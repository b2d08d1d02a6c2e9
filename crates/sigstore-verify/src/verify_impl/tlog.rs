//! Offline transparency log verification
//!
//! Establishes inclusion from the evidence an entry carries: the signed
//! entry timestamp (inclusion promise) and the Merkle inclusion proof.

use super::evidence::{EntryOutcome, EvidenceVerifier, InclusionVerifier, SetVerifier};
use crate::entity::{LogEntry, Timestamp};
use crate::error::{Error, Result};
use async_trait::async_trait;
use sigstore_trust_root::{TransparencyLog, TrustedMaterial};
use std::sync::Arc;

/// Offline strategy: verify the promise and/or proof held by the entry
pub struct OfflineEvidence {
    set_verifier: Arc<dyn SetVerifier>,
    inclusion_verifier: Arc<dyn InclusionVerifier>,
    trust_integrated_time: bool,
}

impl OfflineEvidence {
    pub fn new(
        set_verifier: Arc<dyn SetVerifier>,
        inclusion_verifier: Arc<dyn InclusionVerifier>,
        trust_integrated_time: bool,
    ) -> Self {
        Self {
            set_verifier,
            inclusion_verifier,
            trust_integrated_time,
        }
    }

    /// Verify an entry's promise and proof
    ///
    /// A SET that does not verify is not fatal: it may be signed by a key
    /// outside the loaded trust material. Only the timestamp is lost, and
    /// the entry is skipped unless an inclusion proof backs it. A failing
    /// inclusion proof is fatal. A proof alone never yields a timestamp
    /// since it carries no signed time.
    pub fn verify_entry(
        &self,
        entry: &dyn LogEntry,
        log: &TransparencyLog,
        trusted_material: &dyn TrustedMaterial,
    ) -> Result<EntryOutcome> {
        if !entry.has_inclusion_promise() && !entry.has_inclusion_proof() {
            return Err(Error::MissingInclusionEvidence);
        }

        let mut set_verified = false;
        let mut timestamp = None;

        if entry.has_inclusion_promise() {
            match self
                .set_verifier
                .verify_set(entry, trusted_material.rekor_logs())
            {
                Ok(()) => {
                    set_verified = true;
                    if self.trust_integrated_time {
                        timestamp = Some(Timestamp::from_entry(entry, log)?);
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        log_index = entry.log_index(),
                        log = %log.base_url,
                        "inclusion promise not verifiable with trusted material: {}",
                        e
                    );
                }
            }
        }

        if entry.has_inclusion_proof() {
            self.inclusion_verifier.verify_inclusion(entry, log)?;
            return Ok(EntryOutcome::Verified { timestamp });
        }

        if set_verified {
            Ok(EntryOutcome::Verified { timestamp })
        } else {
            Ok(EntryOutcome::SkippedUnverifiableTimestamp)
        }
    }
}

#[async_trait]
impl EvidenceVerifier for OfflineEvidence {
    async fn verify(
        &self,
        entry: &dyn LogEntry,
        log: &TransparencyLog,
        trusted_material: &dyn TrustedMaterial,
    ) -> Result<EntryOutcome> {
        self.verify_entry(entry, log, trusted_material)
    }
}
