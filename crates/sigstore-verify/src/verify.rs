//! Transparency log verification entry point

use crate::entity::{LogEntry, SignatureContent, SignedEntity, Timestamp, VerificationContent};
use crate::error::Result;
use crate::options::{LogMode, TlogVerificationOptions};
use crate::verify_impl::admission::admit_entries;
use crate::verify_impl::consistency::check_consistency;
use crate::verify_impl::evidence::{
    EntryOutcome, EvidenceVerifier, InclusionVerifier, RemoteEntryVerifier, SetVerifier,
};
use crate::verify_impl::rekor::OnlineEvidence;
use crate::verify_impl::threshold::Tally;
use crate::verify_impl::tlog::OfflineEvidence;
use crate::verify_impl::validation::{EntryValidator, StructuralValidator};
use futures::future::join_all;
use sigstore_rekor::{HttpClientFactory, RekorClientFactory};
use sigstore_trust_root::TrustedMaterial;
use std::sync::Arc;

/// Verifies that an artifact was recorded in enough trusted transparency logs
///
/// The cryptographic checks are supplied by the caller; the remote log
/// transport and the structural validator have defaults that can be
/// replaced.
pub struct TlogVerifier {
    validator: Arc<dyn EntryValidator>,
    set_verifier: Arc<dyn SetVerifier>,
    inclusion_verifier: Arc<dyn InclusionVerifier>,
    remote_verifier: Arc<dyn RemoteEntryVerifier>,
    client_factory: Arc<dyn RekorClientFactory>,
}

impl TlogVerifier {
    /// Create a verifier with the default validator and HTTP Rekor transport
    pub fn new(
        set_verifier: Arc<dyn SetVerifier>,
        inclusion_verifier: Arc<dyn InclusionVerifier>,
        remote_verifier: Arc<dyn RemoteEntryVerifier>,
    ) -> Self {
        Self {
            validator: Arc::new(StructuralValidator),
            set_verifier,
            inclusion_verifier,
            remote_verifier,
            client_factory: Arc::new(HttpClientFactory::default()),
        }
    }

    /// Replace the structural validator
    pub fn with_validator(mut self, validator: Arc<dyn EntryValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Replace the factory used to reach remote logs in online mode
    pub fn with_client_factory(mut self, client_factory: Arc<dyn RekorClientFactory>) -> Self {
        self.client_factory = client_factory;
        self
    }

    /// Verify the entity's transparency log entries
    ///
    /// Returns the trusted timestamps collected from verified entries
    /// (empty unless `trust_integrated_time` is set), or the first
    /// invariant that failed.
    pub async fn verify_transparency_log<E: SignedEntity>(
        &self,
        entity: &E,
        trusted_material: &dyn TrustedMaterial,
        threshold: usize,
        trust_integrated_time: bool,
        online: bool,
    ) -> Result<Vec<Timestamp>> {
        let mut options = TlogVerificationOptions::default().require_threshold(threshold);
        if trust_integrated_time {
            options = options.trust_integrated_time();
        }
        if online {
            options = options.online();
        }
        self.verify(entity, trusted_material, &options).await
    }

    /// Verify the entity's transparency log entries with explicit options
    pub async fn verify<E: SignedEntity>(
        &self,
        entity: &E,
        trusted_material: &dyn TrustedMaterial,
        options: &TlogVerificationOptions,
    ) -> Result<Vec<Timestamp>> {
        let entries = entity.tlog_entries()?;
        admit_entries(entries)?;
        tracing::debug!(entries = entries.len(), mode = ?options.mode, "verifying tlog entries");

        let signature = entity.signature_content()?.signature();
        let verification_content = entity.verification_content()?;

        // One malformed entry invalidates the whole set
        for entry in entries {
            self.validator.validate(entry)?;
        }

        let evidence = self.evidence_verifier(options);

        let pending = entries.iter().map(|entry| {
            self.verify_entry(
                entry,
                signature,
                verification_content,
                trusted_material,
                evidence.as_ref(),
            )
        });

        // Entries are independent, so they run concurrently; outcomes are
        // folded in entity order so the first failing entry is reported.
        let mut tally = Tally::new();
        for outcome in join_all(pending).await {
            tally.record(outcome?);
        }

        let verified = tally.verified();
        let skipped = tally.skipped();
        let timestamps = tally.finish(options.threshold)?;
        tracing::info!(
            verified,
            skipped,
            threshold = options.threshold,
            timestamps = timestamps.len(),
            "transparency log verification succeeded"
        );
        Ok(timestamps)
    }

    fn evidence_verifier(&self, options: &TlogVerificationOptions) -> Box<dyn EvidenceVerifier> {
        match options.mode {
            LogMode::Offline => Box::new(OfflineEvidence::new(
                self.set_verifier.clone(),
                self.inclusion_verifier.clone(),
                options.trust_integrated_time,
            )),
            LogMode::Online => Box::new(OnlineEvidence::new(
                self.client_factory.clone(),
                self.remote_verifier.clone(),
                options.remote_timeout,
                options.trust_integrated_time,
            )),
        }
    }

    async fn verify_entry(
        &self,
        entry: &dyn LogEntry,
        signature: &[u8],
        verification_content: &dyn VerificationContent,
        trusted_material: &dyn TrustedMaterial,
        evidence: &dyn EvidenceVerifier,
    ) -> Result<EntryOutcome> {
        let Some(log) = trusted_material.resolve_log(entry.log_key_id()) else {
            // The trust root need not include every log an artifact references
            tracing::warn!(
                log_key_id = %hex::encode(entry.log_key_id()),
                log_index = entry.log_index(),
                "skipping entry from unrecognized transparency log"
            );
            return Ok(EntryOutcome::SkippedUnrecognizedLog);
        };

        let outcome = evidence.verify(entry, log, trusted_material).await?;
        if outcome.is_verified() {
            check_consistency(entry, signature, verification_content, trusted_material)?;
        }

        tracing::debug!(log = %log.base_url, log_index = entry.log_index(), ?outcome, "entry processed");
        Ok(outcome)
    }
}
