//! Online transparency log verification
//!
//! Establishes inclusion by querying the log itself for the entry's index
//! and verifying every record it returns.

use super::evidence::{EntryOutcome, EvidenceVerifier, RemoteEntryVerifier};
use crate::entity::{LogEntry, Timestamp};
use crate::error::{Error, Result};
use async_trait::async_trait;
use sigstore_rekor::{RekorClientFactory, RekorLogClient};
use sigstore_trust_root::{TransparencyLog, TrustedMaterial};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Online strategy: look the entry up in the live log
///
/// Clients are built once per base URL and shared by all entries of a
/// verification that target the same log.
pub struct OnlineEvidence {
    client_factory: Arc<dyn RekorClientFactory>,
    remote_verifier: Arc<dyn RemoteEntryVerifier>,
    timeout: Duration,
    trust_integrated_time: bool,
    clients: Mutex<HashMap<String, Arc<dyn RekorLogClient>>>,
}

impl OnlineEvidence {
    pub fn new(
        client_factory: Arc<dyn RekorClientFactory>,
        remote_verifier: Arc<dyn RemoteEntryVerifier>,
        timeout: Duration,
        trust_integrated_time: bool,
    ) -> Self {
        Self {
            client_factory,
            remote_verifier,
            timeout,
            trust_integrated_time,
            clients: Mutex::new(HashMap::new()),
        }
    }

    fn client_for(&self, base_url: &str) -> Result<Arc<dyn RekorLogClient>> {
        let mut clients = self.clients.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(client) = clients.get(base_url) {
            tracing::debug!(base_url, "reusing Rekor client");
            return Ok(client.clone());
        }

        let client = self.client_factory.client(base_url)?;
        clients.insert(base_url.to_string(), client.clone());
        Ok(client)
    }

    /// Query the log for the entry and verify every returned record
    ///
    /// Any failure is fatal: there is no partial trust for online checks.
    pub async fn verify_entry(
        &self,
        entry: &dyn LogEntry,
        log: &TransparencyLog,
    ) -> Result<EntryOutcome> {
        let client = self.client_for(&log.base_url)?;
        let log_index = entry.log_index();

        tracing::debug!(log = %log.base_url, log_index, "querying transparency log");
        let records = tokio::time::timeout(self.timeout, client.get_log_entry_by_index(log_index))
            .await
            .map_err(|_| Error::RemoteTimeout {
                url: log.base_url.clone(),
                timeout: self.timeout,
            })??;

        if records.is_empty() {
            return Err(Error::EntryNotFound(log_index));
        }

        for record in &records {
            self.remote_verifier.verify_log_entry(record, log)?;
        }

        let timestamp = if self.trust_integrated_time {
            Some(Timestamp::from_entry(entry, log)?)
        } else {
            None
        };

        Ok(EntryOutcome::Verified { timestamp })
    }
}

#[async_trait]
impl EvidenceVerifier for OnlineEvidence {
    async fn verify(
        &self,
        entry: &dyn LogEntry,
        log: &TransparencyLog,
        _trusted_material: &dyn TrustedMaterial,
    ) -> Result<EntryOutcome> {
        self.verify_entry(entry, log).await
    }
}
