//! Trusted transparency log material
//!
//! A [`TransparencyLog`] holds what is needed to verify evidence from one
//! log: where it lives, its public key and its hash algorithm. Trusted
//! material exposes these records keyed by the hex encoding of the log's
//! key ID.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sigstore_types::{HashAlgorithm, LogKeyId};
use std::collections::HashMap;

/// Time range during which a log key is valid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityPeriod {
    /// Start of the validity period (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    /// End of the validity period (inclusive); open-ended when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

impl ValidityPeriod {
    /// Check whether `time` falls inside this period
    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        let after_start = self.start.map_or(true, |s| time >= s);
        let before_end = self.end.map_or(true, |e| time <= e);
        after_start && before_end
    }
}

/// Verification material for a single trusted transparency log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransparencyLog {
    /// Base URL of the log, used for online lookups and as timestamp URI
    pub base_url: String,
    /// Key ID identifying the log
    pub log_id: LogKeyId,
    /// DER-encoded public key of the log
    pub public_key: Vec<u8>,
    /// Key details name from the trusted root (e.g. `PKIX_ECDSA_P256_SHA_256`)
    pub key_details: Option<String>,
    /// Hash algorithm used by the log
    pub hash_algorithm: HashAlgorithm,
    /// Validity period of the log key, if restricted
    pub valid_for: Option<ValidityPeriod>,
}

impl TransparencyLog {
    /// Create a log record with the default hash algorithm and no validity restriction
    pub fn new(base_url: impl Into<String>, log_id: LogKeyId, public_key: Vec<u8>) -> Self {
        Self {
            base_url: base_url.into(),
            log_id,
            public_key,
            key_details: None,
            hash_algorithm: HashAlgorithm::default(),
            valid_for: None,
        }
    }

    /// Set the hash algorithm
    pub fn with_hash_algorithm(mut self, hash_algorithm: HashAlgorithm) -> Self {
        self.hash_algorithm = hash_algorithm;
        self
    }

    /// Restrict the key's validity period
    pub fn with_validity(mut self, valid_for: ValidityPeriod) -> Self {
        self.valid_for = Some(valid_for);
        self
    }

    /// Check whether the log key was valid at `time`
    pub fn is_valid_at(&self, time: DateTime<Utc>) -> bool {
        self.valid_for.as_ref().map_or(true, |v| v.contains(time))
    }
}

/// Source of trusted transparency log material
///
/// Implementations are read-only for the duration of a verification.
pub trait TrustedMaterial: Send + Sync {
    /// All trusted Rekor logs, keyed by hex-encoded log key ID
    fn rekor_logs(&self) -> &HashMap<String, TransparencyLog>;

    /// Look up the trusted log for a raw key ID
    ///
    /// Returns `None` when the log is not part of this trust material.
    fn resolve_log(&self, log_key_id: &[u8]) -> Option<&TransparencyLog> {
        self.rekor_logs().get(&hex::encode(log_key_id))
    }
}

/// In-memory set of trusted logs
#[derive(Debug, Clone, Default)]
pub struct TrustedLogs {
    logs: HashMap<String, TransparencyLog>,
}

impl TrustedLogs {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a log, replacing any previous log with the same key ID
    pub fn insert(&mut self, log: TransparencyLog) -> Option<TransparencyLog> {
        self.logs.insert(log.log_id.to_hex(), log)
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with_log(mut self, log: TransparencyLog) -> Self {
        self.insert(log);
        self
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }
}

impl FromIterator<TransparencyLog> for TrustedLogs {
    fn from_iter<I: IntoIterator<Item = TransparencyLog>>(iter: I) -> Self {
        let mut logs = Self::new();
        for log in iter {
            logs.insert(log);
        }
        logs
    }
}

impl TrustedMaterial for TrustedLogs {
    fn rekor_logs(&self) -> &HashMap<String, TransparencyLog> {
        &self.logs
    }
}
