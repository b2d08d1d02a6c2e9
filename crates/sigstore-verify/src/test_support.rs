//! Test doubles for the verifier's collaborators

use crate::entity::{LogEntry, SignatureContent, SignedEntity, VerificationContent};
use crate::error::{Error, Result};
use crate::verify_impl::evidence::{InclusionVerifier, RemoteEntryVerifier, SetVerifier};
use crate::verify_impl::validation::{EntryValidator, StructuralValidator};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sigstore_rekor::{LogEntry as RekorEntry, RekorClientFactory, RekorLogClient};
use sigstore_trust_root::{TransparencyLog, TrustedLogs, TrustedMaterial};
use sigstore_types::LogKeyId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const LOG_KEY_ID: [u8; 4] = [0xaa, 0xbb, 0xcc, 0xdd];
pub const OTHER_LOG_KEY_ID: [u8; 4] = [0x11, 0x22, 0x33, 0x44];
pub const SECOND_LOG_KEY_ID: [u8; 4] = [0x55, 0x66, 0x77, 0x88];
pub const LOG_URL: &str = "https://rekor.example.dev";
pub const SECOND_LOG_URL: &str = "https://rekor2.example.dev";
pub const SIGNATURE: &[u8] = b"artifact-signature";
pub const PUBLIC_KEY: &[u8] = b"artifact-public-key";
pub const NOT_BEFORE: i64 = 1_700_000_000;
pub const NOT_AFTER: i64 = 1_700_000_600;
pub const INTEGRATED_TIME: i64 = 1_700_000_100;

/// Trusted logs containing `LOG_KEY_ID` and `SECOND_LOG_KEY_ID`, but not `OTHER_LOG_KEY_ID`
pub fn trusted_logs() -> TrustedLogs {
    TrustedLogs::new()
        .with_log(TransparencyLog::new(
            LOG_URL,
            LogKeyId::from(&LOG_KEY_ID[..]),
            b"log-key".to_vec(),
        ))
        .with_log(TransparencyLog::new(
            SECOND_LOG_URL,
            LogKeyId::from(&SECOND_LOG_KEY_ID[..]),
            b"second-log-key".to_vec(),
        ))
}

#[derive(Debug, Clone)]
pub struct FakeEntry {
    log_key_id: Vec<u8>,
    log_index: i64,
    integrated_time: i64,
    signature: Vec<u8>,
    public_key: Vec<u8>,
    promise: bool,
    proof: bool,
}

impl FakeEntry {
    /// A consistent entry in `LOG_KEY_ID` carrying only an inclusion proof
    pub fn new(log_index: i64) -> Self {
        Self {
            log_key_id: LOG_KEY_ID.to_vec(),
            log_index,
            integrated_time: INTEGRATED_TIME,
            signature: SIGNATURE.to_vec(),
            public_key: PUBLIC_KEY.to_vec(),
            promise: false,
            proof: true,
        }
    }

    pub fn with_log(mut self, log_key_id: &[u8]) -> Self {
        self.log_key_id = log_key_id.to_vec();
        self
    }

    pub fn with_integrated_time(mut self, integrated_time: i64) -> Self {
        self.integrated_time = integrated_time;
        self
    }

    pub fn with_signature(mut self, signature: &[u8]) -> Self {
        self.signature = signature.to_vec();
        self
    }

    pub fn with_public_key(mut self, public_key: &[u8]) -> Self {
        self.public_key = public_key.to_vec();
        self
    }

    pub fn with_promise(mut self) -> Self {
        self.promise = true;
        self
    }

    pub fn without_proof(mut self) -> Self {
        self.proof = false;
        self
    }
}

impl LogEntry for FakeEntry {
    fn log_key_id(&self) -> &[u8] {
        &self.log_key_id
    }

    fn log_index(&self) -> i64 {
        self.log_index
    }

    fn integrated_time(&self) -> i64 {
        self.integrated_time
    }

    fn signature(&self) -> &[u8] {
        &self.signature
    }

    fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    fn has_inclusion_promise(&self) -> bool {
        self.promise
    }

    fn has_inclusion_proof(&self) -> bool {
        self.proof
    }
}

pub struct FakeSignature(Vec<u8>);

impl SignatureContent for FakeSignature {
    fn signature(&self) -> &[u8] {
        &self.0
    }
}

/// Accepts `PUBLIC_KEY` and times in `[NOT_BEFORE, NOT_AFTER]`
pub struct FakeVerificationContent {
    public_key: Vec<u8>,
    not_before: i64,
    not_after: i64,
}

impl Default for FakeVerificationContent {
    fn default() -> Self {
        Self {
            public_key: PUBLIC_KEY.to_vec(),
            not_before: NOT_BEFORE,
            not_after: NOT_AFTER,
        }
    }
}

impl VerificationContent for FakeVerificationContent {
    fn compare_key(&self, public_key: &[u8], _trusted_material: &dyn TrustedMaterial) -> bool {
        public_key == self.public_key.as_slice()
    }

    fn valid_at_time(&self, time: DateTime<Utc>, _trusted_material: &dyn TrustedMaterial) -> bool {
        (self.not_before..=self.not_after).contains(&time.timestamp())
    }
}

pub struct FakeEntity {
    entries: Vec<FakeEntry>,
    signature: FakeSignature,
    content: FakeVerificationContent,
    broken: bool,
}

impl FakeEntity {
    pub fn new(entries: Vec<FakeEntry>) -> Self {
        Self {
            entries,
            signature: FakeSignature(SIGNATURE.to_vec()),
            content: FakeVerificationContent::default(),
            broken: false,
        }
    }

    /// An entity whose signature content cannot be read
    pub fn broken(mut self) -> Self {
        self.broken = true;
        self
    }
}

impl SignedEntity for FakeEntity {
    type Entry = FakeEntry;
    type Signature = FakeSignature;
    type Verification = FakeVerificationContent;

    fn tlog_entries(&self) -> Result<&[FakeEntry]> {
        Ok(&self.entries)
    }

    fn signature_content(&self) -> Result<&FakeSignature> {
        if self.broken {
            return Err(Error::Entity("no signature content".to_string()));
        }
        Ok(&self.signature)
    }

    fn verification_content(&self) -> Result<&FakeVerificationContent> {
        Ok(&self.content)
    }
}

pub struct FakeSetVerifier {
    accept: bool,
    calls: AtomicUsize,
}

impl FakeSetVerifier {
    pub fn new(accept: bool) -> Self {
        Self {
            accept,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SetVerifier for FakeSetVerifier {
    fn verify_set(
        &self,
        entry: &dyn LogEntry,
        rekor_logs: &HashMap<String, TransparencyLog>,
    ) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.accept && rekor_logs.contains_key(&hex::encode(entry.log_key_id())) {
            Ok(())
        } else {
            Err(Error::SignedEntryTimestamp("signature invalid".to_string()))
        }
    }
}

pub struct FakeInclusionVerifier {
    valid: bool,
    calls: AtomicUsize,
}

impl FakeInclusionVerifier {
    pub fn new(valid: bool) -> Self {
        Self {
            valid,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl InclusionVerifier for FakeInclusionVerifier {
    fn verify_inclusion(&self, _entry: &dyn LogEntry, _log: &TransparencyLog) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.valid {
            Ok(())
        } else {
            Err(Error::InclusionProof("root hash mismatch".to_string()))
        }
    }
}

pub struct FakeRemoteVerifier {
    valid: bool,
}

impl FakeRemoteVerifier {
    pub fn new(valid: bool) -> Self {
        Self { valid }
    }
}

impl RemoteEntryVerifier for FakeRemoteVerifier {
    fn verify_log_entry(&self, _record: &RekorEntry, _log: &TransparencyLog) -> Result<()> {
        if self.valid {
            Ok(())
        } else {
            Err(Error::RemoteVerification("bad SET".to_string()))
        }
    }
}

/// Validator that counts how many entries it saw
#[derive(Default)]
pub struct CountingValidator {
    calls: AtomicUsize,
}

impl CountingValidator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EntryValidator for CountingValidator {
    fn validate(&self, entry: &dyn LogEntry) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        StructuralValidator.validate(entry)
    }
}

pub fn rekor_record(log_index: i64) -> RekorEntry {
    RekorEntry {
        uuid: format!("uuid-{}", log_index),
        body: String::new(),
        integrated_time: INTEGRATED_TIME,
        log_id: hex::encode(LOG_KEY_ID),
        log_index,
        verification: None,
    }
}

struct FakeRekorClient {
    base_url: String,
    records: HashMap<i64, Vec<RekorEntry>>,
    delay: Option<Duration>,
    queries: Arc<AtomicUsize>,
}

#[async_trait]
impl RekorLogClient for FakeRekorClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_log_entry_by_index(
        &self,
        log_index: i64,
    ) -> sigstore_rekor::Result<Vec<RekorEntry>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.records.get(&log_index).cloned().unwrap_or_default())
    }
}

/// Serves the same in-memory records for every log
#[derive(Default)]
pub struct FakeClientFactory {
    records: HashMap<i64, Vec<RekorEntry>>,
    delay: Option<Duration>,
    failing: bool,
    built: AtomicUsize,
    queries: Arc<AtomicUsize>,
}

impl FakeClientFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, record: RekorEntry) -> Self {
        self.records.entry(record.log_index).or_default().push(record);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Every client construction fails
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn clients_built(&self) -> usize {
        self.built.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl RekorClientFactory for FakeClientFactory {
    fn client(&self, base_url: &str) -> sigstore_rekor::Result<Arc<dyn RekorLogClient>> {
        if self.failing {
            return Err(sigstore_rekor::Error::Http("connection refused".to_string()));
        }
        self.built.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(FakeRekorClient {
            base_url: base_url.to_string(),
            records: self.records.clone(),
            delay: self.delay,
            queries: self.queries.clone(),
        }))
    }
}
