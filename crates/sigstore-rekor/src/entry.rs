//! Rekor log entry types

use crate::error::{Error, Result};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A log entry from Rekor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// UUID of the entry (the key in the response map)
    #[serde(skip)]
    pub uuid: String,
    /// Body of the entry (base64 encoded)
    pub body: String,
    /// Integrated time (Unix timestamp)
    pub integrated_time: i64,
    /// Log ID (SHA-256 of the public key, hex encoded)
    #[serde(rename = "logID")]
    pub log_id: String,
    /// Log index
    pub log_index: i64,
    /// Verification data
    #[serde(default)]
    pub verification: Option<Verification>,
}

impl LogEntry {
    /// Decode the canonicalized entry body
    pub fn body_bytes(&self) -> Result<Vec<u8>> {
        Ok(base64::engine::general_purpose::STANDARD.decode(self.body.as_bytes())?)
    }

    /// Decode the hex log ID into raw key ID bytes
    pub fn log_id_bytes(&self) -> Result<Vec<u8>> {
        hex::decode(&self.log_id)
            .map_err(|e| Error::InvalidResponse(format!("log ID is not hex: {}", e)))
    }

    /// Signed entry timestamp, if the log returned one
    pub fn signed_entry_timestamp(&self) -> Option<&str> {
        self.verification
            .as_ref()
            .and_then(|v| v.signed_entry_timestamp.as_deref())
    }

    /// Inclusion proof, if the log returned one
    pub fn inclusion_proof(&self) -> Option<&InclusionProof> {
        self.verification
            .as_ref()
            .and_then(|v| v.inclusion_proof.as_ref())
    }
}

/// Verification data for a log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    /// Inclusion proof
    #[serde(default)]
    pub inclusion_proof: Option<InclusionProof>,
    /// Signed entry timestamp (SET, base64 encoded)
    #[serde(default)]
    pub signed_entry_timestamp: Option<String>,
}

/// Inclusion proof for a log entry (V1 API - uses i64 for indices)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InclusionProof {
    /// Checkpoint (signed tree head)
    pub checkpoint: String,
    /// Hashes in the proof path (hex encoded)
    pub hashes: Vec<String>,
    /// Log index
    pub log_index: i64,
    /// Root hash (hex encoded)
    pub root_hash: String,
    /// Tree size
    pub tree_size: i64,
}

/// Response from an entry lookup (map of UUID to LogEntry)
pub type LogEntryResponse = HashMap<String, LogEntry>;

/// Flatten a lookup response into entries ordered by UUID
pub fn entries_from_response(response: LogEntryResponse) -> Vec<LogEntry> {
    let mut entries: Vec<LogEntry> = response
        .into_iter()
        .map(|(uuid, mut entry)| {
            entry.uuid = uuid;
            entry
        })
        .collect();
    entries.sort_by(|a, b| a.uuid.cmp(&b.uuid));
    entries
}
