//! Trusted root document parsing
//!
//! Reads the `tlogs` section of a Sigstore trusted root JSON document and
//! turns each transparency log instance into a [`TransparencyLog`].

use crate::material::{TransparencyLog, TrustedMaterial, ValidityPeriod};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use sigstore_types::{base64_bytes_option, HashAlgorithm, LogKeyId};
use std::collections::HashMap;

/// Media type of trusted root documents
pub const TRUSTED_ROOT_MEDIA_TYPE: &str = "application/vnd.dev.sigstore.trustedroot+json;version=0.1";

/// Log ID as it appears in the trusted root
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogId {
    /// Key ID (base64 in JSON)
    pub key_id: LogKeyId,
}

/// Public key as it appears in the trusted root
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKey {
    /// DER-encoded public key (base64 in JSON)
    #[serde(default, with = "base64_bytes_option")]
    pub raw_bytes: Option<Vec<u8>>,
    /// Key details name
    #[serde(default)]
    pub key_details: Option<String>,
    /// Validity period of the key
    #[serde(default)]
    pub valid_for: Option<ValidityPeriod>,
}

/// Transparency log instance from the trusted root
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransparencyLogInstance {
    pub base_url: String,
    #[serde(default)]
    pub hash_algorithm: HashAlgorithm,
    #[serde(default)]
    pub public_key: Option<PublicKey>,
    #[serde(default)]
    pub log_id: Option<LogId>,
}

impl TryFrom<&TransparencyLogInstance> for TransparencyLog {
    type Error = Error;

    fn try_from(instance: &TransparencyLogInstance) -> Result<Self> {
        let log_id = instance
            .log_id
            .as_ref()
            .map(|id| id.key_id.clone())
            .ok_or_else(|| Error::InvalidLog(format!("{}: missing log ID", instance.base_url)))?;

        let public_key = instance
            .public_key
            .as_ref()
            .ok_or_else(|| Error::InvalidLog(format!("{}: missing public key", instance.base_url)))?;

        let raw_bytes = public_key.raw_bytes.clone().ok_or_else(|| {
            Error::InvalidLog(format!("{}: public key has no raw bytes", instance.base_url))
        })?;

        Ok(TransparencyLog {
            base_url: instance.base_url.clone(),
            log_id,
            public_key: raw_bytes,
            key_details: public_key.key_details.clone(),
            hash_algorithm: instance.hash_algorithm,
            valid_for: public_key.valid_for.clone(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrustedRootDocument {
    #[serde(default)]
    media_type: String,
    #[serde(default)]
    tlogs: Vec<TransparencyLogInstance>,
}

/// Trusted root loaded from a JSON document
#[derive(Debug, Clone)]
pub struct TrustedRoot {
    media_type: String,
    tlogs: Vec<TransparencyLogInstance>,
    rekor_logs: HashMap<String, TransparencyLog>,
}

impl TrustedRoot {
    /// Parse a trusted root from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let document: TrustedRootDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Load a trusted root from a file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn from_document(document: TrustedRootDocument) -> Result<Self> {
        let mut rekor_logs = HashMap::new();
        for instance in &document.tlogs {
            // Instances without key material cannot verify anything
            let log = match TransparencyLog::try_from(instance) {
                Ok(log) => log,
                Err(e) => {
                    tracing::debug!("Ignoring transparency log instance: {}", e);
                    continue;
                }
            };

            let key_id_hex = log.log_id.to_hex();
            if rekor_logs.contains_key(&key_id_hex) {
                return Err(Error::DuplicateLog(key_id_hex));
            }
            rekor_logs.insert(key_id_hex, log);
        }

        Ok(Self {
            media_type: document.media_type,
            tlogs: document.tlogs,
            rekor_logs,
        })
    }

    /// Media type declared by the document
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Raw transparency log instances, including ones without key material
    pub fn tlogs(&self) -> &[TransparencyLogInstance] {
        &self.tlogs
    }

    /// Check if a Rekor key ID (hex) exists in the trusted root
    pub fn has_rekor_key(&self, key_id_hex: &str) -> bool {
        self.rekor_logs.contains_key(key_id_hex)
    }
}

impl TrustedMaterial for TrustedRoot {
    fn rekor_logs(&self) -> &HashMap<String, TransparencyLog> {
        &self.rekor_logs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const ROOT_JSON: &str = r#"{
        "mediaType": "application/vnd.dev.sigstore.trustedroot+json;version=0.1",
        "tlogs": [
            {
                "baseUrl": "https://rekor.sigstore.dev",
                "hashAlgorithm": "SHA2_256",
                "publicKey": {
                    "rawBytes": "AQIDBA==",
                    "keyDetails": "PKIX_ECDSA_P256_SHA_256",
                    "validFor": { "start": "2021-01-12T11:53:27Z" }
                },
                "logId": { "keyId": "wNI9atQGlz+VWfO6LRygH4QUfY/8W4RFwiT5i5WRgB0=" }
            },
            {
                "baseUrl": "https://rekor.example.dev",
                "hashAlgorithm": "SHA2_256",
                "logId": { "keyId": "AAAA" }
            }
        ]
    }"#;

    #[test]
    fn test_parse_trusted_root() {
        let root = TrustedRoot::from_json(ROOT_JSON).unwrap();
        assert_eq!(root.media_type(), TRUSTED_ROOT_MEDIA_TYPE);
        assert_eq!(root.tlogs().len(), 2);
        // The second instance has no public key and is not usable
        assert_eq!(root.rekor_logs().len(), 1);
    }

    #[test]
    fn test_rekor_logs_keyed_by_hex() {
        let root = TrustedRoot::from_json(ROOT_JSON).unwrap();
        let key_id_hex = "c0d23d6ad406973f9559f3ba2d1ca01f84147d8ffc5b8445c224f98b9591801d";
        assert!(root.has_rekor_key(key_id_hex));

        let raw = hex::decode(key_id_hex).unwrap();
        let log = root.resolve_log(&raw).unwrap();
        assert_eq!(log.base_url, "https://rekor.sigstore.dev");
        assert_eq!(log.public_key, vec![1, 2, 3, 4]);
        assert_eq!(log.hash_algorithm, HashAlgorithm::Sha2_256);
        assert_eq!(log.key_details.as_deref(), Some("PKIX_ECDSA_P256_SHA_256"));

        let before = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert!(!log.is_valid_at(before));
    }

    #[test]
    fn test_duplicate_log_ids_rejected() {
        let json = r#"{
            "tlogs": [
                {"baseUrl": "https://a.example", "publicKey": {"rawBytes": "AQ=="}, "logId": {"keyId": "AQ=="}},
                {"baseUrl": "https://b.example", "publicKey": {"rawBytes": "Ag=="}, "logId": {"keyId": "AQ=="}}
            ]
        }"#;
        assert!(matches!(
            TrustedRoot::from_json(json),
            Err(Error::DuplicateLog(_))
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            TrustedRoot::from_json("not json"),
            Err(Error::Json(_))
        ));
    }
}
