//! Consistency between a verified log entry and the artifact
//!
//! A log entry's own claims are never trusted in isolation: its signature,
//! key and integrated time must agree with what the artifact carries.

use crate::entity::{integrated_time_utc, LogEntry, VerificationContent};
use crate::error::{Error, Result};
use sigstore_trust_root::TrustedMaterial;

/// Cross-check a verified entry against the artifact's signature and verification content
pub fn check_consistency(
    entry: &dyn LogEntry,
    entity_signature: &[u8],
    verification_content: &dyn VerificationContent,
    trusted_material: &dyn TrustedMaterial,
) -> Result<()> {
    // Ensure entry signature matches signature from the artifact
    if entry.signature() != entity_signature {
        return Err(Error::SignatureMismatch);
    }

    // Ensure entry key matches the artifact's certificate or key
    if !verification_content.compare_key(entry.public_key(), trusted_material) {
        return Err(Error::CertificateMismatch);
    }

    let integrated_time = integrated_time_utc(entry)?;
    if !verification_content.valid_at_time(integrated_time, trusted_material) {
        return Err(Error::IntegratedTimeOutsideValidity(
            entry.integrated_time(),
        ));
    }

    Ok(())
}
