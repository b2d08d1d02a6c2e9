//! Structural validation of log entries

use crate::entity::{integrated_time_utc, LogEntry};
use crate::error::{Error, Result};

/// Checks that an entry is well formed before any verification work
///
/// A failure aborts the whole verification.
pub trait EntryValidator: Send + Sync {
    fn validate(&self, entry: &dyn LogEntry) -> Result<()>;
}

/// Default validator checking the fields the verifier relies on
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralValidator;

impl EntryValidator for StructuralValidator {
    fn validate(&self, entry: &dyn LogEntry) -> Result<()> {
        if entry.log_key_id().is_empty() {
            return Err(Error::InvalidEntry("missing log key ID".to_string()));
        }

        if entry.log_index() < 0 {
            return Err(Error::InvalidEntry(format!(
                "negative log index {}",
                entry.log_index()
            )));
        }

        if entry.integrated_time() < 0 {
            return Err(Error::InvalidEntry(format!(
                "negative integrated time {}",
                entry.integrated_time()
            )));
        }
        integrated_time_utc(entry)?;

        if entry.signature().is_empty() {
            return Err(Error::InvalidEntry("missing signature".to_string()));
        }

        if entry.public_key().is_empty() {
            return Err(Error::InvalidEntry("missing public key".to_string()));
        }

        Ok(())
    }
}
