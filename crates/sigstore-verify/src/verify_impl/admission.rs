//! Entry admission
//!
//! Bounds and de-duplicates the entry set before any per-entry work.

use crate::entity::LogEntry;
use crate::error::{Error, Result};

/// Maximum number of transparency log entries accepted per artifact
pub const MAX_TLOG_ENTRIES: usize = 32;

/// Reject oversized entry sets and duplicated (log key ID, log index) pairs
///
/// A duplicate would let one genuine entry count more than once towards
/// the threshold. The pairwise scan is bounded by [`MAX_TLOG_ENTRIES`].
pub fn admit_entries<E: LogEntry>(entries: &[E]) -> Result<()> {
    if entries.len() > MAX_TLOG_ENTRIES {
        return Err(Error::TooManyEntries {
            count: entries.len(),
            max: MAX_TLOG_ENTRIES,
        });
    }

    for (i, a) in entries.iter().enumerate() {
        for b in &entries[i + 1..] {
            if a.log_key_id() == b.log_key_id() && a.log_index() == b.log_index() {
                return Err(Error::DuplicateEntries {
                    log_key_id: hex::encode(a.log_key_id()),
                    log_index: a.log_index(),
                });
            }
        }
    }

    Ok(())
}
