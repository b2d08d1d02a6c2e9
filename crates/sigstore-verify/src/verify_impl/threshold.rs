//! Threshold accounting over per-entry outcomes

use super::evidence::EntryOutcome;
use crate::entity::Timestamp;
use crate::error::{Error, Result};

/// Running count of verified entries and the timestamps they established
#[derive(Debug, Default)]
pub struct Tally {
    verified: usize,
    skipped: usize,
    timestamps: Vec<Timestamp>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one entry's outcome
    pub fn record(&mut self, outcome: EntryOutcome) {
        match outcome {
            EntryOutcome::Verified { timestamp } => {
                self.verified += 1;
                self.timestamps.extend(timestamp);
            }
            EntryOutcome::SkippedUnrecognizedLog | EntryOutcome::SkippedUnverifiableTimestamp => {
                self.skipped += 1;
            }
        }
    }

    pub fn verified(&self) -> usize {
        self.verified
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Enforce the threshold and hand back the collected timestamps
    pub fn finish(self, threshold: usize) -> Result<Vec<Timestamp>> {
        if self.verified < threshold {
            return Err(Error::ThresholdNotMet {
                verified: self.verified,
                threshold,
            });
        }
        Ok(self.timestamps)
    }
}
