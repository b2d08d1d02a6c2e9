//! Verification options

use std::time::Duration;

/// Default bound on a single remote log query
pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(30);

/// How inclusion in the log is established
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogMode {
    /// Use the inclusion promise and proof carried by each entry
    #[default]
    Offline,
    /// Query each log for the entry
    Online,
}

/// Options for transparency log verification
#[derive(Debug, Clone)]
pub struct TlogVerificationOptions {
    /// Minimum number of entries that must verify
    pub threshold: usize,
    /// Return the integrated times of entries backed by signed evidence
    pub trust_integrated_time: bool,
    /// Verification strategy, applied to every entry
    pub mode: LogMode,
    /// Bound on each remote query in online mode
    pub remote_timeout: Duration,
}

impl Default for TlogVerificationOptions {
    fn default() -> Self {
        Self {
            threshold: 1,
            trust_integrated_time: false,
            mode: LogMode::Offline,
            remote_timeout: DEFAULT_REMOTE_TIMEOUT,
        }
    }
}

impl TlogVerificationOptions {
    /// Require at least `threshold` verified entries
    pub fn require_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Collect trusted timestamps from verified entries
    pub fn trust_integrated_time(mut self) -> Self {
        self.trust_integrated_time = true;
        self
    }

    /// Verify entries against the live logs
    pub fn online(mut self) -> Self {
        self.mode = LogMode::Online;
        self
    }

    /// Bound each remote query
    pub fn with_remote_timeout(mut self, timeout: Duration) -> Self {
        self.remote_timeout = timeout;
        self
    }
}
