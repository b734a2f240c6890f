//! Usage recording ports.
//!
//! The recorder side is handed to the calculator; the source side is
//! handed to reporting. A single store usually implements both.

use crate::domain::UsageRecord;

/// Append-only sink for successful requests.
///
/// Implementations must serialize concurrent appends so the log keeps a
/// total order. This method should not block for long.
#[cfg_attr(test, mockall::automock)]
pub trait UsageRecorder: Send + Sync {
    /// Append one record.
    fn record(&self, record: UsageRecord);
}

/// Read access to the recorded usage.
#[cfg_attr(test, mockall::automock)]
pub trait UsageSource: Send + Sync {
    /// Consistent copy of all records in append order.
    fn snapshot(&self) -> Vec<UsageRecord>;
}

/// A recorder that discards everything.
///
/// Used by one-shot CLI evaluation, where there is no log to report on.
#[derive(Debug, Clone, Default)]
pub struct NoopUsageRecorder;

impl NoopUsageRecorder {
    /// Create a new no-op recorder.
    pub const fn new() -> Self {
        Self
    }
}

impl UsageRecorder for NoopUsageRecorder {
    fn record(&self, _record: UsageRecord) {
        // Intentionally do nothing
    }
}
