//! In-memory usage log.
//!
//! Holds every successful request for the lifetime of the process. Nothing
//! is persisted and nothing is ever removed.

use std::sync::{PoisonError, RwLock};

use crate::domain::UsageRecord;
use crate::ports::{UsageRecorder, UsageSource};

/// Lock-guarded, append-only sequence of usage records.
#[derive(Debug, Default)]
pub struct InMemoryUsageLog {
    records: RwLock<Vec<UsageRecord>>,
}

impl InMemoryUsageLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records appended so far.
    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// A poisoned lock is recovered: a push either happened or it did not, so
// the vector is never observed half-written.
impl UsageRecorder for InMemoryUsageLog {
    fn record(&self, record: UsageRecord) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}

impl UsageSource for InMemoryUsageLog {
    fn snapshot(&self) -> Vec<UsageRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NumberSystem;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_starts_empty() {
        let log = InMemoryUsageLog::new();
        assert!(log.is_empty());
        assert!(log.snapshot().is_empty());
    }

    #[test]
    fn test_snapshot_preserves_append_order() {
        let log = InMemoryUsageLog::new();
        log.record(UsageRecord::new(1.0, 2.0, NumberSystem::Decimal));
        log.record(UsageRecord::new(3.0, 4.0, NumberSystem::Octal));

        let records = log.snapshot();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].system, NumberSystem::Decimal);
        assert_eq!(records[1].system, NumberSystem::Octal);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let log = InMemoryUsageLog::new();
        log.record(UsageRecord::new(1.0, 1.0, NumberSystem::Binary));
        let before = log.snapshot();
        log.record(UsageRecord::new(2.0, 2.0, NumberSystem::Binary));

        assert_eq!(before.len(), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_concurrent_appends_are_all_kept() {
        let log = Arc::new(InMemoryUsageLog::new());
        let handles: Vec<_> = (0..8_i32)
            .map(|i| {
                let log = Arc::clone(&log);
                thread::spawn(move || {
                    for j in 0..100_i32 {
                        log.record(UsageRecord::new(
                            f64::from(i),
                            f64::from(j),
                            NumberSystem::Hexadecimal,
                        ));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(log.len(), 800);
    }
}
