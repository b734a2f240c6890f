//! Usage log records and aggregates.

use serde::{Deserialize, Serialize};

use super::NumberSystem;

/// One successful request, as appended to the usage log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub num1: f64,
    pub num2: f64,
    pub system: NumberSystem,
}

impl UsageRecord {
    pub const fn new(num1: f64, num2: f64, system: NumberSystem) -> Self {
        Self { num1, num2, system }
    }
}

/// Number of recorded requests for one number system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemFrequency {
    pub system: NumberSystem,
    pub count: u64,
}

/// Aggregated view of the usage log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSummary {
    pub total: u64,
    pub systems: Vec<SystemFrequency>,
}

impl UsageSummary {
    pub fn from_frequencies(systems: Vec<SystemFrequency>) -> Self {
        Self {
            total: systems.iter().map(|f| f.count).sum(),
            systems,
        }
    }
}
