//! Usage summary DTOs.

use basecalc_core::{SystemFrequency, UsageSummary};
use serde::Serialize;

/// Request count for one number system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemCountDto {
    pub system: String,
    pub count: u64,
}

impl From<SystemFrequency> for SystemCountDto {
    fn from(freq: SystemFrequency) -> Self {
        Self {
            system: freq.system.to_string(),
            count: freq.count,
        }
    }
}

/// Body of `GET /usage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageSummaryDto {
    pub total: u64,
    pub systems: Vec<SystemCountDto>,
}

impl From<UsageSummary> for UsageSummaryDto {
    fn from(summary: UsageSummary) -> Self {
        Self {
            total: summary.total,
            systems: summary.systems.into_iter().map(SystemCountDto::from).collect(),
        }
    }
}
