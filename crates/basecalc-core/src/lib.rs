#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod arithmetic;
pub mod domain;
pub mod error;
pub mod ports;
pub mod radix;
pub mod services;
pub mod usage_log;

// Re-export commonly used types for convenience
pub use domain::{
    NumberSystem, Operation, OperationRequest, OperationResult, SystemFrequency, UsageRecord,
    UsageSummary,
};
pub use error::CalcError;
pub use ports::{ChartError, ChartRendererPort, NoopUsageRecorder, UsageRecorder, UsageSource};
pub use services::{AppCore, Calculator, UsageReportService, aggregate, evaluate};
pub use usage_log::InMemoryUsageLog;

// Silence unused dev-dependency warnings for crates only used by some test modules
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tokio as _;
