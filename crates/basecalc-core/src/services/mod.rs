//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete implementations.

mod app_core;
mod calculator;
mod usage_report;

pub use app_core::AppCore;
pub use calculator::{Calculator, evaluate};
pub use usage_report::{UsageReportService, aggregate};
