//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! transport or rendering concerns.
//!
//! # Structure
//!
//! - `number_system` - the four supported notations
//! - `operation` - the five arithmetic operations
//! - `calculation` - request and result values
//! - `usage` - usage log records and their aggregation

mod calculation;
mod number_system;
mod operation;
mod usage;

pub use calculation::{OperationRequest, OperationResult};
pub use number_system::NumberSystem;
pub use operation::Operation;
pub use usage::{SystemFrequency, UsageRecord, UsageSummary};
