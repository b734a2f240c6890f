//! Data transfer objects for the HTTP API.
//!
//! These types define the wire shapes. They convert to and from core
//! domain types so the JSON contract stays independent of domain changes.

mod calculation;
mod usage;

pub use calculation::{CalculationRequest, CalculationResponse};
pub use usage::{SystemCountDto, UsageSummaryDto};
