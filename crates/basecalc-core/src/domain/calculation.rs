//! Operation request and result values.

use serde::{Deserialize, Serialize};

/// Inbound operation request.
///
/// `system` keeps the raw tag so an unrecognized value surfaces as
/// `CalcError::InvalidSystem` during dispatch rather than as a decode error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationRequest {
    #[serde(default)]
    pub num1: f64,
    #[serde(default)]
    pub num2: f64,
    #[serde(default)]
    pub system: Option<String>,
}

impl OperationRequest {
    /// Create a request without a system tag (decimal).
    pub const fn new(num1: f64, num2: f64) -> Self {
        Self {
            num1,
            num2,
            system: None,
        }
    }

    /// Attach a system tag.
    #[must_use]
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// Textual result, in the same number system as the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    pub result: String,
}
