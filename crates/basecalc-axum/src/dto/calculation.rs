//! Calculation request/response bodies.

use basecalc_core::{OperationRequest, OperationResult};
use serde::{Deserialize, Serialize};

use crate::error::HttpError;

/// Body accepted by the five operation endpoints.
///
/// Missing operands default to 0 and unknown fields are ignored. `system`
/// may be absent or `null`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CalculationRequest {
    #[serde(default)]
    pub num1: f64,
    #[serde(default)]
    pub num2: f64,
    #[serde(default)]
    pub system: Option<String>,
}

impl CalculationRequest {
    /// Decode a raw body as JSON, whatever the declared content type.
    pub fn from_json(body: &[u8]) -> Result<Self, HttpError> {
        Ok(serde_json::from_slice(body)?)
    }
}

impl From<CalculationRequest> for OperationRequest {
    fn from(req: CalculationRequest) -> Self {
        Self {
            num1: req.num1,
            num2: req.num2,
            system: req.system,
        }
    }
}

/// Successful operation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResponse {
    pub result: String,
}

impl From<OperationResult> for CalculationResponse {
    fn from(res: OperationResult) -> Self {
        Self { result: res.result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_full_body() {
        let req =
            CalculationRequest::from_json(br#"{"num1": 10, "num2": 5, "system": "hexadecimal"}"#)
                .unwrap();
        assert_eq!(req.system.as_deref(), Some("hexadecimal"));
        assert!((req.num1 - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_json_ignores_unknown_fields() {
        let req = CalculationRequest::from_json(br#"{"num1": 1, "extra": true}"#).unwrap();
        assert_eq!(req.system, None);
        assert!(req.num2.abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = CalculationRequest::from_json(b"not json").unwrap_err();
        assert!(matches!(err, HttpError::BadRequest(_)));

        let err = CalculationRequest::from_json(b"").unwrap_err();
        assert!(matches!(err, HttpError::BadRequest(_)));
    }

    #[test]
    fn test_response_shape() {
        let body = serde_json::to_string(&CalculationResponse {
            result: "15".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"result":"15"}"#);
    }
}
