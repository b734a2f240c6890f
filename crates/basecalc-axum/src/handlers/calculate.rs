//! Arithmetic handlers - one per operation endpoint.
//!
//! The body is read as raw bytes and decoded as JSON here, so that a
//! malformed body maps to 400 regardless of the request's content type.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use basecalc_core::{Operation, OperationRequest};

use crate::dto::{CalculationRequest, CalculationResponse};
use crate::error::HttpError;
use crate::state::AppState;

fn calculate(
    state: &AppState,
    operation: Operation,
    body: &[u8],
) -> Result<Json<CalculationResponse>, HttpError> {
    let request: OperationRequest = CalculationRequest::from_json(body)?.into();
    let result = state.core.calculator().calculate(operation, &request)?;
    Ok(Json(result.into()))
}

/// `num1 + num2`.
pub async fn add(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CalculationResponse>, HttpError> {
    calculate(&state, Operation::Add, &body)
}

/// `num1 - num2`.
pub async fn subtract(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CalculationResponse>, HttpError> {
    calculate(&state, Operation::Subtract, &body)
}

/// `num1 * num2`.
pub async fn multiply(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CalculationResponse>, HttpError> {
    calculate(&state, Operation::Multiply, &body)
}

/// `num1 / num2`; 400 when `num2` is zero.
pub async fn divide(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CalculationResponse>, HttpError> {
    calculate(&state, Operation::Divide, &body)
}

/// Remainder of `num1 / num2` with the sign of `num1`; 400 when `num2` is zero.
pub async fn modulus(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CalculationResponse>, HttpError> {
    calculate(&state, Operation::Modulus, &body)
}
