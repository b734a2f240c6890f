//! Axum-specific error types and mappings.
//!
//! This module provides the HTTP error type for the Axum adapter and the
//! mappings from core errors to status codes. Error bodies are plain text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use basecalc_core::{CalcError, ChartError};
use thiserror::Error;
use tracing::{debug, error};

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    /// Status code for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(msg) | Self::BadRequest(msg) | Self::Internal(msg) => msg,
        }
    }

    /// Consume the error, keeping only the client message.
    pub fn into_message(self) -> String {
        match self {
            Self::NotFound(msg) | Self::BadRequest(msg) | Self::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), "{}", self.message());
        } else {
            debug!(status = status.as_u16(), "{}", self.message());
        }

        (status, self.into_message()).into_response()
    }
}

impl From<CalcError> for HttpError {
    fn from(err: CalcError) -> Self {
        match err {
            CalcError::UnknownOperation(_) => Self::NotFound(err.to_string()),
            CalcError::InvalidSystem(_)
            | CalcError::DivisionByZero
            | CalcError::InvalidNumeral { .. } => Self::BadRequest(err.to_string()),
        }
    }
}

impl From<ChartError> for HttpError {
    fn from(err: ChartError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(err: serde_json::Error) -> Self {
        Self::BadRequest(err.to_string())
    }
}
