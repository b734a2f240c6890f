//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from core errors to exit codes and user-facing messages.

use basecalc_core::CalcError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Operand or system rejected by the calculator.
    #[error("{0}")]
    InvalidInput(String),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Server failed to start or stopped with an error.
    #[error("Server error: {0}")]
    Server(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_) => 65, // EX_DATAERR
            Self::Arguments(_) => 64,    // EX_USAGE
            Self::Server(_) => 1,
        }
    }
}

impl From<CalcError> for CliError {
    fn from(err: CalcError) -> Self {
        match err {
            CalcError::UnknownOperation(_) => Self::Arguments(err.to_string()),
            CalcError::InvalidSystem(_)
            | CalcError::DivisionByZero
            | CalcError::InvalidNumeral { .. } => Self::InvalidInput(err.to_string()),
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        Self::Server(format!("{err:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::from(CalcError::DivisionByZero).exit_code(), 65);
        assert_eq!(
            CliError::from(CalcError::UnknownOperation("pow".to_string())).exit_code(),
            64
        );
        assert_eq!(CliError::Server("bind".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_unknown_operation_message() {
        let err = CliError::from(CalcError::UnknownOperation("pow".to_string()));
        assert_eq!(err.to_string(), "Invalid arguments: unknown operation: pow");
    }
}
