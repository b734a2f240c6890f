//! Calculation error taxonomy.
//!
//! Every variant is a user-input error. Adapters map them to their own
//! representation (HTTP status codes, CLI exit codes).

use thiserror::Error;

use crate::domain::NumberSystem;

/// Errors produced while validating or evaluating an operation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The number-system tag is not one of the four recognized values,
    /// or a based-only conversion was asked for the decimal system.
    #[error("invalid system: {0}")]
    InvalidSystem(String),

    /// The operation name is not one of add/subtract/multiply/divide/modulus.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// Divide or modulus with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// Text is not a valid signed integer numeral in the target base.
    #[error("invalid {system} numeral {text:?}: {reason}")]
    InvalidNumeral {
        text: String,
        system: NumberSystem,
        reason: String,
    },
}
