//! Arithmetic operation selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::arithmetic;
use crate::error::CalcError;

/// One of the five arithmetic operations exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
}

impl Operation {
    /// All operations, in route registration order.
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulus,
    ];

    /// Lowercase name, also used as the HTTP path segment.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Modulus => "modulus",
        }
    }

    /// Apply the operation to two real operands.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(arithmetic::add(a, b)),
            Self::Subtract => Ok(arithmetic::subtract(a, b)),
            Self::Multiply => Ok(arithmetic::multiply(a, b)),
            Self::Divide => arithmetic::divide(a, b),
            Self::Modulus => arithmetic::modulus(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| CalcError::UnknownOperation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrips_names() {
        for op in Operation::ALL {
            assert_eq!(op.as_str().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "power".parse::<Operation>(),
            Err(CalcError::UnknownOperation("power".to_string()))
        );
    }

    #[test]
    fn test_apply_dispatches() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operation::Subtract.apply(2.0, 3.0), Ok(-1.0));
        assert_eq!(Operation::Multiply.apply(2.0, 3.0), Ok(6.0));
        assert_eq!(Operation::Divide.apply(6.0, 3.0), Ok(2.0));
        assert_eq!(Operation::Modulus.apply(7.0, 3.0), Ok(1.0));
        assert_eq!(Operation::Divide.apply(1.0, 0.0), Err(CalcError::DivisionByZero));
    }
}
