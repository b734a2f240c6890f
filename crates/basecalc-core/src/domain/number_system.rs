//! Number system (radix) domain type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// A positional notation supported by the calculator.
///
/// Declaration order is the canonical order used for aggregation and
/// chart slices.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum NumberSystem {
    /// Radix 10, the default when a request carries no system tag.
    #[default]
    Decimal,
    /// Radix 2.
    Binary,
    /// Radix 8.
    Octal,
    /// Radix 16.
    Hexadecimal,
}

impl NumberSystem {
    /// All systems in canonical order.
    pub const ALL: [Self; 4] = [Self::Decimal, Self::Binary, Self::Octal, Self::Hexadecimal];

    /// Radix of this notation.
    pub const fn radix(self) -> u32 {
        match self {
            Self::Decimal => 10,
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Hexadecimal => 16,
        }
    }

    /// Wire name of this notation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Binary => "binary",
            Self::Octal => "octal",
            Self::Hexadecimal => "hexadecimal",
        }
    }

    /// Whether operands go through the decimal-text round-trip.
    pub const fn is_based(self) -> bool {
        !matches!(self, Self::Decimal)
    }

    /// Resolve an optional system tag, defaulting to decimal when absent.
    ///
    /// Tags are matched case-sensitively.
    pub fn resolve(tag: Option<&str>) -> Result<Self, CalcError> {
        tag.map_or(Ok(Self::Decimal), str::parse)
    }
}

impl fmt::Display for NumberSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumberSystem {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|system| system.as_str() == s)
            .ok_or_else(|| CalcError::InvalidSystem(s.to_string()))
    }
}
