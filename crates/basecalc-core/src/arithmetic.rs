//! Floating-point arithmetic over `f64` operands.
//!
//! Pure functions with no side effects. Only `divide` and `modulus` can
//! fail, and only on a zero divisor (`-0.0` included).

use crate::error::CalcError;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// Remainder with IEEE `fmod` semantics: the result carries the sign of `a`
/// and its magnitude is below `|b|`.
pub fn modulus(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a % b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert!((add(1.5, 2.25) - 3.75).abs() < f64::EPSILON);
        assert!((subtract(1.0, 4.0) + 3.0).abs() < f64::EPSILON);
        assert!((multiply(-2.0, 4.5) + 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_divide_by_zero() {
        for x in [0.0, 1.0, -7.5, f64::MAX] {
            assert_eq!(divide(x, 0.0), Err(CalcError::DivisionByZero));
            assert_eq!(divide(x, -0.0), Err(CalcError::DivisionByZero));
        }
    }

    #[test]
    fn test_modulus_by_zero() {
        for x in [0.0, 3.0, -2.0] {
            assert_eq!(modulus(x, 0.0), Err(CalcError::DivisionByZero));
        }
    }

    #[test]
    fn test_modulus_follows_dividend_sign() {
        assert_eq!(modulus(7.0, 3.0), Ok(1.0));
        assert_eq!(modulus(-7.0, 3.0), Ok(-1.0));
        assert_eq!(modulus(7.0, -3.0), Ok(1.0));
        assert_eq!(modulus(5.5, 2.0), Ok(1.5));
    }

    #[test]
    fn test_divide_fraction() {
        assert_eq!(divide(7.0, 2.0), Ok(3.5));
    }
}
