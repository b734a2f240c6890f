//! Number-base conversion.
//!
//! `decode` reads a signed integer numeral in base 2, 8 or 16; `encode`
//! writes a non-negative value back out in uppercase digits. `format_decimal`
//! produces the shortest exact base-10 text of a float, which is also the
//! text fed to `decode` on the based path.

use crate::domain::NumberSystem;
use crate::error::CalcError;

/// Digit lookup indexed by remainder.
const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

fn based_radix(system: NumberSystem) -> Result<u32, CalcError> {
    if system.is_based() {
        Ok(system.radix())
    } else {
        Err(CalcError::InvalidSystem(system.to_string()))
    }
}

/// Decode `text` as a signed 64-bit integer in the base of `system`.
///
/// Accepts an optional leading `+` or `-`; hexadecimal digits may be
/// either case. Empty text, foreign characters and out-of-range values
/// fail with `InvalidNumeral`.
#[allow(clippy::cast_precision_loss)]
pub fn decode(text: &str, system: NumberSystem) -> Result<f64, CalcError> {
    let radix = based_radix(system)?;
    let value = i64::from_str_radix(text, radix).map_err(|e| CalcError::InvalidNumeral {
        text: text.to_string(),
        system,
        reason: e.to_string(),
    })?;
    Ok(value as f64)
}

/// Encode `value` in the base of `system`, most significant digit first.
///
/// Zero, negative and non-finite values all yield `"0"`. A fractional part
/// only affects the lowest digit, which is truncated.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn encode(value: f64, system: NumberSystem) -> Result<String, CalcError> {
    let radix = f64::from(based_radix(system)?);
    if !value.is_finite() {
        return Ok("0".to_string());
    }

    let mut digits: Vec<u8> = Vec::new();
    let mut rest = value;
    while rest > 0.0 {
        let remainder = rest % radix;
        rest = (rest / radix).floor();
        digits.push(DIGITS[remainder as usize]);
    }

    if digits.is_empty() {
        return Ok("0".to_string());
    }
    Ok(digits.iter().rev().map(|&d| char::from(d)).collect())
}

/// Shortest exact decimal text, never in exponent form.
///
/// `2.0` renders as `"2"`. Infinities render as `"+Inf"`/`"-Inf"`.
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "+Inf".to_string()
        } else {
            "-Inf".to_string()
        }
    } else {
        value.to_string()
    }
}
