//! Calc command handler.
//!
//! Evaluates one operation with the same dispatcher the HTTP server uses.
//! Nothing is recorded: a one-shot process has no usage log to report on.

use std::sync::Arc;

use basecalc_core::{Calculator, NoopUsageRecorder, OperationRequest};

use crate::error::CliError;

/// Execute the calc command and return the result text.
///
/// # Arguments
///
/// * `operation` - Operation name (add, subtract, multiply, divide, modulus)
/// * `num1`, `num2` - Operands, written in decimal
/// * `system` - Optional number system tag (defaults to decimal)
pub fn execute(
    operation: &str,
    num1: f64,
    num2: f64,
    system: Option<String>,
) -> Result<String, CliError> {
    let calculator = Calculator::new(Arc::new(NoopUsageRecorder::new()));
    let request = OperationRequest {
        num1,
        num2,
        system,
    };

    tracing::debug!(operation, num1, num2, system = ?request.system, "Evaluating");
    Ok(calculator.calculate_named(operation, &request)?.result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(execute("divide", 6.0, 3.0, None).unwrap(), "2");
    }

    #[test]
    fn test_hexadecimal() {
        assert_eq!(
            execute("add", 10.0, 5.0, Some("hexadecimal".to_string())).unwrap(),
            "15"
        );
    }

    #[test]
    fn test_errors_map_to_exit_codes() {
        let err = execute("add", 9.0, 1.0, Some("octal".to_string())).unwrap_err();
        assert_eq!(err.exit_code(), 65);

        let err = execute("pow", 1.0, 1.0, None).unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }
}
