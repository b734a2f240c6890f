//! Request dispatcher.
//!
//! Resolves the number system, runs the operation on either the decimal or
//! the based path, and records successful requests.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{NumberSystem, Operation, OperationRequest, OperationResult, UsageRecord};
use crate::error::CalcError;
use crate::ports::UsageRecorder;
use crate::radix::{decode, encode, format_decimal};

/// Evaluate one operation without recording it.
///
/// On the based path each operand is first written as decimal text and that
/// text is then read as a base-N numeral, so `10` in hexadecimal means
/// sixteen. Operands whose decimal text is not a valid numeral in the base
/// (fractions, `8`/`9` in octal, ...) fail with `InvalidNumeral`.
pub fn evaluate(
    operation: Operation,
    system: NumberSystem,
    num1: f64,
    num2: f64,
) -> Result<String, CalcError> {
    if !system.is_based() {
        return operation.apply(num1, num2).map(format_decimal);
    }

    let a = decode(&format_decimal(num1), system)?;
    let b = decode(&format_decimal(num2), system)?;
    encode(operation.apply(a, b)?, system)
}

/// Service for arithmetic requests.
pub struct Calculator {
    recorder: Arc<dyn UsageRecorder>,
}

impl Calculator {
    /// Create a calculator that reports successful requests to `recorder`.
    pub fn new(recorder: Arc<dyn UsageRecorder>) -> Self {
        Self { recorder }
    }

    /// Run `operation` on the request's operands.
    ///
    /// Failed requests are not recorded.
    pub fn calculate(
        &self,
        operation: Operation,
        request: &OperationRequest,
    ) -> Result<OperationResult, CalcError> {
        let system = NumberSystem::resolve(request.system.as_deref())?;
        let result = evaluate(operation, system, request.num1, request.num2)?;

        debug!(
            %operation,
            %system,
            num1 = request.num1,
            num2 = request.num2,
            %result,
            "Calculated"
        );

        self.recorder
            .record(UsageRecord::new(request.num1, request.num2, system));
        Ok(OperationResult { result })
    }

    /// Like [`Self::calculate`], with the operation given by name.
    ///
    /// The system tag is validated before the operation name.
    pub fn calculate_named(
        &self,
        name: &str,
        request: &OperationRequest,
    ) -> Result<OperationResult, CalcError> {
        NumberSystem::resolve(request.system.as_deref())?;
        let operation: Operation = name.parse()?;
        self.calculate(operation, request)
    }
}
