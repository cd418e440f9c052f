//! Arithmetic operation dispatcher.
//!
//! # Design
//! One enum instead of four near-identical handlers; the variants differ only
//! in the operator applied. Arithmetic is fixed 64-bit signed with wraparound
//! on overflow, which also defines `i64::MIN / -1`. Division truncates toward
//! zero and rejects a zero divisor before computing.

use crate::error::ApiError;
use crate::types::{OperandPair, OperationResult};

/// The four arithmetic operations exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Compute the operation over a validated operand pair.
    ///
    /// Divide-by-zero is the only failure; add, subtract, and multiply wrap
    /// on overflow.
    pub fn apply(self, operands: OperandPair) -> Result<OperationResult, ApiError> {
        let OperandPair { a, b } = operands;
        let value = match self {
            Operation::Add => a.wrapping_add(b),
            Operation::Subtract => a.wrapping_sub(b),
            Operation::Multiply => a.wrapping_mul(b),
            Operation::Divide => {
                if b == 0 {
                    return Err(ApiError::DivideByZero);
                }
                a.wrapping_div(b)
            }
        };
        Ok(OperationResult { value })
    }

    /// Uppercase tag used in log lines, e.g. `[ADD]`.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "ADD",
            Operation::Subtract => "SUBTRACT",
            Operation::Multiply => "MULTIPLY",
            Operation::Divide => "DIVIDE",
        }
    }

    /// Infix symbol used when logging a computation.
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(op: Operation, a: i64, b: i64) -> Result<i64, ApiError> {
        op.apply(OperandPair { a, b }).map(|result| result.value)
    }

    #[test]
    fn add_sums_operands() {
        assert_eq!(apply(Operation::Add, 5, 3), Ok(8));
        assert_eq!(apply(Operation::Add, -5, 3), Ok(-2));
        assert_eq!(apply(Operation::Add, 0, 10), Ok(10));
    }

    #[test]
    fn subtract_orders_operands() {
        assert_eq!(apply(Operation::Subtract, 5, 3), Ok(2));
        assert_eq!(apply(Operation::Subtract, 3, 5), Ok(-2));
    }

    #[test]
    fn multiply_handles_signs_and_zero() {
        assert_eq!(apply(Operation::Multiply, 5, 3), Ok(15));
        assert_eq!(apply(Operation::Multiply, -5, 3), Ok(-15));
        assert_eq!(apply(Operation::Multiply, 5, 0), Ok(0));
    }

    #[test]
    fn divide_truncates_toward_zero() {
        assert_eq!(apply(Operation::Divide, 10, 3), Ok(3));
        assert_eq!(apply(Operation::Divide, -10, 3), Ok(-3));
        assert_eq!(apply(Operation::Divide, 10, -3), Ok(-3));
        assert_eq!(apply(Operation::Divide, -10, -3), Ok(3));
    }

    #[test]
    fn divide_by_zero_is_rejected_before_computing() {
        assert_eq!(apply(Operation::Divide, 10, 0), Err(ApiError::DivideByZero));
        assert_eq!(apply(Operation::Divide, 0, 0), Err(ApiError::DivideByZero));
    }

    #[test]
    fn overflow_wraps() {
        assert_eq!(apply(Operation::Add, i64::MAX, 1), Ok(i64::MIN));
        assert_eq!(apply(Operation::Subtract, i64::MIN, 1), Ok(i64::MAX));
        assert_eq!(apply(Operation::Multiply, i64::MAX, 2), Ok(-2));
        assert_eq!(apply(Operation::Divide, i64::MIN, -1), Ok(i64::MIN));
    }

    #[test]
    fn log_tags_and_symbols() {
        assert_eq!(Operation::Add.name(), "ADD");
        assert_eq!(Operation::Divide.name(), "DIVIDE");
        assert_eq!(Operation::Subtract.symbol(), '-');
        assert_eq!(Operation::Multiply.symbol(), '*');
    }
}
