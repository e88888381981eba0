// ============================================================================
// Numeric Errors
// Error types for decimal arithmetic, range enforcement and evaluation
// ============================================================================

use thiserror::Error;

/// Errors raised by the checked arithmetic on `DecimalValue`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result does not fit the 96-bit decimal mantissa
    #[error("arithmetic overflow: result exceeded the decimal capacity")]
    Overflow,
    /// Attempted division by zero
    #[error("division by zero")]
    DivisionByZero,
    /// Requested scale is larger than the backend supports
    #[error("scale {0} exceeds the maximum of 28 fractional digits")]
    ScaleTooLarge(u32),
}

/// A value fell outside the symmetric ±10¹² bound.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeError {
    /// A raw operand was out of range before any computation
    #[error("operand is outside the range ±1 000 000 000 000")]
    OperandOutOfRange,
    /// An intermediate or final result was out of range
    #[error("result exceeds the permitted range ±1 000 000 000 000")]
    ResultOutOfRange,
}

/// Failure of a single binary application or of a whole template evaluation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    #[error("division by zero is not possible")]
    DivisionByZero,
    #[error(transparent)]
    OutOfRange(#[from] RangeError),
}

/// Result type alias for checked decimal arithmetic
pub type NumericResult<T> = Result<T, NumericError>;

/// Result type alias for evaluator operations
pub type EvalResult<T> = Result<T, ArithmeticError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            RangeError::OperandOutOfRange.to_string(),
            "operand is outside the range ±1 000 000 000 000"
        );
        assert_eq!(
            ArithmeticError::DivisionByZero.to_string(),
            "division by zero is not possible"
        );
    }

    #[test]
    fn test_range_error_passes_through() {
        let err: ArithmeticError = RangeError::ResultOutOfRange.into();
        assert_eq!(err, ArithmeticError::OutOfRange(RangeError::ResultOutOfRange));
        assert_eq!(err.to_string(), RangeError::ResultOutOfRange.to_string());
    }
}
