// ============================================================================
// Range Guard
// Symmetric magnitude bound enforced on operands and computed values
// ============================================================================

use super::decimal_value::DecimalValue;
use super::errors::RangeError;

/// Inclusive magnitude bound: one trillion.
pub const RANGE_BOUND: i64 = 1_000_000_000_000;

/// Checks values against `±RANGE_BOUND`, inclusive at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeGuard {
    bound: DecimalValue,
}

impl RangeGuard {
    pub fn new() -> Self {
        Self {
            bound: DecimalValue::from_integer(RANGE_BOUND),
        }
    }

    /// The positive bound.
    pub fn bound(&self) -> DecimalValue {
        self.bound
    }

    #[inline]
    pub fn contains(&self, value: DecimalValue) -> bool {
        value.abs() <= self.bound
    }

    /// Validate a raw operand before it is used.
    pub fn check_operand(&self, value: DecimalValue) -> Result<DecimalValue, RangeError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(RangeError::OperandOutOfRange)
        }
    }

    /// Validate an intermediate or final computed value.
    pub fn check_result(&self, value: DecimalValue) -> Result<DecimalValue, RangeError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(RangeError::ResultOutOfRange)
        }
    }
}

impl Default for RangeGuard {
    fn default() -> Self {
        Self::new()
    }
}
