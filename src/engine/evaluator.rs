// ============================================================================
// Expression Evaluator
// Bounded binary arithmetic and the A op1 (B op2 C) op3 D template
// ============================================================================

use crate::domain::config::{CalculatorConfig, ConfigError, EXPRESSION_INTERMEDIATE_SCALE};
use crate::domain::{Association, ExpressionTemplate, Operator};
use crate::numeric::{
    ArithmeticError, DecimalValue, EvalResult, NumericError, RangeError, RangeGuard,
    RoundingPolicy,
};

/// Applies operators at a fixed intermediate scale, range-checking every
/// produced value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    intermediate_scale: u32,
    guard: RangeGuard,
}

impl Evaluator {
    /// # Errors
    /// Returns `IntermediateScaleTooLarge` if `intermediate_scale` exceeds
    /// `DecimalValue::MAX_SCALE`.
    pub fn new(intermediate_scale: u32) -> Result<Self, ConfigError> {
        if intermediate_scale > DecimalValue::MAX_SCALE {
            return Err(ConfigError::IntermediateScaleTooLarge(intermediate_scale));
        }
        Ok(Self {
            intermediate_scale,
            guard: RangeGuard::new(),
        })
    }

    pub fn from_config(config: &CalculatorConfig) -> Result<Self, ConfigError> {
        Self::new(config.intermediate_scale)
    }

    pub fn intermediate_scale(&self) -> u32 {
        self.intermediate_scale
    }

    pub fn guard(&self) -> &RangeGuard {
        &self.guard
    }

    /// Apply one operator.
    ///
    /// The exact result is quantized half-up to the intermediate scale and
    /// then checked against the range bound.
    ///
    /// # Errors
    /// - `DivisionByZero` when dividing by exactly zero (checked first)
    /// - `OutOfRange(ResultOutOfRange)` when the result exceeds the bound
    pub fn apply(
        &self,
        left: DecimalValue,
        right: DecimalValue,
        op: Operator,
    ) -> EvalResult<DecimalValue> {
        let exact = match op {
            Operator::Add => left.checked_add(right),
            Operator::Subtract => left.checked_sub(right),
            Operator::Multiply => left.checked_mul(right),
            Operator::Divide => left.checked_div(right),
        }
        .map_err(|err| match err {
            NumericError::DivisionByZero => ArithmeticError::DivisionByZero,
            NumericError::Overflow | NumericError::ScaleTooLarge(_) => {
                RangeError::ResultOutOfRange.into()
            }
        })?;

        let rounded = exact
            .quantize(self.intermediate_scale, RoundingPolicy::HalfUp)
            .map_err(|_| RangeError::ResultOutOfRange)?;

        tracing::trace!(%left, %op, %right, result = %rounded, "applied operator");

        Ok(self.guard.check_result(rounded)?)
    }

    /// Evaluate the four-operand template.
    ///
    /// `(B op2 C)` always binds first. The outer operators then resolve by
    /// precedence rank, left-to-right on ties. The first failing step aborts
    /// the evaluation.
    pub fn evaluate(&self, template: &ExpressionTemplate) -> EvalResult<DecimalValue> {
        let mid = self.apply(template.b, template.c, template.op2)?;

        let result = match template.association() {
            Association::LeftFirst => {
                let temp = self.apply(template.a, mid, template.op1)?;
                self.apply(temp, template.d, template.op3)?
            }
            Association::RightFirst => {
                let temp = self.apply(mid, template.d, template.op3)?;
                self.apply(template.a, temp, template.op1)?
            }
        };

        tracing::debug!(expression = %template, %result, "expression evaluated");
        Ok(result)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self {
            intermediate_scale: EXPRESSION_INTERMEDIATE_SCALE,
            guard: RangeGuard::new(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
