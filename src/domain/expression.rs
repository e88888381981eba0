// ============================================================================
// Expression Template
// Fixed four-slot template: A op1 (B op2 C) op3 D
// ============================================================================

use super::operator::Operator;
use crate::numeric::DecimalValue;
use std::fmt;

/// Order in which the outer operators are resolved once `(B op2 C)` is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Association {
    /// `(A op1 mid) op3 D`, used when op1 ranks at least as high as op3
    LeftFirst,
    /// `A op1 (mid op3 D)`, used when op3 outranks op1
    RightFirst,
}

/// Four operands and three operators, constructed fresh per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpressionTemplate {
    pub a: DecimalValue,
    pub op1: Operator,
    pub b: DecimalValue,
    pub op2: Operator,
    pub c: DecimalValue,
    pub op3: Operator,
    pub d: DecimalValue,
}

impl ExpressionTemplate {
    pub fn new(
        a: DecimalValue,
        op1: Operator,
        b: DecimalValue,
        op2: Operator,
        c: DecimalValue,
        op3: Operator,
        d: DecimalValue,
    ) -> Self {
        Self {
            a,
            op1,
            b,
            op2,
            c,
            op3,
            d,
        }
    }

    /// Build from operand slots A..D and operator slots op1..op3.
    pub fn from_slots(operands: [DecimalValue; 4], operators: [Operator; 3]) -> Self {
        let [a, b, c, d] = operands;
        let [op1, op2, op3] = operators;
        Self::new(a, op1, b, op2, c, op3, d)
    }

    /// Ties keep strict left-to-right association.
    pub fn association(&self) -> Association {
        if self.op1.rank() >= self.op3.rank() {
            Association::LeftFirst
        } else {
            Association::RightFirst
        }
    }
}

impl fmt::Display for ExpressionTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({} {} {}) {} {}",
            self.a, self.op1, self.b, self.op2, self.c, self.op3, self.d
        )
    }
}
