// ============================================================================
// Numeric Module
// Bounded fixed-point decimal arithmetic
// ============================================================================
//
// This module provides:
// - DecimalValue: immutable base-10 value over rust_decimal
// - RoundingPolicy: half-up / half-even / truncate
// - RangeGuard: the inclusive ±10^12 magnitude bound
// - NumericError / RangeError / ArithmeticError: error taxonomy
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Precision is passed explicitly, never held in process-wide state

mod decimal_value;
mod errors;
mod range;
mod rounding;

pub use decimal_value::DecimalValue;
pub use errors::{ArithmeticError, EvalResult, NumericError, NumericResult, RangeError};
pub use range::{RangeGuard, RANGE_BOUND};
pub use rounding::RoundingPolicy;
