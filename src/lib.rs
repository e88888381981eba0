// ============================================================================
// Decimal Calculator Library
// Bounded fixed-point calculator core with explicit precision configuration
// ============================================================================

//! # Decimal Calculator
//!
//! Parse, range-check, evaluate and format decimal numbers entered as free
//! text, without binary floating point anywhere in the pipeline.
//!
//! ## Features
//!
//! - **Strict literal grammar** with comma or dot separators and space grouping
//! - **Inclusive ±10¹² range bound** on every operand and computed value
//! - **Fixed four-operand template** `A op1 (B op2 C) op3 D` with precedence
//! - **Deterministic half-up quantization** at a configurable scale
//! - **Event hooks** for logging and history
//!
//! ## Example
//!
//! ```rust
//! use decimal_calc::prelude::*;
//! use std::sync::Arc;
//!
//! let calculator = create_from_config(
//!     CalculatorConfig::expression(),
//!     Arc::new(NoOpEventHandler),
//! )
//! .unwrap();
//!
//! // 2 × (3 + 4) − 1
//! let outcome = calculator
//!     .evaluate_expression(
//!         ["2", "3", "4", "1"],
//!         [Operator::Multiply, Operator::Add, Operator::Subtract],
//!     )
//!     .unwrap();
//! assert_eq!(outcome.display, "13");
//!
//! let err = calculator
//!     .calculate("1 000,5", Operator::Divide, "0")
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "division by zero is not possible");
//! ```

pub mod domain;
pub mod engine;
pub mod format;
pub mod interfaces;
pub mod numeric;
pub mod parser;

#[cfg(feature = "logging")]
pub mod telemetry;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Association, CalculationId, CalculationOutcome, CalculatorConfig, CalculatorVariant,
        ConfigError, DisplayMode, EmptyInputPolicy, ExpressionTemplate, OperandSlot, Operator,
    };
    pub use crate::engine::{
        create_from_config, status_message, CalcError, CalcResult, Calculator,
        CalculatorBuilder, Evaluator, SUCCESS_STATUS,
    };
    pub use crate::format::{
        format_fixed, format_fixed_padded, format_integer, round_to_integer, DisplayFormatter,
    };
    pub use crate::interfaces::{
        CalculationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
        RecordingEventHandler,
    };
    pub use crate::numeric::{DecimalValue, RangeGuard, RoundingPolicy};
    pub use crate::parser::{LiteralParser, ParseError, ParseErrorKind};
}
