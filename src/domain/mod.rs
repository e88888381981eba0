// ============================================================================
// Domain Models Module
// Contains the calculator's value objects and configuration
// ============================================================================

pub mod calculation;
pub mod config;
pub mod expression;
pub mod operator;

pub use calculation::{CalculationId, CalculationOutcome, OperandSlot};
pub use config::{
    CalculatorConfig, CalculatorVariant, ConfigError, DisplayMode, EmptyInputPolicy,
};
pub use expression::{Association, ExpressionTemplate};
pub use operator::Operator;
