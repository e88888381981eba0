// ============================================================================
// Engine Module
// Contains the evaluation pipeline and calculator facade
// ============================================================================

mod calculator;
mod evaluator;

pub mod factory;

pub use calculator::{
    status_message, CalcError, CalcResult, Calculator, PROMPT_STATUS, READY_STATUS,
    SUCCESS_STATUS,
};
pub use evaluator::Evaluator;
pub use factory::{create_from_config, CalculatorBuilder};
