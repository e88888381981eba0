// ============================================================================
// Calculator
// Parse -> Guard -> Evaluate -> Format for the two- and four-operand variants
// ============================================================================

use crate::domain::config::{CalculatorConfig, ConfigError};
use crate::domain::{
    CalculationId, CalculationOutcome, ExpressionTemplate, OperandSlot, Operator,
};
use crate::engine::Evaluator;
use crate::format::{format_integer, DisplayFormatter};
use crate::interfaces::{CalculationEvent, EventHandler};
use crate::numeric::{ArithmeticError, DecimalValue, RangeError, RoundingPolicy};
use crate::parser::{LiteralParser, ParseError};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;

/// Status text shown before the first calculation
pub const PROMPT_STATUS: &str = "Enter numbers. Fractional separator: dot or comma.";

/// Status text shown after the fields are cleared
pub const READY_STATUS: &str = "Ready to calculate";

/// Status text shown next to a successful result
pub const SUCCESS_STATUS: &str = "Calculation completed successfully";

// ============================================================================
// Errors
// ============================================================================

/// Any failure of a calculation request. `Display` is the status message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("error in number {slot}: {error}")]
    Parse { slot: OperandSlot, error: ParseError },

    #[error("number {slot} is outside the range ±1 000 000 000 000")]
    OperandOutOfRange { slot: OperandSlot },

    #[error("result exceeds the permitted range")]
    ResultOutOfRange,

    #[error("division by zero is not possible")]
    DivisionByZero,
}

impl CalcError {
    /// Operand field to highlight, if the error belongs to one.
    pub fn slot(&self) -> Option<OperandSlot> {
        match self {
            CalcError::Parse { slot, .. } | CalcError::OperandOutOfRange { slot } => Some(*slot),
            CalcError::ResultOutOfRange | CalcError::DivisionByZero => None,
        }
    }
}

impl From<ArithmeticError> for CalcError {
    fn from(err: ArithmeticError) -> Self {
        match err {
            ArithmeticError::DivisionByZero => CalcError::DivisionByZero,
            ArithmeticError::OutOfRange(_) => CalcError::ResultOutOfRange,
        }
    }
}

/// Result type alias for calculator requests
pub type CalcResult<T> = Result<T, CalcError>;

/// Status line for a finished request.
pub fn status_message(result: &CalcResult<CalculationOutcome>) -> String {
    match result {
        Ok(_) => SUCCESS_STATUS.to_string(),
        Err(err) => err.to_string(),
    }
}

// ============================================================================
// Calculator
// ============================================================================

/// Stateless calculator for one configured variant
pub struct Calculator {
    /// Precision and leniency settings
    config: CalculatorConfig,

    /// Input field parser
    parser: LiteralParser,

    /// Bounded arithmetic
    evaluator: Evaluator,

    /// Result rendering
    formatter: DisplayFormatter,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl Calculator {
    /// Create a calculator, validating the configuration first
    pub fn new(
        config: CalculatorConfig,
        event_handler: Arc<dyn EventHandler>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            parser: LiteralParser::from_config(&config)?,
            evaluator: Evaluator::from_config(&config)?,
            formatter: DisplayFormatter::from_config(&config),
            config,
            event_handler,
        })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn parser(&self) -> &LiteralParser {
        &self.parser
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn formatter(&self) -> &DisplayFormatter {
        &self.formatter
    }

    /// Two-operand request: `A op B`.
    pub fn calculate(&self, a: &str, op: Operator, b: &str) -> CalcResult<CalculationOutcome> {
        let id = CalculationId::new();
        let mut events = vec![CalculationEvent::Requested {
            id,
            operand_count: 2,
            timestamp: Utc::now(),
        }];

        let outcome = self.read_operands(id, [a, b], &mut events).and_then(|[a, b]| {
            let value = self.evaluator.apply(a, b, op)?;
            Ok(CalculationOutcome::new(id, value, self.formatter.format(value)))
        });

        self.finish(id, outcome, events)
    }

    /// Four-operand request using the configured rounding policy.
    pub fn evaluate_expression(
        &self,
        operands: [&str; 4],
        operators: [Operator; 3],
    ) -> CalcResult<CalculationOutcome> {
        self.evaluate_expression_with(operands, operators, self.config.rounding_policy)
    }

    /// Four-operand request: `A op1 (B op2 C) op3 D`.
    ///
    /// The outcome carries both the formatted value and its integer rounding
    /// under `policy`.
    pub fn evaluate_expression_with(
        &self,
        operands: [&str; 4],
        operators: [Operator; 3],
        policy: RoundingPolicy,
    ) -> CalcResult<CalculationOutcome> {
        let id = CalculationId::new();
        let mut events = vec![CalculationEvent::Requested {
            id,
            operand_count: 4,
            timestamp: Utc::now(),
        }];

        let outcome = self.read_operands(id, operands, &mut events).and_then(|values| {
            let template = ExpressionTemplate::from_slots(values, operators);
            let value = self.evaluator.evaluate(&template)?;
            Ok(CalculationOutcome::new(id, value, self.formatter.format(value))
                .with_rounded(format_integer(value, policy)))
        });

        self.finish(id, outcome, events)
    }

    /// Parse every field, then range-check every parsed value.
    fn read_operands<const N: usize>(
        &self,
        id: CalculationId,
        texts: [&str; N],
        events: &mut Vec<CalculationEvent>,
    ) -> CalcResult<[DecimalValue; N]> {
        let mut values = [DecimalValue::ZERO; N];

        for ((value, text), slot) in values.iter_mut().zip(texts).zip(OperandSlot::ALL) {
            *value = self.parser.parse(text).map_err(|error| {
                let err = CalcError::Parse { slot, error };
                events.push(rejection(id, slot, &err));
                err
            })?;
        }

        for (value, slot) in values.iter().zip(OperandSlot::ALL) {
            self.evaluator
                .guard()
                .check_operand(*value)
                .map_err(|_: RangeError| {
                    let err = CalcError::OperandOutOfRange { slot };
                    events.push(rejection(id, slot, &err));
                    err
                })?;
        }

        Ok(values)
    }

    fn finish(
        &self,
        id: CalculationId,
        outcome: CalcResult<CalculationOutcome>,
        mut events: Vec<CalculationEvent>,
    ) -> CalcResult<CalculationOutcome> {
        match &outcome {
            Ok(done) => {
                tracing::info!(%id, display = %done.display, "calculation completed");
                events.push(CalculationEvent::Completed {
                    id,
                    display: done.display.clone(),
                    timestamp: Utc::now(),
                });
            }
            Err(error) => {
                tracing::info!(%id, %error, "calculation rejected");
                events.push(CalculationEvent::Failed {
                    id,
                    error: error.clone(),
                    timestamp: Utc::now(),
                });
            }
        }

        self.event_handler.on_events(events);
        outcome
    }
}

fn rejection(id: CalculationId, slot: OperandSlot, err: &CalcError) -> CalculationEvent {
    CalculationEvent::OperandRejected {
        id,
        slot,
        reason: err.to_string(),
        timestamp: Utc::now(),
    }
}

// ============================================================================
// Tests
// ============================================================================
