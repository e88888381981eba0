// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_calc::engine::{PROMPT_STATUS, READY_STATUS};
use decimal_calc::prelude::*;
use std::sync::Arc;

fn show(label: &str, result: &CalcResult<CalculationOutcome>) {
    match result {
        Ok(outcome) => match &outcome.rounded {
            Some(rounded) => println!("  {label:<36} = {} (≈ {rounded})", outcome.display),
            None => println!("  {label:<36} = {}", outcome.display),
        }
        Err(_) => println!("  {label:<36}   [{}]", status_message(result)),
    }
}

fn main() {
    #[cfg(feature = "logging")]
    decimal_calc::telemetry::init_tracing();

    println!("=== Decimal Calculator Example ===\n");
    println!("{PROMPT_STATUS}\n");

    // Two-operand calculator with strict input
    let history = Arc::new(RecordingEventHandler::new());
    let calculator = CalculatorBuilder::two_operand()
        .build(history.clone())
        .unwrap();

    println!("Two operands (strict):");
    for (a, op, b) in [
        ("1 000 000,5", Operator::Add, "0.25"),
        ("2", Operator::Divide, "3"),
        ("10", Operator::Divide, "0"),
        ("1 00", Operator::Add, "1"),
        ("1e5", Operator::Multiply, "2"),
        ("999 999 999 999", Operator::Multiply, "2"),
        ("", Operator::Subtract, "1"),
    ] {
        let label = format!("{a} {op} {b}");
        show(&label, &calculator.calculate(a, op, b));
    }

    // Fixed six-digit display, empty fields read as zero
    let fixed = CalculatorBuilder::fixed_display()
        .build(Arc::new(LoggingEventHandler))
        .unwrap();

    println!("\nFixed display (lenient):");
    for (a, op, b) in [
        ("123.45", Operator::Multiply, "2"),
        ("", Operator::Add, "0,0000005"),
        ("-7", Operator::Divide, "3"),
    ] {
        let label = format!("{a:?} {op} {b}");
        show(&label, &fixed.calculate(a, op, b));
    }

    // Four-operand template with each rounding policy
    let expression = CalculatorBuilder::expression()
        .build(Arc::new(NoOpEventHandler))
        .unwrap();

    println!("\nExpression A op1 (B op2 C) op3 D:");
    let operands = ["0", "5", "0", "2"];
    let operators = [Operator::Subtract, Operator::Add, Operator::Divide];
    for policy in RoundingPolicy::ALL {
        let label = format!("0 − (5 + 0) ÷ 2 [{policy}]");
        show(
            &label,
            &expression.evaluate_expression_with(operands, operators, policy),
        );
    }

    let operators = [Operator::Multiply, Operator::Add, Operator::Subtract];
    show(
        "2 × (3 + 4) − 1",
        &expression.evaluate_expression(["2", "3", "4", "1"], operators),
    );

    println!("\n=== History ===");
    for event in history.events() {
        match event {
            CalculationEvent::Completed { id, display, .. } => println!("  {id}  {display}"),
            CalculationEvent::OperandRejected { id, slot, reason, .. } => {
                println!("  {id}  field {slot}: {reason}")
            }
            CalculationEvent::Failed { id, error, .. } if error.slot().is_none() => {
                println!("  {id}  {error}")
            }
            _ => {}
        }
    }

    history.clear();
    println!("\n{READY_STATUS}");
}
