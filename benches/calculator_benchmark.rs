// ============================================================================
// Calculator Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parsing - Literal validation and conversion
// 2. Formatting - Grouped fixed-point rendering
// 3. Evaluation - Binary apply and the four-operand template
// 4. End to End - Full requests through the calculator facade
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use decimal_calc::prelude::*;
use std::hint::black_box;
use std::sync::Arc;

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let parser = LiteralParser::strict();

    for literal in ["7", "-1 234,5", "999 999 999 999.999999", "1.000.5"] {
        group.bench_with_input(BenchmarkId::from_parameter(literal), literal, |b, literal| {
            b.iter(|| black_box(parser.parse(black_box(literal))))
        });
    }

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn benchmark_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    let value: DecimalValue = "-987654321012.3456789".parse().unwrap();

    group.bench_function("fixed", |b| b.iter(|| black_box(format_fixed(black_box(value)))));
    group.bench_function("fixed_padded", |b| {
        b.iter(|| black_box(format_fixed_padded(black_box(value))))
    });
    group.bench_function("integer_half_even", |b| {
        b.iter(|| black_box(format_integer(black_box(value), RoundingPolicy::HalfEven)))
    });

    group.finish();
}

// ============================================================================
// Evaluation Benchmarks
// ============================================================================

fn benchmark_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let evaluator = Evaluator::default();
    let a: DecimalValue = "123456.789".parse().unwrap();
    let b: DecimalValue = "3".parse().unwrap();

    for op in Operator::ALL {
        group.bench_with_input(BenchmarkId::new("apply", op.ascii()), &op, |bench, &op| {
            bench.iter(|| black_box(evaluator.apply(black_box(a), black_box(b), op)))
        });
    }

    let template = ExpressionTemplate::from_slots(
        [a, b, "7.25".parse().unwrap(), b],
        [Operator::Add, Operator::Divide, Operator::Multiply],
    );
    group.bench_function("template", |bench| {
        bench.iter(|| black_box(evaluator.evaluate(black_box(&template))))
    });

    group.finish();
}

// ============================================================================
// End-to-End Benchmarks
// ============================================================================

fn benchmark_calculator(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculator");

    let two = CalculatorBuilder::two_operand()
        .build(Arc::new(NoOpEventHandler))
        .unwrap();
    group.bench_function("calculate", |b| {
        b.iter(|| black_box(two.calculate(black_box("1 000 000,5"), Operator::Divide, black_box("3"))))
    });

    let expr = CalculatorBuilder::expression()
        .build(Arc::new(NoOpEventHandler))
        .unwrap();
    group.bench_function("evaluate_expression", |b| {
        b.iter(|| {
            black_box(expr.evaluate_expression(
                black_box(["2", "3,5", "4", "1 000"]),
                [Operator::Multiply, Operator::Add, Operator::Subtract],
            ))
        })
    });

    group.bench_function("rejected_operand", |b| {
        b.iter(|| black_box(two.calculate(black_box("12x"), Operator::Add, black_box("1"))))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_format,
    benchmark_evaluate,
    benchmark_calculator
);
criterion_main!(benches);
