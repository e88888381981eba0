// ============================================================================
// Display Formatter
// Grouped fixed-point rendering and integer rounding
// ============================================================================

use crate::domain::config::{CalculatorConfig, DisplayMode, DISPLAY_SCALE};
use crate::numeric::{DecimalValue, RoundingPolicy};

/// Renders values per the configured [`DisplayMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayFormatter {
    mode: DisplayMode,
}

impl DisplayFormatter {
    pub fn new(mode: DisplayMode) -> Self {
        Self { mode }
    }

    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::new(config.display_mode)
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn format(&self, value: DecimalValue) -> String {
        match self.mode {
            DisplayMode::Trimmed => format_fixed(value),
            DisplayMode::Padded => format_fixed_padded(value),
        }
    }
}

// ============================================================================
// Contracts
// ============================================================================

/// Six fractional digits (half-up), trailing zeros and a dangling `.`
/// removed, integer digits grouped by single spaces.
///
/// ```
/// use decimal_calc::format::format_fixed;
///
/// let x = "1234567,8900".parse().unwrap();
/// assert_eq!(format_fixed(x), "1 234 567.89");
/// ```
pub fn format_fixed(value: DecimalValue) -> String {
    let (negative, int_digits, frac_digits) = fixed_parts(value);
    let frac = frac_digits.trim_end_matches('0');
    assemble(negative, &int_digits, frac)
}

/// As [`format_fixed`] but always exactly six fractional digits.
pub fn format_fixed_padded(value: DecimalValue) -> String {
    let (negative, int_digits, frac_digits) = fixed_parts(value);
    assemble(negative, &int_digits, &frac_digits)
}

/// Quantize to a whole number under `policy`.
pub fn round_to_integer(value: DecimalValue, policy: RoundingPolicy) -> DecimalValue {
    DecimalValue::from_decimal(value.as_decimal().round_dp_with_strategy(0, policy.strategy()))
}

/// Grouped integer rendering of `value` rounded under `policy`.
pub fn format_integer(value: DecimalValue, policy: RoundingPolicy) -> String {
    let rounded = round_to_integer(value, policy);
    let (negative, int_digits, _) = split_digits(rounded, 0);
    assemble(negative, &int_digits, "")
}

/// Insert a space every three digits from the right.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

// ============================================================================
// Rendering Helpers
// ============================================================================

fn fixed_parts(value: DecimalValue) -> (bool, String, String) {
    let rounded = round_half_up(value, DISPLAY_SCALE);
    split_digits(rounded, DISPLAY_SCALE as usize)
}

fn round_half_up(value: DecimalValue, scale: u32) -> DecimalValue {
    DecimalValue::from_decimal(
        value
            .as_decimal()
            .round_dp_with_strategy(scale, RoundingPolicy::HalfUp.strategy()),
    )
}

/// Sign, integer digits and exactly `width` fractional digits of a value
/// whose scale is already `<= width`.
fn split_digits(value: DecimalValue, width: usize) -> (bool, String, String) {
    let mantissa = value.mantissa();
    let scale = value.scale() as usize;

    let mut digits = mantissa.unsigned_abs().to_string();
    if digits.len() <= scale {
        digits.insert_str(0, &"0".repeat(scale + 1 - digits.len()));
    }
    let (int_digits, frac_digits) = digits.split_at(digits.len() - scale);

    let mut frac = frac_digits.to_string();
    frac.truncate(width);
    while frac.len() < width {
        frac.push('0');
    }

    (mantissa < 0, int_digits.to_string(), frac)
}

fn assemble(negative: bool, int_digits: &str, frac: &str) -> String {
    let mut out = String::with_capacity(int_digits.len() * 4 / 3 + frac.len() + 2);
    // Negative zero was folded on construction, so a sign means non-zero
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_digits));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::LiteralParser;

    fn dv(s: &str) -> DecimalValue {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_fixed_trims() {
        assert_eq!(format_fixed(dv("100.000000")), "100");
        assert_eq!(format_fixed(dv("123.45")), "123.45");
        assert_eq!(format_fixed(dv("0")), "0");
        assert_eq!(format_fixed(dv("0.000001")), "0.000001");
        assert_eq!(format_fixed(dv("-0.5")), "-0.5");
    }

    #[test]
    fn test_format_fixed_rounds_half_up() {
        assert_eq!(format_fixed(dv("0.0000005")), "0.000001");
        assert_eq!(format_fixed(dv("-0.0000005")), "-0.000001");
        assert_eq!(format_fixed(dv("0.0000004")), "0");
        assert_eq!(format_fixed(dv("-0.0000004")), "0");
        assert_eq!(format_fixed(dv("1.9999995")), "2");
        assert_eq!(format_fixed(dv("2.1234564999")), "2.123456");
    }

    #[test]
    fn test_format_fixed_groups() {
        assert_eq!(format_fixed(dv("1000")), "1 000");
        assert_eq!(format_fixed(dv("999")), "999");
        assert_eq!(format_fixed(dv("-1234567.5")), "-1 234 567.5");
        assert_eq!(format_fixed(dv("1000000000000")), "1 000 000 000 000");
        assert_eq!(format_fixed(dv("12345,6789")), "12 345.6789");
    }

    #[test]
    fn test_format_fixed_padded() {
        assert_eq!(format_fixed_padded(dv("100")), "100.000000");
        assert_eq!(format_fixed_padded(dv("123.45")), "123.450000");
        assert_eq!(format_fixed_padded(dv("-1234.5678915")), "-1 234.567892");
        assert_eq!(format_fixed_padded(dv("-0.0000001")), "0.000000");
    }

    #[test]
    fn test_round_to_integer() {
        use RoundingPolicy::*;

        assert_eq!(round_to_integer(dv("2.5"), HalfUp), dv("3"));
        assert_eq!(round_to_integer(dv("2.5"), HalfEven), dv("2"));
        assert_eq!(round_to_integer(dv("2.5"), TruncateTowardZero), dv("2"));
        assert_eq!(round_to_integer(dv("-2.5"), TruncateTowardZero), dv("-2"));
        assert_eq!(round_to_integer(dv("-2.5"), HalfUp), dv("-3"));
        assert_eq!(round_to_integer(dv("3.5"), HalfEven), dv("4"));
        assert_eq!(round_to_integer(dv("-0.4"), HalfUp), DecimalValue::ZERO);
    }

    #[test]
    fn test_format_integer() {
        assert_eq!(format_integer(dv("1234567.5"), RoundingPolicy::HalfUp), "1 234 568");
        assert_eq!(format_integer(dv("1234567.5"), RoundingPolicy::HalfEven), "1 234 568");
        assert_eq!(
            format_integer(dv("-999.9"), RoundingPolicy::TruncateTowardZero),
            "-999"
        );
        assert_eq!(
            format_integer(dv("-0.9"), RoundingPolicy::TruncateTowardZero),
            "0"
        );
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("1234"), "1 234");
        assert_eq!(group_thousands("123456"), "123 456");
    }

    #[test]
    fn test_formatter_modes() {
        let trimmed = DisplayFormatter::from_config(&CalculatorConfig::two_operand());
        let padded = DisplayFormatter::from_config(&CalculatorConfig::fixed_display());
        assert_eq!(trimmed.mode(), DisplayMode::Trimmed);
        assert_eq!(trimmed.format(dv("7")), "7");
        assert_eq!(padded.format(dv("7")), "7.000000");
    }

    // ------------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------------

    mod properties {
        use super::*;
        use crate::numeric::{RangeGuard, RANGE_BOUND};
        use proptest::prelude::*;

        const MICRO_BOUND: i64 = RANGE_BOUND * 1_000_000;

        proptest! {
            #[test]
            fn trimmed_output_reparses_in_range(
                mantissa in -(MICRO_BOUND as i128) * 10_000..=(MICRO_BOUND as i128) * 10_000,
            ) {
                let value = DecimalValue::from_scaled(mantissa, 10).unwrap();
                let text = format_fixed(value);
                let reparsed = LiteralParser::strict().parse(&text).unwrap();
                prop_assert!(RangeGuard::new().contains(reparsed));
                prop_assert_eq!(reparsed, round_half_up(value, DISPLAY_SCALE));
            }

            #[test]
            fn padded_and_trimmed_agree(mantissa in -MICRO_BOUND..=MICRO_BOUND) {
                let value = DecimalValue::from_scaled(mantissa as i128, 6).unwrap();
                let parser = LiteralParser::strict();
                prop_assert_eq!(
                    parser.parse(&format_fixed(value)).unwrap(),
                    parser.parse(&format_fixed_padded(value)).unwrap()
                );
            }

            #[test]
            fn grouped_literal_round_trips(int in 0u64..=1_000_000_000_000, frac in 1u32..1_000_000) {
                let frac = format!("{frac:06}");
                let frac = frac.trim_end_matches('0');
                let canonical = format!("{}.{}", group_thousands(&int.to_string()), frac);
                let value = LiteralParser::strict().parse(&canonical).unwrap();
                prop_assert_eq!(format_fixed(value), canonical);
            }
        }
    }
}
