// ============================================================================
// Literal Parser
// Strict text-to-decimal conversion with grouping and separator validation
// ============================================================================
//
// Accepted grammar (after trimming):
//   [sign] int-part [ ("." | ",") frac-part ]
// where int-part may use single spaces as thousands separators
// ("1 234 567") and the sign may only lead the literal.

use super::errors::{ParseError, ParseErrorKind, ParseResult};
use crate::domain::config::{CalculatorConfig, ConfigError, EmptyInputPolicy};
use crate::numeric::DecimalValue;
use rust_decimal::Decimal;

/// Remainders that carry a sign or separator but no digits.
const DEGENERATE_LITERALS: [&str; 6] = ["", "+", "-", ".", "+.", "-."];

/// Parses raw input fields into `DecimalValue`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralParser {
    empty_input: EmptyInputPolicy,
    scale: Option<u32>,
}

impl LiteralParser {
    /// # Errors
    /// Returns `ParseScaleTooLarge` if `scale` exceeds `DecimalValue::MAX_SCALE`.
    pub fn new(empty_input: EmptyInputPolicy, scale: Option<u32>) -> Result<Self, ConfigError> {
        match scale {
            Some(scale) if scale > DecimalValue::MAX_SCALE => {
                Err(ConfigError::ParseScaleTooLarge(scale))
            }
            _ => Ok(Self { empty_input, scale }),
        }
    }

    /// Empty input is an error and every typed digit is kept.
    pub const fn strict() -> Self {
        Self {
            empty_input: EmptyInputPolicy::Reject,
            scale: None,
        }
    }

    pub fn from_config(config: &CalculatorConfig) -> Result<Self, ConfigError> {
        Self::new(config.empty_input, config.parse_scale)
    }

    pub fn empty_input(&self) -> EmptyInputPolicy {
        self.empty_input
    }

    pub fn scale(&self) -> Option<u32> {
        self.scale
    }

    /// Parse one input field.
    ///
    /// # Errors
    /// Returns the first failed check as a [`ParseError`] carrying `text`.
    pub fn parse(&self, text: &str) -> ParseResult<DecimalValue> {
        let literal = text.trim();
        if literal.is_empty() {
            return match self.empty_input {
                EmptyInputPolicy::Reject => {
                    Err(ParseError::new(ParseErrorKind::EmptyInput, text))
                }
                EmptyInputPolicy::TreatAsZero => Ok(DecimalValue::ZERO),
            };
        }

        parse_literal(literal, self.scale).map_err(|kind| {
            tracing::debug!(input = text, reason = %kind, "literal rejected");
            ParseError::new(kind, text)
        })
    }
}

impl Default for LiteralParser {
    fn default() -> Self {
        Self::strict()
    }
}

// ============================================================================
// Validation Steps
// ============================================================================

fn parse_literal(literal: &str, scale: Option<u32>) -> Result<DecimalValue, ParseErrorKind> {
    check_characters(literal)?;
    check_sign_placement(literal)?;

    let normalized = literal.replace(',', ".");
    if normalized.matches('.').count() > 1 {
        return Err(ParseErrorKind::MultipleSeparators);
    }

    let int_part = normalized
        .split_once('.')
        .map_or(normalized.as_str(), |(int_part, _)| int_part);
    if int_part.contains(' ') && !is_well_grouped(int_part) {
        return Err(ParseErrorKind::InvalidGrouping);
    }

    let cleaned = normalized.replace(' ', "");
    if DEGENERATE_LITERALS.contains(&cleaned.as_str()) {
        return Err(ParseErrorKind::IncompleteNumber);
    }

    build_value(&cleaned, scale)
}

#[inline]
fn is_literal_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, ' ' | '.' | ',' | '+' | '-')
}

/// Foreign characters first, then the exponent marker.
fn check_characters(literal: &str) -> Result<(), ParseErrorKind> {
    if let Some(found) = literal
        .chars()
        .find(|&c| !is_literal_char(c) && !matches!(c, 'e' | 'E'))
    {
        return Err(ParseErrorKind::InvalidCharacter { found });
    }
    if literal.contains(['e', 'E']) {
        return Err(ParseErrorKind::ExponentNotation);
    }
    Ok(())
}

/// A sign may not follow a digit or separator, even across spaces.
fn check_sign_placement(literal: &str) -> Result<(), ParseErrorKind> {
    let mut previous: Option<char> = None;
    for c in literal.chars() {
        if matches!(c, '+' | '-')
            && matches!(previous, Some(p) if p.is_ascii_digit() || p == '.' || p == ',')
        {
            return Err(ParseErrorKind::MisplacedSign);
        }
        if c != ' ' {
            previous = Some(c);
        }
    }
    Ok(())
}

/// `[sign] d{1,3} ( " " d{3} )*`
fn is_well_grouped(int_part: &str) -> bool {
    let digits = int_part.strip_prefix(['+', '-']).unwrap_or(int_part);
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    let mut groups = digits.split(' ');
    let leading_ok = groups
        .next()
        .is_some_and(|g| (1..=3).contains(&g.len()) && is_digits(g));

    leading_ok && groups.all(|g| g.len() == 3 && is_digits(g))
}

/// Turn a cleaned `[sign] digits [. digits]` string into a value.
///
/// Fractional digits are rounded half-up to `scale` when given, and always to
/// what the backend's mantissa can hold next to the integer digits. An integer part too
/// long for the backend saturates to the backend extreme with the literal's
/// sign, which lies far outside the range bound.
fn build_value(cleaned: &str, scale: Option<u32>) -> Result<DecimalValue, ParseErrorKind> {
    let (negative, unsigned) = match cleaned.as_bytes().first() {
        Some(b'-') => (true, &cleaned[1..]),
        Some(b'+') => (false, &cleaned[1..]),
        _ => (false, cleaned),
    };

    let (int_digits, frac_digits) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int_digits.is_empty() && frac_digits.is_empty())
        || !is_digits(int_digits)
        || !is_digits(frac_digits)
    {
        return Err(ParseErrorKind::InvalidNumericFormat);
    }

    let int_digits = match int_digits.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };
    let max_digits = DecimalValue::MAX_SCALE as usize;
    if int_digits.len() > max_digits {
        let extreme = if negative { Decimal::MIN } else { Decimal::MAX };
        return Ok(DecimalValue::from_decimal(extreme));
    }

    let mut keep = frac_digits
        .len()
        .min(max_digits)
        .min(scale.map_or(max_digits, |s| s as usize));
    // Shed fractional digits until the mantissa fits 96 bits
    let mut magnitude = loop {
        let canonical = if keep == 0 {
            int_digits.to_string()
        } else {
            format!("{int_digits}.{}", &frac_digits[..keep])
        };
        match Decimal::from_str_exact(&canonical) {
            Ok(value) => break value,
            Err(_) if keep > 0 => keep -= 1,
            Err(_) => return Err(ParseErrorKind::InvalidNumericFormat),
        }
    };
    let dropped = &frac_digits[keep..];

    // Half-up only looks at the first dropped digit
    if dropped.as_bytes().first().is_some_and(|&d| d >= b'5') {
        let unit = Decimal::try_new(1, keep as u32)
            .map_err(|_| ParseErrorKind::InvalidNumericFormat)?;
        magnitude = magnitude
            .checked_add(unit)
            .ok_or(ParseErrorKind::InvalidNumericFormat)?;
    }

    magnitude.set_sign_negative(negative);
    Ok(DecimalValue::from_decimal(magnitude))
}

// ============================================================================
// Tests
// ============================================================================
