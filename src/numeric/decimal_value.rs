// ============================================================================
// Decimal Value
// Immutable base-10 fixed-point number backed by rust_decimal
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::rounding::RoundingPolicy;
use crate::parser::{LiteralParser, ParseError};
use rust_decimal::Decimal;
use std::fmt;
use std::ops::Neg;

/// Base-10 fixed-point number with sign and up to 28 fractional digits.
///
/// Values are always finite. There is no NaN, infinity or exponent form, and
/// negative zero is folded into zero on construction so that `-0` never
/// reaches the formatter.
///
/// # Example
/// ```
/// use decimal_calc::numeric::{DecimalValue, RoundingPolicy};
///
/// let amount: DecimalValue = "1 234,5".parse().unwrap();
/// let rounded = amount.quantize(0, RoundingPolicy::HalfUp).unwrap();
/// assert_eq!(rounded.to_string(), "1235");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct DecimalValue(Decimal);

/// Fold `-0` (and `-0.000`) into positive zero.
#[inline]
fn normalized(mut d: Decimal) -> Decimal {
    if d.is_zero() && d.is_sign_negative() {
        d.set_sign_positive(true);
    }
    d
}

impl DecimalValue {
    /// Largest number of fractional digits the backend can hold
    pub const MAX_SCALE: u32 = 28;

    /// Zero value
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// One (1)
    pub const ONE: Self = Self(Decimal::ONE);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Wrap a backend decimal.
    #[inline]
    pub fn from_decimal(d: Decimal) -> Self {
        Self(normalized(d))
    }

    /// Create from an integer value.
    #[inline]
    pub fn from_integer(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    /// Create from a scaled mantissa, i.e. `mantissa × 10^-scale`.
    ///
    /// # Errors
    /// - `ScaleTooLarge` if `scale` exceeds [`Self::MAX_SCALE`]
    /// - `Overflow` if the mantissa does not fit 96 bits
    pub fn from_scaled(mantissa: i128, scale: u32) -> NumericResult<Self> {
        if scale > Self::MAX_SCALE {
            return Err(NumericError::ScaleTooLarge(scale));
        }
        Decimal::try_from_i128_with_scale(mantissa, scale)
            .map(Self::from_decimal)
            .map_err(|_| NumericError::Overflow)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The backend decimal.
    #[inline]
    pub const fn as_decimal(&self) -> &Decimal {
        &self.0
    }

    /// Number of fractional digits currently carried.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.0.scale()
    }

    /// Signed integer mantissa (`self × 10^scale`).
    #[inline]
    pub fn mantissa(&self) -> i128 {
        self.0.mantissa()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    #[inline]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition at full working precision.
    ///
    /// # Errors
    /// Returns `Overflow` if the result does not fit the backend.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self::from_decimal)
            .ok_or(NumericError::Overflow)
    }

    /// Checked subtraction at full working precision.
    ///
    /// # Errors
    /// Returns `Overflow` if the result does not fit the backend.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self::from_decimal)
            .ok_or(NumericError::Overflow)
    }

    /// Checked multiplication.
    ///
    /// The backend keeps up to 28 fractional digits and rounds any excess.
    ///
    /// # Errors
    /// Returns `Overflow` if the integer part does not fit the backend.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_mul(rhs.0)
            .map(Self::from_decimal)
            .ok_or(NumericError::Overflow)
    }

    /// Checked division.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow` if the quotient does not fit the backend
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        self.0
            .checked_div(rhs.0)
            .map(Self::from_decimal)
            .ok_or(NumericError::Overflow)
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Round to `scale` fractional digits under `policy`.
    ///
    /// Values that already carry `scale` digits or fewer are returned as-is
    /// (no zero padding).
    ///
    /// # Errors
    /// Returns `ScaleTooLarge` if `scale` exceeds [`Self::MAX_SCALE`].
    pub fn quantize(self, scale: u32, policy: RoundingPolicy) -> NumericResult<Self> {
        if scale > Self::MAX_SCALE {
            return Err(NumericError::ScaleTooLarge(scale));
        }
        Ok(Self::from_decimal(
            self.0.round_dp_with_strategy(scale, policy.strategy()),
        ))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Neg for DecimalValue {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_decimal(-self.0)
    }
}

impl From<i64> for DecimalValue {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<Decimal> for DecimalValue {
    #[inline]
    fn from(value: Decimal) -> Self {
        Self::from_decimal(value)
    }
}

impl From<DecimalValue> for Decimal {
    #[inline]
    fn from(value: DecimalValue) -> Self {
        value.0
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalValue({}, scale={})", self.0, self.0.scale())
    }
}

/// Canonical plain form: no grouping, `.` separator, the carried scale.
impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for DecimalValue {
    type Err = ParseError;

    /// Parse with the strict literal grammar (grouping spaces, `.` or `,`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LiteralParser::strict().parse(s)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dv(s: &str) -> DecimalValue {
        s.parse().unwrap()
    }

    #[test]
    fn test_constants() {
        assert!(DecimalValue::ZERO.is_zero());
        assert_eq!(DecimalValue::ONE, DecimalValue::from_integer(1));
        assert_eq!(DecimalValue::default(), DecimalValue::ZERO);
    }

    #[test]
    fn test_from_scaled() {
        let x = DecimalValue::from_scaled(12345, 2).unwrap();
        assert_eq!(x.to_string(), "123.45");
        assert_eq!(x.scale(), 2);
        assert_eq!(x.mantissa(), 12345);

        assert_eq!(
            DecimalValue::from_scaled(1, 29),
            Err(NumericError::ScaleTooLarge(29))
        );
    }

    #[test]
    fn test_negative_zero_is_folded() {
        let z = -DecimalValue::ZERO;
        assert!(!z.is_negative());
        assert_eq!(z.to_string(), "0");

        let tiny = dv("-0.0000001").quantize(6, RoundingPolicy::HalfUp).unwrap();
        assert!(tiny.is_zero());
        assert!(!tiny.is_negative());
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = dv("100.25");
        let b = dv("0.75");
        assert_eq!(a.checked_add(b).unwrap(), dv("101"));
        assert_eq!(a.checked_sub(b).unwrap(), dv("99.5"));
        assert_eq!(a.checked_mul(b).unwrap(), dv("75.1875"));
        assert_eq!(dv("1").checked_div(dv("4")).unwrap(), dv("0.25"));
    }

    #[test]
    fn test_checked_div_by_zero() {
        assert_eq!(
            dv("5").checked_div(DecimalValue::ZERO),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(
            dv("5").checked_div(dv("-0.000")),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_checked_mul_overflow() {
        let huge = DecimalValue::from_decimal(Decimal::MAX);
        assert_eq!(huge.checked_mul(dv("2")), Err(NumericError::Overflow));
        assert_eq!(huge.checked_add(huge), Err(NumericError::Overflow));
    }

    #[test]
    fn test_quantize_policies() {
        let x = dv("2.5");
        assert_eq!(x.quantize(0, RoundingPolicy::HalfUp).unwrap(), dv("3"));
        assert_eq!(x.quantize(0, RoundingPolicy::HalfEven).unwrap(), dv("2"));
        assert_eq!(
            x.quantize(0, RoundingPolicy::TruncateTowardZero).unwrap(),
            dv("2")
        );
        assert_eq!(
            dv("-2.5").quantize(0, RoundingPolicy::HalfUp).unwrap(),
            dv("-3")
        );
    }

    #[test]
    fn test_quantize_does_not_pad() {
        let x = dv("1.5").quantize(6, RoundingPolicy::HalfUp).unwrap();
        assert_eq!(x.scale(), 1);
        assert_eq!(
            dv("1").quantize(29, RoundingPolicy::HalfUp),
            Err(NumericError::ScaleTooLarge(29))
        );
    }

    #[test]
    fn test_comparison_ignores_scale() {
        assert_eq!(dv("1.000"), dv("1"));
        assert!(dv("-3") < dv("2.5"));
        assert_eq!(dv("-7.25").abs(), dv("7.25"));
    }

    #[test]
    fn test_display_is_plain() {
        assert_eq!(dv("1 000 000,50").to_string(), "1000000.50");
        assert_eq!(dv("-.5").to_string(), "-0.5");
    }

    #[test]
    fn test_decimal_conversions() {
        let d = Decimal::new(-12345, 3);
        let x = DecimalValue::from(d);
        assert_eq!(Decimal::from(x), d);
        assert_eq!(DecimalValue::from(42i64).to_string(), "42");
    }
}
