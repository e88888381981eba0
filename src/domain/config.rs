// ============================================================================
// Calculator Configuration
// Precision, input leniency and display settings for one calculator variant
// ============================================================================

use crate::numeric::{DecimalValue, RoundingPolicy};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fractional digits shown by the display formatter.
pub const DISPLAY_SCALE: u32 = 6;

/// Fractional digits kept after each operation in the expression variant.
pub const EXPRESSION_INTERMEDIATE_SCALE: u32 = 10;

// ============================================================================
// Calculator Variant
// ============================================================================

/// Which front end the configuration serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculatorVariant {
    /// A op B
    TwoOperand,

    /// A op1 (B op2 C) op3 D, plus an integer-rounded result
    Expression,

    /// A op B shown with exactly six fractional digits
    FixedDisplay,
}

// ============================================================================
// Input and Display Switches
// ============================================================================

/// What an empty (or all-whitespace) input field means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EmptyInputPolicy {
    /// Report `EmptyInput`
    #[default]
    Reject,

    /// Read the field as zero
    TreatAsZero,
}

/// How results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DisplayMode {
    /// Six digits, trailing zeros and dangling separator removed
    #[default]
    Trimmed,

    /// Always exactly six fractional digits
    Padded,
}

// ============================================================================
// Configuration Errors
// ============================================================================

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("intermediate scale {0} exceeds the maximum of 28 fractional digits")]
    IntermediateScaleTooLarge(u32),

    #[error("parse scale {0} exceeds the maximum of 28 fractional digits")]
    ParseScaleTooLarge(u32),

    #[error("intermediate scale {0} is coarser than the 6-digit display")]
    IntermediateScaleTooSmall(u32),
}

// ============================================================================
// Complete Calculator Configuration
// ============================================================================

/// Explicit precision and leniency settings threaded into the parser,
/// evaluator and formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Front end this configuration was made for
    pub variant: CalculatorVariant,

    /// Meaning of an empty input field
    pub empty_input: EmptyInputPolicy,

    /// Optional: quantize literals (half-up) to this many fractional digits
    /// at parse time. None keeps every digit the user typed.
    pub parse_scale: Option<u32>,

    /// Fractional digits kept (half-up) after every binary operation
    pub intermediate_scale: u32,

    /// Result rendering
    pub display_mode: DisplayMode,

    /// Integer-rounding policy used when the caller does not pick one
    pub rounding_policy: RoundingPolicy,
}

impl CalculatorConfig {
    /// Create a new configuration with strict defaults
    pub fn new(variant: CalculatorVariant) -> Self {
        Self {
            variant,
            empty_input: EmptyInputPolicy::Reject,
            parse_scale: None,
            intermediate_scale: DISPLAY_SCALE,
            display_mode: DisplayMode::Trimmed,
            rounding_policy: RoundingPolicy::HalfUp,
        }
    }

    /// Builder method: Set the empty-input policy
    pub fn with_empty_input(mut self, policy: EmptyInputPolicy) -> Self {
        self.empty_input = policy;
        self
    }

    /// Builder method: Quantize literals at parse time
    pub fn with_parse_scale(mut self, scale: u32) -> Self {
        self.parse_scale = Some(scale);
        self
    }

    /// Builder method: Keep full literal precision until formatting
    pub fn without_parse_scale(mut self) -> Self {
        self.parse_scale = None;
        self
    }

    /// Builder method: Set the intermediate scale
    pub fn with_intermediate_scale(mut self, scale: u32) -> Self {
        self.intermediate_scale = scale;
        self
    }

    /// Builder method: Set the display mode
    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    /// Builder method: Set the default rounding policy
    pub fn with_rounding_policy(mut self, policy: RoundingPolicy) -> Self {
        self.rounding_policy = policy;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.intermediate_scale > DecimalValue::MAX_SCALE {
            return Err(ConfigError::IntermediateScaleTooLarge(
                self.intermediate_scale,
            ));
        }

        // Must be at least display precision
        if self.intermediate_scale < DISPLAY_SCALE {
            return Err(ConfigError::IntermediateScaleTooSmall(
                self.intermediate_scale,
            ));
        }

        if let Some(scale) = self.parse_scale {
            if scale > DecimalValue::MAX_SCALE {
                return Err(ConfigError::ParseScaleTooLarge(scale));
            }
        }

        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::two_operand()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Two-operand calculator
    /// - Empty fields are an error
    /// - Literals keep full precision
    /// - Results quantized straight to display precision, trimmed
    pub fn two_operand() -> Self {
        Self::new(CalculatorVariant::TwoOperand)
    }

    /// Four-operand expression calculator
    /// - Empty fields are an error
    /// - Literals keep full precision
    /// - Ten-digit intermediate precision, trimmed display
    pub fn expression() -> Self {
        Self::new(CalculatorVariant::Expression)
            .with_intermediate_scale(EXPRESSION_INTERMEDIATE_SCALE)
    }

    /// Fixed six-digit display calculator
    /// - Empty fields read as zero
    /// - Literals quantized to six digits on entry
    /// - Padded display
    pub fn fixed_display() -> Self {
        Self::new(CalculatorVariant::FixedDisplay)
            .with_empty_input(EmptyInputPolicy::TreatAsZero)
            .with_parse_scale(DISPLAY_SCALE)
            .with_display_mode(DisplayMode::Padded)
    }
}
