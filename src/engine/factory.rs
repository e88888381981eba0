// ============================================================================
// Calculator Factory
// Creates calculators with validated configuration
// ============================================================================

use crate::domain::config::{CalculatorConfig, ConfigError, DisplayMode, EmptyInputPolicy};
use crate::engine::Calculator;
use crate::interfaces::EventHandler;
use crate::numeric::RoundingPolicy;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `event_handler` - Event handler for calculation events
///
/// # Returns
/// * `Result<Calculator, ConfigError>` - Configured calculator or error
///
/// # Example
/// ```
/// use decimal_calc::prelude::*;
/// use decimal_calc::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::expression();
/// let calculator = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Calculator, ConfigError> {
    tracing::debug!(variant = ?config.variant, "creating calculator");

    // Calculator::new validates before building its stages
    Calculator::new(config, event_handler)
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use decimal_calc::prelude::*;
/// use std::sync::Arc;
///
/// let calculator = CalculatorBuilder::expression()
///     .empty_input_as_zero()
///     .with_intermediate_scale(12)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// assert_eq!(calculator.config().intermediate_scale, 12);
/// ```
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Start from a configuration
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Two-operand calculator preset
    pub fn two_operand() -> Self {
        Self::new(CalculatorConfig::two_operand())
    }

    /// Four-operand expression preset
    pub fn expression() -> Self {
        Self::new(CalculatorConfig::expression())
    }

    /// Fixed six-digit display preset
    pub fn fixed_display() -> Self {
        Self::new(CalculatorConfig::fixed_display())
    }

    // ========================================================================
    // Input Handling
    // ========================================================================

    /// Reject empty fields (default)
    pub fn reject_empty_input(mut self) -> Self {
        self.config.empty_input = EmptyInputPolicy::Reject;
        self
    }

    /// Read empty fields as zero
    pub fn empty_input_as_zero(mut self) -> Self {
        self.config.empty_input = EmptyInputPolicy::TreatAsZero;
        self
    }

    /// Quantize literals to `scale` digits on entry
    pub fn with_parse_scale(mut self, scale: u32) -> Self {
        self.config.parse_scale = Some(scale);
        self
    }

    /// Keep every digit the user typed
    pub fn full_precision_input(mut self) -> Self {
        self.config.parse_scale = None;
        self
    }

    // ========================================================================
    // Arithmetic and Output
    // ========================================================================

    /// Set the intermediate scale
    pub fn with_intermediate_scale(mut self, scale: u32) -> Self {
        self.config.intermediate_scale = scale;
        self
    }

    /// Trim trailing fractional zeros (default)
    pub fn trimmed_display(mut self) -> Self {
        self.config.display_mode = DisplayMode::Trimmed;
        self
    }

    /// Always show six fractional digits
    pub fn padded_display(mut self) -> Self {
        self.config.display_mode = DisplayMode::Padded;
        self
    }

    /// Set the default integer-rounding policy
    pub fn with_rounding_policy(mut self, policy: RoundingPolicy) -> Self {
        self.config.rounding_policy = policy;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the calculator
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<Calculator, ConfigError> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::two_operand()
    }
}
