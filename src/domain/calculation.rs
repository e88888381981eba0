// ============================================================================
// Calculation Domain Model
// ============================================================================

use crate::numeric::DecimalValue;
use std::fmt;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// Correlates the events emitted for one evaluation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculationId(Uuid);

impl CalculationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CalculationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CalculationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input field an operand came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperandSlot {
    A,
    B,
    C,
    D,
}

impl OperandSlot {
    pub const ALL: [OperandSlot; 4] = [OperandSlot::A, OperandSlot::B, OperandSlot::C, OperandSlot::D];
}

impl fmt::Display for OperandSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperandSlot::A => "A",
            OperandSlot::B => "B",
            OperandSlot::C => "C",
            OperandSlot::D => "D",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Successful result of one evaluation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationOutcome {
    /// Request identifier shared with the emitted events
    pub id: CalculationId,

    /// Final value after the last intermediate quantization
    pub value: DecimalValue,

    /// Value rendered by the configured display mode
    pub display: String,

    /// Integer-rounded rendering (expression variant only)
    pub rounded: Option<String>,
}

impl CalculationOutcome {
    pub fn new(id: CalculationId, value: DecimalValue, display: String) -> Self {
        Self {
            id,
            value,
            display,
            rounded: None,
        }
    }

    pub fn with_rounded(mut self, rounded: String) -> Self {
        self.rounded = Some(rounded);
        self
    }
}
