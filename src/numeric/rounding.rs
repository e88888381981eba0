// ============================================================================
// Rounding Policy
// Selectable rounding rules for the final integer-rounding stage
// ============================================================================

use rust_decimal::RoundingStrategy;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounding rule applied when a value is quantized.
///
/// Intermediate quantization always uses [`RoundingPolicy::HalfUp`]; the other
/// policies are only offered at the integer-rounding stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingPolicy {
    /// Ties round away from zero (2.5 -> 3, -2.5 -> -3)
    #[default]
    HalfUp,
    /// Ties round to the even neighbour (2.5 -> 2, 3.5 -> 4)
    HalfEven,
    /// Drop the discarded digits (2.9 -> 2, -2.9 -> -2)
    TruncateTowardZero,
}

impl RoundingPolicy {
    /// Every policy, in the order a selection list presents them.
    pub const ALL: [RoundingPolicy; 3] = [
        RoundingPolicy::HalfUp,
        RoundingPolicy::HalfEven,
        RoundingPolicy::TruncateTowardZero,
    ];

    /// The backend strategy implementing this policy.
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingPolicy::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingPolicy::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingPolicy::TruncateTowardZero => RoundingStrategy::ToZero,
        }
    }

    /// Stable identifier used in configuration files and selection lists.
    pub const fn name(self) -> &'static str {
        match self {
            RoundingPolicy::HalfUp => "half-up",
            RoundingPolicy::HalfEven => "half-even",
            RoundingPolicy::TruncateTowardZero => "truncate",
        }
    }
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half-up" | "half_up" | "round-half-up" => Ok(RoundingPolicy::HalfUp),
            "half-even" | "half_even" | "round-half-to-even" | "bankers" => {
                Ok(RoundingPolicy::HalfEven)
            }
            "truncate" | "truncate-toward-zero" | "toward-zero" => {
                Ok(RoundingPolicy::TruncateTowardZero)
            }
            other => Err(format!("unknown rounding policy: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_mapping() {
        assert_eq!(
            RoundingPolicy::HalfUp.strategy(),
            RoundingStrategy::MidpointAwayFromZero
        );
        assert_eq!(
            RoundingPolicy::HalfEven.strategy(),
            RoundingStrategy::MidpointNearestEven
        );
        assert_eq!(
            RoundingPolicy::TruncateTowardZero.strategy(),
            RoundingStrategy::ToZero
        );
    }

    #[test]
    fn test_name_round_trip() {
        for policy in RoundingPolicy::ALL {
            assert_eq!(policy.name().parse::<RoundingPolicy>(), Ok(policy));
        }
        assert!("ceiling".parse::<RoundingPolicy>().is_err());
    }

    #[test]
    fn test_default_is_half_up() {
        assert_eq!(RoundingPolicy::default(), RoundingPolicy::HalfUp);
    }
}
