//! Tie-breaking rules used when scaling money.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;

use crate::error::MoneyError;

/// How a value that falls exactly between two integers is rounded.
///
/// Values that are not ties always round to the nearest integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum RoundingMode {
    /// Ties round away from zero (2.5 -> 3, -2.5 -> -3).
    #[default]
    HalfUp,
    /// Ties round toward zero (2.5 -> 2, -2.5 -> -2).
    HalfDown,
    /// Ties round to the nearest even integer (2.5 -> 2, 3.5 -> 4).
    HalfEven,
    /// Ties round to the nearest odd integer (2.5 -> 3, 3.5 -> 3).
    HalfOdd,
}

impl RoundingMode {
    /// All supported modes.
    pub const ALL: [Self; 4] = [Self::HalfUp, Self::HalfDown, Self::HalfEven, Self::HalfOdd];

    /// Rounds `value` to an integer using this mode's tie-breaking rule.
    #[must_use]
    pub fn round(self, value: Decimal) -> Decimal {
        match self {
            Self::HalfUp => {
                value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            }
            Self::HalfDown => {
                value.round_dp_with_strategy(0, RoundingStrategy::MidpointTowardZero)
            }
            Self::HalfEven => {
                value.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
            }
            Self::HalfOdd => round_half_odd(value),
        }
    }

    /// Returns the canonical name, e.g. `HALF_UP`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HalfUp => "HALF_UP",
            Self::HalfDown => "HALF_DOWN",
            Self::HalfEven => "HALF_EVEN",
            Self::HalfOdd => "HALF_ODD",
        }
    }
}

// rust_decimal has no midpoint-to-odd strategy.
fn round_half_odd(value: Decimal) -> Decimal {
    let truncated = value.trunc();
    let fraction = (value - truncated).abs();
    if fraction != Decimal::new(5, 1) {
        return value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    }

    if (truncated % Decimal::TWO).is_zero() {
        let step = if value.is_sign_negative() {
            -Decimal::ONE
        } else {
            Decimal::ONE
        };
        truncated + step
    } else {
        truncated
    }
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoundingMode {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "HALF_UP" => Ok(Self::HalfUp),
            "HALF_DOWN" => Ok(Self::HalfDown),
            "HALF_EVEN" => Ok(Self::HalfEven),
            "HALF_ODD" => Ok(Self::HalfOdd),
            _ => Err(MoneyError::InvalidRoundingMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for RoundingMode {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
