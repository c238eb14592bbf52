//! Numeric operands accepted at the money API boundary.

use std::str::FromStr;

use coinage_shared::{MoneyError, MoneyResult};
use rust_decimal::Decimal;

/// A number handed to money construction or scaling.
///
/// Keeps track of whether the caller supplied an integer or a fractional
/// value, because amounts must be fractional while scalars may be either.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// Integer-typed value.
    Integer(i64),
    /// Floating-point value.
    Float(f64),
    /// Exact decimal value.
    Decimal(Decimal),
}

impl Operand {
    /// Converts an operand used as a money amount.
    ///
    /// Integer operands are rejected: an amount must be written as a
    /// fractional value (`5.0`, not `5`).
    pub fn to_amount(self) -> MoneyResult<Decimal> {
        match self {
            Self::Integer(value) => Err(MoneyError::InvalidAmount(value.to_string())),
            Self::Float(value) => {
                float_to_decimal(value).ok_or_else(|| MoneyError::InvalidAmount(value.to_string()))
            }
            Self::Decimal(value) => Ok(value),
        }
    }

    /// Converts an operand used as a multiplier or divisor.
    pub fn to_scalar(self) -> MoneyResult<Decimal> {
        match self {
            Self::Integer(value) => Ok(Decimal::from(value)),
            Self::Float(value) => float_to_decimal(value).ok_or(MoneyError::InvalidOperand),
            Self::Decimal(value) => Ok(value),
        }
    }
}

// Goes through the shortest round-trip text so 5.999 stays 5.999 rather than
// the nearest binary fraction.
fn float_to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_str(&value.to_string()).ok()
}

macro_rules! integer_operand {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

integer_operand!(i8, i16, i32, i64, u8, u16, u32);

// Reads the f32's own shortest text; widening first gives 0.1f32 as
// 0.10000000149011612. Non-finite values stay floats and fail on conversion.
impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        match Decimal::from_str(&value.to_string()) {
            Ok(decimal) if value.is_finite() => Self::Decimal(decimal),
            _ => Self::Float(f64::from(value)),
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Decimal> for Operand {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}
