//! Error types for money operations.
//!
//! Every failure is an invalid-argument failure: the caller handed an
//! operation something that breaks its contract. Variants exist so callers
//! can tell which contract was broken without parsing messages.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Broad classification of a [`MoneyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The operation was called with an argument that violates its contract.
    InvalidArgument,
}

/// Errors raised by money construction, arithmetic and conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Amount is not a decimal or floating-point value.
    #[error("Amount should be a float: {0}")]
    InvalidAmount(String),

    /// Both operands must share a currency.
    #[error("Different currencies: {left} and {right}")]
    CurrencyMismatch {
        /// Currency code of the receiver.
        left: String,
        /// Currency code of the argument.
        right: String,
    },

    /// Scalar operand is not numeric.
    #[error("Operand should be an integer or a float")]
    InvalidOperand,

    /// Rounding mode is not one of the supported modes.
    #[error("Rounding mode should be HALF_UP, HALF_DOWN, HALF_EVEN or HALF_ODD, got {0:?}")]
    InvalidRoundingMode(String),

    /// Text does not have the shape of a two-decimal amount.
    #[error("Invalid amount format: {0:?}")]
    InvalidFormat(String),

    /// Ratio list cannot be used for allocation.
    #[error("Invalid allocation ratios: {0}")]
    InvalidRatios(String),

    /// Currency metadata is malformed or the code is unusable.
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    /// Divisor is zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// Result does not fit the target representation.
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
}

impl MoneyError {
    /// Returns the broad kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }

    /// Returns a stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::InvalidOperand => "INVALID_OPERAND",
            Self::InvalidRoundingMode(_) => "INVALID_ROUNDING_MODE",
            Self::InvalidFormat(_) => "INVALID_FORMAT",
            Self::InvalidRatios(_) => "INVALID_RATIOS",
            Self::InvalidCurrency(_) => "INVALID_CURRENCY",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::Overflow(_) => "OVERFLOW",
        }
    }
}
