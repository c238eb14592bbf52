//! Currency-checked addition and rounding-aware scaling.
//!
//! Scaled results are rounded to a whole number of minor units, so a USD
//! amount keeps two decimals and a JPY amount none.

use coinage_shared::{MoneyError, MoneyResult, RoundingMode};
use rust_decimal::Decimal;

use super::{Money, Operand};

impl Money {
    /// Adds two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Fails with [`MoneyError::CurrencyMismatch`] if the currencies differ.
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        let sum = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| overflow("add", self.amount, other.amount))?;
        Ok(self.with_amount(sum))
    }

    /// Subtracts `other` from `self`.
    ///
    /// # Errors
    ///
    /// Fails with [`MoneyError::CurrencyMismatch`] if the currencies differ.
    pub fn subtract(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        let difference = self
            .amount
            .checked_sub(other.amount)
            .ok_or_else(|| overflow("subtract", self.amount, other.amount))?;
        Ok(self.with_amount(difference))
    }

    /// Multiplies by a scalar and rounds to the currency's minor unit.
    ///
    /// # Example
    ///
    /// ```
    /// use coinage_core::Money;
    /// use coinage_shared::{Currency, RoundingMode};
    ///
    /// let jpy = Currency::new("JPY", 1, "¥").unwrap();
    /// let price = Money::new(2.5, jpy).unwrap();
    /// let rounded = price.multiply(1, RoundingMode::HalfEven).unwrap();
    /// assert_eq!(rounded.amount(), rust_decimal::Decimal::from(2));
    /// ```
    pub fn multiply(
        &self,
        multiplier: impl Into<Operand>,
        mode: RoundingMode,
    ) -> MoneyResult<Self> {
        let factor = multiplier.into().to_scalar()?;
        let product = self
            .amount
            .checked_mul(factor)
            .ok_or_else(|| overflow("multiply", self.amount, factor))?;
        Ok(self.with_amount(self.round_to_minor_unit(product, mode)?))
    }

    /// Multiplies by a scalar using [`RoundingMode::HalfUp`].
    pub fn multiply_default(&self, multiplier: impl Into<Operand>) -> MoneyResult<Self> {
        self.multiply(multiplier, RoundingMode::default())
    }

    /// Divides by a scalar and rounds to the currency's minor unit.
    ///
    /// # Errors
    ///
    /// Fails with [`MoneyError::DivisionByZero`] for a zero divisor and with
    /// [`MoneyError::InvalidOperand`] for a non-finite one.
    pub fn divide(&self, divisor: impl Into<Operand>, mode: RoundingMode) -> MoneyResult<Self> {
        let divisor = divisor.into().to_scalar()?;
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let quotient = self
            .amount
            .checked_div(divisor)
            .ok_or_else(|| overflow("divide", self.amount, divisor))?;
        Ok(self.with_amount(self.round_to_minor_unit(quotient, mode)?))
    }

    /// Divides by a scalar using [`RoundingMode::HalfUp`].
    pub fn divide_default(&self, divisor: impl Into<Operand>) -> MoneyResult<Self> {
        self.divide(divisor, RoundingMode::default())
    }

    fn round_to_minor_unit(&self, value: Decimal, mode: RoundingMode) -> MoneyResult<Decimal> {
        let multiplier = Decimal::from(self.currency.multiplier());
        let minor = value
            .checked_mul(multiplier)
            .ok_or_else(|| overflow("scale", value, multiplier))?;
        let rounded = mode.round(minor);
        rounded
            .checked_div(multiplier)
            .ok_or_else(|| overflow("scale", rounded, multiplier))
    }
}

fn overflow(op: &str, left: Decimal, right: Decimal) -> MoneyError {
    MoneyError::Overflow(format!("{op} {left} by {right}"))
}
