//! Money value type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are held as `rust_decimal::Decimal` in major units (dollars, not
//! cents). Floats are accepted only at the boundary and converted once.
//!
//! Every operation returns a new `Money`; an existing value never changes.

mod allocation;
mod arithmetic;
mod conversion;
mod format;
mod operand;

#[cfg(test)]
mod props;
#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::sync::Arc;

use coinage_shared::{Currency, MoneyError, MoneyResult};
use rust_decimal::Decimal;

pub use conversion::string_to_units;
pub use operand::Operand;

/// A monetary amount bound to a currency.
#[derive(Debug, Clone)]
pub struct Money {
    amount: Decimal,
    currency: Arc<Currency>,
}

impl Money {
    /// Creates money from a fractional amount in major units.
    ///
    /// # Errors
    ///
    /// Fails with [`MoneyError::InvalidAmount`] if `amount` is integer-typed
    /// or not a finite number. Use [`Money::from_decimal`] or
    /// [`Money::from_units`] for exact inputs.
    ///
    /// # Example
    ///
    /// ```
    /// use coinage_core::Money;
    /// use coinage_shared::Currency;
    ///
    /// let usd = Currency::new("USD", 100, "$").unwrap();
    /// assert!(Money::new(5.25, usd.clone()).is_ok());
    /// assert!(Money::new(5, usd).is_err());
    /// ```
    pub fn new(
        amount: impl Into<Operand>,
        currency: impl Into<Arc<Currency>>,
    ) -> MoneyResult<Self> {
        let amount = amount.into().to_amount()?;
        Ok(Self::from_decimal(amount, currency))
    }

    /// Creates money from an exact decimal amount in major units.
    #[must_use]
    pub fn from_decimal(amount: Decimal, currency: impl Into<Arc<Currency>>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: impl Into<Arc<Currency>>) -> Self {
        Self::from_decimal(Decimal::ZERO, currency)
    }

    /// Amount in major units.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Currency of this amount.
    #[must_use]
    pub fn currency(&self) -> &Arc<Currency> {
        &self.currency
    }

    /// Returns true if both amounts use the same currency code.
    #[must_use]
    pub fn is_same_currency(&self, other: &Self) -> bool {
        self.currency == other.currency
    }

    /// Orders two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Fails with [`MoneyError::CurrencyMismatch`] if the currencies differ.
    pub fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Returns true if `self` is strictly greater than `other`.
    pub fn greater_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// Returns true if `self` is greater than or equal to `other`.
    pub fn greater_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    /// Returns true if `self` is strictly less than `other`.
    pub fn less_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// Returns true if `self` is less than or equal to `other`.
    pub fn less_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Returns true if the amount is strictly less than zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Returns the amount with its sign flipped.
    #[must_use]
    pub fn negate(&self) -> Self {
        self.with_amount(-self.amount)
    }

    /// Returns the absolute amount.
    #[must_use]
    pub fn abs(&self) -> Self {
        self.with_amount(self.amount.abs())
    }

    fn with_amount(&self, amount: Decimal) -> Self {
        Self {
            amount,
            currency: Arc::clone(&self.currency),
        }
    }

    fn ensure_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.is_same_currency(other) {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                left: self.currency.code().to_string(),
                right: other.currency.code().to_string(),
            })
        }
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_currency(other) && self.amount == other.amount
    }
}

impl Eq for Money {}

impl PartialOrd for Money {
    /// Returns `None` for amounts in different currencies.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}
