//! Amount allocation across ratios.
//!
//! Splits an amount so that the parts sum EXACTLY to the original (no cents
//! lost or gained):
//! 1. Floor each proportional share to the allocation unit
//! 2. Compute the remainder (amount - sum of floors)
//! 3. Hand the remainder out one unit at a time, in input order from the
//!    first share
//!
//! The remainder goes to the front of the list, not to the shares with the
//! largest fractional parts. Callers rely on this order.

use coinage_shared::{MoneyError, MoneyResult};
use rust_decimal::prelude::*;
use tracing::trace;

use super::Money;

impl Money {
    /// Allocates this amount across `ratios`.
    ///
    /// Returns one `Money` per ratio, in input order, whose amounts sum to
    /// this amount.
    ///
    /// # Errors
    ///
    /// Fails with [`MoneyError::InvalidRatios`] if `ratios` is empty,
    /// contains a negative ratio, or sums to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use coinage_core::Money;
    /// use coinage_shared::Currency;
    /// use rust_decimal::Decimal;
    ///
    /// let usd = Currency::new("USD", 100, "$").unwrap();
    /// let total = Money::from_units(100, usd);
    /// let parts = total.allocate(&[Decimal::ONE; 3]).unwrap();
    /// let units: Vec<i64> = parts.iter().map(|m| m.units().unwrap()).collect();
    /// assert_eq!(units, vec![34, 33, 33]);
    /// ```
    pub fn allocate(&self, ratios: &[Decimal]) -> MoneyResult<Vec<Self>> {
        let total = ratio_total(ratios)?;

        // Currency minor unit, or finer if the amount already carries more digits.
        let scale = self.amount.scale().max(self.currency.decimals());
        let unit = Decimal::new(1, scale);

        let mut shares = ratios
            .iter()
            .map(|ratio| {
                let exact = self.amount.checked_mul(*ratio)?.checked_div(total)?;
                Some(exact.round_dp_with_strategy(scale, RoundingStrategy::ToNegativeInfinity))
            })
            .collect::<Option<Vec<Decimal>>>()
            .ok_or_else(|| MoneyError::Overflow(format!("allocate {}", self.amount)))?;

        let allocated: Decimal = shares.iter().copied().sum();
        let remainder = self.amount - allocated;

        let units_to_distribute = (remainder / unit)
            .abs()
            .trunc()
            .to_usize()
            .ok_or_else(|| MoneyError::Overflow(format!("allocate remainder {remainder}")))?;
        let step = if remainder.is_sign_negative() { -unit } else { unit };

        trace!(
            currency = %self.currency,
            amount = %self.amount,
            ratios = ratios.len(),
            remainder = %remainder,
            "Allocating amount"
        );

        for i in 0..units_to_distribute {
            shares[i % ratios.len()] += step;
        }

        Ok(shares
            .into_iter()
            .map(|share| self.with_amount(share))
            .collect())
    }

    /// Allocates this amount equally across `count` parts.
    ///
    /// # Errors
    ///
    /// Fails with [`MoneyError::InvalidRatios`] if `count` is zero.
    pub fn allocate_to(&self, count: usize) -> MoneyResult<Vec<Self>> {
        if count == 0 {
            return Err(MoneyError::InvalidRatios(
                "cannot allocate to zero parts".to_string(),
            ));
        }
        self.allocate(&vec![Decimal::ONE; count])
    }
}

fn ratio_total(ratios: &[Decimal]) -> MoneyResult<Decimal> {
    if ratios.is_empty() {
        return Err(MoneyError::InvalidRatios("no ratios given".to_string()));
    }
    if let Some(negative) = ratios.iter().find(|r| r.is_sign_negative() && !r.is_zero()) {
        return Err(MoneyError::InvalidRatios(format!("ratio {negative} is negative")));
    }

    let total = ratios
        .iter()
        .try_fold(Decimal::ZERO, |acc, r| acc.checked_add(*r))
        .ok_or_else(|| MoneyError::InvalidRatios("ratios overflow".to_string()))?;
    if total.is_zero() {
        return Err(MoneyError::InvalidRatios(
            "ratios must sum to a positive total".to_string(),
        ));
    }
    Ok(total)
}
