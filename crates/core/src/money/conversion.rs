//! Minor-unit conversion and parsing of two-decimal amount strings.

use std::sync::Arc;

use coinage_shared::{Currency, MoneyError, MoneyResult};
use rust_decimal::prelude::*;

use super::Money;

/// Fixed scale used by [`string_to_units`], independent of any currency.
const STRING_UNIT_DECIMALS: u32 = 2;

impl Money {
    /// Creates money from a count of minor units.
    ///
    /// `Money::from_units(5, usd)` is five cents.
    #[must_use]
    pub fn from_units(units: i64, currency: impl Into<Arc<Currency>>) -> Self {
        let currency = currency.into();
        let amount = Decimal::new(units, currency.decimals());
        Self { amount, currency }
    }

    /// Returns the amount as a count of minor units, truncated toward zero.
    ///
    /// # Errors
    ///
    /// Fails with [`MoneyError::Overflow`] if the count does not fit an `i64`.
    pub fn units(&self) -> MoneyResult<i64> {
        self.amount
            .checked_mul(Decimal::from(self.currency.multiplier()))
            .and_then(|minor| minor.trunc().to_i64())
            .ok_or_else(|| {
                MoneyError::Overflow(format!("{} {} in minor units", self.amount, self.currency))
            })
    }

    /// Parses a two-decimal amount string into hundredths.
    ///
    /// See [`string_to_units`].
    pub fn string_to_units(text: &str) -> MoneyResult<i64> {
        string_to_units(text)
    }
}

/// Parses text such as `-12.3`, `42` or `7,05` into hundredths.
///
/// Accepted shape: an optional `-`, one or more digits, then optionally a
/// `.` or `,` followed by at most two digits. Missing fractional digits
/// count as zero, so `-12.3` is `-1230`. The scale is always two decimals,
/// whatever the currency.
///
/// # Errors
///
/// Fails with [`MoneyError::InvalidFormat`] if the text does not have that
/// shape and with [`MoneyError::Overflow`] if it does not fit an `i64`.
pub fn string_to_units(text: &str) -> MoneyResult<i64> {
    let invalid = || MoneyError::InvalidFormat(text.to_string());

    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (whole, fraction) = match unsigned.find(['.', ',']) {
        Some(idx) => (&unsigned[..idx], &unsigned[idx + 1..]),
        None => (unsigned, ""),
    };

    if whole.is_empty()
        || fraction.len() > STRING_UNIT_DECIMALS as usize
        || !whole.bytes().all(|b| b.is_ascii_digit())
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let overflow = || MoneyError::Overflow(format!("{text:?} in hundredths"));
    let mut digits = whole.bytes().chain(
        fraction
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(STRING_UNIT_DECIMALS as usize),
    );
    // Accumulate with the sign applied so i64::MIN is reachable.
    let sign = if negative { -1 } else { 1 };
    digits
        .try_fold(0i64, |acc, b| {
            acc.checked_mul(10)?.checked_add(sign * i64::from(b - b'0'))
        })
        .ok_or_else(overflow)
}
