//! Locale-style rendering using the currency's symbol and separators.

use rust_decimal::{Decimal, RoundingStrategy};
use thousands::{Separable, SeparatorPolicy, digits};

use super::Money;

impl Money {
    /// Renders the amount with the currency's separators and symbol.
    ///
    /// The amount is truncated to the currency's minor unit, like
    /// [`Money::units`], and shown with `log10(multiplier)` decimals. A
    /// negative amount puts the sign in front of the symbol.
    ///
    /// # Example
    ///
    /// ```
    /// use coinage_core::Money;
    /// use coinage_shared::Currency;
    ///
    /// let usd = Currency::new("USD", 100, "$").unwrap().with_symbol_first(true);
    /// assert_eq!(Money::from_units(5, usd.clone()).formatted(), "$0.05");
    /// assert_eq!(Money::from_units(-123_456_789, usd).formatted(), "-$1,234,567.89");
    /// ```
    #[must_use]
    pub fn formatted(&self) -> String {
        let currency = &self.currency;
        let decimals = currency.decimals();
        let truncated = self
            .amount
            .round_dp_with_strategy(decimals, RoundingStrategy::ToZero);

        let number = render_number(
            truncated.abs(),
            decimals,
            currency.decimal_separator(),
            currency.thousand_separator(),
        );
        let sign = if truncated.is_sign_negative() && !truncated.is_zero() {
            "-"
        } else {
            ""
        };

        if currency.symbol_first() {
            format!("{sign}{}{number}", currency.symbol())
        } else {
            format!("{sign}{number} {}", currency.symbol())
        }
    }
}

fn render_number(
    value: Decimal,
    decimals: u32,
    decimal_separator: char,
    thousand_separator: char,
) -> String {
    let plain = format!("{value:.prec$}", prec = decimals as usize);
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

    let separator = thousand_separator.to_string();
    let policy = SeparatorPolicy {
        separator: &separator,
        groups: &[3],
        digits: digits::ASCII_DECIMAL,
    };
    let grouped = whole.separate_by_policy(policy);

    if fraction.is_empty() {
        grouped
    } else {
        format!("{grouped}{decimal_separator}{fraction}")
    }
}
