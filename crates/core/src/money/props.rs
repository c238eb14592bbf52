//! Property-based tests for money operations.
//!
//! - Property 1: Currency Mismatch Rejection
//! - Property 2: Arithmetic Identity
//! - Property 3: Rounding Stays Within Half A Unit
//! - Property 4: Allocation Sum Invariant
//! - Property 5: Minor Unit Round Trip

use std::sync::Arc;

use coinage_shared::{Currency, MoneyError, RoundingMode};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{Money, string_to_units};

fn usd() -> Arc<Currency> {
    Arc::new(Currency::new("USD", 100, "$").unwrap())
}

fn eur() -> Arc<Currency> {
    Arc::new(Currency::new("EUR", 100, "€").unwrap())
}

/// Strategy to generate signed amounts (-1,000,000.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate amounts with sub-cent digits.
fn fine_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000_000i64..100_000_000_000i64).prop_map(|v| Decimal::new(v, 5))
}

/// Strategy to generate non-negative ratio lists with a positive sum.
fn ratios() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(0u32..1_000, 1..12)
        .prop_filter("ratios must have a positive sum", |values| {
            values.iter().any(|v| *v > 0)
        })
        .prop_map(|values| values.into_iter().map(Decimal::from).collect())
}

/// Strategy to generate a rounding mode.
fn rounding_mode() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![
        Just(RoundingMode::HalfUp),
        Just(RoundingMode::HalfDown),
        Just(RoundingMode::HalfEven),
        Just(RoundingMode::HalfOdd),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Property 1: Currency Mismatch Rejection
    // =========================================================================

    /// *For any* two amounts in different currencies, add, subtract and
    /// compare SHALL fail with a currency mismatch.
    #[test]
    fn prop_mismatched_currencies_rejected(a in amount(), b in amount()) {
        let left = Money::from_decimal(a, usd());
        let right = Money::from_decimal(b, eur());

        let is_mismatch = |err: MoneyError| matches!(err, MoneyError::CurrencyMismatch { .. });
        prop_assert!(left.add(&right).is_err_and(is_mismatch));
        prop_assert!(left.subtract(&right).is_err_and(is_mismatch));
        prop_assert!(left.compare(&right).is_err_and(is_mismatch));
    }

    // =========================================================================
    // Property 2: Arithmetic Identity
    // =========================================================================

    /// *For any* amount, adding zero in the same currency SHALL return an
    /// equal amount.
    #[test]
    fn prop_adding_zero_is_identity(a in fine_amount()) {
        let money = Money::from_decimal(a, usd());
        let sum = money.add(&Money::zero(usd())).unwrap();
        prop_assert_eq!(sum, money);
    }

    /// *For any* two amounts, (a + b) - b SHALL equal a.
    #[test]
    fn prop_subtract_undoes_add(a in amount(), b in amount()) {
        let left = Money::from_decimal(a, usd());
        let right = Money::from_decimal(b, usd());
        let back = left.add(&right).unwrap().subtract(&right).unwrap();
        prop_assert_eq!(back, left);
    }

    // =========================================================================
    // Property 3: Rounding Stays Within Half A Unit
    // =========================================================================

    /// *For any* amount, factor and mode, the product SHALL be a whole number
    /// of cents no more than half a cent from the exact product.
    #[test]
    fn prop_multiply_within_half_cent(
        a in fine_amount(),
        factor in -1_000i64..1_000,
        mode in rounding_mode(),
    ) {
        let money = Money::from_decimal(a, usd());
        let result = money.multiply(factor, mode).unwrap();

        let exact = a * Decimal::from(factor);
        let cents = result.amount() * Decimal::ONE_HUNDRED;
        prop_assert_eq!(cents, cents.trunc(), "{} is not whole cents", result.amount());
        prop_assert!((result.amount() - exact).abs() <= Decimal::new(5, 3));
    }

    // =========================================================================
    // Property 4: Allocation Sum Invariant
    // =========================================================================

    /// *For any* amount and ratios with a positive sum, the allocated parts
    /// SHALL sum exactly to the original amount, one part per ratio.
    #[test]
    fn prop_allocation_conserves_amount(a in fine_amount(), ratios in ratios()) {
        let money = Money::from_decimal(a, usd());
        let parts = money.allocate(&ratios).unwrap();

        prop_assert_eq!(parts.len(), ratios.len());
        let sum: Decimal = parts.iter().map(Money::amount).sum();
        prop_assert_eq!(sum, a);
    }

    /// *For any* whole-cent amount, every allocated part SHALL be a whole
    /// number of cents.
    #[test]
    fn prop_allocation_parts_are_whole_cents(a in amount(), ratios in ratios()) {
        let money = Money::from_decimal(a, usd());
        for part in money.allocate(&ratios).unwrap() {
            let cents = part.amount() * Decimal::ONE_HUNDRED;
            prop_assert_eq!(cents, cents.trunc());
        }
    }

    // =========================================================================
    // Property 5: Minor Unit Round Trip
    // =========================================================================

    /// *For any* unit count, from_units then units SHALL return it unchanged.
    #[test]
    fn prop_units_round_trip(units in any::<i64>()) {
        prop_assert_eq!(Money::from_units(units, usd()).units().unwrap(), units);
    }

    /// *For any* cent count, its two-decimal text SHALL parse back to it.
    #[test]
    fn prop_string_to_units_reads_formatted_cents(cents in -100_000_000i64..100_000_000) {
        let text = Decimal::new(cents, 2).to_string();
        prop_assert_eq!(string_to_units(&text).unwrap(), cents);
    }
}
