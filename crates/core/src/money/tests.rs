//! Behaviour tests for the money value type.

use std::cmp::Ordering;
use std::sync::Arc;

use coinage_shared::{Currency, MoneyError, RoundingMode};
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::Money;

fn usd() -> Arc<Currency> {
    Arc::new(
        Currency::new("USD", 100, "$")
            .unwrap()
            .with_separators('.', ',')
            .with_symbol_first(true),
    )
}

fn eur() -> Arc<Currency> {
    Arc::new(Currency::new("EUR", 100, "€").unwrap().with_separators(',', '.'))
}

fn jpy() -> Arc<Currency> {
    Arc::new(Currency::new("JPY", 1, "¥").unwrap().with_symbol_first(true))
}

// =========================================================================
// Construction and invariants
// =========================================================================

#[test]
fn test_new_accepts_floats_and_rejects_integers() {
    let money = Money::new(10.5, usd()).unwrap();
    assert_eq!(money.amount(), dec!(10.5));
    assert_eq!(money.currency().code(), "USD");

    assert_eq!(
        Money::new(10, usd()).unwrap_err(),
        MoneyError::InvalidAmount("10".into())
    );
    assert!(Money::new(f64::NAN, usd()).is_err());
}

#[test]
fn test_new_accepts_decimal() {
    let money = Money::new(dec!(19.99), usd()).unwrap();
    assert_eq!(money.amount(), dec!(19.99));
}

#[test]
fn test_new_accepts_owned_currency() {
    let chf = Currency::new("CHF", 100, "Fr.").unwrap();
    let money = Money::new(1.0, chf).unwrap();
    assert_eq!(money.currency().code(), "CHF");
}

#[test]
fn test_zero() {
    let money = Money::zero(usd());
    assert!(money.is_zero());
    assert!(!money.is_positive());
    assert!(!money.is_negative());
}

#[rstest]
#[case(dec!(0.01), false, true, false)]
#[case(dec!(-0.01), false, false, true)]
#[case(dec!(0), true, false, false)]
#[case(dec!(-0.00), true, false, false)]
fn test_sign_predicates(
    #[case] amount: Decimal,
    #[case] zero: bool,
    #[case] positive: bool,
    #[case] negative: bool,
) {
    let money = Money::from_decimal(amount, usd());
    assert_eq!(money.is_zero(), zero);
    assert_eq!(money.is_positive(), positive);
    assert_eq!(money.is_negative(), negative);
}

#[test]
fn test_same_currency_by_code() {
    let a = Money::from_decimal(dec!(1), usd());
    let b = Money::from_decimal(dec!(2), Currency::new("usd", 1, "US$").unwrap());
    let c = Money::from_decimal(dec!(1), eur());
    assert!(a.is_same_currency(&b));
    assert!(!a.is_same_currency(&c));
}

#[test]
fn test_equality() {
    let a = Money::from_decimal(dec!(5.0), usd());
    assert_eq!(a, Money::from_decimal(dec!(5.00), usd()));
    assert_ne!(a, Money::from_decimal(dec!(5.01), usd()));
    assert_ne!(a, Money::from_decimal(dec!(5.0), eur()));
}

#[test]
fn test_compare() {
    let small = Money::from_decimal(dec!(1.99), usd());
    let large = Money::from_decimal(dec!(2.00), usd());

    assert_eq!(small.compare(&large).unwrap(), Ordering::Less);
    assert_eq!(large.compare(&small).unwrap(), Ordering::Greater);
    assert_eq!(small.compare(&small.clone()).unwrap(), Ordering::Equal);

    assert!(large.greater_than(&small).unwrap());
    assert!(!small.greater_than(&large).unwrap());
    assert!(small.less_than(&large).unwrap());
    assert!(small.less_than_or_equal(&small).unwrap());
    assert!(large.greater_than_or_equal(&small).unwrap());
    assert!(small < large);
}

#[test]
fn test_compare_rejects_other_currency() {
    let a = Money::from_decimal(dec!(1), usd());
    let b = Money::from_decimal(dec!(1), eur());
    assert!(matches!(a.compare(&b), Err(MoneyError::CurrencyMismatch { .. })));
    assert!(a.greater_than(&b).is_err());
    assert!(a.less_than(&b).is_err());
    assert_eq!(a.partial_cmp(&b), None);
}

#[test]
fn test_negate_and_abs() {
    let money = Money::from_decimal(dec!(-3.50), usd());
    assert_eq!(money.negate().amount(), dec!(3.50));
    assert_eq!(money.abs().amount(), dec!(3.50));
    assert_eq!(money.amount(), dec!(-3.50));
}

// =========================================================================
// Arithmetic
// =========================================================================

#[test]
fn test_adding_zero_is_identity() {
    let a = Money::new(12.34, usd()).unwrap();
    let zero = Money::new(0.0, Arc::clone(a.currency())).unwrap();
    assert_eq!(a.add(&zero).unwrap(), a);
}

#[rstest]
#[case(RoundingMode::HalfUp, dec!(3))]
#[case(RoundingMode::HalfDown, dec!(2))]
#[case(RoundingMode::HalfEven, dec!(2))]
#[case(RoundingMode::HalfOdd, dec!(3))]
fn test_rounding_at_ties(#[case] mode: RoundingMode, #[case] expected: Decimal) {
    let money = Money::new(2.5, jpy()).unwrap();
    assert_eq!(money.multiply(1, mode).unwrap().amount(), expected);
}

#[test]
fn test_rounding_mode_from_text() {
    let money = Money::new(2.5, jpy()).unwrap();
    let mode: RoundingMode = "HALF_EVEN".parse().unwrap();
    assert_eq!(money.multiply(1, mode).unwrap().amount(), dec!(2));

    let err = "HALF_SIDEWAYS".parse::<RoundingMode>().unwrap_err();
    assert_eq!(err.error_code(), "INVALID_ROUNDING_MODE");
}

// =========================================================================
// Allocation
// =========================================================================

#[test]
fn test_allocate_hundred_units_three_ways() {
    let money = Money::from_units(100, usd());
    let parts = money.allocate(&[dec!(1), dec!(1), dec!(1)]).unwrap();
    let units: Vec<i64> = parts.iter().map(|p| p.units().unwrap()).collect();
    assert_eq!(units, vec![34, 33, 33]);
}

#[test]
fn test_allocate_whole_yen() {
    let money = Money::from_decimal(dec!(100), jpy());
    let parts = money.allocate(&[dec!(1), dec!(1), dec!(1)]).unwrap();
    let amounts: Vec<Decimal> = parts.iter().map(Money::amount).collect();
    assert_eq!(amounts, vec![dec!(34), dec!(33), dec!(33)]);
    assert!(parts.iter().all(|p| p.currency().code() == "JPY"));
}

// =========================================================================
// Conversion
// =========================================================================

#[test]
fn test_units_truncation() {
    assert_eq!(Money::new(5.999, usd()).unwrap().units().unwrap(), 599);
}

#[test]
fn test_string_to_units_boundaries() {
    assert_eq!(Money::string_to_units("-12.3").unwrap(), -1230);
    assert_eq!(Money::string_to_units("42").unwrap(), 4200);
    assert_eq!(
        Money::string_to_units("forty-two").unwrap_err().error_code(),
        "INVALID_FORMAT"
    );
}

#[test]
fn test_parsed_units_round_trip_through_formatting() {
    let units = Money::string_to_units("-1234,5").unwrap();
    assert_eq!(Money::from_units(units, usd()).formatted(), "-$1,234.50");
    assert_eq!(Money::from_units(units, eur()).formatted(), "-1.234,50 €");
}

#[test]
fn test_formatting_five_cents() {
    assert_eq!(Money::from_units(5, usd()).formatted(), "$0.05");
    assert_eq!(Money::from_units(5, usd()).to_string(), "$0.05");
}
