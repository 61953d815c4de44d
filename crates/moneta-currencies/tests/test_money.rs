//! Behavioral tests for the `Money` value type: parse/display round-trips,
//! arithmetic invariants, and currency-mismatch failures.

use std::str::FromStr;

use moneta_core::{ArithmeticError, Error, Rounding};
use moneta_currencies::currencies::{self, EUR, GBP, JPY, USD, XDR};
use moneta_currencies::{ExchangeRate, ExchangeRateManager, Money};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

#[test]
fn whole_dollar_amount_gains_canonical_cents() {
    let m = Money::parse("USD5").unwrap();
    assert_eq!(m.amount(), dec("5.00"));
    assert_eq!(m.amount().scale(), 2);
    assert_eq!(m.to_string(), "USD5.00");
}

#[test]
fn yen_with_fraction_needs_explicit_rounding() {
    assert!(matches!(
        Money::parse("JPY5.5"),
        Err(Error::Arithmetic(ArithmeticError::ExcessPrecision {
            digits: 1,
            scale: 0,
        }))
    ));
    let rounded = Money::parse_with("JPY5.5", Rounding::HalfEven).unwrap();
    assert_eq!(rounded.to_string(), "JPY6");
}

#[test]
fn special_drawing_rights_keep_parsed_scale() {
    for (text, scale) in [("XDR5", 0), ("XDR5.0", 1), ("XDR5.000000", 6)] {
        let m = Money::parse(text).unwrap();
        assert_eq!(m.currency(), &XDR, "{text}");
        assert_eq!(m.amount().scale(), scale, "{text}");
    }
}

#[test]
fn grammar_is_anchored_and_case_sensitive() {
    for text in ["US 5", "USD", "usd5", "5USD", "USD5 ", " USD5", "USDx"] {
        assert!(
            matches!(Money::parse(text), Err(Error::MalformedInput { .. })),
            "{text:?} should be malformed"
        );
    }
}

#[test]
fn unknown_code_is_distinct_from_malformed() {
    assert_eq!(
        Money::parse("QQQ1.00"),
        Err(Error::UnknownCurrency { code: "QQQ".into() })
    );
}

#[test]
fn every_fixed_scale_currency_round_trips_a_unit() {
    for currency in currencies::ALL {
        let Some(scale) = currency.canonical_scale() else {
            continue;
        };
        let m = Money::parse(&format!("{}1", currency.code)).unwrap();
        assert_eq!(m.amount().scale(), scale, "{}", currency.code);
        assert_eq!(Money::parse(&m.to_string()).unwrap(), m, "{}", currency.code);
    }
}

// ─── Arithmetic ──────────────────────────────────────────────────────────────

#[test]
fn cents_add_up_exactly() {
    let total = Money::parse("USD12.34")
        .unwrap()
        .add(&Money::parse("USD0.66").unwrap())
        .unwrap();
    assert_eq!(total.amount(), dec("13.00"));
    assert_eq!(total.currency(), &USD);
}

#[test]
fn negate_then_abs_is_never_negative() {
    let m = Money::parse("USD1").unwrap().negate().abs();
    assert_eq!(m.amount(), dec("1.00"));
    assert_eq!(m.currency(), &USD);
    assert!(!m.is_negative());
}

#[test]
fn mixing_currencies_always_fails() {
    let usd = Money::parse("USD1").unwrap();
    let eur = Money::parse("EUR1").unwrap();
    for result in [usd.add(&eur), usd.subtract(&eur), eur.add(&usd)] {
        assert!(matches!(result, Err(Error::CurrencyMismatch { .. })));
    }
    assert!(matches!(
        usd.try_cmp(&eur),
        Err(Error::CurrencyMismatch {
            left: "USD",
            right: "EUR",
        })
    ));
}

#[test]
fn cross_currency_values_are_unequal_not_ordered() {
    let usd = Money::parse("USD1").unwrap();
    let eur = Money::parse("EUR1").unwrap();
    assert_ne!(usd, eur);
    assert_eq!(usd.partial_cmp(&eur), None);
}

#[test]
fn exact_division_only_without_policy() {
    let m = Money::parse("USD1.00").unwrap();
    assert_eq!(m.divide(dec("8")).unwrap().amount(), dec("0.125"));
    assert_eq!(
        m.divide(dec("7")),
        Err(Error::Arithmetic(ArithmeticError::Inexact))
    );
    assert_eq!(
        m.divide_with(dec("7"), Rounding::HalfUp).unwrap().amount(),
        dec("0.14")
    );
}

#[test]
fn conversion_is_multiplication_under_target_currency() {
    let gbp = Money::parse("USD10.00")
        .unwrap()
        .convert(&GBP, dec("0.75"))
        .unwrap();
    assert_eq!(gbp.currency(), &GBP);
    assert_eq!(gbp.amount(), dec("7.5"));
}

#[test]
fn rate_registry_plugs_into_convert_with() {
    let mut rates = ExchangeRateManager::new();
    rates.add(ExchangeRate::new(&USD, &EUR, dec("0.9")));
    rates.add(ExchangeRate::new(&USD, &JPY, dec("110")));

    let eur = Money::parse("USD20.00")
        .unwrap()
        .convert_with(|m| rates.convert(m, &EUR))
        .unwrap();
    assert_eq!(eur.currency(), &EUR);
    assert_eq!(eur.amount(), dec("18"));

    // EUR → JPY resolves through the common USD leg.
    let jpy = eur.convert_with(|m| rates.convert(m, &JPY)).unwrap();
    assert_eq!(jpy.currency(), &JPY);
}

// ─── Properties ──────────────────────────────────────────────────────────────

fn usd(cents: i64) -> Money {
    Money::parse(&format!("USD{}", Decimal::new(cents, 2))).unwrap()
}

proptest! {
    #[test]
    fn canonical_text_round_trips(cents in -1_000_000_000_000i64..1_000_000_000_000) {
        let m = usd(cents);
        let reparsed = Money::parse(&m.to_string()).unwrap();
        prop_assert_eq!(reparsed, m);
    }

    #[test]
    fn add_then_subtract_is_identity(a in -1_000_000_000i64..1_000_000_000,
                                     b in -1_000_000_000i64..1_000_000_000) {
        let a = usd(a);
        let b = usd(b);
        let back = a.add(&b).unwrap().subtract(&b).unwrap();
        prop_assert_eq!(back, a);
    }

    #[test]
    fn negate_is_involutive(cents in -1_000_000_000i64..1_000_000_000) {
        let m = usd(cents);
        prop_assert_eq!(m.negate().negate(), m);
    }

    #[test]
    fn abs_is_idempotent_and_non_negative(cents in -1_000_000_000i64..1_000_000_000) {
        let m = usd(cents);
        let a = m.abs();
        prop_assert_eq!(a.abs(), a.clone());
        prop_assert!(!a.is_negative());
    }

    #[test]
    fn comparison_agrees_with_cents(a in -1_000_000i64..1_000_000,
                                    b in -1_000_000i64..1_000_000) {
        let ma = usd(a);
        let mb = usd(b);
        prop_assert_eq!(ma.try_cmp(&mb).unwrap(), a.cmp(&b));
    }
}

// ─── Serde (feature-gated) ───────────────────────────────────────────────────

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn money_serializes_as_canonical_text() {
        let m = Money::parse("USD12.34").unwrap();
        assert_eq!(serde_json::to_string(&m).unwrap(), "\"USD12.34\"");
        let back: Money = serde_json::from_str("\"USD12.34\"").unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn deserialize_rejects_bad_text() {
        assert!(serde_json::from_str::<Money>("\"usd5\"").is_err());
        assert!(serde_json::from_str::<Money>("\"ZZZ5\"").is_err());
    }

    #[test]
    fn currency_serializes_as_code() {
        assert_eq!(serde_json::to_string(&USD).unwrap(), "\"USD\"");
    }
}
