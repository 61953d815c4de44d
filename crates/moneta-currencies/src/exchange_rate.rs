//! Exchange rates and an in-memory rate registry.
//!
//! Rates here are plain decimals supplied by the caller; nothing is fetched
//! from anywhere. The registry exists so that a populated table can serve
//! as a [`Money::convert_with`] strategy.

use std::collections::HashMap;

use moneta_core::{ArithmeticError, Error, Result};
use rust_decimal::Decimal;

use crate::currency::Currency;
use crate::money::Money;

/// An exchange rate between two currencies.
#[derive(Debug, Clone)]
pub struct ExchangeRate {
    /// The source currency.
    pub source: &'static Currency,
    /// The target currency.
    pub target: &'static Currency,
    /// Rate: how many units of `target` one unit of `source` buys.
    pub rate: Decimal,
}

impl ExchangeRate {
    /// Create a new exchange rate.
    pub fn new(source: &'static Currency, target: &'static Currency, rate: Decimal) -> Self {
        Self {
            source,
            target,
            rate,
        }
    }

    /// Convert a monetary amount from `source` to `target` currency, or
    /// back from `target` to `source` at the inverse rate.
    ///
    /// # Errors
    ///
    /// [`Error::CurrencyMismatch`] when the amount is in neither currency.
    pub fn exchange(&self, amount: &Money) -> Result<Money> {
        if amount.currency() == self.source {
            amount.convert(self.target, self.rate)
        } else if amount.currency() == self.target {
            let inverse = invert(self.rate)?;
            amount.convert(self.source, inverse)
        } else {
            Err(Error::CurrencyMismatch {
                left: amount.currency().code,
                right: self.source.code,
            })
        }
    }

    /// The inverse rate (target → source).
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] for a zero rate.
    pub fn inverse(&self) -> Result<Self> {
        Ok(Self {
            source: self.target,
            target: self.source,
            rate: invert(self.rate)?,
        })
    }
}

fn invert(rate: Decimal) -> Result<Decimal> {
    if rate.is_zero() {
        return Err(ArithmeticError::DivisionByZero.into());
    }
    Ok(Decimal::ONE
        .checked_div(rate)
        .ok_or(ArithmeticError::Overflow)?)
}

/// A registry of exchange rates.
///
/// Stores direct rates and can chain through a common currency (typically
/// USD or EUR) to derive cross rates. Read-only once populated; safe to
/// share behind a shared reference across threads.
#[derive(Debug, Default)]
pub struct ExchangeRateManager {
    rates: HashMap<(&'static str, &'static str), ExchangeRate>,
}

impl ExchangeRateManager {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an exchange rate.
    pub fn add(&mut self, rate: ExchangeRate) {
        let key = (rate.source.code, rate.target.code);
        self.rates.insert(key, rate);
    }

    /// Look up a rate for `source → target`, searching direct rates,
    /// inverses, and one-hop cross rates through any common currency.
    ///
    /// # Errors
    ///
    /// [`Error::NoRate`] when no chain connects the pair.
    pub fn lookup(
        &self,
        source: &'static Currency,
        target: &'static Currency,
    ) -> Result<ExchangeRate> {
        if source == target {
            return Ok(ExchangeRate::new(source, target, Decimal::ONE));
        }

        if let Some(r) = self.rates.get(&(source.code, target.code)) {
            return Ok(r.clone());
        }
        if let Some(r) = self.rates.get(&(target.code, source.code)) {
            return r.inverse();
        }

        // One-hop cross: source → X → target.
        for rate_sx in self.rates.values() {
            let x = if rate_sx.source == source {
                rate_sx.target
            } else if rate_sx.target == source {
                rate_sx.source
            } else {
                continue;
            };

            let sx_rate = if rate_sx.source == source {
                rate_sx.rate
            } else {
                invert(rate_sx.rate)?
            };

            if let Some(rate_xt) = self.rates.get(&(x.code, target.code)) {
                let chained = sx_rate
                    .checked_mul(rate_xt.rate)
                    .ok_or(ArithmeticError::Overflow)?;
                return Ok(ExchangeRate::new(source, target, chained));
            }
            if let Some(rate_tx) = self.rates.get(&(target.code, x.code)) {
                let chained = sx_rate
                    .checked_mul(invert(rate_tx.rate)?)
                    .ok_or(ArithmeticError::Overflow)?;
                return Ok(ExchangeRate::new(source, target, chained));
            }
        }

        Err(Error::NoRate {
            from: source.code,
            to: target.code,
        })
    }

    /// Convert a monetary amount to the target currency.
    ///
    /// Suitable as a [`Money::convert_with`] strategy:
    /// `money.convert_with(|m| manager.convert(m, &EUR))`.
    pub fn convert(&self, amount: &Money, target: &'static Currency) -> Result<Money> {
        let rate = self.lookup(amount.currency(), target)?;
        rate.exchange(amount)
    }

    /// Remove all registered rates.
    pub fn clear(&mut self) {
        self.rates.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currencies::{EUR, GBP, JPY, USD};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn direct_exchange() {
        let rate = ExchangeRate::new(&USD, &EUR, dec("0.85"));
        let usd_100 = Money::parse("USD100").unwrap();
        let eur = rate.exchange(&usd_100).unwrap();
        assert_eq!(eur.currency(), &EUR);
        assert_eq!(eur.amount(), dec("85"));
    }

    #[test]
    fn reverse_exchange_uses_inverse_rate() {
        let rate = ExchangeRate::new(&USD, &EUR, dec("0.8"));
        let eur_80 = Money::parse("EUR80").unwrap();
        let usd = rate.exchange(&eur_80).unwrap();
        assert_eq!(usd.currency(), &USD);
        assert_eq!(usd.amount(), dec("100"));
    }

    #[test]
    fn exchange_rejects_unrelated_currency() {
        let rate = ExchangeRate::new(&USD, &EUR, dec("0.85"));
        let jpy = Money::parse("JPY100").unwrap();
        assert!(matches!(
            rate.exchange(&jpy),
            Err(Error::CurrencyMismatch { left: "JPY", .. })
        ));
    }

    #[test]
    fn inverse_swaps_currencies() {
        let rate = ExchangeRate::new(&USD, &EUR, dec("0.8"));
        let inv = rate.inverse().unwrap();
        assert_eq!(inv.source, &EUR);
        assert_eq!(inv.target, &USD);
        assert_eq!(inv.rate, dec("1.25"));
    }

    #[test]
    fn inverse_of_zero_rate_fails() {
        let rate = ExchangeRate::new(&USD, &EUR, Decimal::ZERO);
        assert_eq!(
            rate.inverse().unwrap_err(),
            Error::Arithmetic(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn manager_direct_and_inverse_lookup() {
        let mut mgr = ExchangeRateManager::new();
        mgr.add(ExchangeRate::new(&USD, &EUR, dec("0.8")));
        assert_eq!(mgr.lookup(&USD, &EUR).unwrap().rate, dec("0.8"));
        assert_eq!(mgr.lookup(&EUR, &USD).unwrap().rate, dec("1.25"));
    }

    #[test]
    fn manager_cross_rate_through_common_currency() {
        let mut mgr = ExchangeRateManager::new();
        mgr.add(ExchangeRate::new(&USD, &EUR, dec("0.8")));
        mgr.add(ExchangeRate::new(&USD, &GBP, dec("0.75")));
        // EUR → USD → GBP = 1.25 × 0.75
        let rate = mgr.lookup(&EUR, &GBP).unwrap();
        assert_eq!(rate.rate, dec("0.9375"));
    }

    #[test]
    fn manager_same_currency_is_identity() {
        let mgr = ExchangeRateManager::new();
        assert_eq!(mgr.lookup(&USD, &USD).unwrap().rate, Decimal::ONE);
    }

    #[test]
    fn manager_unknown_pair_reports_no_rate() {
        let mgr = ExchangeRateManager::new();
        assert_eq!(
            mgr.lookup(&USD, &JPY).unwrap_err(),
            Error::NoRate {
                from: "USD",
                to: "JPY",
            }
        );
    }

    #[test]
    fn manager_as_convert_with_strategy() {
        let mut mgr = ExchangeRateManager::new();
        mgr.add(ExchangeRate::new(&USD, &JPY, dec("110")));
        let usd = Money::parse("USD50").unwrap();
        let jpy = usd.convert_with(|m| mgr.convert(m, &JPY)).unwrap();
        assert_eq!(jpy.currency(), &JPY);
        assert_eq!(jpy.amount(), dec("5500"));
    }

    #[test]
    fn manager_clear_forgets_rates() {
        let mut mgr = ExchangeRateManager::new();
        mgr.add(ExchangeRate::new(&USD, &EUR, dec("0.8")));
        mgr.clear();
        assert!(mgr.lookup(&USD, &EUR).is_err());
    }
}
