//! `Money` — an immutable, currency-aware monetary value.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use moneta_core::{ArithmeticError, Error, Result, Rounding};
use rust_decimal::Decimal;

use crate::currencies;
use crate::currency::Currency;
use crate::format::Locale;

/// An exact decimal amount tied to a currency.
///
/// `Money` is a value type: once constructed, neither currency nor amount
/// ever changes — every operation returns a new instance. Instances come
/// from the text [`parse`](Money::parse) entry points or from arithmetic on
/// existing values.
///
/// Equality is structural over (currency, amount) *including the amount's
/// scale*: `USD5.00` and an unscaled `5` in a sentinel-scale currency are
/// different values even when numerically equal.
///
/// # Examples
///
/// ```
/// use moneta_currencies::Money;
///
/// let price = Money::parse("USD12.34")?;
/// let tip = Money::parse("USD0.66")?;
/// let total = price.add(&tip)?;
/// assert_eq!(total.to_string(), "USD13.00");
/// # Ok::<(), moneta_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Money {
    currency: &'static Currency,
    amount: Decimal,
}

impl Money {
    /// Parses the canonical text form: three uppercase letters, optional
    /// whitespace, then a decimal literal (`USD12.34`, `JPY5`, `XDR 1.25`,
    /// exponent forms like `EUR1.2e3`).
    ///
    /// The parsed amount is rescaled to the currency's canonical fraction
    /// digits. This entry point is strict: an amount with more significant
    /// fractional digits than the currency allows is rejected with
    /// [`ArithmeticError::ExcessPrecision`] rather than rounded silently.
    /// Use [`parse_with`](Money::parse_with) to round under an explicit
    /// policy. Currencies reporting no canonical scale keep the parsed
    /// scale unchanged.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedInput`] for text that misses the grammar or
    ///   carries an invalid numeral, with the original text attached.
    /// - [`Error::UnknownCurrency`] for an unrecognized 3-letter code.
    /// - [`Error::Arithmetic`] when rescaling fails.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_inner(text, None)
    }

    /// Like [`parse`](Money::parse), but rounds excess fractional digits to
    /// the currency's canonical scale under the given policy.
    ///
    /// ```
    /// use moneta_core::Rounding;
    /// use moneta_currencies::Money;
    ///
    /// assert!(Money::parse("JPY5.5").is_err());
    /// let rounded = Money::parse_with("JPY5.5", Rounding::HalfEven)?;
    /// assert_eq!(rounded.to_string(), "JPY6");
    /// # Ok::<(), moneta_core::Error>(())
    /// ```
    pub fn parse_with(text: &str, rounding: Rounding) -> Result<Self> {
        Self::parse_inner(text, Some(rounding))
    }

    fn parse_inner(text: &str, rounding: Option<Rounding>) -> Result<Self> {
        let malformed = || Error::MalformedInput {
            text: text.to_string(),
        };
        let (code, numeral) = split_text(text).ok_or_else(malformed)?;
        let currency = currencies::from_code(code).ok_or_else(|| Error::UnknownCurrency {
            code: code.to_string(),
        })?;
        let amount = parse_numeral(numeral).ok_or_else(malformed)?;
        let amount = enforce_scale(amount, currency, rounding)?;
        Ok(Self { currency, amount })
    }

    /// The currency of this money.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// The amount of this money.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// `true` if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// `true` if the amount is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// `true` if the amount is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns this money with the amount negated.
    pub fn negate(&self) -> Self {
        Self {
            currency: self.currency,
            amount: -self.amount,
        }
    }

    /// Returns this money with the absolute amount.
    pub fn abs(&self) -> Self {
        Self {
            currency: self.currency,
            amount: self.amount.abs(),
        }
    }

    /// Adds another money of the same currency.
    ///
    /// # Errors
    ///
    /// [`Error::CurrencyMismatch`] for differing currencies (checked before
    /// any arithmetic), [`ArithmeticError::Overflow`] on decimal overflow.
    pub fn add(&self, that: &Self) -> Result<Self> {
        self.check_currency(that)?;
        let amount = self
            .amount
            .checked_add(that.amount)
            .ok_or(ArithmeticError::Overflow)?;
        Ok(Self {
            currency: self.currency,
            amount,
        })
    }

    /// Subtracts another money of the same currency.
    ///
    /// # Errors
    ///
    /// Same as [`add`](Money::add).
    pub fn subtract(&self, that: &Self) -> Result<Self> {
        self.check_currency(that)?;
        let amount = self
            .amount
            .checked_sub(that.amount)
            .ok_or(ArithmeticError::Overflow)?;
        Ok(Self {
            currency: self.currency,
            amount,
        })
    }

    /// Multiplies the amount by a scalar rate. The currency's canonical
    /// scale is not re-enforced; only parsing enforces scale.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::Overflow`] on decimal overflow.
    pub fn multiply(&self, rate: Decimal) -> Result<Self> {
        let amount = self
            .amount
            .checked_mul(rate)
            .ok_or(ArithmeticError::Overflow)?;
        Ok(Self {
            currency: self.currency,
            amount,
        })
    }

    /// Divides the amount by a scalar rate, requiring an exact quotient.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] for a zero rate,
    /// [`ArithmeticError::Inexact`] when the quotient has no exact decimal
    /// representation (e.g. dividing by 3) or only terminates beyond the
    /// supported 28 fractional digits.
    pub fn divide(&self, rate: Decimal) -> Result<Self> {
        let quotient = self.checked_quotient(rate)?;
        if !quotient_is_exact(quotient, rate, self.amount) {
            return Err(ArithmeticError::Inexact.into());
        }
        Ok(Self {
            currency: self.currency,
            amount: quotient,
        })
    }

    /// Divides the amount by a scalar rate, rounding the quotient to this
    /// amount's scale under the given policy.
    ///
    /// ```
    /// use moneta_core::Rounding;
    /// use moneta_currencies::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let m = Money::parse("USD10.00")?;
    /// let third = m.divide_with(Decimal::from(3), Rounding::HalfEven)?;
    /// assert_eq!(third.to_string(), "USD3.33");
    /// # Ok::<(), moneta_core::Error>(())
    /// ```
    pub fn divide_with(&self, rate: Decimal, rounding: Rounding) -> Result<Self> {
        let quotient = self.checked_quotient(rate)?;
        let scale = self.amount.scale();
        let mut amount = quotient.round_dp_with_strategy(scale, rounding.strategy());
        amount.rescale(scale);
        if amount.scale() != scale {
            return Err(ArithmeticError::Overflow.into());
        }
        Ok(Self {
            currency: self.currency,
            amount,
        })
    }

    /// The remainder of dividing the amount by a scalar rate.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] for a zero rate.
    pub fn remainder(&self, rate: Decimal) -> Result<Self> {
        if rate.is_zero() {
            return Err(ArithmeticError::DivisionByZero.into());
        }
        let amount = self
            .amount
            .checked_rem(rate)
            .ok_or(ArithmeticError::Overflow)?;
        Ok(Self {
            currency: self.currency,
            amount,
        })
    }

    /// Converts to a target currency at the given rate: the result carries
    /// `target` and amount × `rate`, at whatever scale the product has.
    pub fn convert(&self, target: &'static Currency, rate: Decimal) -> Result<Self> {
        let amount = self
            .amount
            .checked_mul(rate)
            .ok_or(ArithmeticError::Overflow)?;
        Ok(Self {
            currency: target,
            amount,
        })
    }

    /// Converts through a caller-supplied transform, so rate-lookup
    /// strategies stay pluggable without this type depending on any rate
    /// source (see [`crate::ExchangeRateManager`] for one such strategy).
    pub fn convert_with<F>(&self, rate: F) -> Result<Self>
    where
        F: FnOnce(&Self) -> Result<Self>,
    {
        rate(self)
    }

    /// Compares amounts of same-currency operands.
    ///
    /// # Errors
    ///
    /// [`Error::CurrencyMismatch`] for differing currencies: money is not
    /// totally ordered across currencies.
    pub fn try_cmp(&self, that: &Self) -> Result<Ordering> {
        self.check_currency(that)?;
        Ok(self.amount.cmp(&that.amount))
    }

    /// Formats for display in the given locale, using the currency's symbol
    /// and the locale's grouping and decimal separators. Display-only; this
    /// form does not round-trip through [`parse`](Money::parse).
    pub fn format(&self, locale: &Locale) -> String {
        crate::format::format(self, locale)
    }

    fn check_currency(&self, that: &Self) -> Result<()> {
        if self.currency == that.currency {
            Ok(())
        } else {
            Err(Error::CurrencyMismatch {
                left: self.currency.code,
                right: that.currency.code,
            })
        }
    }

    fn checked_quotient(&self, rate: Decimal) -> Result<Decimal> {
        if rate.is_zero() {
            return Err(ArithmeticError::DivisionByZero.into());
        }
        Ok(self
            .amount
            .checked_div(rate)
            .ok_or(ArithmeticError::Overflow)?)
    }
}

/// Splits `<3 uppercase letters><whitespace>*<numeral>`, anchored at both
/// ends. Returns `None` when the grammar does not match.
fn split_text(text: &str) -> Option<(&str, &str)> {
    let code = text.get(..3)?;
    if !code.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    let numeral = text[3..].trim_start_matches(|c: char| c.is_ascii_whitespace());
    if numeral.is_empty() {
        return None;
    }
    Some((code, numeral))
}

fn parse_numeral(s: &str) -> Option<Decimal> {
    // from_str handles plain literals; from_scientific covers exponents.
    Decimal::from_str(s)
        .ok()
        .or_else(|| Decimal::from_scientific(s).ok())
}

/// Rescales a parsed amount to the currency's canonical fraction digits.
/// Trailing zeros never count as excess precision; significant digits
/// beyond the canonical scale require an explicit rounding policy.
fn enforce_scale(
    amount: Decimal,
    currency: &Currency,
    rounding: Option<Rounding>,
) -> Result<Decimal> {
    let Some(scale) = currency.canonical_scale() else {
        return Ok(amount);
    };
    let significant = amount.normalize().scale();
    if significant > scale {
        match rounding {
            Some(policy) => {
                let rounded = amount.round_dp_with_strategy(scale, policy.strategy());
                rescale_exact(rounded, scale)
            }
            None => Err(ArithmeticError::ExcessPrecision {
                digits: significant,
                scale,
            }
            .into()),
        }
    } else {
        rescale_exact(amount, scale)
    }
}

/// Maximum fractional digits a `Decimal` can carry.
const MAX_SCALE: u32 = 28;

/// A non-terminating division is cut off at `Decimal`'s 28-digit capacity,
/// so a quotient whose normalized scale saturates that capacity was
/// truncated, not exact. Shorter quotients are verified by multiplying
/// back: an exact division makes the true product the dividend itself,
/// which is representable, so `checked_mul` reproduces it without rounding.
fn quotient_is_exact(quotient: Decimal, rate: Decimal, dividend: Decimal) -> bool {
    let significant = quotient.normalize();
    if significant.scale() >= MAX_SCALE {
        return false;
    }
    significant
        .checked_mul(rate)
        .is_some_and(|product| product == dividend)
}

fn rescale_exact(amount: Decimal, scale: u32) -> Result<Decimal> {
    let mut rescaled = amount;
    rescaled.rescale(scale);
    // rescale leaves the value at a smaller scale when padding would
    // overflow the 96-bit mantissa.
    if rescaled.scale() != scale {
        return Err(ArithmeticError::Overflow.into());
    }
    Ok(rescaled)
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.currency == other.currency
            && self.amount == other.amount
            && self.amount.scale() == other.amount.scale()
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.currency.code.hash(state);
        // Decimal hashes its normalized value, so scale-equal values hash
        // alike and this stays consistent with the stricter Eq above.
        self.amount.hash(state);
    }
}

impl PartialOrd for Money {
    /// `None` across currencies; amount order within a currency.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl fmt::Display for Money {
    /// The canonical text form: ISO code immediately followed by the
    /// full-scale amount, e.g. `USD12.34`. Round-trips through `parse`
    /// whenever the amount sits at the currency's canonical scale.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency.code, self.amount)
    }
}

impl FromStr for Money {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Money {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Money {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
