//! # moneta-currencies
//!
//! ISO 4217 currency metadata, the [`Money`] value type, exchange rates,
//! and locale-aware display formatting.
//!
//! [`Money`] is an immutable pairing of a currency with an exact decimal
//! amount. It parses from the canonical `<CODE><amount>` text form, does
//! checked arithmetic that refuses to mix currencies, and formats either
//! canonically (round-trippable) or per locale (display only).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Currency metadata record.
pub mod currency;

/// Pre-defined world currencies and the code lookup.
pub mod currencies;

/// Exchange rates and the in-memory rate registry.
pub mod exchange_rate;

/// Locale-aware display formatting.
pub mod format;

/// The `Money` value type.
pub mod money;

pub use currency::Currency;
pub use exchange_rate::{ExchangeRate, ExchangeRateManager};
pub use format::Locale;
pub use money::Money;
