//! # moneta
//!
//! Exact, currency-aware monetary values.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `moneta-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! moneta = "0.1"
//! ```
//!
//! ```rust
//! use moneta::{Money, Rounding};
//!
//! let price = Money::parse("USD12.34")?;
//! let tip = Money::parse("USD0.66")?;
//! assert_eq!(price.add(&tip)?.to_string(), "USD13.00");
//!
//! // Rounding never happens behind the caller's back.
//! assert!(Money::parse("JPY5.5").is_err());
//! assert_eq!(Money::parse_with("JPY5.5", Rounding::HalfEven)?.to_string(), "JPY6");
//! # Ok::<(), moneta::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error taxonomy and rounding policies.
pub use moneta_core as core;

/// Currency metadata, `Money`, exchange rates, and display formatting.
pub use moneta_currencies as currencies;

pub use moneta_core::{ArithmeticError, Error, Result, Rounding};
pub use moneta_currencies::{Currency, ExchangeRate, ExchangeRateManager, Locale, Money};
