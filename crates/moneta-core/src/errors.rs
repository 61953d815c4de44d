//! Error types for the moneta workspace.
//!
//! Every failure a caller can trigger is surfaced synchronously through a
//! single `thiserror`-derived enum so that callers can pattern-match on the
//! cause. Currency mismatch in particular is a declared error kind rather
//! than a panic: it is a caller-logic error, but one the caller must be able
//! to distinguish from bad input text.

use thiserror::Error;

/// The top-level error type used throughout moneta.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Text does not match the money grammar, or the numeral portion is not
    /// a valid decimal. Carries the original input verbatim.
    #[error("malformed money text: {text:?}")]
    MalformedInput {
        /// The offending input text, unmodified.
        text: String,
    },

    /// The 3-letter code does not resolve to a known currency.
    #[error("unknown currency code: {code:?}")]
    UnknownCurrency {
        /// The code that failed to resolve.
        code: String,
    },

    /// A binary operation was attempted between two monetary values of
    /// different currencies.
    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// ISO code of the left-hand operand.
        left: &'static str,
        /// ISO code of the right-hand operand.
        right: &'static str,
    },

    /// A checked decimal operation failed.
    #[error("arithmetic failure: {0}")]
    Arithmetic(#[from] ArithmeticError),

    /// No exchange rate is registered for the requested currency pair.
    ///
    /// The field holding the source code is named `from` because thiserror
    /// reserves `source` for the error-cause chain.
    #[error("no exchange rate for {from}/{to}")]
    NoRate {
        /// ISO code of the source currency.
        from: &'static str,
        /// ISO code of the target currency.
        to: &'static str,
    },
}

/// Failures of checked decimal arithmetic, distinct from malformed input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The result exceeds the decimal representation's capacity.
    #[error("decimal overflow")]
    Overflow,

    /// Division or remainder by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An unrounded division has no exact representation.
    #[error("quotient is not exactly representable")]
    Inexact,

    /// A parsed amount carries more fractional digits than the currency's
    /// canonical scale allows and no rounding policy was supplied.
    #[error("{digits} fractional digits exceed canonical scale {scale}")]
    ExcessPrecision {
        /// Fractional digits actually present in the input.
        digits: u32,
        /// The currency's canonical fraction-digit count.
        scale: u32,
    },
}

/// Shorthand `Result` type used throughout moneta.
pub type Result<T, E = Error> = std::result::Result<T, E>;
