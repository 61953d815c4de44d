//! # moneta-core
//!
//! Error taxonomy and rounding policy shared across the moneta workspace.
//!
//! This crate provides the foundational pieces the other crates build on:
//! the [`Error`] hierarchy distinguishing malformed input from unknown
//! currencies, currency mismatches, and arithmetic failures, and the
//! caller-visible [`Rounding`] policy.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `Result` alias.
pub mod errors;

/// Caller-visible rounding policies.
pub mod rounding;

pub use errors::{ArithmeticError, Error, Result};
pub use rounding::Rounding;
