//! Caller-visible rounding policies.
//!
//! Wherever a moneta operation may lose precision (rescaling a parsed amount
//! to a currency's canonical scale, or rounding a quotient), the rounding
//! rule is an explicit argument. Nothing in the library rounds under a
//! hidden default.

use std::fmt;

use rust_decimal::RoundingStrategy;

/// A rounding rule for decimal operations that cannot be exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Away from zero.
    Up,
    /// Toward zero (truncate).
    Down,
    /// Toward positive infinity.
    Ceiling,
    /// Toward negative infinity.
    Floor,
    /// To nearest neighbour; ties away from zero.
    HalfUp,
    /// To nearest neighbour; ties toward zero.
    HalfDown,
    /// To nearest neighbour; ties to the even digit (banker's rounding).
    HalfEven,
}

impl Rounding {
    /// The equivalent `rust_decimal` strategy.
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            Self::Up => RoundingStrategy::AwayFromZero,
            Self::Down => RoundingStrategy::ToZero,
            Self::Ceiling => RoundingStrategy::ToPositiveInfinity,
            Self::Floor => RoundingStrategy::ToNegativeInfinity,
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfDown => RoundingStrategy::MidpointTowardZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Ceiling => "Ceiling",
            Self::Floor => "Floor",
            Self::HalfUp => "HalfUp",
            Self::HalfDown => "HalfDown",
            Self::HalfEven => "HalfEven",
        };
        f.write_str(name)
    }
}
