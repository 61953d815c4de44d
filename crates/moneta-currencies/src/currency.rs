//! `Currency` — metadata record for a single currency.

use std::fmt;

/// Data describing a single currency.
///
/// Currencies are defined as `pub static` records in [`crate::currencies`]
/// and referenced by `&'static Currency` everywhere else, so lookups and
/// comparisons never allocate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency {
    /// Full name (e.g. "U.S. Dollar").
    pub name: &'static str,
    /// ISO 4217 alphabetic code (e.g. "USD").
    pub code: &'static str,
    /// ISO 4217 numeric code (e.g. 840); 0 where none is assigned.
    pub numeric_code: u16,
    /// Symbol used in financial notation (e.g. "$").
    pub symbol: &'static str,
    /// Fraction symbol (e.g. "¢").
    pub fraction_symbol: &'static str,
    /// Number of fractional units per whole unit (e.g. 100 for cents).
    pub fractions_per_unit: u32,
    /// Default fraction digits for amounts in this currency; `-1` is the
    /// sentinel for "no fixed fractional convention" (XDR, precious metals).
    pub minor_units: i8,
}

impl Currency {
    /// The canonical amount scale, or `None` for currencies with no fixed
    /// fractional convention.
    pub fn canonical_scale(&self) -> Option<u32> {
        u32::try_from(self.minor_units).ok()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Currency {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}
