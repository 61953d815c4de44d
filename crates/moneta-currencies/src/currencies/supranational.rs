//! Supranational units with no fixed fractional convention.
//!
//! These report the `-1` minor-units sentinel: amounts keep whatever scale
//! they were parsed with.

use crate::currency::Currency;

/// IMF Special Drawing Rights.
pub static XDR: Currency = Currency {
    name: "Special Drawing Rights",
    code: "XDR",
    numeric_code: 960,
    symbol: "SDR",
    fraction_symbol: "",
    fractions_per_unit: 1,
    minor_units: -1,
};

/// Gold, one troy ounce.
pub static XAU: Currency = Currency {
    name: "Gold",
    code: "XAU",
    numeric_code: 959,
    symbol: "Au",
    fraction_symbol: "",
    fractions_per_unit: 1,
    minor_units: -1,
};

/// Silver, one troy ounce.
pub static XAG: Currency = Currency {
    name: "Silver",
    code: "XAG",
    numeric_code: 961,
    symbol: "Ag",
    fraction_symbol: "",
    fractions_per_unit: 1,
    minor_units: -1,
};
