//! Pre-defined world currencies, organized by region, and the code lookup.

pub mod africa;
pub mod america;
pub mod asia;
pub mod crypto;
pub mod europe;
pub mod oceania;
pub mod supranational;

// Re-export all currencies at the `currencies` module level for convenience.
pub use africa::*;
pub use america::*;
pub use asia::*;
pub use crypto::*;
pub use europe::*;
pub use oceania::*;
pub use supranational::*;

use crate::currency::Currency;

/// Every currency defined in this module.
pub static ALL: &[&Currency] = &[
    // America
    &USD, &CAD, &BRL, &MXN, &ARS, &CLP, &COP, &PEN,
    // Europe
    &EUR, &GBP, &CHF, &NOK, &SEK, &DKK, &PLN, &CZK, &HUF, &RON, &BGN, &ISK, &TRY, &RUB,
    // Asia / Middle East
    &JPY, &CNY, &HKD, &SGD, &KRW, &INR, &TWD, &THB, &MYR, &IDR, &PHP, &VND, &ILS, &SAR, &AED,
    &BHD, &KWD,
    // Oceania
    &AUD, &NZD,
    // Africa
    &ZAR, &NGN, &EGP, &KES, &GHS, &MAD, &TND,
    // Supranational
    &XDR, &XAU, &XAG,
    // Crypto
    &BTC, &ETH,
];

/// Resolve a 3-letter code to its currency record.
///
/// Case-sensitive: only exact uppercase codes resolve, matching the money
/// text grammar. Returns `None` for unknown codes.
pub fn from_code(code: &str) -> Option<&'static Currency> {
    ALL.iter().find(|c| c.code == code).copied()
}
