//! Locale-aware display formatting.
//!
//! Display formatting always takes an explicit [`Locale`]; the library
//! never consults process-wide locale state. Callers wanting a default
//! locale pick one and pass it. The output is display-only and makes no
//! round-trip promise.

use crate::money::Money;

/// Number-formatting conventions for one locale.
///
/// Defined as `pub static` records like [`crate::currency::Currency`];
/// read-only data, safe to share freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// BCP 47-style tag (e.g. "en-US").
    pub name: &'static str,
    /// Separator between integer and fraction digits.
    pub decimal_separator: char,
    /// Separator between digit groups; `None` disables grouping.
    pub grouping_separator: Option<char>,
    /// Digit group sizes from the right; the last entry repeats
    /// (`[3]` gives 1,234,567 while `[3, 2]` gives the Indian 12,34,567).
    /// An empty slice or any zero entry disables grouping.
    pub group_sizes: &'static [u8],
    /// Whether the currency symbol precedes the number.
    pub symbol_first: bool,
    /// Whether a no-break space separates symbol and number.
    pub symbol_space: bool,
}

/// United States English: `$1,234.56`.
pub static EN_US: Locale = Locale {
    name: "en-US",
    decimal_separator: '.',
    grouping_separator: Some(','),
    group_sizes: &[3],
    symbol_first: true,
    symbol_space: false,
};

/// British English: `£1,234.56`.
pub static EN_GB: Locale = Locale {
    name: "en-GB",
    decimal_separator: '.',
    grouping_separator: Some(','),
    group_sizes: &[3],
    symbol_first: true,
    symbol_space: false,
};

/// German: `1.234,56 €`.
pub static DE_DE: Locale = Locale {
    name: "de-DE",
    decimal_separator: ',',
    grouping_separator: Some('.'),
    group_sizes: &[3],
    symbol_first: false,
    symbol_space: true,
};

/// French: `1 234,56 €` (no-break spaces).
pub static FR_FR: Locale = Locale {
    name: "fr-FR",
    decimal_separator: ',',
    grouping_separator: Some('\u{a0}'),
    group_sizes: &[3],
    symbol_first: false,
    symbol_space: true,
};

/// Swiss German: `Fr 1'234.56`.
pub static DE_CH: Locale = Locale {
    name: "de-CH",
    decimal_separator: '.',
    grouping_separator: Some('\''),
    group_sizes: &[3],
    symbol_first: true,
    symbol_space: true,
};

/// Japanese: `¥1,234`.
pub static JA_JP: Locale = Locale {
    name: "ja-JP",
    decimal_separator: '.',
    grouping_separator: Some(','),
    group_sizes: &[3],
    symbol_first: true,
    symbol_space: false,
};

/// Indian English: `₹12,34,567.00`.
pub static EN_IN: Locale = Locale {
    name: "en-IN",
    decimal_separator: '.',
    grouping_separator: Some(','),
    group_sizes: &[3, 2],
    symbol_first: true,
    symbol_space: false,
};

/// Renders a monetary value for display: currency symbol, grouped integer
/// digits, locale decimal separator, and the amount's fraction digits at
/// their existing scale. A negative amount gets a single leading minus.
pub fn format(money: &Money, locale: &Locale) -> String {
    let amount = money.amount();
    let digits = amount.abs().to_string();
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };

    let mut number = group_digits(int_part, locale);
    if let Some(frac) = frac_part {
        number.push(locale.decimal_separator);
        number.push_str(frac);
    }

    let symbol = money.currency().symbol;
    let mut out = String::with_capacity(number.len() + symbol.len() + 2);
    if amount.is_sign_negative() {
        out.push('-');
    }
    if locale.symbol_first {
        out.push_str(symbol);
        if locale.symbol_space {
            out.push('\u{a0}');
        }
        out.push_str(&number);
    } else {
        out.push_str(&number);
        if locale.symbol_space {
            out.push('\u{a0}');
        }
        out.push_str(symbol);
    }
    out
}

fn group_digits(digits: &str, locale: &Locale) -> String {
    let Some(sep) = locale.grouping_separator else {
        return digits.to_string();
    };
    // Caller-built locales may carry no usable sizes; render ungrouped
    // rather than index past the slice or loop on a zero-width group.
    if locale.group_sizes.is_empty() || locale.group_sizes.contains(&0) {
        return digits.to_string();
    }
    let mut groups: Vec<&str> = Vec::new();
    let mut end = digits.len();
    let mut size_idx = 0;
    while end > 0 {
        let size = usize::from(locale.group_sizes[size_idx]);
        let start = end.saturating_sub(size);
        groups.push(&digits[start..end]);
        end = start;
        if size_idx + 1 < locale.group_sizes.len() {
            size_idx += 1;
        }
    }
    groups.reverse();
    groups.join(&sep.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(text: &str) -> Money {
        Money::parse(text).unwrap()
    }

    #[test]
    fn en_us_groups_and_prefixes_symbol() {
        assert_eq!(money("USD1234.56").format(&EN_US), "$1,234.56");
        assert_eq!(money("USD1234567.89").format(&EN_US), "$1,234,567.89");
    }

    #[test]
    fn negative_gets_single_leading_minus() {
        assert_eq!(money("USD-1234.56").format(&EN_US), "-$1,234.56");
        assert_eq!(money("EUR-1234.56").format(&DE_DE), "-1.234,56\u{a0}€");
    }

    #[test]
    fn de_de_swaps_separators_and_trails_symbol() {
        assert_eq!(money("EUR1234.56").format(&DE_DE), "1.234,56\u{a0}€");
    }

    #[test]
    fn fr_fr_uses_no_break_spaces() {
        assert_eq!(money("EUR1234.56").format(&FR_FR), "1\u{a0}234,56\u{a0}€");
    }

    #[test]
    fn de_ch_uses_apostrophe_grouping() {
        assert_eq!(money("CHF1234.56").format(&DE_CH), "Fr\u{a0}1'234.56");
    }

    #[test]
    fn zero_scale_currency_has_no_fraction() {
        assert_eq!(money("JPY1234").format(&JA_JP), "¥1,234");
    }

    #[test]
    fn indian_grouping_is_three_then_twos() {
        assert_eq!(money("INR1234567").format(&EN_IN), "₹12,34,567.00");
        assert_eq!(money("INR123").format(&EN_IN), "₹123.00");
    }

    #[test]
    fn small_amounts_need_no_grouping() {
        assert_eq!(money("USD0.50").format(&EN_US), "$0.50");
        assert_eq!(money("USD999").format(&EN_US), "$999.00");
    }

    #[test]
    fn sentinel_scale_formats_at_parsed_scale() {
        assert_eq!(money("XDR1.250").format(&EN_US), "SDR1.250");
    }

    #[test]
    fn degenerate_group_sizes_render_ungrouped() {
        let sizeless = Locale {
            name: "x-sizeless",
            decimal_separator: '.',
            grouping_separator: Some(','),
            group_sizes: &[],
            symbol_first: true,
            symbol_space: false,
        };
        assert_eq!(money("USD1234567.89").format(&sizeless), "$1234567.89");
        let zero_width = Locale {
            name: "x-zero-width",
            group_sizes: &[0],
            ..sizeless.clone()
        };
        assert_eq!(money("USD1234567.89").format(&zero_width), "$1234567.89");
    }
}
