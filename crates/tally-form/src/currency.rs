//! # Currency Symbols
//!
//! A display-only lookup from ISO 4217 currency codes to the symbol a UI
//! prints next to an amount. Strictly a label: no conversion, no rescaling
//! of the engine's cents.

/// Code → symbol pairs for the currencies the form offers.
const CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("CNY", "¥"),
    ("INR", "₹"),
    ("PKR", "₨"),
    ("KRW", "₩"),
    ("AUD", "A$"),
    ("CAD", "C$"),
];

/// Looks up the display symbol for a currency code (case-insensitive).
///
/// ## Example
/// ```rust
/// use tally_form::currency::symbol;
///
/// assert_eq!(symbol("USD"), Some("$"));
/// assert_eq!(symbol("eur"), Some("€"));
/// assert_eq!(symbol("XYZ"), None);
/// ```
pub fn symbol(code: &str) -> Option<&'static str> {
    CURRENCY_SYMBOLS
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code.trim()))
        .map(|(_, s)| *s)
}

/// Like [`symbol`], falling back to `$` for unknown codes so display code
/// always has something to print.
pub fn symbol_or_default(code: &str) -> &'static str {
    symbol(code).unwrap_or("$")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(symbol("USD"), Some("$"));
        assert_eq!(symbol("GBP"), Some("£"));
        assert_eq!(symbol(" jpy "), Some("¥"));
        assert_eq!(symbol("???"), None);
    }

    #[test]
    fn test_default_fallback() {
        assert_eq!(symbol_or_default("EUR"), "€");
        assert_eq!(symbol_or_default("NOPE"), "$");
    }
}
