//! Parsing of display price strings.

use crate::money::Money;

/// Parse a display price such as `"₹1,299"` or `"499"` into money.
///
/// Everything except digits and decimal points is dropped, leading points
/// are ignored, and the longest leading `digits[.digits]` run is read.
/// Returns `None` when no digits remain.
pub fn parse_price_text(text: &str) -> Option<Money> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let cleaned = cleaned.trim_start_matches('.');

    let int_len = cleaned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(cleaned.len());
    if int_len == 0 {
        return None;
    }

    let rest = &cleaned[int_len..];
    let frac_len = match rest.strip_prefix('.') {
        Some(frac) => {
            1 + frac
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(frac.len())
        }
        None => 0,
    };

    let number = &cleaned[..int_len + frac_len];
    number.trim_end_matches('.').parse::<f64>().ok().map(Money::from_decimal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_currency_prefixed() {
        assert_eq!(parse_price_text("\u{20b9}249"), Some(Money::rupees(249)));
        assert_eq!(parse_price_text("499"), Some(Money::rupees(499)));
    }

    #[test]
    fn test_ignores_grouping_and_text() {
        assert_eq!(parse_price_text("\u{20b9}1,299"), Some(Money::rupees(1299)));
        assert_eq!(parse_price_text("Rs. 249"), Some(Money::rupees(249)));
        assert_eq!(parse_price_text("Price: 99 only"), Some(Money::rupees(99)));
    }

    #[test]
    fn test_decimals() {
        assert_eq!(parse_price_text("\u{20b9}49.50"), Some(Money::from_paise(4950)));
        assert_eq!(parse_price_text("12.5.7"), Some(Money::from_paise(1250)));
        assert_eq!(parse_price_text("12."), Some(Money::rupees(12)));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse_price_text(""), None);
        assert_eq!(parse_price_text("\u{20b9}"), None);
        assert_eq!(parse_price_text("free"), None);
    }
}
