//! Messaging deep links.

/// Percent-encode with `encodeURIComponent` semantics.
///
/// Unreserved characters `A-Z a-z 0-9 - _ . ! ~ * ' ( )` pass through;
/// every other character is UTF-8 encoded as `%XX` with uppercase hex.
pub fn encode_uri_component(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' => result.push(c),
            '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')' => result.push(c),
            _ => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}

/// Build `<base>/<phone>?text=<encoded message>`.
pub fn whatsapp_link(base_url: &str, phone: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        base_url.trim_end_matches('/'),
        phone,
        encode_uri_component(message)
    )
}

/// Format a 12-digit number as `+CC XXX XXX XXXX`.
///
/// Other inputs are returned unchanged.
pub fn format_phone_number(number: &str) -> String {
    let digits = number.get(..12).filter(|d| d.bytes().all(|b| b.is_ascii_digit()));
    match digits {
        Some(d) => format!("+{} {} {} {}{}", &d[..2], &d[2..5], &d[5..8], &d[8..12], &number[12..]),
        None => number.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_unreserved_passthrough() {
        assert_eq!(encode_uri_component("abc-XYZ_0.9!~*'()"), "abc-XYZ_0.9!~*'()");
    }

    #[test]
    fn test_encode_reserved_and_unicode() {
        assert_eq!(encode_uri_component("a b&c"), "a%20b%26c");
        assert_eq!(encode_uri_component("\n*Total*"), "%0A*Total*");
        assert_eq!(encode_uri_component("\u{20b9}"), "%E2%82%B9");
        assert_eq!(encode_uri_component("\u{1f6d2}"), "%F0%9F%9B%92");
    }

    #[test]
    fn test_whatsapp_link() {
        assert_eq!(
            whatsapp_link("https://wa.me/", "918077775729", "Hi there"),
            "https://wa.me/918077775729?text=Hi%20there"
        );
    }

    #[test]
    fn test_format_phone_number() {
        assert_eq!(format_phone_number("918077775729"), "+91 807 777 5729");
        assert_eq!(format_phone_number("12345"), "12345");
        assert_eq!(format_phone_number("91807777572x"), "91807777572x");
    }
}
