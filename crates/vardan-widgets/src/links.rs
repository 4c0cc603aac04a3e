//! Off-site link handling.

/// `target` given to off-site links.
pub const EXTERNAL_TARGET: &str = "_blank";
/// `rel` given to off-site links.
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// Whether a link with `href` pointing at `link_host` leaves the site served
/// from `page_host`. Only absolute `http(s)` links qualify.
pub fn is_external(href: &str, link_host: &str, page_host: &str) -> bool {
    href.starts_with("http") && !link_host.eq_ignore_ascii_case(page_host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external() {
        assert!(is_external("https://wa.me/918077775729", "wa.me", "vardan.in"));
        assert!(!is_external("https://vardan.in/cart.html", "vardan.in", "vardan.in"));
        assert!(!is_external("https://Vardan.in/", "Vardan.in", "vardan.in"));
        assert!(!is_external("cart.html", "vardan.in", "vardan.in"));
        assert!(!is_external("#products", "", "vardan.in"));
    }
}
