//! Order message composition.

use std::fmt::Write;

use crate::cart::CartLineItem;
use crate::money::Money;

/// Line separating the items from the total.
pub const SEPARATOR: &str = "\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}";

const CLOSING: &str = "Please confirm availability and payment details. Thank you! \u{1f64f}";

/// Compose the order summary for a cart.
///
/// Returns `None` for an empty cart.
pub fn compose_order_message(items: &[CartLineItem], company: &str) -> Option<String> {
    if items.is_empty() {
        return None;
    }

    let mut message = format!("\u{1f6d2} *New Order from {company} Website*\n\n");

    for (index, item) in items.iter().enumerate() {
        let _ = writeln!(message, "{}. *{}*", index + 1, item.name);
        if !item.variant.is_empty() {
            let _ = writeln!(message, "   Variant: {}", item.variant);
        }
        let _ = writeln!(message, "   Price: {}", item.price_text);
        let _ = writeln!(message, "   Quantity: {}", item.quantity);
        let _ = writeln!(message, "   Subtotal: {}\n", item.subtotal().display());
    }

    let total: Money = items.iter().map(CartLineItem::subtotal).sum();
    let _ = writeln!(message, "{SEPARATOR}");
    let _ = writeln!(message, "*Total Amount: {}*\n", total.display());
    message.push_str(CLOSING);

    Some(message)
}

/// Compose a single-product order, sent from a product card.
pub fn compose_quick_order(company: &str, product: &str, price: &str, variant: Option<&str>) -> String {
    let mut message = format!("Hi {company}! \u{1f44b}\n\n");
    message.push_str("I would like to order:\n");
    let _ = writeln!(message, "\u{1f4e6} Product: {product}");
    let _ = writeln!(message, "\u{1f4b0} Price: {price}");
    if let Some(variant) = variant.filter(|v| !v.is_empty()) {
        let _ = writeln!(message, "\u{1f3a8} Variant: {variant}");
    }
    message.push_str("\nPlease confirm availability and delivery details. Thank you!");
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, variant: &str, rupees: i64, quantity: u32) -> CartLineItem {
        let mut item = CartLineItem::new(name, variant, Money::rupees(rupees), "");
        item.quantity = quantity;
        item
    }

    #[test]
    fn test_empty_cart_has_no_message() {
        assert!(compose_order_message(&[], "Vardan Naturals").is_none());
    }

    #[test]
    fn test_order_message_format() {
        let items = vec![
            line("Shea Butter Soap", "100g", 249, 2),
            line("Kansa Wand", "", 699, 1),
        ];
        let message = compose_order_message(&items, "Vardan Naturals").unwrap();
        let expected = "\u{1f6d2} *New Order from Vardan Naturals Website*\n\n\
            1. *Shea Butter Soap*\n   Variant: 100g\n   Price: \u{20b9}249\n   Quantity: 2\n   Subtotal: \u{20b9}498\n\n\
            2. *Kansa Wand*\n   Price: \u{20b9}699\n   Quantity: 1\n   Subtotal: \u{20b9}699\n\n\
            \u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\n\
            *Total Amount: \u{20b9}1197*\n\n\
            Please confirm availability and payment details. Thank you! \u{1f64f}";
        assert_eq!(message, expected);
    }

    #[test]
    fn test_quick_order() {
        let message = compose_quick_order("Vardan Naturals", "Hibiscus Tea", "\u{20b9}99", Some("10g"));
        assert!(message.starts_with("Hi Vardan Naturals! \u{1f44b}\n\nI would like to order:\n"));
        assert!(message.contains("\u{1f3a8} Variant: 10g\n"));

        let plain = compose_quick_order("Vardan Naturals", "Kansa Wand", "\u{20b9}699", Some(""));
        assert!(!plain.contains("Variant"));
        assert!(plain.ends_with("Thank you!"));
    }
}
