//! Cart line items and their persisted form.

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::cart::parse_price_text;
use crate::catalog::DEFAULT_VARIANT;
use crate::money::Money;

/// A line in the cart. At most one line exists per `(name, variant)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem {
    /// Product name.
    pub name: String,
    /// Variant label; may be empty or `"default"`.
    pub variant: String,
    /// Display price, currency-prefixed (e.g. "₹249").
    pub price_text: String,
    /// Numeric unit price.
    pub price: Money,
    /// Image URL.
    pub image: String,
    /// Quantity, always at least 1.
    pub quantity: u32,
    /// When the line was first added.
    pub added_at: DateTime<Utc>,
}

impl CartLineItem {
    /// Create a line with quantity 1.
    pub fn new(
        name: impl Into<String>,
        variant: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            variant: variant.into(),
            price_text: price.display(),
            price,
            image: image.into(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Whether this line holds `(name, variant)`.
    pub fn matches(&self, name: &str, variant: &str) -> bool {
        self.name == name && self.variant == variant
    }

    /// Replace both the display and numeric price.
    pub fn set_price(&mut self, price: Money) {
        self.price = price;
        self.price_text = price.display();
    }

    /// Unit price used for totals.
    ///
    /// The stored number is used while the display text agrees with it.
    /// Otherwise the display text wins when it parses.
    pub fn unit_price(&self) -> Money {
        if self.price_text == self.price.display() {
            return self.price;
        }
        parse_price_text(&self.price_text).unwrap_or(self.price)
    }

    /// `unit_price * quantity`.
    pub fn subtotal(&self) -> Money {
        self.unit_price() * i64::from(self.quantity)
    }

    /// Persisted representation.
    pub fn to_stored(&self) -> StoredLineItem<'_> {
        StoredLineItem {
            name: &self.name,
            variant: &self.variant,
            price_text: &self.price_text,
            price: self.price,
            image: &self.image,
            quantity: self.quantity,
            added_at: self.added_at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        }
    }

    /// Normalize one stored entry of any historical shape.
    ///
    /// Missing fields get defaults; entries that are not JSON objects are
    /// dropped. Accepted legacy shapes: `price` as a number or a string
    /// (with or without currency symbol), no `priceText`, `quantity` as a
    /// string, no `addedAt`, no `variant`.
    pub fn normalize(value: &Value, placeholder_image: &str) -> Option<Self> {
        let obj = value.as_object()?;

        let name = obj.get("name").and_then(as_text).unwrap_or_default();

        let variant = match obj.get("variant") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => DEFAULT_VARIANT.to_string(),
        };

        let legacy_price = obj.get("price");
        let stored_text = obj
            .get("priceText")
            .and_then(as_text)
            .filter(|s| !s.is_empty());

        let numeric = match legacy_price {
            Some(Value::Number(n)) => n.as_f64().map(Money::from_decimal),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok().map(Money::from_decimal),
            _ => None,
        }
        .or_else(|| stored_text.as_deref().and_then(parse_price_text))
        .or_else(|| match legacy_price {
            Some(Value::String(s)) => parse_price_text(s),
            _ => None,
        })
        .unwrap_or_default();

        let price_text = match stored_text {
            Some(text) => text,
            None => match legacy_price {
                Some(Value::String(s)) if !s.trim().is_empty() && parse_price_text(s).is_some() => {
                    if s.contains(crate::money::CURRENCY_SYMBOL) {
                        s.clone()
                    } else {
                        numeric.display()
                    }
                }
                _ => numeric.display(),
            },
        };

        let image = obj
            .get("image")
            .and_then(as_text)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| placeholder_image.to_string());

        let quantity = match obj.get("quantity") {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|q| q.is_finite() && *q >= 1.0)
        .map(|q| q.min(f64::from(u32::MAX)) as u32)
        .unwrap_or(1);

        let added_at = match obj.get("addedAt") {
            Some(Value::String(s)) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|d| d.with_timezone(&Utc)),
            Some(Value::Number(n)) => n
                .as_i64()
                .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
            _ => None,
        }
        .unwrap_or_else(Utc::now);

        Some(Self {
            name,
            variant,
            price_text,
            price: numeric,
            image,
            quantity,
            added_at,
        })
    }
}

/// Persisted line item, field names matching the storage format.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredLineItem<'a> {
    pub name: &'a str,
    pub variant: &'a str,
    pub price_text: &'a str,
    pub price: Money,
    pub image: &'a str,
    pub quantity: u32,
    pub added_at: String,
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PLACEHOLDER: &str = "images/placeholder.jpg";

    #[test]
    fn test_new_line_has_display_price() {
        let item = CartLineItem::new("Shea Butter Soap", "100g", Money::rupees(249), "soap.jpg");
        assert_eq!(item.price_text, "\u{20b9}249");
        assert_eq!(item.quantity, 1);
        assert!(item.matches("Shea Butter Soap", "100g"));
        assert!(!item.matches("Shea Butter Soap", "55g"));
    }

    #[test]
    fn test_normalize_full_entry() {
        let value = json!({
            "name": "Goat Milk Soap",
            "variant": "55g",
            "priceText": "\u{20b9}190",
            "price": 190,
            "image": "goat.jpg",
            "quantity": 3,
            "addedAt": "2025-01-02T03:04:05.000Z"
        });
        let item = CartLineItem::normalize(&value, PLACEHOLDER).unwrap();
        assert_eq!(item.name, "Goat Milk Soap");
        assert_eq!(item.variant, "55g");
        assert_eq!(item.price, Money::rupees(190));
        assert_eq!(item.quantity, 3);
        assert_eq!(item.added_at.to_rfc3339(), "2025-01-02T03:04:05+00:00");
    }

    #[test]
    fn test_normalize_legacy_string_price() {
        let value = json!({ "name": "Aloe Vera Gel", "price": "\u{20b9}249", "quantity": "2" });
        let item = CartLineItem::normalize(&value, PLACEHOLDER).unwrap();
        assert_eq!(item.price_text, "\u{20b9}249");
        assert_eq!(item.price, Money::rupees(249));
        assert_eq!(item.quantity, 2);
        assert_eq!(item.variant, "default");
        assert_eq!(item.image, PLACEHOLDER);
    }

    #[test]
    fn test_normalize_legacy_numeric_price() {
        let value = json!({ "name": "Kansa Wand", "price": 699 });
        let item = CartLineItem::normalize(&value, PLACEHOLDER).unwrap();
        assert_eq!(item.price_text, "\u{20b9}699");
        assert_eq!(item.subtotal(), Money::rupees(699));
    }

    #[test]
    fn test_normalize_keeps_explicit_empty_variant() {
        let value = json!({ "name": "Kansa Wand", "variant": "", "priceText": "\u{20b9}699" });
        let item = CartLineItem::normalize(&value, PLACEHOLDER).unwrap();
        assert_eq!(item.variant, "");
    }

    #[test]
    fn test_normalize_bad_quantity_defaults_to_one() {
        for q in [json!(0), json!(-4), json!("lots"), json!(null)] {
            let value = json!({ "name": "Hibiscus Tea", "quantity": q });
            let item = CartLineItem::normalize(&value, PLACEHOLDER).unwrap();
            assert_eq!(item.quantity, 1);
            assert_eq!(item.price_text, "\u{20b9}0");
        }
    }

    #[test]
    fn test_normalize_rejects_non_objects() {
        assert!(CartLineItem::normalize(&json!("Shea Butter Soap"), PLACEHOLDER).is_none());
        assert!(CartLineItem::normalize(&json!(42), PLACEHOLDER).is_none());
    }

    #[test]
    fn test_unit_price_prefers_display_text() {
        let mut item = CartLineItem::new("Crack Cream", "30g", Money::rupees(299), "");
        item.price = Money::rupees(1);
        assert_eq!(item.unit_price(), Money::rupees(299));

        item.price_text = "n/a".to_string();
        assert_eq!(item.unit_price(), Money::rupees(1));
    }

    #[test]
    fn test_stored_field_names() {
        let item = CartLineItem::new("Rose Lip Balm", "15g", Money::rupees(249), "balm.jpg");
        let value = serde_json::to_value(item.to_stored()).unwrap();
        assert_eq!(value["priceText"], "\u{20b9}249");
        assert_eq!(value["price"], 249);
        assert!(value["addedAt"].as_str().unwrap().ends_with('Z'));
    }
}
