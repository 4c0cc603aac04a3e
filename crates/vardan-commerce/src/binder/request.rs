//! Typed add-to-cart requests.

use vardan_observability::StructuredLogger;

use crate::binder::{
    ATTR_IMAGE, ATTR_NAME, ATTR_PRICE, ATTR_QTY, ATTR_QTY_SELECTOR, ATTR_VARIANT,
    ATTR_VARIANT_SELECTOR,
};
use crate::cart::PriceSource;
use crate::error::CommerceError;

/// The option currently selected in a variant control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedOption {
    /// Option `value` attribute.
    pub value: String,
    /// Visible option text.
    pub text: String,
    /// Option's own `data-price`, if declared.
    pub price: Option<String>,
}

/// Reads the current state of form controls referenced by a trigger.
pub trait ControlReader {
    /// Value of the input matched by `selector`.
    fn input_value(&self, selector: &str) -> Option<String>;
    /// Selected option of the `<select>` matched by `selector`.
    fn selected_option(&self, selector: &str) -> Option<SelectedOption>;
}

/// What a trigger element declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddToCartRequest {
    pub name: String,
    pub price_text: Option<String>,
    pub variant: String,
    pub image: String,
    pub quantity: u32,
    pub qty_selector: Option<String>,
    pub variant_selector: Option<String>,
}

/// A request with its form controls read.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAdd {
    pub name: String,
    pub variant: String,
    pub image: String,
    /// Price used when the catalog has none.
    pub price: PriceSource,
    /// Units to add; each unit is one add.
    pub quantity: u32,
}

impl AddToCartRequest {
    /// Build a request from an attribute getter.
    ///
    /// Values are trimmed; blanks count as absent. A missing product name
    /// is logged and rejected.
    pub fn from_attributes<F>(get: F) -> Result<Self, CommerceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            get(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let Some(name) = read(ATTR_NAME) else {
            StructuredLogger::new("binder")
                .warn_builder("Add-to-cart trigger is missing data-name")
                .emit();
            return Err(CommerceError::MissingProductName);
        };

        Ok(Self {
            name,
            price_text: read(ATTR_PRICE),
            variant: read(ATTR_VARIANT).unwrap_or_default(),
            image: read(ATTR_IMAGE).unwrap_or_default(),
            quantity: read(ATTR_QTY)
                .and_then(|q| parse_positive(&q))
                .unwrap_or(1),
            qty_selector: read(ATTR_QTY_SELECTOR),
            variant_selector: read(ATTR_VARIANT_SELECTOR),
        })
    }

    /// Read the referenced controls and produce the final add.
    ///
    /// A quantity input overrides `data-qty` when it holds a positive
    /// integer. A selected option supplies the variant (value, else text)
    /// and its declared price overrides `data-price`.
    pub fn resolve(&self, controls: &impl ControlReader) -> ResolvedAdd {
        let mut quantity = self.quantity;
        if let Some(selector) = &self.qty_selector {
            if let Some(q) = controls
                .input_value(selector)
                .and_then(|v| parse_positive(&v))
            {
                quantity = q;
            }
        }

        let mut variant = self.variant.clone();
        let mut price_text = self.price_text.clone();
        if let Some(selector) = &self.variant_selector {
            if let Some(option) = controls.selected_option(selector) {
                let chosen = if option.value.trim().is_empty() {
                    option.text.trim()
                } else {
                    option.value.trim()
                };
                if !chosen.is_empty() {
                    variant = chosen.to_string();
                }
                if let Some(price) = option.price.filter(|p| !p.trim().is_empty()) {
                    price_text = Some(price);
                }
            }
        }

        ResolvedAdd {
            name: self.name.clone(),
            variant,
            image: self.image.clone(),
            price: PriceSource::from(price_text),
            quantity,
        }
    }
}

/// Leading-integer parse; zero, negative and non-numeric input are `None`.
fn parse_positive(text: &str) -> Option<u32> {
    let text = text.trim();
    let digits: &str = match text.find(|c: char| !c.is_ascii_digit()) {
        Some(end) => &text[..end],
        None => text,
    };
    digits.parse::<u32>().ok().filter(|q| *q > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct Controls {
        inputs: HashMap<String, String>,
        selects: HashMap<String, SelectedOption>,
    }

    impl ControlReader for Controls {
        fn input_value(&self, selector: &str) -> Option<String> {
            self.inputs.get(selector).cloned()
        }

        fn selected_option(&self, selector: &str) -> Option<SelectedOption> {
            self.selects.get(selector).cloned()
        }
    }

    fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let result = AddToCartRequest::from_attributes(attrs(&[(ATTR_PRICE, "\u{20b9}99")]));
        assert!(matches!(result, Err(CommerceError::MissingProductName)));

        let blank = AddToCartRequest::from_attributes(attrs(&[(ATTR_NAME, "   ")]));
        assert!(blank.is_err());
    }

    #[test]
    fn test_plain_request() {
        let request = AddToCartRequest::from_attributes(attrs(&[
            (ATTR_NAME, " Hibiscus Tea "),
            (ATTR_VARIANT, "10g"),
            (ATTR_IMAGE, "tea.jpg"),
        ]))
        .unwrap();
        assert_eq!(request.name, "Hibiscus Tea");
        assert_eq!(request.quantity, 1);

        let add = request.resolve(&Controls::default());
        assert_eq!(add.variant, "10g");
        assert_eq!(add.price, PriceSource::Undeclared);
    }

    #[test]
    fn test_invalid_qty_becomes_one() {
        for qty in ["0", "-3", "abc", ""] {
            let request =
                AddToCartRequest::from_attributes(attrs(&[(ATTR_NAME, "A"), (ATTR_QTY, qty)]))
                    .unwrap();
            assert_eq!(request.quantity, 1, "qty {qty:?}");
        }
        let request =
            AddToCartRequest::from_attributes(attrs(&[(ATTR_NAME, "A"), (ATTR_QTY, "3 packs")]))
                .unwrap();
        assert_eq!(request.quantity, 3);
    }

    #[test]
    fn test_qty_input_overrides_attribute() {
        let request = AddToCartRequest::from_attributes(attrs(&[
            (ATTR_NAME, "A"),
            (ATTR_QTY, "2"),
            (ATTR_QTY_SELECTOR, "#qty"),
        ]))
        .unwrap();

        let mut controls = Controls::default();
        controls.inputs.insert("#qty".into(), "5".into());
        assert_eq!(request.resolve(&controls).quantity, 5);

        controls.inputs.insert("#qty".into(), "0".into());
        assert_eq!(request.resolve(&controls).quantity, 2);
    }

    #[test]
    fn test_variant_select_supplies_variant_and_price() {
        let request = AddToCartRequest::from_attributes(attrs(&[
            (ATTR_NAME, "Shea Butter Soap"),
            (ATTR_PRICE, "\u{20b9}249"),
            (ATTR_VARIANT, "100g"),
            (ATTR_VARIANT_SELECTOR, "#size"),
        ]))
        .unwrap();

        let mut controls = Controls::default();
        controls.selects.insert(
            "#size".into(),
            SelectedOption {
                value: "55g".into(),
                text: "55g - \u{20b9}170".into(),
                price: Some("\u{20b9}170".into()),
            },
        );
        let add = request.resolve(&controls);
        assert_eq!(add.variant, "55g");
        assert_eq!(add.price, PriceSource::Text("\u{20b9}170".into()));

        controls.selects.insert(
            "#size".into(),
            SelectedOption {
                value: String::new(),
                text: "100g".into(),
                price: None,
            },
        );
        let add = request.resolve(&controls);
        assert_eq!(add.variant, "100g");
        assert_eq!(add.price, PriceSource::Text("\u{20b9}249".into()));
    }
}
