//! Add-to-cart binding.
//!
//! Trigger elements declare what they add through `data-*` attributes. The
//! DOM layer reads them through [`AttributeTarget`] and turns them into a
//! typed [`AddToCartRequest`]; the cart never sees attributes.

mod migrate;
mod request;

use std::collections::BTreeMap;

pub use migrate::{migrate_element, migrate_markup, parse_inline_directive, InlineDirective, MarkupMigration};
pub use request::{AddToCartRequest, ControlReader, ResolvedAdd, SelectedOption};

/// Product name (required).
pub const ATTR_NAME: &str = "data-name";
/// Display price text.
pub const ATTR_PRICE: &str = "data-price";
/// Variant label.
pub const ATTR_VARIANT: &str = "data-variant";
/// Image URL.
pub const ATTR_IMAGE: &str = "data-image";
/// Units added per click.
pub const ATTR_QTY: &str = "data-qty";
/// Selector of a quantity input that overrides `data-qty`.
pub const ATTR_QTY_SELECTOR: &str = "data-qty-selector";
/// Selector of a variant `<select>`.
pub const ATTR_VARIANT_SELECTOR: &str = "data-variant-selector";
/// Marker set once a trigger has a handler.
pub const ATTR_BOUND: &str = "data-bound";
/// Legacy inline handler attribute.
pub const ATTR_ONCLICK: &str = "onclick";

/// Class of elements that act as add-to-cart triggers.
pub const TRIGGER_CLASS: &str = "add-to-cart-btn";

/// Read/write access to an element's attributes.
pub trait AttributeTarget {
    fn get_attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&mut self, name: &str, value: &str);
    fn remove_attribute(&mut self, name: &str);
}

/// An element as a plain attribute map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    attributes: BTreeMap<String, String>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style attribute setter.
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }
}

impl AttributeTarget for AttributeMap {
    fn get_attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }
}

/// Mark `target` as bound. Returns false when it already was, in which case
/// the caller must not attach another handler.
pub fn claim_binding(target: &mut impl AttributeTarget) -> bool {
    if target.get_attribute(ATTR_BOUND).is_some() {
        return false;
    }
    target.set_attribute(ATTR_BOUND, "true");
    true
}
