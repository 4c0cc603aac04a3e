//! Catalog product and variant price types.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Label of the single variant of products sold without sizes.
pub const DEFAULT_VARIANT: &str = "default";

/// One purchasable size/variant of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariantPrice {
    /// Variant label (e.g. "100g", "10ml", "default").
    pub label: String,
    /// Regular price in whole rupees.
    pub price: u32,
    /// Sale price in whole rupees, used only while sales are enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale: Option<u32>,
}

impl VariantPrice {
    /// Create a variant with a regular price.
    pub fn new(label: impl Into<String>, price: u32) -> Self {
        Self {
            label: label.into(),
            price,
            sale: None,
        }
    }

    /// Attach a sale price.
    pub fn with_sale(mut self, sale: u32) -> Self {
        self.sale = Some(sale);
        self
    }

    /// Regular price as money.
    pub fn regular(&self) -> Money {
        Money::rupees(i64::from(self.price))
    }

    /// Sale price as money, if one is declared.
    pub fn sale_price(&self) -> Option<Money> {
        self.sale.map(|s| Money::rupees(i64::from(s)))
    }

    /// Whether this is the placeholder variant of a size-less product.
    pub fn is_default(&self) -> bool {
        self.label == DEFAULT_VARIANT
    }
}

/// A product in the price catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogProduct {
    /// Product name, the lookup key used by the cart.
    pub name: String,
    /// Category heading the product is listed under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Variants in declaration order.
    pub variants: Vec<VariantPrice>,
}

impl CatalogProduct {
    /// Create a product with the given variants.
    pub fn new(name: impl Into<String>, variants: Vec<VariantPrice>) -> Self {
        Self {
            name: name.into(),
            category: None,
            variants,
        }
    }

    /// Set the category.
    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Find a variant by exact label.
    pub fn variant(&self, label: &str) -> Option<&VariantPrice> {
        self.variants.iter().find(|v| v.label == label)
    }

    /// The first declared variant, used when no variant is requested.
    pub fn first_variant(&self) -> Option<&VariantPrice> {
        self.variants.first()
    }

    /// Whether any variant declares a sale price.
    pub fn has_sale_prices(&self) -> bool {
        self.variants.iter().any(|v| v.sale.is_some())
    }
}
