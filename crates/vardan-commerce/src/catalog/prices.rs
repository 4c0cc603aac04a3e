//! Price catalog: read-only product prices with optional sale overrides.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use vardan_observability::StructuredLogger;

use crate::catalog::{CatalogProduct, VariantPrice, DEFAULT_VARIANT};
use crate::error::CommerceError;
use crate::money::Money;

/// Catalog shipped with the storefront.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.toml");

/// Source of current prices for the cart.
///
/// `None` means "not found"; callers fall back to their next price source.
pub trait PriceLookup {
    /// Resolve the price of `name` in `variant`, or of its first variant
    /// when `variant` is `None` or empty.
    fn price(&self, name: &str, variant: Option<&str>) -> Option<Money>;
}

/// Global sale switch.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaleConfig {
    /// When true, declared sale prices replace regular prices.
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    sale: SaleConfig,
    #[serde(default)]
    products: Vec<CatalogProduct>,
}

/// Immutable price catalog.
#[derive(Debug, Clone)]
pub struct PriceCatalog {
    products: Vec<CatalogProduct>,
    index: HashMap<String, usize>,
    sale: SaleConfig,
    logger: StructuredLogger,
}

impl PriceCatalog {
    /// Build a catalog, validating the reference data.
    pub fn new(products: Vec<CatalogProduct>, sale: SaleConfig) -> Result<Self, CommerceError> {
        let mut index = HashMap::with_capacity(products.len());
        for (i, product) in products.iter().enumerate() {
            if product.variants.is_empty() {
                return Err(CommerceError::InvalidCatalog(format!(
                    "product '{}' has no variants",
                    product.name
                )));
            }
            let mut labels = HashSet::new();
            for variant in &product.variants {
                if !labels.insert(variant.label.as_str()) {
                    return Err(CommerceError::InvalidCatalog(format!(
                        "product '{}' declares variant '{}' twice",
                        product.name, variant.label
                    )));
                }
            }
            if index.insert(product.name.clone(), i).is_some() {
                return Err(CommerceError::InvalidCatalog(format!(
                    "product '{}' is declared twice",
                    product.name
                )));
            }
        }

        Ok(Self {
            products,
            index,
            sale,
            logger: StructuredLogger::new("catalog"),
        })
    }

    /// Parse a catalog from TOML.
    pub fn from_toml(source: &str) -> Result<Self, CommerceError> {
        let file: CatalogFile = toml::from_str(source)?;
        Self::new(file.products, file.sale)
    }

    /// The catalog embedded in the crate.
    pub fn builtin() -> Result<Self, CommerceError> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    /// Return a copy with the sale switch forced on or off.
    pub fn with_sale_enabled(mut self, enabled: bool) -> Self {
        self.sale.enabled = enabled;
        self
    }

    /// Whether sale prices are currently applied.
    pub fn sale_enabled(&self) -> bool {
        self.sale.enabled
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products in declaration order.
    pub fn all_products(&self) -> &[CatalogProduct] {
        &self.products
    }

    /// Look up a product by exact name.
    pub fn product(&self, name: &str) -> Option<&CatalogProduct> {
        self.index.get(name).map(|&i| &self.products[i])
    }

    /// Resolve a price.
    ///
    /// Order: sale price for the exact variant (sales enabled), regular price
    /// for the exact variant, first declared variant when no variant is
    /// given. Unknown products and unknown named variants are not found.
    pub fn get_price(&self, name: &str, variant: Option<&str>) -> Option<Money> {
        let Some(product) = self.product(name) else {
            self.logger
                .warn_builder("Product not found")
                .field("product", name)
                .emit();
            return None;
        };

        match variant.filter(|v| !v.is_empty()) {
            Some(label) => {
                let Some(entry) = product.variant(label) else {
                    self.logger
                        .warn_builder("Variant not found")
                        .field("product", name)
                        .field("variant", label)
                        .emit();
                    return None;
                };
                if self.sale.enabled {
                    if let Some(sale) = entry.sale_price() {
                        return Some(sale);
                    }
                }
                Some(entry.regular())
            }
            None => product.first_variant().map(VariantPrice::regular),
        }
    }

    /// Resolve a price and format it for display (e.g. "₹249").
    pub fn formatted_price(&self, name: &str, variant: Option<&str>) -> Option<String> {
        self.get_price(name, variant).map(|p| p.display())
    }

    /// Regular-price variants of a product; sale prices are never listed here.
    pub fn product_variants(&self, name: &str) -> Option<&[VariantPrice]> {
        match self.product(name) {
            Some(product) => Some(&product.variants),
            None => {
                self.logger
                    .warn_builder("Product not found")
                    .field("product", name)
                    .emit();
                None
            }
        }
    }

    /// Render every variant as `"₹249 (100g) | ₹170 (55g)"`.
    ///
    /// A lone `default` variant renders as the bare price. Unknown products
    /// render as an empty string.
    pub fn format_price_display(&self, name: &str) -> String {
        let Some(variants) = self.product_variants(name) else {
            return String::new();
        };

        if let [only] = variants {
            if only.label == DEFAULT_VARIANT {
                return only.regular().display();
            }
        }

        variants
            .iter()
            .map(|v| format!("{} ({})", v.regular().display(), v.label))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Whether the product is part of an active sale.
    pub fn is_on_sale(&self, name: &str) -> bool {
        self.sale.enabled
            && self
                .product(name)
                .map(CatalogProduct::has_sale_prices)
                .unwrap_or(false)
    }

    /// Sale discount percentage, `round((regular - sale) / regular * 100)`.
    ///
    /// Defined only while the product is on sale and the exact variant has
    /// both a regular and a sale price.
    pub fn sale_discount(&self, name: &str, variant: &str) -> Option<i64> {
        if !self.is_on_sale(name) {
            return None;
        }
        let entry = self.product(name)?.variant(variant)?;
        let sale = entry.sale?;
        if entry.price == 0 {
            return None;
        }
        let regular = f64::from(entry.price);
        Some(((regular - f64::from(sale)) / regular * 100.0).round() as i64)
    }

    /// Case-insensitive substring search over product names.
    pub fn search(&self, term: &str) -> Vec<&str> {
        let term = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&term))
            .map(|p| p.name.as_str())
            .collect()
    }
}

impl PriceLookup for PriceCatalog {
    fn price(&self, name: &str, variant: Option<&str>) -> Option<Money> {
        self.get_price(name, variant)
    }
}
