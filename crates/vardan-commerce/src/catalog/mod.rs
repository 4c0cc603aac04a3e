//! Price catalog module.
//!
//! Contains the read-only product price reference data and its lookups.

mod prices;
mod product;

pub use prices::{PriceCatalog, PriceLookup, SaleConfig};
pub use product::{CatalogProduct, VariantPrice, DEFAULT_VARIANT};
