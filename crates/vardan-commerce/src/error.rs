//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront commerce operations.
///
/// Catalog misses, malformed stored carts and failed storage writes are
/// deliberately absent: those are logged and recovered where they happen.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Catalog reference data is inconsistent.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Catalog source could not be parsed.
    #[error("Failed to parse catalog: {0}")]
    CatalogParse(#[from] toml::de::Error),

    /// Line index outside the cart.
    #[error("No cart item at index {0}")]
    ItemNotInCart(usize),

    /// Checkout attempted on an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Product name missing from an add-to-cart request.
    #[error("Add-to-cart request is missing a product name")]
    MissingProductName,

    /// Storage backend failure surfaced to a caller that asked for it.
    #[error("Storage error: {0}")]
    Storage(#[from] vardan_cache::CacheError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
