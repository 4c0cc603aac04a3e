//! Storefront commerce logic for Vardan Naturals.
//!
//! This crate holds everything the storefront does with products and money:
//!
//! - **Catalog**: product prices by variant, with optional sale prices
//! - **Cart**: line items persisted to a key-value store, price sync, totals
//! - **Binder**: typed add-to-cart requests and inline-handler migration
//! - **Checkout**: order message composition and messaging deep links
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use vardan_cache::MemoryStore;
//! use vardan_commerce::prelude::*;
//!
//! let config = StoreConfig::default();
//! let catalog = PriceCatalog::builtin().unwrap();
//! let mut cart = CartStore::new(MemoryStore::new(), &config).with_catalog(Rc::new(catalog));
//!
//! cart.add_variant("Shea Butter Soap", "100g", "images/shea.jpg");
//! cart.add_variant("Shea Butter Soap", "100g", "images/shea.jpg");
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.total().display(), "\u{20b9}498");
//! ```

pub mod error;
pub mod money;

pub mod binder;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;

pub use error::CommerceError;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StoreConfig;
    pub use crate::error::CommerceError;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{CatalogProduct, PriceCatalog, PriceLookup, SaleConfig, VariantPrice};

    // Cart
    pub use crate::cart::{
        AddOutcome, CartController, CartLineItem, CartStore, CartView, CheckoutOutcome,
        LinkOpener, PriceSource, Prompter,
    };

    // Binder
    pub use crate::binder::{AddToCartRequest, AttributeTarget, ControlReader, ResolvedAdd};

    // Checkout
    pub use crate::checkout::{compose_order_message, whatsapp_link};
}
