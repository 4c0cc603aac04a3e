//! Local key-value storage for the Vardan storefront.
//!
//! Provides a small, `localStorage`-shaped API with automatic JSON
//! serialization, plus interchangeable backends:
//!
//! - [`MemoryStore`] for native builds and tests
//! - [`FileStore`] for offline inspection from the CLI
//! - `LocalStorage` (wasm32 only) for the browser
//!
//! # Example
//!
//! ```rust,ignore
//! use vardan_cache::{Cache, LocalStorage};
//!
//! let cache = Cache::new(LocalStorage::open()?);
//! cache.set("vardanCart", &items)?;
//! let items: Option<Vec<Item>> = cache.get("vardanCart")?;
//! ```

mod error;
mod file;
mod kv;
mod memory;

#[cfg(target_arch = "wasm32")]
mod browser;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::{Cache, KvStore};
pub use memory::MemoryStore;

#[cfg(target_arch = "wasm32")]
pub use browser::LocalStorage;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
