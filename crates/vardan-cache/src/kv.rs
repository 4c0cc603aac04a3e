//! Key-Value store abstraction with automatic serialization.

use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};

/// A synchronous string key-value store.
///
/// Mirrors the browser `localStorage` contract: values are strings, reads
/// and writes complete immediately, and writes may be refused (e.g. quota).
pub trait KvStore {
    /// Read the raw string stored under `key`.
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store a raw string under `key`.
    fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Remove `key` from the store. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// List all keys in the store.
    fn keys(&self) -> Result<Vec<String>, CacheError>;
}

impl<S: KvStore + ?Sized> KvStore for Box<S> {
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError> {
        (**self).set_raw(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        (**self).delete(key)
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        (**self).keys()
    }
}

/// Type-safe cache over any [`KvStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
///
/// # Example
///
/// ```
/// use vardan_cache::{Cache, MemoryStore};
///
/// let cache = Cache::new(MemoryStore::new());
/// cache.set("greeting", &vec!["hello".to_string()]).unwrap();
/// let value: Option<Vec<String>> = cache.get("greeting").unwrap();
/// assert_eq!(value, Some(vec!["hello".to_string()]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Cache<S> {
    store: S,
}

impl<S: KvStore> Cache<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get_raw(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Get the raw string stored under a key.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.store.get_raw(key)
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let raw = serde_json::to_string(value)?;
        self.store.set_raw(key, &raw)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.store.get_raw(key)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_get_missing_key_is_none() {
        let cache = Cache::new(MemoryStore::new());
        let value: Option<u32> = cache.get("missing").unwrap();
        assert!(value.is_none());
        assert!(!cache.exists("missing").unwrap());
    }

    #[test]
    fn test_set_then_get() {
        let cache = Cache::new(MemoryStore::new());
        cache.set("count", &3u32).unwrap();
        assert_eq!(cache.get::<u32>("count").unwrap(), Some(3));
        assert_eq!(cache.get_raw("count").unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn test_get_malformed_value_is_error() {
        let store = MemoryStore::new();
        store.set_raw("cart", "{not json").unwrap();
        let cache = Cache::new(store);
        assert!(matches!(
            cache.get::<Vec<u32>>("cart"),
            Err(CacheError::SerializeError(_))
        ));
    }

    #[test]
    fn test_delete() {
        let cache = Cache::new(MemoryStore::new());
        cache.set("k", "v").unwrap();
        cache.delete("k").unwrap();
        assert!(!cache.exists("k").unwrap());
        cache.delete("k").unwrap();
    }

    #[test]
    fn test_boxed_store() {
        let boxed: Box<dyn KvStore> = Box::new(MemoryStore::new());
        let cache = Cache::new(boxed);
        cache.set("k", &1u8).unwrap();
        assert_eq!(cache.store().keys().unwrap(), vec!["k".to_string()]);
    }
}
