//! In-memory store for native builds and tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::{CacheError, KvStore};

#[derive(Debug, Default)]
struct MemoryInner {
    entries: BTreeMap<String, String>,
    quota_bytes: Option<usize>,
    writes: u64,
}

impl MemoryInner {
    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

/// In-memory [`KvStore`].
///
/// Clones share the same entries, so a test can keep a handle to the store
/// it passed into a cart and inspect what was persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStore {
    /// Create an empty store with no quota.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that refuses writes once keys plus values exceed `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        let store = Self::new();
        store.inner.borrow_mut().quota_bytes = Some(bytes);
        store
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> u64 {
        self.inner.borrow().writes
    }
}

impl KvStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.inner.borrow().entries.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut inner = self.inner.borrow_mut();
        if let Some(quota) = inner.quota_bytes {
            if inner.used_bytes_without(key) + key.len() + value.len() > quota {
                return Err(CacheError::QuotaExceeded(key.to_string()));
            }
        }
        inner.entries.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.inner.borrow_mut().entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        Ok(self.inner.borrow().entries.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.set_raw("vardanCart", "[]").unwrap();
        assert_eq!(handle.get_raw("vardanCart").unwrap().as_deref(), Some("[]"));
        assert_eq!(handle.write_count(), 1);
    }

    #[test]
    fn test_quota_exceeded() {
        let store = MemoryStore::with_quota(16);
        store.set_raw("k", "small").unwrap();
        let err = store.set_raw("k", "a value that is far too long").unwrap_err();
        assert!(matches!(err, CacheError::QuotaExceeded(_)));
        // Failed write leaves the previous value intact.
        assert_eq!(store.get_raw("k").unwrap().as_deref(), Some("small"));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_overwrite_does_not_double_count_quota() {
        let store = MemoryStore::with_quota(10);
        store.set_raw("k", "12345").unwrap();
        store.set_raw("k", "67890").unwrap();
    }
}
