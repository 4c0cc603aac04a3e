//! Browser `localStorage` store.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::{CacheError, KvStore};

/// [`KvStore`] backed by `window.localStorage`.
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Open the window's local storage.
    pub fn open() -> Result<Self, CacheError> {
        let window = web_sys::window().ok_or_else(|| CacheError::OpenError("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| CacheError::OpenError(js_message(&e)))?
            .ok_or_else(|| CacheError::OpenError("localStorage unavailable".into()))?;
        Ok(Self { storage })
    }
}

impl KvStore for LocalStorage {
    fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.storage
            .get_item(key)
            .map_err(|e| CacheError::StoreError(js_message(&e)))
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError> {
        // Browsers raise a DOMException when the quota is exhausted.
        self.storage
            .set_item(key, value)
            .map_err(|_| CacheError::QuotaExceeded(key.to_string()))
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.storage
            .remove_item(key)
            .map_err(|e| CacheError::StoreError(js_message(&e)))
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let len = self
            .storage
            .length()
            .map_err(|e| CacheError::StoreError(js_message(&e)))?;
        let mut keys = Vec::with_capacity(len as usize);
        for i in 0..len {
            if let Ok(Some(key)) = self.storage.key(i) {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
