//! Cache error types.

use thiserror::Error;

/// Errors that can occur when using local storage.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Failed to open the store.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failed to perform store operation.
    #[error("Store operation failed: {0}")]
    StoreError(String),

    /// The store refused a write because it is full.
    #[error("Storage quota exceeded for key: {0}")]
    QuotaExceeded(String),

    /// Filesystem error from a file-backed store.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
