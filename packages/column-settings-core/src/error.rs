//! Storage and cache record error types.

use thiserror::Error;

/// Errors raised by a [`KeyValueStore`](crate::store::KeyValueStore) backend.
///
/// These never escape the reconciliation API; `CacheStore` logs and absorbs
/// them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Storage is disabled, sandboxed or otherwise unreachable
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Write would exceed the store's capacity
    #[error("Quota exceeded writing '{key}': requested {requested} bytes, limit {limit} bytes")]
    QuotaExceeded {
        key: String,
        requested: usize,
        limit: usize,
    },

    /// Backing medium has no space left
    #[error("Storage full: {0}")]
    StorageFull(String),

    /// Key cannot be mapped onto the backing medium
    #[error("Invalid key '{0}'")]
    InvalidKey(String),

    /// I/O error in the backing medium
    #[error("I/O error: {0}")]
    Io(String),

    /// Transient I/O error that may succeed on retry
    #[error("Transient I/O error: {0}")]
    TransientIo(String),
}

/// Structural validation failures of a persisted cache record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Stored bytes are not valid UTF-8 JSON
    #[error("Record is not valid JSON: {0}")]
    NotJson(String),

    /// Top-level value is not an object
    #[error("Record is not a JSON object")]
    NotAnObject,

    /// `version` missing or not a string
    #[error("Record version is missing or not a string")]
    InvalidVersion,

    /// `order` missing or not an array of strings
    #[error("Record order is missing or not an array of strings")]
    InvalidOrder,

    /// `columns` missing or not an object
    #[error("Record columns is missing or not an object")]
    InvalidColumns,

    /// Column entry is not an object or lacks a boolean `show`
    #[error("Column '{id}' has no boolean show flag")]
    InvalidShow { id: String },

    /// Column entry carries a non-boolean `pinned`
    #[error("Column '{id}' has a non-boolean pinned flag")]
    InvalidPinned { id: String },

    /// Column entry carries a `fixed` other than "left" or "right"
    #[error("Column '{id}' has an invalid fixed side")]
    InvalidFixed { id: String },
}
