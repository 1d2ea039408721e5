//! Fallible key-value byte stores backing the column settings cache.

mod file;
mod io_utils;
mod memory;

pub use file::FileStore;
pub use io_utils::{classify_io_error, retry_transient};
pub use memory::MemoryStore;

use crate::error::StoreError;

/// Backend trait for raw settings storage.
///
/// Every call may fail; callers are expected to wrap accordingly.
pub trait KeyValueStore: Send + Sync {
    /// Get the stored value for a key.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Set the value for a key, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
