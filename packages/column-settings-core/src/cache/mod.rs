//! Defensive cache layer over a fallible key-value store.
//!
//! Read failures yield "absent", write and remove failures are logged and
//! swallowed. A record that fails structural validation is deleted on read;
//! a valid record with the wrong schema version is left untouched.

mod record;
mod validation;


pub use record::{CacheRecord, CachedColumn};
pub use validation::validate_record;

use std::sync::Arc;

use crate::config::{ReconcilerConfig, RetryPolicy};
use crate::error::RecordError;
use crate::store::{retry_transient, KeyValueStore};

/// Outcome of looking up a cache record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheStatus {
    /// Store could not be reached
    Unavailable,
    /// No record under the key
    Missing,
    /// Stored bytes failed structural validation
    Corrupt(RecordError),
    /// Valid record written against another schema version
    Stale { found: String },
    /// Applicable record
    Valid(CacheRecord),
}

/// Cache store wrapping a shared key-value backend.
#[derive(Clone)]
pub struct CacheStore {
    store: Arc<dyn KeyValueStore>,
    probe_key: String,
    retry: RetryPolicy,
}

impl std::fmt::Debug for CacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheStore")
            .field("probe_key", &self.probe_key)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl CacheStore {
    /// Creates a cache store over the given backend.
    pub fn new(store: Arc<dyn KeyValueStore>, config: &ReconcilerConfig) -> Self {
        Self {
            store,
            probe_key: config.probe_key.clone(),
            retry: config.retry,
        }
    }

    /// Returns the underlying backend.
    pub fn backend(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Checks that the backend accepts a harmless write and delete.
    pub fn probe(&self) -> bool {
        let written = self.store.set(&self.probe_key, "1");
        let removed = self.store.remove(&self.probe_key);
        match written.and(removed) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("Column settings storage unavailable: {}", e);
                false
            }
        }
    }

    /// Classifies the record under `key` without deleting or rewriting it.
    ///
    /// Availability is probed first, which writes and removes the probe key.
    pub fn inspect(&self, key: &str, expected_version: &str) -> CacheStatus {
        if !self.probe() {
            return CacheStatus::Unavailable;
        }

        let raw = match retry_transient(&self.retry, "read", key, || self.store.get(key)) {
            Ok(Some(raw)) => raw,
            Ok(None) => return CacheStatus::Missing,
            Err(e) => {
                tracing::debug!("Failed to read column settings '{}': {}", key, e);
                return CacheStatus::Unavailable;
            }
        };

        match CacheRecord::parse(&raw) {
            Ok(record) if record.version == expected_version => CacheStatus::Valid(record),
            Ok(record) => CacheStatus::Stale {
                found: record.version,
            },
            Err(e) => CacheStatus::Corrupt(e),
        }
    }

    /// Reads the applicable record for a key.
    ///
    /// Corrupt records are removed as a side effect. Stale records are kept,
    /// since the schema may revert to the version they were written for.
    pub fn read(&self, key: &str, expected_version: &str) -> Option<CacheRecord> {
        match self.inspect(key, expected_version) {
            CacheStatus::Valid(record) => {
                tracing::debug!("Applying cached column settings for '{}'", key);
                Some(record)
            }
            CacheStatus::Corrupt(e) => {
                tracing::warn!("Discarding corrupt column settings '{}': {}", key, e);
                self.remove(key);
                None
            }
            CacheStatus::Stale { found } => {
                tracing::debug!(
                    "Ignoring column settings '{}': version '{}' does not match '{}'",
                    key,
                    found,
                    expected_version
                );
                None
            }
            CacheStatus::Missing | CacheStatus::Unavailable => None,
        }
    }

    /// Writes a record, swallowing any failure.
    pub fn write(&self, key: &str, record: &CacheRecord) {
        let json = record.to_json();
        if let Err(e) = retry_transient(&self.retry, "write", key, || self.store.set(key, &json)) {
            tracing::warn!("Failed to save column settings '{}': {}", key, e);
        }
    }

    /// Removes a record, swallowing any failure.
    pub fn remove(&self, key: &str) {
        if let Err(e) = retry_transient(&self.retry, "remove", key, || self.store.remove(key)) {
            tracing::warn!("Failed to remove column settings '{}': {}", key, e);
        }
    }
}
