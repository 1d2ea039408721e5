//! Column settings engine for configuration-driven data grids.
//!
//! Derives stable column identities, fingerprints the column schema,
//! reconciles it against a versioned cache of user customizations
//! (visibility, order, pinning, fixed side), gates drag reordering and
//! persists the result back through a fallible key-value store.

pub mod cache;
pub mod column;
pub mod config;
pub mod error;
pub mod reconcile;
pub mod store;

pub use cache::{CacheRecord, CacheStatus, CacheStore, CachedColumn};
pub use column::{identity_of, signature_of, ColumnDescriptor, ColumnSetting, FixedSide};
pub use config::{FileStoreConfig, ReconcilerConfig, RetryPolicy};
pub use error::{RecordError, StoreError};
pub use reconcile::{can_move, sort_settings, PersistenceFacade, SettingsReconciler, TableSettings};
pub use store::{FileStore, KeyValueStore, MemoryStore};
