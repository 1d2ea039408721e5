//! Reconciliation of the live column schema with persisted customizations.

mod drag;
mod persistence;
mod sort;
mod table;
mod toggle;


pub use drag::{can_move, finish_drag, move_setting};
pub use persistence::{visible_columns, PersistenceFacade};
pub use sort::{is_region_banded, sort_settings};
pub use table::{SettingsListener, TableSettings};
pub use toggle::{set_all_shown, set_fixed, set_pinned, set_shown};

use std::collections::HashSet;
use std::sync::Arc;

use crate::cache::{CacheRecord, CacheStore};
use crate::column::{identity_with_prefix, signature_with_separator, ColumnDescriptor, ColumnSetting};
use crate::config::ReconcilerConfig;
use crate::store::KeyValueStore;

/// Builds canonical settings lists from a column schema and its cache.
#[derive(Debug, Clone)]
pub struct SettingsReconciler {
    cache: CacheStore,
    config: ReconcilerConfig,
}

impl SettingsReconciler {
    /// Creates a reconciler over the given backend.
    pub fn new(store: Arc<dyn KeyValueStore>, config: ReconcilerConfig) -> Self {
        Self {
            cache: CacheStore::new(store, &config),
            config,
        }
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    pub fn config(&self) -> &ReconcilerConfig {
        &self.config
    }

    /// Schema signature under this reconciler's policy.
    pub fn signature(&self, descriptors: &[ColumnDescriptor]) -> String {
        signature_with_separator(
            descriptors,
            &self.config.signature_separator,
            &self.config.positional_prefix,
        )
    }

    /// Produces the settings list for a schema, in final display order.
    ///
    /// With `use_cache` the record under `cache_key` is applied if it matches
    /// the schema signature; otherwise descriptor and type defaults win.
    pub fn rebuild(
        &self,
        descriptors: &[ColumnDescriptor],
        cache_key: &str,
        use_cache: bool,
    ) -> Vec<ColumnSetting> {
        let version = self.signature(descriptors);
        let cached = if use_cache {
            self.cache.read(cache_key, &version)
        } else {
            None
        };

        let mut settings = self.build_settings(descriptors, cached.as_ref());
        sort_settings(&mut settings);

        tracing::debug!(
            "Rebuilt {} column settings for '{}' (cache {})",
            settings.len(),
            cache_key,
            if cached.is_some() { "applied" } else { "absent" }
        );
        settings
    }

    fn build_settings(
        &self,
        descriptors: &[ColumnDescriptor],
        cached: Option<&CacheRecord>,
    ) -> Vec<ColumnSetting> {
        let persisted_order = cached.map(CacheRecord::order_index).unwrap_or_default();
        let mut seen = HashSet::with_capacity(descriptors.len());

        descriptors
            .iter()
            .enumerate()
            .map(|(index, descriptor)| {
                let mut id =
                    identity_with_prefix(descriptor, index, &self.config.positional_prefix);
                if !seen.insert(id.clone()) {
                    let unique = format!("{}#{}", id, index);
                    tracing::warn!(
                        "Duplicate column identity '{}' at index {}, using '{}'",
                        id,
                        index,
                        unique
                    );
                    id = unique;
                    seen.insert(id.clone());
                }

                let column_type = descriptor.column_type.as_deref();
                let override_ = cached.and_then(|record| record.columns.get(&id));

                let pinned = override_
                    .and_then(|c| c.pinned)
                    .or(descriptor.pinned)
                    .unwrap_or(false);
                let base_sort =
                    !self.config.is_locked_type(column_type) && descriptor.sort.unwrap_or(true);
                let sort = base_sort && !pinned;

                let fixed = override_
                    .and_then(|c| c.fixed)
                    .or(descriptor.fixed)
                    .or_else(|| self.config.fixed_side_for(column_type));

                let order = if sort {
                    persisted_order.get(id.as_str()).copied().unwrap_or(index)
                } else {
                    index
                };

                let show = override_
                    .map(|c| c.show)
                    .or(descriptor.show)
                    .unwrap_or(true);

                let label = descriptor
                    .label
                    .as_deref()
                    .filter(|l| !l.is_empty())
                    .or_else(|| self.config.label_for(column_type))
                    .or(descriptor.prop.as_deref().filter(|p| !p.is_empty()))
                    .unwrap_or(&id)
                    .to_string();

                ColumnSetting {
                    label,
                    show,
                    order,
                    sort,
                    pinned,
                    fixed,
                    prop: descriptor.prop.clone(),
                    column_type: descriptor.column_type.clone(),
                    base_sort,
                    id,
                }
            })
            .collect()
    }
}
