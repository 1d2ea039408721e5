//! Save and reset orchestration.

use super::SettingsReconciler;
use crate::cache::CacheRecord;
use crate::column::{ColumnDescriptor, ColumnSetting};

/// Derives descriptors for the visible columns, in display order.
pub fn visible_columns(settings: &[ColumnSetting]) -> Vec<ColumnDescriptor> {
    let mut visible: Vec<&ColumnSetting> = settings.iter().filter(|s| s.show).collect();
    visible.sort_by_key(|s| s.order);

    visible
        .into_iter()
        .map(|s| ColumnDescriptor {
            id: Some(s.id.clone()),
            prop: s.prop.clone(),
            label: Some(s.label.clone()),
            column_type: s.column_type.clone(),
            show: Some(true),
            sort: Some(s.sort),
            pinned: Some(s.pinned),
            fixed: s.fixed,
        })
        .collect()
}

/// Writes settings back through the cache and rebuilds on reset.
#[derive(Debug, Clone)]
pub struct PersistenceFacade {
    reconciler: SettingsReconciler,
}

impl PersistenceFacade {
    pub fn new(reconciler: SettingsReconciler) -> Self {
        Self { reconciler }
    }

    pub fn reconciler(&self) -> &SettingsReconciler {
        &self.reconciler
    }

    /// Persists `settings` under `cache_key` and reports the visible columns.
    ///
    /// A failed write is logged and otherwise invisible to the caller;
    /// `notify` runs either way.
    pub fn save<F>(
        &self,
        settings: &[ColumnSetting],
        cache_key: &str,
        schema_version: &str,
        notify: F,
    ) where
        F: FnOnce(Vec<ColumnDescriptor>),
    {
        let record = CacheRecord::from_settings(settings, schema_version);
        self.reconciler.cache().write(cache_key, &record);
        notify(visible_columns(settings));
    }

    /// Clears the record under `cache_key` and rebuilds from defaults.
    pub fn reset(&self, descriptors: &[ColumnDescriptor], cache_key: &str) -> Vec<ColumnSetting> {
        self.reconciler.cache().remove(cache_key);
        self.reconciler.rebuild(descriptors, cache_key, false)
    }
}
