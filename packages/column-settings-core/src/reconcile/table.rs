//! Per-table owner of the canonical settings list.

use std::sync::Arc;

use super::{drag, toggle, visible_columns, PersistenceFacade, SettingsReconciler};
use crate::column::{ColumnDescriptor, ColumnSetting, FixedSide};
use crate::config::ReconcilerConfig;
use crate::store::KeyValueStore;

/// Callback invoked with the settings list after every change.
pub type SettingsListener = Box<dyn Fn(&[ColumnSetting]) + Send>;

/// Column settings of one table instance.
///
/// Owns the descriptors, the settings list and its cache key. Every
/// operation reads then writes the list, so a table shared across threads
/// must sit behind a single lock.
pub struct TableSettings {
    facade: PersistenceFacade,
    cache_key: String,
    descriptors: Vec<ColumnDescriptor>,
    version: Option<String>,
    settings: Vec<ColumnSetting>,
    listeners: Vec<SettingsListener>,
}

impl std::fmt::Debug for TableSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableSettings")
            .field("cache_key", &self.cache_key)
            .field("version", &self.version)
            .field("settings", &self.settings)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl TableSettings {
    /// Creates an empty table bound to `cache_key`.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        config: ReconcilerConfig,
        cache_key: impl Into<String>,
    ) -> Self {
        let reconciler = SettingsReconciler::new(store, config);
        Self {
            facade: PersistenceFacade::new(reconciler),
            cache_key: cache_key.into(),
            descriptors: Vec::new(),
            version: None,
            settings: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn cache_key(&self) -> &str {
        &self.cache_key
    }

    pub fn descriptors(&self) -> &[ColumnDescriptor] {
        &self.descriptors
    }

    pub fn settings(&self) -> &[ColumnSetting] {
        &self.settings
    }

    /// Schema signature of the current descriptors, once any were set.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn reconciler(&self) -> &SettingsReconciler {
        self.facade.reconciler()
    }

    /// Registers a listener for settings changes.
    pub fn subscribe(&mut self, listener: SettingsListener) {
        self.listeners.push(listener);
    }

    /// Replaces the column schema.
    ///
    /// The list is rebuilt, consulting the cache, only when the schema
    /// signature changes. Returns true if a rebuild happened.
    pub fn set_columns(&mut self, descriptors: Vec<ColumnDescriptor>) -> bool {
        let version = self.facade.reconciler().signature(&descriptors);
        self.descriptors = descriptors;
        if self.version.as_deref() == Some(version.as_str()) {
            return false;
        }

        self.settings = self
            .facade
            .reconciler()
            .rebuild(&self.descriptors, &self.cache_key, true);
        self.version = Some(version);
        self.emit();
        true
    }

    pub fn set_shown(&mut self, id: &str, show: bool) -> bool {
        let changed = toggle::set_shown(&mut self.settings, id, show);
        if changed {
            self.emit();
        }
        changed
    }

    pub fn set_all_shown(&mut self, show: bool) {
        toggle::set_all_shown(&mut self.settings, show);
        self.emit();
    }

    /// Toggles the fixed side of a column.
    pub fn set_fixed(&mut self, id: &str, side: FixedSide) -> bool {
        let changed = toggle::set_fixed(&mut self.settings, id, side);
        if changed {
            self.emit();
        }
        changed
    }

    pub fn set_pinned(&mut self, id: &str, pinned: bool) -> bool {
        let changed = toggle::set_pinned(&mut self.settings, id, pinned);
        if changed {
            self.emit();
        }
        changed
    }

    /// Drags the entry at `from` onto position `to`, if legal.
    pub fn move_entry(&mut self, from: usize, to: usize) -> bool {
        let moved = drag::move_setting(&mut self.settings, from, to);
        if moved {
            self.emit();
        }
        moved
    }

    /// Descriptors of the visible columns in display order.
    pub fn visible_columns(&self) -> Vec<ColumnDescriptor> {
        visible_columns(&self.settings)
    }

    /// Persists the current list and passes the visible columns to `notify`.
    pub fn save<F>(&self, notify: F)
    where
        F: FnOnce(Vec<ColumnDescriptor>),
    {
        let version = self
            .version
            .clone()
            .unwrap_or_else(|| self.facade.reconciler().signature(&self.descriptors));
        self.facade
            .save(&self.settings, &self.cache_key, &version, notify);
    }

    /// Discards persisted customizations and restores schema defaults.
    pub fn reset(&mut self) {
        self.settings = self.facade.reset(&self.descriptors, &self.cache_key);
        self.version = Some(self.facade.reconciler().signature(&self.descriptors));
        self.emit();
    }

    fn emit(&self) {
        for listener in &self.listeners {
            listener(&self.settings);
        }
    }
}
