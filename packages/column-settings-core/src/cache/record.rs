//! Persisted cache record format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::column::{ColumnSetting, FixedSide};
use crate::error::RecordError;

use super::validation::validate_record;

/// Persisted override for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedColumn {
    /// Visibility
    pub show: bool,
    /// Pinned flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
    /// Fixed side; absent defers to the descriptor and column type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed: Option<FixedSide>,
}

/// Versioned record of user column customizations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheRecord {
    /// Schema signature the record was written against
    pub version: String,
    /// Ids of reorderable columns in persisted order
    pub order: Vec<String>,
    /// Per-column overrides keyed by id
    pub columns: BTreeMap<String, CachedColumn>,
}

impl CacheRecord {
    /// Builds a record from a settings list.
    ///
    /// `order` holds only reorderable entries, sorted by their current order.
    pub fn from_settings(settings: &[ColumnSetting], version: impl Into<String>) -> Self {
        let mut reorderable: Vec<&ColumnSetting> = settings.iter().filter(|s| s.sort).collect();
        reorderable.sort_by_key(|s| s.order);

        let columns = settings
            .iter()
            .map(|s| {
                (
                    s.id.clone(),
                    CachedColumn {
                        show: s.show,
                        pinned: Some(s.pinned),
                        fixed: s.fixed,
                    },
                )
            })
            .collect();

        Self {
            version: version.into(),
            order: reorderable.into_iter().map(|s| s.id.clone()).collect(),
            columns,
        }
    }

    /// Parses and structurally validates stored text.
    pub fn parse(raw: &str) -> Result<Self, RecordError> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|e| RecordError::NotJson(e.to_string()))?;
        validate_record(&value)?;
        serde_json::from_value(value).map_err(|e| RecordError::NotJson(e.to_string()))
    }

    /// Serializes the record to its JSON wire form.
    pub fn to_json(&self) -> String {
        // Plain strings, bools and maps: serialization is infallible
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Position of an id in the persisted order.
    pub fn order_index(&self) -> BTreeMap<&str, usize> {
        self.order
            .iter()
            .enumerate()
            .map(|(index, id)| (id.as_str(), index))
            .collect()
    }
}
