//! Caller-owned column definitions.

use serde::{Deserialize, Serialize};

/// Side of the grid a column is fixed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixedSide {
    Left,
    Right,
}

impl FixedSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            FixedSide::Left => "left",
            FixedSide::Right => "right",
        }
    }

    /// Region rank: left-fixed 0, unfixed 1, right-fixed 2.
    pub fn rank(side: Option<FixedSide>) -> u8 {
        match side {
            Some(FixedSide::Left) => 0,
            None => 1,
            Some(FixedSide::Right) => 2,
        }
    }
}

impl std::fmt::Display for FixedSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical definition of a table column.
///
/// Every field is optional; absent values fall back to reconciler
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnDescriptor {
    /// Explicit identity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Field key of the row data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prop: Option<String>,
    /// Header label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Type tag (e.g. "action", "selection")
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub column_type: Option<String>,
    /// Default visibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    /// Default reorderability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<bool>,
    /// Default pinned flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
    /// Default fixed side
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed: Option<FixedSide>,
}

impl ColumnDescriptor {
    /// Creates a descriptor with an explicit identity.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Creates a descriptor keyed by a row field.
    pub fn with_prop(prop: impl Into<String>) -> Self {
        Self {
            prop: Some(prop.into()),
            ..Default::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn column_type(mut self, column_type: impl Into<String>) -> Self {
        self.column_type = Some(column_type.into());
        self
    }

    pub fn show(mut self, show: bool) -> Self {
        self.show = Some(show);
        self
    }

    pub fn sort(mut self, sort: bool) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = Some(pinned);
        self
    }

    pub fn fixed(mut self, side: FixedSide) -> Self {
        self.fixed = Some(side);
        self
    }
}
