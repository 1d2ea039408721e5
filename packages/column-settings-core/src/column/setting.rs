//! Per-column customization state.

use serde::Serialize;

use super::FixedSide;

/// Core-owned customization record for one live column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSetting {
    /// Stable identity, unique within a settings list
    pub id: String,
    /// Display label
    pub label: String,
    /// Visible in the grid
    pub show: bool,
    /// Dense 0-based display position
    pub order: usize,
    /// Reorderable by dragging
    pub sort: bool,
    /// Explicitly excluded from reordering
    pub pinned: bool,
    /// Fixed region
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed: Option<FixedSide>,
    /// Field key of the originating descriptor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prop: Option<String>,
    /// Type tag of the originating descriptor
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub column_type: Option<String>,
    /// Reorderability before pinning is applied
    #[serde(skip)]
    pub(crate) base_sort: bool,
}

impl ColumnSetting {
    /// Creates a visible, reorderable, unfixed setting.
    pub fn new(id: impl Into<String>, label: impl Into<String>, order: usize) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            show: true,
            order,
            sort: true,
            pinned: false,
            fixed: None,
            prop: None,
            column_type: None,
            base_sort: true,
        }
    }

    /// Marks the setting pinned, recomputing `sort`.
    pub fn with_pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self.refresh_sort();
        self
    }

    /// Sets the fixed region.
    pub fn with_fixed(mut self, fixed: Option<FixedSide>) -> Self {
        self.fixed = fixed;
        self
    }

    /// Sets the base reorderability, recomputing `sort`.
    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.base_sort = sortable;
        self.refresh_sort();
        self
    }

    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    /// Region rank of this setting's fixed side.
    pub fn rank(&self) -> u8 {
        FixedSide::rank(self.fixed)
    }

    /// Reorderability the column had before pinning.
    pub fn base_sort(&self) -> bool {
        self.base_sort
    }

    pub(crate) fn refresh_sort(&mut self) {
        self.sort = self.base_sort && !self.pinned;
    }
}
