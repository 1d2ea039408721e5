//! Visibility, pin and fixed-side mutations.
//!
//! Mutations addressing an unknown id are no-ops and return false.

use super::sort::sort_settings;
use crate::column::{ColumnSetting, FixedSide};

/// Updates `show` of one entry without reordering.
pub fn set_shown(settings: &mut [ColumnSetting], id: &str, show: bool) -> bool {
    match settings.iter_mut().find(|s| s.id == id) {
        Some(setting) => {
            setting.show = show;
            true
        }
        None => false,
    }
}

/// Applies `show` to every entry.
pub fn set_all_shown(settings: &mut [ColumnSetting], show: bool) {
    for setting in settings.iter_mut() {
        setting.show = show;
    }
}

/// Fixes an entry to `side`, or unfixes it if it is already fixed there.
///
/// The list is re-sorted since the entry changes region.
pub fn set_fixed(settings: &mut [ColumnSetting], id: &str, side: FixedSide) -> bool {
    let Some(setting) = settings.iter_mut().find(|s| s.id == id) else {
        return false;
    };
    setting.fixed = if setting.fixed == Some(side) {
        None
    } else {
        Some(side)
    };
    setting.refresh_sort();
    sort_settings(settings);
    true
}

/// Pins or unpins an entry, recomputing its reorderability.
pub fn set_pinned(settings: &mut [ColumnSetting], id: &str, pinned: bool) -> bool {
    let Some(setting) = settings.iter_mut().find(|s| s.id == id) else {
        return false;
    };
    setting.pinned = pinned;
    setting.refresh_sort();
    sort_settings(settings);
    true
}
