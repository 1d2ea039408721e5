//! Drag-reorder legality and completion.

use super::sort::{renumber, sort_settings};
use crate::column::ColumnSetting;

/// Decides whether `dragged` may be dropped next to `related`.
///
/// Fails for a missing or non-reorderable dragged entry, when either side
/// is pinned, and when the two entries sit in different fixed regions.
pub fn can_move(dragged: Option<&ColumnSetting>, related: Option<&ColumnSetting>) -> bool {
    let Some(dragged) = dragged else {
        return false;
    };
    if !dragged.sort {
        return false;
    }
    if dragged.pinned || related.is_some_and(|r| r.pinned) {
        return false;
    }
    if let Some(related) = related {
        if dragged.fixed != related.fixed {
            return false;
        }
    }
    true
}

/// Renumbers after a drag library reordered the list, then re-bands it.
pub fn finish_drag(settings: &mut [ColumnSetting]) {
    renumber(settings);
    sort_settings(settings);
}

/// Moves the entry at `from` to position `to` if the move is legal.
///
/// The entry currently at `to` is the related entry. Returns false and
/// leaves the list untouched for out-of-range indices or illegal moves.
pub fn move_setting(settings: &mut Vec<ColumnSetting>, from: usize, to: usize) -> bool {
    if from >= settings.len() || to >= settings.len() {
        return false;
    }
    if !can_move(settings.get(from), settings.get(to)) {
        tracing::trace!(
            "Rejected column move {} -> {} ('{}' onto '{}')",
            from,
            to,
            settings[from].id,
            settings[to].id
        );
        return false;
    }

    let entry = settings.remove(from);
    settings.insert(to, entry);
    finish_drag(settings);
    true
}
