//! Region-ranked stable ordering of settings.

use crate::column::ColumnSetting;

/// Sorts settings into left-fixed, unfixed, right-fixed bands.
///
/// Within a band the current `order` decides, ties keep their relative
/// position. Afterwards `order` is rewritten to the dense `0..n` sequence.
pub fn sort_settings(settings: &mut [ColumnSetting]) {
    settings.sort_by_key(|s| (s.rank(), s.order));
    renumber(settings);
}

/// Rewrites `order` from the current array position.
pub(crate) fn renumber(settings: &mut [ColumnSetting]) {
    for (index, setting) in settings.iter_mut().enumerate() {
        setting.order = index;
    }
}

/// Returns true if no column sits in a lower-ranked region than its predecessor.
pub fn is_region_banded(settings: &[ColumnSetting]) -> bool {
    settings.windows(2).all(|pair| pair[0].rank() <= pair[1].rank())
}
