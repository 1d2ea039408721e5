//! End-to-end scenarios through the public API.

use ntest::timeout;
use std::sync::{Arc, Mutex};

use column_settings_core::reconcile::{is_region_banded, set_fixed};
use column_settings_core::{
    can_move, signature_of, ColumnDescriptor, ColumnSetting, FixedSide, KeyValueStore,
    MemoryStore, ReconcilerConfig, TableSettings,
};

fn wide_schema(count: usize) -> Vec<ColumnDescriptor> {
    let mut columns = vec![ColumnDescriptor::default().column_type("selection")];
    columns.extend((0..count).map(|i| ColumnDescriptor::with_prop(format!("field_{}", i))));
    columns.push(ColumnDescriptor::with_id("ops").column_type("action"));
    columns
}

#[timeout(2000)]
#[test]
fn test_interactive_session() {
    let store = Arc::new(MemoryStore::new());
    let changes: Arc<Mutex<Vec<Vec<String>>>> = Arc::new(Mutex::new(Vec::new()));

    let mut table = TableSettings::new(store.clone(), ReconcilerConfig::default(), "wide");
    let sink = changes.clone();
    table.subscribe(Box::new(move |settings: &[ColumnSetting]| {
        sink.lock()
            .unwrap()
            .push(settings.iter().map(|s| s.id.clone()).collect());
    }));
    table.set_columns(wide_schema(6));

    // Drag the last data column to the front of the unfixed band
    assert!(table.move_entry(6, 1));
    assert_eq!(table.settings()[1].id, "field_5");

    // Crossing into the left-fixed band is rejected
    assert!(!table.move_entry(1, 0));

    // Fixing a column moves it into the left band
    assert!(table.set_fixed("field_2", FixedSide::Left));
    assert_eq!(table.settings()[1].id, "field_2");
    assert!(is_region_banded(table.settings()));

    // Pinned columns can neither move nor be displaced
    assert!(table.set_pinned("field_0", true));
    let pinned_at = table
        .settings()
        .iter()
        .position(|s| s.id == "field_0")
        .unwrap();
    assert!(!table.move_entry(pinned_at, pinned_at + 1));
    assert!(!table.move_entry(pinned_at + 1, pinned_at));

    let mut visible = Vec::new();
    table.save(|columns| visible = columns);
    assert_eq!(visible.len(), 8);
    assert!(store.contains("wide"));

    assert_eq!(changes.lock().unwrap().len(), 4);

    let mut orders: Vec<usize> = table.settings().iter().map(|s| s.order).collect();
    orders.sort_unstable();
    assert_eq!(orders, (0..table.settings().len()).collect::<Vec<_>>());
}

#[timeout(2000)]
#[test]
fn test_schema_growth_invalidates_but_keeps_cache() {
    let store = Arc::new(MemoryStore::new());
    let mut table = TableSettings::new(store.clone(), ReconcilerConfig::default(), "grow");
    table.set_columns(wide_schema(2));
    table.set_shown("field_1", false);
    table.save(|_| {});

    // A new column changes the signature: defaults apply, record stays
    table.set_columns(wide_schema(3));
    assert!(table.settings().iter().all(|s| s.show));
    assert!(store.contains("grow"));

    // Reverting the schema brings the customization back
    table.set_columns(wide_schema(2));
    let field_1 = table
        .settings()
        .iter()
        .find(|s| s.id == "field_1")
        .unwrap();
    assert!(!field_1.show);
}

#[timeout(2000)]
#[test]
fn test_record_written_by_hand_is_applied() {
    let store = Arc::new(MemoryStore::new());
    let schema = vec![
        ColumnDescriptor::with_prop("a"),
        ColumnDescriptor::with_prop("b"),
        ColumnDescriptor::with_prop("c"),
    ];
    let record = serde_json::json!({
        "version": signature_of(&schema),
        "order": ["c", "a", "b"],
        "columns": {
            "a": { "show": true, "pinned": false },
            "b": { "show": true, "fixed": "right" },
            "c": { "show": false }
        }
    });
    store.set("hand", &record.to_string()).unwrap();

    let mut table = TableSettings::new(store, ReconcilerConfig::default(), "hand");
    table.set_columns(schema);

    let ids: Vec<&str> = table.settings().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
    assert_eq!(table.settings()[2].fixed, Some(FixedSide::Right));
    assert!(!table.settings()[0].show);
}

#[timeout(1000)]
#[test]
fn test_drag_predicate_matrix() {
    let free = ColumnSetting::new("f", "F", 0);
    let left = ColumnSetting::new("l", "L", 1).with_fixed(Some(FixedSide::Left));
    let pinned = ColumnSetting::new("p", "P", 2).with_pinned(true);
    let locked = ColumnSetting::new("x", "X", 3).with_sortable(false);

    assert!(can_move(Some(&free), Some(&free)));
    assert!(!can_move(Some(&free), Some(&left)));
    assert!(!can_move(Some(&free), Some(&pinned)));
    assert!(!can_move(Some(&pinned), Some(&free)));
    assert!(!can_move(Some(&locked), Some(&free)));
    assert!(!can_move(None, Some(&free)));

    let mut list = vec![free, left];
    assert!(set_fixed(&mut list, "f", FixedSide::Left));
    assert!(list.iter().all(|s| s.fixed == Some(FixedSide::Left)));
}
