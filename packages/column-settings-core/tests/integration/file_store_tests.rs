//! Column settings persisted through the directory-backed store.

use ntest::timeout;
use std::fs;
use std::sync::Arc;
use tempfile::tempdir;

use column_settings_core::{
    signature_of, CacheStatus, ColumnDescriptor, FileStore, FileStoreConfig, FixedSide,
    KeyValueStore, ReconcilerConfig, TableSettings,
};

fn columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::default().column_type("selection"),
        ColumnDescriptor::with_prop("id").label("ID"),
        ColumnDescriptor::with_prop("customer").label("Customer"),
        ColumnDescriptor::with_prop("total").label("Total"),
        ColumnDescriptor::with_id("ops").column_type("action"),
    ]
}

fn file_store(dir: &std::path::Path) -> Arc<FileStore> {
    Arc::new(FileStore::new(&FileStoreConfig {
        root_dir: dir.to_path_buf(),
        ..Default::default()
    }))
}

#[timeout(2000)]
#[test]
fn test_customizations_survive_reopen() {
    let temp_dir = tempdir().unwrap();
    let store = file_store(temp_dir.path());

    let mut table = TableSettings::new(store.clone(), ReconcilerConfig::default(), "orders");
    table.set_columns(columns());
    table.set_shown("total", false);
    table.set_fixed("customer", FixedSide::Left);
    table.save(|_| {});

    let path = store.path_for("orders").unwrap();
    assert!(path.exists());
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"version\""));
    assert!(contents.contains("\"customer\""));

    // Reopen with a fresh store instance on the same directory
    let mut reopened = TableSettings::new(
        file_store(temp_dir.path()),
        ReconcilerConfig::default(),
        "orders",
    );
    reopened.set_columns(columns());

    assert_eq!(reopened.settings(), table.settings());
    let customer = reopened
        .settings()
        .iter()
        .find(|s| s.id == "customer")
        .unwrap();
    assert_eq!(customer.fixed, Some(FixedSide::Left));
    assert_eq!(customer.order, 1);
}

#[timeout(2000)]
#[test]
fn test_corrupt_file_is_removed_on_rebuild() {
    let temp_dir = tempdir().unwrap();
    let store = file_store(temp_dir.path());
    store.set("orders", "]]] garbage").unwrap();
    let path = store.path_for("orders").unwrap();
    assert!(path.exists());

    let mut table = TableSettings::new(store.clone(), ReconcilerConfig::default(), "orders");
    table.set_columns(columns());

    assert!(!path.exists());
    let defaults = table
        .reconciler()
        .rebuild(&columns(), "orders", false);
    assert_eq!(table.settings(), defaults.as_slice());
}

#[timeout(2000)]
#[test]
fn test_stale_file_is_preserved() {
    let temp_dir = tempdir().unwrap();
    let store = file_store(temp_dir.path());
    store
        .set(
            "orders",
            r#"{"version":"stale","order":[],"columns":{"id":{"show":false}}}"#,
        )
        .unwrap();

    let mut table = TableSettings::new(store.clone(), ReconcilerConfig::default(), "orders");
    table.set_columns(columns());

    assert!(store.path_for("orders").unwrap().exists());
    assert!(table.settings().iter().all(|s| s.show));
    assert_eq!(
        table.reconciler().cache().inspect("orders", &signature_of(&columns())),
        CacheStatus::Stale {
            found: "stale".to_string()
        }
    );
}

#[timeout(2000)]
#[test]
fn test_reset_deletes_file() {
    let temp_dir = tempdir().unwrap();
    let store = file_store(temp_dir.path());

    let mut table = TableSettings::new(store.clone(), ReconcilerConfig::default(), "orders");
    table.set_columns(columns());
    table.set_all_shown(false);
    table.save(|visible| assert!(visible.is_empty()));
    assert!(store.path_for("orders").unwrap().exists());

    table.reset();
    assert!(!store.path_for("orders").unwrap().exists());
    assert!(table.settings().iter().all(|s| s.show));
}

#[timeout(2000)]
#[test]
fn test_keys_with_separators_stay_inside_root() {
    let temp_dir = tempdir().unwrap();
    let store = file_store(temp_dir.path());

    store.set("../escape/orders", "{}").unwrap();
    let path = store.path_for("../escape/orders").unwrap();
    assert_eq!(path.parent().unwrap(), temp_dir.path());
    assert_eq!(store.get("../escape/orders").unwrap().as_deref(), Some("{}"));
}
