//! Benchmark of settings reconciliation on wide schemas.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;

use column_settings_core::{
    sort_settings, ColumnDescriptor, MemoryStore, ReconcilerConfig, SettingsReconciler,
    TableSettings,
};

/// Creates a schema with selection and action columns around `count` data columns.
fn create_schema(count: usize) -> Vec<ColumnDescriptor> {
    let mut columns = vec![ColumnDescriptor::default().column_type("selection")];
    columns.extend((0..count).map(|i| ColumnDescriptor::with_prop(format!("field_{}", i))));
    columns.push(ColumnDescriptor::with_id("ops").column_type("action"));
    columns
}

/// Benchmark rebuild without a cached record.
fn bench_rebuild_defaults(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild_defaults");
    for count in [10usize, 100, 1000] {
        let schema = create_schema(count);
        let reconciler =
            SettingsReconciler::new(Arc::new(MemoryStore::new()), ReconcilerConfig::default());
        group.bench_with_input(BenchmarkId::from_parameter(count), &schema, |b, schema| {
            b.iter(|| black_box(reconciler.rebuild(black_box(schema), "bench", false)));
        });
    }
    group.finish();
}

/// Benchmark rebuild applying a saved record.
fn bench_rebuild_cached(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild_cached");
    for count in [10usize, 100, 1000] {
        let schema = create_schema(count);
        let store = Arc::new(MemoryStore::new());

        // Persist a reversed order
        let mut table = TableSettings::new(store.clone(), ReconcilerConfig::default(), "bench");
        table.set_columns(schema.clone());
        for i in 1..count {
            table.move_entry(count, i);
        }
        table.save(|_| {});

        let reconciler = SettingsReconciler::new(store, ReconcilerConfig::default());
        group.bench_with_input(BenchmarkId::from_parameter(count), &schema, |b, schema| {
            b.iter(|| black_box(reconciler.rebuild(black_box(schema), "bench", true)));
        });
    }
    group.finish();
}

/// Benchmark the region-ranked sort alone.
fn bench_sort(c: &mut Criterion) {
    let reconciler =
        SettingsReconciler::new(Arc::new(MemoryStore::new()), ReconcilerConfig::default());
    let settings = reconciler.rebuild(&create_schema(1000), "bench", false);

    c.bench_function("sort_settings_1000", |b| {
        b.iter(|| {
            let mut list = settings.clone();
            list.reverse();
            sort_settings(black_box(&mut list));
            black_box(list.len());
        })
    });
}

criterion_group!(benches, bench_rebuild_defaults, bench_rebuild_cached, bench_sort);
criterion_main!(benches);
