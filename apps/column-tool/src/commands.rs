//! Command implementations.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context};
use column_settings_core::{
    CacheStatus, ColumnDescriptor, ColumnSetting, FileStore, FileStoreConfig, ReconcilerConfig,
    TableSettings,
};

use crate::{Args, Command, TableArgs};

pub fn run(args: Args) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let store = Arc::new(FileStore::new(&FileStoreConfig {
        root_dir: args.store.clone(),
        ..Default::default()
    }));
    let json = args.json;

    let open = |table: &TableArgs| -> anyhow::Result<TableSettings> {
        let descriptors = load_columns(&table.columns)?;
        let mut settings = TableSettings::new(store.clone(), config.clone(), table.key.clone());
        settings.set_columns(descriptors);
        Ok(settings)
    };

    match args.command {
        Command::Inspect(table) => {
            let descriptors = load_columns(&table.columns)?;
            let settings = TableSettings::new(store.clone(), config.clone(), table.key.clone());
            let version = settings.reconciler().signature(&descriptors);
            print_status(
                &table.key,
                &version,
                settings.reconciler().cache().inspect(&table.key, &version),
            );
        }
        Command::Show(table) => {
            let settings = open(&table)?;
            print_settings(settings.settings(), json)?;
        }
        Command::Toggle { table, id, hide } => {
            let mut settings = open(&table)?;
            if !settings.set_shown(&id, !hide) {
                bail!("no column '{}' in table '{}'", id, table.key);
            }
            save_and_print(&settings, json)?;
        }
        Command::ToggleAll { table, hide } => {
            let mut settings = open(&table)?;
            settings.set_all_shown(!hide);
            save_and_print(&settings, json)?;
        }
        Command::Fix { table, id, side } => {
            let mut settings = open(&table)?;
            if !settings.set_fixed(&id, side.into()) {
                bail!("no column '{}' in table '{}'", id, table.key);
            }
            save_and_print(&settings, json)?;
        }
        Command::Pin { table, id, off } => {
            let mut settings = open(&table)?;
            if !settings.set_pinned(&id, !off) {
                bail!("no column '{}' in table '{}'", id, table.key);
            }
            save_and_print(&settings, json)?;
        }
        Command::Move { table, from, to } => {
            let mut settings = open(&table)?;
            if !settings.move_entry(from, to) {
                bail!(
                    "cannot move column {} to {}: pinned, locked, out of range or crossing a fixed region",
                    from,
                    to
                );
            }
            save_and_print(&settings, json)?;
        }
        Command::Reset(table) => {
            let mut settings = open(&table)?;
            settings.reset();
            print_settings(settings.settings(), json)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ReconcilerConfig> {
    let Some(path) = path else {
        return Ok(ReconcilerConfig::default());
    };
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse config {}", path.display()))
}

fn load_columns(path: &Path) -> anyhow::Result<Vec<ColumnDescriptor>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read columns {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse columns {}", path.display()))
}

fn save_and_print(settings: &TableSettings, json: bool) -> anyhow::Result<()> {
    let mut visible = 0;
    settings.save(|columns| visible = columns.len());
    tracing::info!(
        "Saved '{}' with {} visible columns",
        settings.cache_key(),
        visible
    );
    print_settings(settings.settings(), json)
}

fn print_status(key: &str, version: &str, status: CacheStatus) {
    println!("key:     {}", key);
    println!("schema:  {}", version);
    match status {
        CacheStatus::Unavailable => println!("status:  storage unavailable"),
        CacheStatus::Missing => println!("status:  no record"),
        CacheStatus::Corrupt(e) => println!("status:  corrupt ({})", e),
        CacheStatus::Stale { found } => println!("status:  stale (written for '{}')", found),
        CacheStatus::Valid(record) => {
            println!("status:  valid");
            println!("order:   {}", record.order.join(", "));
            println!("columns: {}", record.columns.len());
        }
    }
}

fn print_settings(settings: &[ColumnSetting], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(settings)?);
        return Ok(());
    }

    let id_width = settings.iter().map(|s| s.id.len()).max().unwrap_or(2).max(2);
    let label_width = settings
        .iter()
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    println!(
        "{:>5}  {:<id_width$}  {:<label_width$}  {:<4}  {:<4}  {:<6}  FIXED",
        "ORDER", "ID", "LABEL", "SHOW", "SORT", "PINNED",
    );
    for s in settings {
        println!(
            "{:>5}  {:<id_width$}  {:<label_width$}  {:<4}  {:<4}  {:<6}  {}",
            s.order,
            s.id,
            s.label,
            yes_no(s.show),
            yes_no(s.sort),
            yes_no(s.pinned),
            s.fixed.map(|f| f.as_str()).unwrap_or("-"),
        );
    }
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
