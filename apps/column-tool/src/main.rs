//! CLI tool for persisted column settings.
//!
//! Provides commands for:
//! - Inspecting the cache record stored for a table
//! - Reconciling a column schema against it
//! - Toggling visibility, pinning and fixed sides, and reordering
//! - Resetting a table to its schema defaults

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use column_settings_core::FixedSide;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the column settings tool.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding persisted column settings
    #[arg(long, default_value = "./column-settings")]
    store: PathBuf,

    /// JSON file overriding the reconciler configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print settings as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Shared arguments naming a table and its schema.
#[derive(clap::Args, Debug)]
struct TableArgs {
    /// Cache key of the table
    key: String,

    /// JSON file with the column descriptors
    #[arg(short, long)]
    columns: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the status of the stored record
    Inspect(TableArgs),
    /// Reconcile the schema with the stored record and print the settings
    Show(TableArgs),
    /// Show or hide a column
    Toggle {
        #[command(flatten)]
        table: TableArgs,
        /// Column id
        id: String,
        /// Hide instead of show
        #[arg(long)]
        hide: bool,
    },
    /// Show or hide every column
    ToggleAll {
        #[command(flatten)]
        table: TableArgs,
        /// Hide instead of show
        #[arg(long)]
        hide: bool,
    },
    /// Fix a column to a side, or unfix it if already fixed there
    Fix {
        #[command(flatten)]
        table: TableArgs,
        /// Column id
        id: String,
        /// Side to fix the column to
        side: Side,
    },
    /// Pin or unpin a column
    Pin {
        #[command(flatten)]
        table: TableArgs,
        /// Column id
        id: String,
        /// Unpin instead of pin
        #[arg(long)]
        off: bool,
    },
    /// Drag the column at one position onto another
    Move {
        #[command(flatten)]
        table: TableArgs,
        /// Current position
        from: usize,
        /// Target position
        to: usize,
    },
    /// Clear the stored record and print the schema defaults
    Reset(TableArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Side {
    Left,
    Right,
}

impl From<Side> for FixedSide {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => FixedSide::Left,
            Side::Right => FixedSide::Right,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    commands::run(args)
}
