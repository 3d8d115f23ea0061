//! Command-line interface
//!
//! Provides the `import`, `view` and `stats` commands of the `stock-price`
//! binary.

pub mod import;
pub mod stats;
pub mod view;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::config;
use crate::StockPriceDb;

/// Stock price store CLI
#[derive(Debug, Parser)]
#[command(name = "stock-price")]
#[command(about = "Import daily stock prices into DuckDB and compute range statistics")]
#[command(version)]
pub struct Cli {
    /// Path to the DuckDB database file
    #[arg(long, global = true, default_value_os_t = config::default_store_path())]
    pub db: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replace the store contents with a TSV file
    Import(import::ImportArgs),
    /// Print every stored price
    View(view::ViewArgs),
    /// Compute statistics for one instrument over a date range
    Stats(stats::StatsArgs),
}

/// Execute the parsed command line, writing results to `out`.
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    match cli.command {
        Commands::Import(args) => import::execute(args, &cli.db, out),
        Commands::View(args) => view::execute(args, &cli.db, out),
        Commands::Stats(args) => stats::execute(args, &cli.db, out),
    }
}

/// Open an existing store for reading without creating files or directories.
pub fn open_existing(db_path: &Path) -> Result<StockPriceDb> {
    if !db_path.is_file() {
        bail!("Database not found: {}", db_path.display());
    }
    Ok(StockPriceDb::builder()
        .path(db_path)
        .create_dirs(false)
        .build()?)
}

/// Parse a `YYYY-MM-DD` command-line date.
pub fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, config::STORED_DATE_FORMAT)
        .map_err(|e| format!("invalid date {:?} (expected YYYY-MM-DD): {}", s, e))
}
