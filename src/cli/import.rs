//! Import command - replace the store contents with a TSV file

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::info;

use crate::ingest;
use crate::StockPriceDb;

/// Arguments for the import command
#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to the TSV file (`instrument<TAB>yyyy/m/d<TAB>price`)
    #[arg(long)]
    pub tsv: PathBuf,
}

/// Execute the import command
pub fn execute(args: ImportArgs, db_path: &Path, out: &mut dyn Write) -> Result<()> {
    if !args.tsv.exists() {
        bail!("TSV file not found: {}", args.tsv.display());
    }

    info!("Reading TSV file: {}", args.tsv.display());
    let records = ingest::read_tsv(&args.tsv).context("Failed to read TSV file")?;
    info!("Read {} daily stock prices", records.len());

    let db = StockPriceDb::builder()
        .path(db_path)
        .build()
        .context("Failed to create database directory")?;

    info!("Initializing database: {}", db_path.display());
    db.prices()
        .initialize_table(&records)
        .context("Failed to initialize database")?;
    info!("Database initialized successfully");

    let stored = db
        .prices()
        .count()
        .context("Failed to retrieve data from database")?;
    info!("Retrieved {} daily stock prices from database", stored);

    writeln!(
        out,
        "Successfully imported {} daily stock prices into {}",
        records.len(),
        db_path.display()
    )?;
    Ok(())
}
