//! View command - print every stored price

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use crate::presenter::{self, OutputFormat};

/// Arguments for the view command
#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Execute the view command
pub fn execute(args: ViewArgs, db_path: &Path, out: &mut dyn Write) -> Result<()> {
    let db = super::open_existing(db_path)?;
    let records = db
        .prices()
        .fetch_all()
        .context("Failed to retrieve data from database")?;

    write!(out, "{}", presenter::format_prices(&records, args.format)?)?;
    Ok(())
}
