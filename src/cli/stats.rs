//! Stats command - range statistics for one instrument

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use tracing::info;

use crate::presenter::{self, OutputFormat};

/// Arguments for the stats command
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Instrument identifier (stock code)
    #[arg(long, short)]
    pub instrument: String,

    /// First day of the range, inclusive (YYYY-MM-DD)
    #[arg(long, value_parser = super::parse_date)]
    pub start: NaiveDate,

    /// Last day of the range, inclusive (YYYY-MM-DD)
    #[arg(long, value_parser = super::parse_date)]
    pub end: NaiveDate,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Execute the stats command
pub fn execute(args: StatsArgs, db_path: &Path, out: &mut dyn Write) -> Result<()> {
    let db = super::open_existing(db_path)?;

    info!(
        "Computing statistics for {} from {} to {}",
        args.instrument, args.start, args.end
    );
    let stats = db.statistics().get(&args.instrument, args.start, args.end)?;

    writeln!(out, "{}", presenter::format_statistics(&stats, args.format)?.trim_end())?;
    Ok(())
}
