//! Text and JSON rendering of price records and statistics.

use std::fmt::Write as _;

use crate::config::STORED_DATE_FORMAT;
use crate::error::Result;
use crate::models::{PricePoint, PriceStatistics};

/// Output format for rendered results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Render records as a tab-separated table with a count header.
pub fn render_price_table(records: &[PricePoint]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Found {} daily stock prices in database:", records.len());
    out.push('\n');
    out.push_str("StockID\tDate\t\tPrice\n");
    out.push_str("-------\t----------\t-------\n");
    for record in records {
        let _ = writeln!(
            out,
            "{}\t{}\t{:.2}",
            record.instrument_id,
            record.price_date.format(STORED_DATE_FORMAT),
            record.price
        );
    }
    out
}

/// Render statistics as an aligned key/value block.
pub fn render_statistics(stats: &PriceStatistics) -> String {
    let rows = [
        ("StockID", stats.instrument_id.clone()),
        ("Start Date", stats.start_date.format(STORED_DATE_FORMAT).to_string()),
        ("End Date", stats.end_date.format(STORED_DATE_FORMAT).to_string()),
        ("Average", format!("{:.2}", stats.average)),
        ("Max", format!("{:.2}", stats.max)),
        ("Min", format!("{:.2}", stats.min)),
        ("Std Dev", format!("{:.2}", stats.standard_deviation)),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        let _ = writeln!(out, "{:<12}{:>14}", label, value);
    }
    out
}

pub fn format_prices(records: &[PricePoint], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_price_table(records)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
    }
}

pub fn format_statistics(stats: &PriceStatistics, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_statistics(stats)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_stats() -> PriceStatistics {
        PriceStatistics {
            instrument_id: "7203".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 2, 5).unwrap(),
            average: 2900.0,
            max: 3000.0,
            min: 2800.0,
            standard_deviation: 5000.0_f64.sqrt(),
        }
    }

    #[test]
    fn price_table_formats_dates_and_prices() {
        let records = vec![PricePoint::new(
            "7203",
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            2800.0,
        )];
        let table = render_price_table(&records);
        assert!(table.starts_with("Found 1 daily stock prices in database:\n"));
        assert!(table.contains("StockID\tDate\t\tPrice\n"));
        assert!(table.ends_with("7203\t2025-02-01\t2800.00\n"));
    }

    #[test]
    fn statistics_block_uses_two_decimals() {
        let text = render_statistics(&sample_stats());
        assert!(text.contains("2025-02-01"));
        assert!(text.contains("2025-02-05"));
        assert!(text.contains("2900.00"));
        assert!(text.contains("70.71"));
        assert_eq!(text.lines().count(), 7);
    }

    #[test]
    fn statistics_json_uses_iso_dates() {
        let json = format_statistics(&sample_stats(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["instrument_id"], "7203");
        assert_eq!(value["start_date"], "2025-02-01");
        assert_eq!(value["max"], 3000.0);
    }
}
