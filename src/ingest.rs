//! Tab-separated daily price reader.
//!
//! Each non-blank line is `instrument<TAB>date<TAB>price`, with the date in
//! `year/month/day` form (`2025/2/1` or `2025/02/01`). Fields are trimmed.
//! The first malformed line aborts the read.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use crate::config::TSV_DATE_FORMAT;
use crate::error::{Result, StockPriceError};
use crate::models::PricePoint;

/// Read daily prices from the TSV file at `path`.
pub fn read_tsv(path: &Path) -> Result<Vec<PricePoint>> {
    let file = File::open(path)?;
    let records = parse_tsv(BufReader::new(file))?;
    debug!(path = %path.display(), rows = records.len(), "read TSV file");
    Ok(records)
}

/// Parse daily prices from any buffered reader.
pub fn parse_tsv<R: BufRead>(reader: R) -> Result<Vec<PricePoint>> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_line(idx + 1, &line)?);
    }

    Ok(records)
}

fn parse_line(line_no: usize, line: &str) -> Result<PricePoint> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 3 {
        return Err(StockPriceError::InvalidLineFormat {
            line_no,
            line: line.to_string(),
        });
    }

    let instrument_id = fields[0].trim();
    if instrument_id.is_empty() {
        return Err(StockPriceError::InvalidLineFormat {
            line_no,
            line: line.to_string(),
        });
    }

    let date_str = fields[1].trim();
    let price_date = NaiveDate::parse_from_str(date_str, TSV_DATE_FORMAT).map_err(|_| {
        StockPriceError::InvalidDate {
            line_no,
            value: date_str.to_string(),
            line: line.to_string(),
        }
    })?;

    let price_str = fields[2].trim();
    let price: f64 = price_str.parse().map_err(|_| StockPriceError::InvalidPrice {
        line_no,
        value: price_str.to_string(),
        line: line.to_string(),
    })?;

    Ok(PricePoint::new(instrument_id, price_date, price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(input: &str) -> Result<Vec<PricePoint>> {
        parse_tsv(Cursor::new(input))
    }

    #[test]
    fn parses_padded_and_unpadded_dates() {
        let records = parse("7203\t2025/2/1\t2800\n7203\t2025/02/03\t2850.5\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].instrument_id, "7203");
        assert_eq!(records[0].price_date, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert_eq!(records[0].price, 2800.0);
        assert_eq!(records[1].price_date, NaiveDate::from_ymd_opt(2025, 2, 3).unwrap());
        assert_eq!(records[1].price, 2850.5);
    }

    #[test]
    fn skips_blank_lines_and_trims_fields() {
        let records = parse("\n  \n 6758 \t 2024/12/30 \t 13000.25 \n\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].instrument_id, "6758");
        assert_eq!(records[0].price, 13000.25);
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn wrong_field_count_reports_line() {
        let err = parse("7203\t2025/2/1\t2800\n7203\t2025/2/2\n").unwrap_err();
        match err {
            StockPriceError::InvalidLineFormat { line_no, line } => {
                assert_eq!(line_no, 2);
                assert_eq!(line, "7203\t2025/2/2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_instrument_is_rejected() {
        let err = parse("\t2025/1/1\t5\n").unwrap_err();
        assert!(matches!(err, StockPriceError::InvalidLineFormat { line_no: 1, .. }));

        let err = parse("7203\t2025/2/1\t2800\n  \t2025/2/2\t2850\n").unwrap_err();
        match err {
            StockPriceError::InvalidLineFormat { line_no, line } => {
                assert_eq!(line_no, 2);
                assert_eq!(line, "  \t2025/2/2\t2850");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_date_reports_value() {
        let err = parse("7203\t2025-02-01\t2800\n").unwrap_err();
        match err {
            StockPriceError::InvalidDate { line_no, value, .. } => {
                assert_eq!(line_no, 1);
                assert_eq!(value, "2025-02-01");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_price_reports_value() {
        let err = parse("7203\t2025/2/1\tabc\n").unwrap_err();
        match err {
            StockPriceError::InvalidPrice { value, .. } => assert_eq!(value, "abc"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_prices_are_accepted() {
        let records = parse("X\t2025/1/1\t-5.5\n").unwrap();
        assert_eq!(records[0].price, -5.5);
    }
}
