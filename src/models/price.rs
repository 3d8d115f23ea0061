use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::STORED_DATE_FORMAT;

// ---------------------------------------------------------------------------
// PricePoint — Single daily price for one instrument
// ---------------------------------------------------------------------------

/// One instrument's price on one trading day.
///
/// `(instrument_id, price_date)` is unique within the store. The price is
/// stored as given; its sign and finiteness are not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PricePoint {
    pub instrument_id: String,
    pub price_date: NaiveDate,
    pub price: f64,
}

impl PricePoint {
    pub fn new(instrument_id: impl Into<String>, price_date: NaiveDate, price: f64) -> Self {
        Self {
            instrument_id: instrument_id.into(),
            price_date,
            price,
        }
    }
}

// ---------------------------------------------------------------------------
// PriceStatistics — Aggregates over a single instrument's series
// ---------------------------------------------------------------------------

/// Summary statistics for one instrument over a run of trading days.
///
/// Only produced by [`compute_statistics`](crate::statistics::compute_statistics).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PriceStatistics {
    pub instrument_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub average: f64,
    pub max: f64,
    pub min: f64,
    /// Population standard deviation (divides by N).
    pub standard_deviation: f64,
}

// ---------------------------------------------------------------------------
// DateRange — Inclusive calendar-day interval
// ---------------------------------------------------------------------------

/// Inclusive `[start, end]` interval of trading days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} and {}",
            self.start.format(STORED_DATE_FORMAT),
            self.end.format(STORED_DATE_FORMAT)
        )
    }
}
