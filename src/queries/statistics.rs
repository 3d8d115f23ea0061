//! Range statistics: fetch a slice of one instrument's prices and aggregate it.

use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{Result, StockPriceError};
use crate::models::{DateRange, PriceStatistics};
use crate::queries::prices::PriceQuery;
use crate::statistics::compute_statistics;

// ---------------------------------------------------------------------------
// StatisticsQuery
// ---------------------------------------------------------------------------

/// Computes statistics over prices read fresh from the store on every call.
pub struct StatisticsQuery<'a> {
    prices: PriceQuery<'a>,
}

impl<'a> StatisticsQuery<'a> {
    /// Create a new `StatisticsQuery` bound to the store at `db_path`.
    pub fn new(db_path: &'a Path) -> Self {
        Self {
            prices: PriceQuery::new(db_path),
        }
    }

    /// Statistics for `instrument` over `start..=end`.
    ///
    /// Returns [`StockPriceError::NotFound`] when no row matches, before the
    /// statistics engine is ever called. Store and engine failures are wrapped
    /// with the instrument and range.
    pub fn get(
        &self,
        instrument: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceStatistics> {
        let range = DateRange::new(start, end);

        let records = self
            .prices
            .fetch_by_range(instrument, start, end)
            .map_err(|e| {
                e.context(format!(
                    "failed to get daily stock prices for {} between {}",
                    instrument, range
                ))
            })?;

        if records.is_empty() {
            return Err(StockPriceError::NotFound {
                instrument: instrument.to_string(),
                range,
            });
        }

        debug!(instrument, rows = records.len(), "computing statistics");
        compute_statistics(&records).map_err(|e| {
            e.context(format!(
                "failed to calculate statistics for {} between {}",
                instrument, range
            ))
        })
    }
}
