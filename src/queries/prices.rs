//! Price store operations against the `daily_stock_price` table.

use std::path::Path;

use chrono::NaiveDate;
use duckdb::Row;
use tracing::{debug, info};

use crate::config::{DAILY_PRICE_TABLE, STORED_DATE_FORMAT};
use crate::connection::Connection;
use crate::error::{Result, StockPriceError};
use crate::models::PricePoint;
use crate::sql_builder::SqlBuilder;

const PRICE_COLUMNS: [&str; 3] = ["instrument_id", "price_date", "price"];

// ---------------------------------------------------------------------------
// PriceQuery
// ---------------------------------------------------------------------------

/// Query interface for the daily price table.
///
/// Every method opens its own connection to the store file and closes it
/// before returning.
pub struct PriceQuery<'a> {
    db_path: &'a Path,
}

impl<'a> PriceQuery<'a> {
    /// Create a new `PriceQuery` bound to the store at `db_path`.
    pub fn new(db_path: &'a Path) -> Self {
        Self { db_path }
    }

    /// Replace the whole table with `records`.
    ///
    /// Creates the table if needed, then deletes every existing row and inserts
    /// `records` in a single transaction. If any insert fails (for example a
    /// duplicate `(instrument_id, price_date)` in `records`) the transaction is
    /// rolled back and the previous contents stay in place.
    ///
    /// Returns the number of rows inserted.
    pub fn initialize_table(&self, records: &[PricePoint]) -> Result<usize> {
        let mut conn = Connection::open(self.db_path)?;
        conn.ensure_schema()?;

        let inserted = conn.with_transaction(|tx| {
            tx.execute_batch(&format!("DELETE FROM {}", DAILY_PRICE_TABLE))
                .map_err(StockPriceError::storage("delete existing rows"))?;

            let mut stmt = tx
                .prepare(&format!(
                    "INSERT INTO {} ({}) VALUES (?, ?, ?)",
                    DAILY_PRICE_TABLE,
                    PRICE_COLUMNS.join(", ")
                ))
                .map_err(StockPriceError::storage("prepare insert"))?;

            for record in records {
                let date = record.price_date.format(STORED_DATE_FORMAT).to_string();
                stmt.execute(duckdb::params![record.instrument_id, date, record.price])
                    .map_err(StockPriceError::storage("insert row"))?;
            }

            Ok(records.len())
        })?;

        info!(rows = inserted, table = DAILY_PRICE_TABLE, "replaced daily prices");
        Ok(inserted)
    }

    /// Return every stored record.
    ///
    /// Rows come back ordered by instrument then date, but callers should not
    /// depend on any particular order.
    pub fn fetch_all(&self) -> Result<Vec<PricePoint>> {
        let conn = Connection::open(self.db_path)?;
        conn.ensure_schema()?;

        let (sql, params) = SqlBuilder::new(DAILY_PRICE_TABLE)
            .select(&PRICE_COLUMNS)
            .order_by(&["instrument_id ASC", "price_date ASC"])
            .build();

        let records = conn.query_map(&sql, &params, row_to_price_point)?;
        debug!(rows = records.len(), "fetched all daily prices");
        Ok(records)
    }

    /// Return records for `instrument` dated within `start..=end`.
    ///
    /// Both bounds are inclusive. An empty vector means nothing matched.
    pub fn fetch_by_range(
        &self,
        instrument: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>> {
        let conn = Connection::open(self.db_path)?;
        conn.ensure_schema()?;

        // Zero-padded ISO dates compare correctly as text.
        let start_str = start.format(STORED_DATE_FORMAT).to_string();
        let end_str = end.format(STORED_DATE_FORMAT).to_string();

        let (sql, params) = SqlBuilder::new(DAILY_PRICE_TABLE)
            .select(&PRICE_COLUMNS)
            .where_eq("instrument_id", instrument)
            .where_gte("price_date", &start_str)
            .where_lte("price_date", &end_str)
            .order_by(&["price_date ASC"])
            .build();

        let records = conn.query_map(&sql, &params, row_to_price_point)?;
        debug!(
            instrument,
            start = %start_str,
            end = %end_str,
            rows = records.len(),
            "fetched daily prices by range"
        );
        Ok(records)
    }

    /// Number of rows currently stored.
    pub fn count(&self) -> Result<usize> {
        let conn = Connection::open(self.db_path)?;
        conn.ensure_schema()?;

        let (sql, params) = SqlBuilder::new(DAILY_PRICE_TABLE)
            .select(&["COUNT(*)"])
            .build();

        let count = conn.execute_scalar_i64(&sql, &params)?.unwrap_or(0);
        count_to_usize(count)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn count_to_usize(count: i64) -> Result<usize> {
    usize::try_from(count).map_err(|_| StockPriceError::CountOutOfRange(count))
}

fn row_to_price_point(row: &Row<'_>) -> Result<PricePoint> {
    let instrument_id: String = row.get(0)?;
    let date_str: String = row.get(1)?;
    let price: f64 = row.get(2)?;

    let price_date = NaiveDate::parse_from_str(&date_str, STORED_DATE_FORMAT)
        .map_err(|source| StockPriceError::Parse {
            value: date_str.clone(),
            source,
        })?;

    Ok(PricePoint {
        instrument_id,
        price_date,
        price,
    })
}
