use std::path::PathBuf;

/// Table holding one row per (instrument, trading day).
pub const DAILY_PRICE_TABLE: &str = "daily_stock_price";

/// Schema for [`DAILY_PRICE_TABLE`].
///
/// `DOUBLE` rather than `REAL`: DuckDB's `REAL` is a 32-bit float.
pub const CREATE_DAILY_PRICE_TABLE_SQL: &str = "
CREATE TABLE IF NOT EXISTS daily_stock_price (
    instrument_id TEXT NOT NULL,
    price_date TEXT NOT NULL,
    price DOUBLE NOT NULL,
    PRIMARY KEY (instrument_id, price_date)
);
";

/// Calendar-day format used for persisted dates and display.
pub const STORED_DATE_FORMAT: &str = "%Y-%m-%d";

/// Slash-separated year/month/day format accepted by the TSV reader.
/// chrono's `%m` and `%d` accept both padded and unpadded values.
pub const TSV_DATE_FORMAT: &str = "%Y/%m/%d";

/// File name of the store inside the default data directory.
pub const DEFAULT_STORE_FILE: &str = "stock_price.duckdb";

pub fn default_store_path() -> PathBuf {
    if let Some(data) = dirs::data_local_dir() {
        data.join("stock-price-stats").join(DEFAULT_STORE_FILE)
    } else {
        PathBuf::from(DEFAULT_STORE_FILE)
    }
}
