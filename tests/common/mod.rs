//! Shared test fixtures for the price store integration tests.
//!
//! Provides `setup_store()` which builds a `StockPriceDb` on a DuckDB file
//! inside a temporary directory, plus small sample price series.

#![allow(dead_code)]

use chrono::NaiveDate;
use stock_price_stats::{PricePoint, StockPriceDb};

/// Create a `StockPriceDb` backed by a fresh DuckDB file in a temp directory.
///
/// Returns `(StockPriceDb, tempfile::TempDir)`. The caller must keep the
/// `TempDir` alive for the duration of the test so the store file is not
/// deleted prematurely.
pub fn setup_store() -> (StockPriceDb, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let db = StockPriceDb::builder()
        .path(tmp_dir.path().join("stock_price.duckdb"))
        .build()
        .unwrap();
    (db, tmp_dir)
}

/// Same as `setup_store()` but already loaded with `sample_prices()`.
pub fn setup_sample_store() -> (StockPriceDb, tempfile::TempDir) {
    let (db, tmp_dir) = setup_store();
    db.prices().initialize_table(&sample_prices()).unwrap();
    (db, tmp_dir)
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Toyota (7203) for 2025-02-01..05 plus Sony (6758) on overlapping days.
pub fn sample_prices() -> Vec<PricePoint> {
    vec![
        PricePoint::new("7203", day(2025, 2, 1), 2800.0),
        PricePoint::new("7203", day(2025, 2, 2), 2850.0),
        PricePoint::new("7203", day(2025, 2, 3), 2900.0),
        PricePoint::new("7203", day(2025, 2, 4), 2950.0),
        PricePoint::new("7203", day(2025, 2, 5), 3000.0),
        PricePoint::new("6758", day(2025, 2, 1), 13000.0),
        PricePoint::new("6758", day(2025, 2, 3), 13150.5),
        PricePoint::new("6758", day(2025, 2, 6), 12980.25),
    ]
}

/// A second, disjoint data set used to check that reloads leave no residue.
pub fn replacement_prices() -> Vec<PricePoint> {
    vec![
        PricePoint::new("9984", day(2024, 12, 27), 8900.0),
        PricePoint::new("9984", day(2024, 12, 30), 8812.0),
        PricePoint::new("7203", day(2024, 12, 30), 2700.0),
    ]
}

/// Sort by `(instrument_id, price_date)` so results can be compared as sets.
pub fn sorted(mut records: Vec<PricePoint>) -> Vec<PricePoint> {
    records.sort_by(|a, b| {
        a.instrument_id
            .cmp(&b.instrument_id)
            .then(a.price_date.cmp(&b.price_date))
    });
    records
}
