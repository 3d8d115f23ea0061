//! Daily stock price store and range statistics.
//!
//! Prices are kept in a single DuckDB table keyed by `(instrument_id,
//! price_date)`. The table is only ever replaced wholesale, inside one
//! transaction, and read back either in full or by instrument and inclusive
//! date range. Statistics (average, max, min, population standard deviation)
//! are computed on demand from a fresh read.
//!
//! # Quick start
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use stock_price_stats::StockPriceDb;
//!
//! let db = StockPriceDb::builder().path("stock_price.duckdb").build().unwrap();
//!
//! let records = stock_price_stats::ingest::read_tsv("prices.tsv".as_ref()).unwrap();
//! db.prices().initialize_table(&records).unwrap();
//!
//! let stats = db
//!     .statistics()
//!     .get(
//!         "7203",
//!         NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2025, 2, 5).unwrap(),
//!     )
//!     .unwrap();
//! println!("{}", stats.average);
//! ```

pub mod cli;
pub mod config;
pub mod connection;
pub mod error;
pub mod ingest;
pub mod models;
pub mod presenter;
pub mod queries;
pub mod sql_builder;
pub mod statistics;

pub use connection::Connection;
pub use error::{Result, StockPriceError};
pub use models::{DateRange, PricePoint, PriceStatistics};
pub use sql_builder::SqlBuilder;
pub use statistics::compute_statistics;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

// ---------------------------------------------------------------------------
// StockPriceDbBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`StockPriceDb`] instance.
///
/// Use [`StockPriceDb::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](StockPriceDbBuilder::build).
pub struct StockPriceDbBuilder {
    path: Option<PathBuf>,
    create_dirs: bool,
}

impl Default for StockPriceDbBuilder {
    fn default() -> Self {
        Self {
            path: None,
            create_dirs: true,
        }
    }
}

impl StockPriceDbBuilder {
    /// Set the DuckDB file backing the store.
    ///
    /// If not set, [`config::default_store_path()`] is used.
    pub fn path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Create the store file's parent directory if it is missing.
    ///
    /// Defaults to `true`.
    pub fn create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    /// Build the store handle.
    ///
    /// No connection is opened here; each query opens and closes its own.
    pub fn build(self) -> Result<StockPriceDb> {
        let path = self.path.unwrap_or_else(config::default_store_path);

        if self.create_dirs {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
                debug!(dir = %parent.display(), "ensured store directory");
            }
        }

        Ok(StockPriceDb { path })
    }
}

// ---------------------------------------------------------------------------
// StockPriceDb
// ---------------------------------------------------------------------------

/// Handle to a price store file.
///
/// Exposes the query interfaces as lightweight borrowing wrappers. Holds no
/// open connection and caches nothing between calls.
#[derive(Debug, Clone)]
pub struct StockPriceDb {
    path: PathBuf,
}

impl StockPriceDb {
    /// Create a new builder for configuring the store.
    pub fn builder() -> StockPriceDbBuilder {
        StockPriceDbBuilder::default()
    }

    /// Access the price store interface (replace-load, full and range scans).
    pub fn prices(&self) -> queries::prices::PriceQuery<'_> {
        queries::prices::PriceQuery::new(&self.path)
    }

    /// Access the range statistics interface.
    pub fn statistics(&self) -> queries::statistics::StatisticsQuery<'_> {
        queries::statistics::StatisticsQuery::new(&self.path)
    }

    /// Path of the DuckDB file backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for StockPriceDb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StockPriceDb(path={})", self.path.display())
    }
}
