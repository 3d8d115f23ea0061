//! Query modules for the price store.
//!
//! Each module provides a query struct that borrows the store path from
//! [`StockPriceDb`](crate::StockPriceDb) and opens a fresh DuckDB connection
//! per call.

pub mod prices;
pub mod statistics;

pub use prices::PriceQuery;
pub use statistics::StatisticsQuery;
