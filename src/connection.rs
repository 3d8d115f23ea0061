//! Scoped DuckDB connection with schema setup and transaction handling.
//!
//! A [`Connection`] is opened per store operation and dropped before the
//! operation returns, so the database file is never held open between calls.

use std::path::Path;

use duckdb::{Connection as DuckDbConnection, Row, Transaction};
use tracing::{debug, warn};

use crate::config;
use crate::error::{Result, StockPriceError};

/// Wraps a DuckDB connection to the price store file.
pub struct Connection {
    conn: DuckDbConnection,
}

impl Connection {
    /// Open (creating if absent) the DuckDB database at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = DuckDbConnection::open(path).map_err(StockPriceError::storage("open database"))?;
        debug!(path = %path.display(), "opened price store");
        Ok(Self { conn })
    }

    /// Create the daily price table if it does not exist yet.
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(config::CREATE_DAILY_PRICE_TABLE_SQL)
            .map_err(StockPriceError::storage("create table"))
    }

    /// Run `f` inside a transaction.
    ///
    /// Commits when `f` returns `Ok`. On `Err` the transaction is rolled back
    /// and the error from `f` is returned unchanged.
    pub fn with_transaction<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let tx = self
            .conn
            .transaction()
            .map_err(StockPriceError::storage("begin transaction"))?;

        match f(&tx) {
            Ok(value) => {
                tx.commit().map_err(StockPriceError::storage("commit transaction"))?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback() {
                    warn!(error = %rollback_err, "rollback failed");
                }
                Err(err)
            }
        }
    }

    /// Execute SQL and map each row with `f`.
    pub fn query_map<T, F>(&self, sql: &str, params: &[String], mut f: F) -> Result<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> Result<T>,
    {
        let mut stmt = self.conn.prepare(sql)?;

        let param_values: Vec<&dyn duckdb::ToSql> = params
            .iter()
            .map(|p| p as &dyn duckdb::ToSql)
            .collect();

        let mut rows = stmt.query(param_values.as_slice())?;

        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(f(row)?);
        }
        Ok(out)
    }

    /// Execute SQL and return the first column of the first row as an integer.
    ///
    /// Returns `None` if the result set is empty.
    pub fn execute_scalar_i64(&self, sql: &str, params: &[String]) -> Result<Option<i64>> {
        let mut values = self.query_map(sql, params, |row| Ok(row.get::<_, i64>(0)?))?;
        Ok(if values.is_empty() {
            None
        } else {
            Some(values.swap_remove(0))
        })
    }

    /// Access the underlying DuckDB connection for advanced usage.
    pub fn raw(&self) -> &DuckDbConnection {
        &self.conn
    }
}
