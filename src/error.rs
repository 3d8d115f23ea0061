use crate::models::DateRange;

#[derive(Debug, thiserror::Error)]
pub enum StockPriceError {
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    #[error("storage error: failed to {operation}: {source}")]
    Storage {
        operation: &'static str,
        #[source]
        source: duckdb::Error,
    },

    #[error("failed to parse stored date {value:?}: {source}")]
    Parse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("stock prices cannot be empty")]
    EmptySeries,

    #[error("all stock prices must have the same stock ID (expected {expected:?}, found {found:?})")]
    MixedInstrument { expected: String, found: String },

    #[error("no stock prices found for stock ID {instrument} between {range}")]
    NotFound { instrument: String, range: DateRange },

    #[error("row count out of range: {0}")]
    CountOutOfRange(i64),

    #[error("invalid TSV format at line {line_no}: expected instrument, date and price separated by tabs: {line}")]
    InvalidLineFormat { line_no: usize, line: String },

    #[error("invalid date format: {value} at line {line_no}: {line}")]
    InvalidDate {
        line_no: usize,
        value: String,
        line: String,
    },

    #[error("invalid price format: {value} at line {line_no}: {line}")]
    InvalidPrice {
        line_no: usize,
        value: String,
        line: String,
    },

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<StockPriceError>,
    },
}

impl StockPriceError {
    /// Build a `map_err` adapter tagging a DuckDB failure with the step that failed.
    pub fn storage(operation: &'static str) -> impl FnOnce(duckdb::Error) -> Self {
        move |source| StockPriceError::Storage { operation, source }
    }

    /// Wrap `self` with a human-readable context message.
    pub fn context(self, context: impl Into<String>) -> Self {
        StockPriceError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping any `Context` layers.
    pub fn root_cause(&self) -> &StockPriceError {
        match self {
            StockPriceError::Context { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// True when a range query matched no rows.
    pub fn is_not_found(&self) -> bool {
        matches!(self.root_cause(), StockPriceError::NotFound { .. })
    }

    /// True when the statistics engine rejected its input series.
    pub fn is_validation(&self) -> bool {
        matches!(
            self.root_cause(),
            StockPriceError::EmptySeries | StockPriceError::MixedInstrument { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, StockPriceError>;
