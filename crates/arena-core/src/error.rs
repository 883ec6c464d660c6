//! Error types for arena-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid view mode: {0} (expected one of: score, scale, popularity, pnl)")]
    InvalidViewMode(String),

    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),

    #[error("Invalid popularity metric: {0} (expected subscribers or volume)")]
    InvalidPopularityMetric(String),

    #[error("Decimal parse error: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
