//! Ranking error types.

use arena_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankingError {
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    #[error("Invalid record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("Duplicate bot id: {0}")]
    DuplicateId(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type RankingResult<T> = Result<T, RankingError>;
