//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Roster error: {0}")]
    Roster(String),

    #[error("Ranking error: {0}")]
    Ranking(#[from] arena_ranking::RankingError),

    #[error("Invalid argument: {0}")]
    Core(#[from] arena_core::CoreError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] arena_telemetry::TelemetryError),

    #[error("Server error: {0}")]
    Server(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
