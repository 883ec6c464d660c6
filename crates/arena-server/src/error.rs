//! API errors and their HTTP mapping.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;
use tracing::warn;

use arena_core::CoreError;
use arena_ranking::RankingError;
use arena_telemetry::TelemetryError;

use crate::types::ErrorBody;

/// Errors returned by API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(#[from] CoreError),

    #[error("Bot not found: {0}")]
    NotFound(String),

    #[error("Invalid roster: {0}")]
    InvalidRoster(#[from] RankingError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Metrics unavailable: {0}")]
    Metrics(#[from] TelemetryError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidRoster(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Metrics(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(error = %self, "Request failed");
        }

        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        match self {
            Self::Unauthorized => (
                status,
                [(header::WWW_AUTHENTICATE, "Basic realm=\"Leaderboard\"")],
                body,
            )
                .into_response(),
            _ => (status, body).into_response(),
        }
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
