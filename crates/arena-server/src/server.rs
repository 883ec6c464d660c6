//! HTTP server implementation using axum.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, Query, Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::{debug, info};

use arena_core::BotRecord;
use arena_ranking::Leaderboard;

use crate::config::ServerConfig;
use crate::error::{ApiError, ApiResult};
use crate::state::LeaderboardState;
use crate::types::{BotDetail, LeaderboardQuery, RosterUpdated};

/// Shared application state for axum handlers.
#[derive(Clone)]
pub struct AppState {
    leaderboard: LeaderboardState,
    config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(leaderboard: LeaderboardState, config: ServerConfig) -> Self {
        Self {
            leaderboard,
            config: Arc::new(config),
        }
    }
}

/// Create the axum router.
///
/// `/health` is always open; everything else sits behind basic auth when
/// credentials are configured.
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/leaderboard", get(get_leaderboard))
        .route("/api/bots/{id}", get(get_bot))
        .route("/api/roster", put(put_roster))
        .route("/metrics", get(get_metrics))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let router = Router::new()
        .route("/health", get(health))
        .merge(protected)
        .with_state(state.clone());

    if state.config.cors_allow_any {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Ranked board for the requested view.
async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> ApiResult<Json<Leaderboard>> {
    let (view, options) = query.resolve()?;
    debug!(%view, ref_bot = ?options.pinned_reference, "Leaderboard requested");

    Ok(Json(state.leaderboard.leaderboard(view, &options)))
}

/// One bot with its score breakdown.
async fn get_bot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BotDetail>> {
    state
        .leaderboard
        .find(&id)
        .map(|bot| Json(BotDetail::from(bot)))
        .ok_or(ApiError::NotFound(id))
}

/// Replace the whole roster.
async fn put_roster(
    State(state): State<AppState>,
    Json(roster): Json<Vec<BotRecord>>,
) -> ApiResult<Json<RosterUpdated>> {
    let size = state.leaderboard.replace_roster(roster)?;
    Ok(Json(RosterUpdated { size }))
}

async fn get_metrics() -> ApiResult<Response> {
    let body = arena_telemetry::gather_text()?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    )
        .into_response())
}

async fn health() -> &'static str {
    "ok"
}

async fn require_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if state.config.auth_enabled() && !check_basic_auth(request.headers(), &state.config) {
        return Err(ApiError::Unauthorized);
    }
    Ok(next.run(request).await)
}

/// Check basic authentication.
fn check_basic_auth(headers: &HeaderMap, config: &ServerConfig) -> bool {
    let Some(auth_str) = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        return false;
    };

    let Some(encoded) = auth_str.strip_prefix("Basic ") else {
        return false;
    };

    match base64_decode(encoded.trim()) {
        Some(decoded) => decoded == format!("{}:{}", config.username, config.password),
        None => false,
    }
}

/// Minimal base64 decode for basic auth credentials.
fn base64_decode(input: &str) -> Option<String> {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    let input = input.trim_end_matches('=');
    let mut result = Vec::with_capacity(input.len() * 3 / 4);
    let mut buf = 0u32;
    let mut bits = 0;

    for c in input.bytes() {
        let value = ALPHABET.iter().position(|&x| x == c)? as u32;
        buf = (buf << 6) | value;
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            result.push(((buf >> bits) & 0xFF) as u8);
        }
    }

    String::from_utf8(result).ok()
}

/// Run the leaderboard HTTP server until Ctrl-C.
pub async fn run_server(
    leaderboard: LeaderboardState,
    config: ServerConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let port = config.port;
    let auth = config.auth_enabled();
    let app = create_router(AppState::new(leaderboard.clone(), config));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(
        port,
        auth,
        roster = leaderboard.roster_len(),
        "Starting leaderboard server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
