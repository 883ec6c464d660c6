//! arena-server - HTTP API for the leaderboard.
//!
//! Serves ranked boards computed on demand from an in-memory roster:
//!
//! - `GET /api/leaderboard` ranked board (`view`, `ref_bot`, `sort_by`,
//!   `limit`, `metric`, `eligible_only`)
//! - `GET /api/bots/{id}` one bot with its score breakdown
//! - `PUT /api/roster` replace the roster (validated)
//! - `GET /metrics` Prometheus text exposition
//! - `GET /health` liveness
//!
//! # Usage
//!
//! ```ignore
//! use arena_server::{run_server, LeaderboardState, ServerConfig};
//!
//! let state = LeaderboardState::new(LeaderboardEngine::new(ranking_config), roster);
//! run_server(state, ServerConfig::default()).await?;
//! ```

mod config;
mod error;
mod server;
mod state;
mod types;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::{create_router, run_server, AppState};
pub use state::LeaderboardState;
pub use types::{BotDetail, ErrorBody, LeaderboardQuery, RosterUpdated};
