//! Leaderboard arena application.
//!
//! Loads configuration and the roster, then either ranks once and prints the
//! board or serves the HTTP API from `arena-server`.

pub mod app;
pub mod config;
pub mod error;
pub mod roster;

pub use app::{render, Application, OutputFormat};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use roster::{load_roster, parse_roster};
