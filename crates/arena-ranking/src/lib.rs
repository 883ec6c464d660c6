//! Leaderboard ranking engine.
//!
//! Turns an unordered roster of bot records into an ordered, ranked board:
//!
//! ```text
//! records ─► score ─► board filter ─► order ─► top-N ─► ranks ─► pin
//! ```
//!
//! Every pass is a pure transform over a borrowed roster: the input is never
//! mutated and a fresh board is allocated each time.

pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod order;
pub mod pin;
pub mod score;
pub mod validate;

pub use config::{RankOptions, RankingConfig};
pub use engine::{rank, Leaderboard, LeaderboardEngine};
pub use error::{RankingError, RankingResult};
pub use filter::{median_nav, nav_threshold};
pub use pin::pin_reference;
pub use score::{computed_score, effective_score, ScoreBreakdown};
pub use validate::validate_roster;
