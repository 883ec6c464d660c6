//! Core domain types for the leaderboard arena.
//!
//! This crate provides the types shared by the ranking engine, the HTTP API
//! and the CLI:
//! - `BotRecord`: One bot's performance snapshot as supplied by the data source
//! - `RankedBot`: A record after ranking (rank, score, pin flags)
//! - `Usd`, `Score`: Precision-safe numeric types
//! - `ViewMode`, `SortKey`, `PopularityMetric`: Leaderboard selectors

pub mod bot;
pub mod decimal;
pub mod error;
pub mod view;

pub use bot::{BotRecord, RankedBot};
pub use decimal::{Score, Usd};
pub use error::{CoreError, Result};
pub use view::{PopularityMetric, SortKey, ViewMode};
