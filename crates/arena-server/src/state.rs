//! Shared leaderboard state.
//!
//! The roster sits behind a `RwLock` and is replaced wholesale. Handlers take
//! a cloned snapshot and rank it outside the lock.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use arena_core::{BotRecord, ViewMode};
use arena_ranking::{validate_roster, Leaderboard, LeaderboardEngine, RankOptions, RankingResult};
use arena_telemetry::Metrics;

/// Roster plus the engine that ranks it.
#[derive(Clone)]
pub struct LeaderboardState {
    roster: Arc<RwLock<Vec<BotRecord>>>,
    engine: Arc<LeaderboardEngine>,
}

impl LeaderboardState {
    /// Create state from an already validated roster.
    pub fn new(engine: LeaderboardEngine, roster: Vec<BotRecord>) -> Self {
        Metrics::roster_size(roster.len());
        Self {
            roster: Arc::new(RwLock::new(roster)),
            engine: Arc::new(engine),
        }
    }

    pub fn engine(&self) -> &LeaderboardEngine {
        &self.engine
    }

    /// Clone of the current roster.
    pub fn snapshot(&self) -> Vec<BotRecord> {
        self.roster.read().clone()
    }

    pub fn roster_len(&self) -> usize {
        self.roster.read().len()
    }

    /// Look up a bot by exact id.
    pub fn find(&self, id: &str) -> Option<BotRecord> {
        self.roster.read().iter().find(|b| b.id == id).cloned()
    }

    /// Rank the current roster.
    pub fn leaderboard(&self, view: ViewMode, options: &RankOptions) -> Leaderboard {
        let roster = self.snapshot();
        self.engine.rank(&roster, view, options)
    }

    /// Validate and swap in a new roster. The old roster is kept on error.
    pub fn replace_roster(&self, roster: Vec<BotRecord>) -> RankingResult<usize> {
        validate_roster(&roster)?;

        let size = roster.len();
        *self.roster.write() = roster;
        Metrics::roster_size(size);
        info!(size, "Roster replaced");

        Ok(size)
    }
}
