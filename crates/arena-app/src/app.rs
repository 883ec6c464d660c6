//! Application driver.
//!
//! Wires configuration, roster and engine together for the two commands:
//! one-shot ranking to stdout and the long-running HTTP server.

use std::fmt::Write as _;

use clap::ValueEnum;
use tracing::info;

use arena_core::{BotRecord, ViewMode};
use arena_ranking::{Leaderboard, LeaderboardEngine, RankOptions};
use arena_server::{run_server, LeaderboardState};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::roster::load_roster;

/// Output format of the `rank` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Main application.
pub struct Application {
    config: AppConfig,
    engine: LeaderboardEngine,
}

impl Application {
    pub fn new(config: AppConfig) -> AppResult<Self> {
        config.validate()?;
        let engine = LeaderboardEngine::new(config.ranking.clone());
        Ok(Self { config, engine })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Load the roster from `path`, or from the configured `roster_path`.
    pub fn load_roster(&self, path: Option<&str>) -> AppResult<Vec<BotRecord>> {
        load_roster(path.unwrap_or(self.config.roster_path.as_str()))
    }

    pub fn rank(
        &self,
        roster: &[BotRecord],
        view: ViewMode,
        options: &RankOptions,
    ) -> Leaderboard {
        self.engine.rank(roster, view, options)
    }

    /// Serve the API until Ctrl-C.
    pub async fn serve(self) -> AppResult<()> {
        let roster = self.load_roster(None)?;
        let state = LeaderboardState::new(self.engine, roster);

        run_server(state, self.config.server)
            .await
            .map_err(|e| AppError::Server(e.to_string()))?;

        info!("Server stopped");
        Ok(())
    }
}

/// Render a board for the terminal or as JSON.
pub fn render(board: &Leaderboard, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(board)?),
        OutputFormat::Table => Ok(render_table(board)),
    }
}

fn render_table(board: &Leaderboard) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} board (sorted by {}), {} of {} bots, scale threshold {}",
        board.view,
        board.sort_key,
        board.len(),
        board.candidate_count,
        board.nav_threshold.inner().round_dp(2),
    );
    let _ = writeln!(
        out,
        "{:>4}  {:<16} {:<20} {:>7} {:>14} {:>12} {:>6}  {}",
        "#", "ID", "NAME", "SCORE", "NAV", "PNL", "SUBS", "FLAGS"
    );

    for entry in &board.entries {
        let mut flags = Vec::new();
        if entry.pinned {
            flags.push("pinned");
        } else if entry.featured {
            flags.push("featured");
        }
        if !entry.bot.eligible {
            flags.push("ineligible");
        }

        let _ = writeln!(
            out,
            "{:>4}  {:<16} {:<20} {:>7} {:>14} {:>12} {:>6}  {}",
            entry.rank,
            entry.id(),
            entry.bot.name,
            entry.score.round_dp(2).to_string(),
            entry.bot.current_nav.inner().round_dp(2).to_string(),
            entry.bot.current_pnl.inner().round_dp(2).to_string(),
            entry.bot.subscriber_count,
            flags.join(","),
        );
    }

    out
}
