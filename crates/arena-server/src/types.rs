//! Request and response types for the leaderboard API.

use serde::{Deserialize, Serialize};

use arena_core::{BotRecord, PopularityMetric, SortKey, ViewMode};
use arena_ranking::{RankOptions, ScoreBreakdown};

use crate::error::ApiError;

/// Query string of `GET /api/leaderboard`.
///
/// Enum parameters arrive as strings so unknown values can be reported with
/// the offending input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaderboardQuery {
    pub view: Option<String>,
    pub ref_bot: Option<String>,
    pub sort_by: Option<String>,
    pub limit: Option<usize>,
    pub metric: Option<String>,
    #[serde(default)]
    pub eligible_only: bool,
}

impl LeaderboardQuery {
    /// Resolve the board and options. A missing view means the score board.
    pub fn resolve(self) -> Result<(ViewMode, RankOptions), ApiError> {
        let view = match self.view.as_deref() {
            Some(v) => v.parse::<ViewMode>()?,
            None => ViewMode::default(),
        };
        let sort_by = self
            .sort_by
            .as_deref()
            .map(str::parse::<SortKey>)
            .transpose()?;
        let popularity_metric = match self.metric.as_deref() {
            Some(m) => m.parse::<PopularityMetric>()?,
            None => PopularityMetric::default(),
        };

        let options = RankOptions {
            result_limit: self.limit,
            pinned_reference: self.ref_bot,
            popularity_metric,
            sort_by,
            eligible_only: self.eligible_only,
            ..Default::default()
        };
        Ok((view, options))
    }
}

/// Response of `GET /api/bots/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct BotDetail {
    #[serde(flatten)]
    pub bot: BotRecord,
    pub breakdown: ScoreBreakdown,
}

impl From<BotRecord> for BotDetail {
    fn from(bot: BotRecord) -> Self {
        let breakdown = ScoreBreakdown::of(&bot);
        Self { bot, breakdown }
    }
}

/// Response of `PUT /api/roster`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterUpdated {
    pub size: usize,
}

/// JSON error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
