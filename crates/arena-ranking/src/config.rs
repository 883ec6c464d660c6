//! Ranking configuration.
//!
//! `RankingConfig` holds the deployment-wide defaults (loaded from the
//! `[ranking]` table); `RankOptions` carries per-request overrides.

use crate::error::{RankingError, RankingResult};
use arena_core::{PopularityMetric, SortKey, ViewMode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Highest supported score tie precision (decimal places).
pub const MAX_SCORE_TIE_PRECISION: u32 = 8;

/// Deployment-wide ranking defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// NAV floor for the scale board threshold.
    #[serde(default = "default_minimum_nav_floor")]
    pub minimum_nav_floor: Decimal,
    /// Multiplier applied to the roster median NAV for the scale threshold.
    #[serde(default = "default_median_multiplier")]
    pub median_multiplier: Decimal,
    /// Top-N length of the scale, popularity and pnl boards.
    #[serde(default = "default_view_result_limit")]
    pub view_result_limit: usize,
    /// Scores equal at this many decimal places tie and fall through to
    /// NAV, then PnL. Both scores are rounded before comparing, so at 2
    /// places 75.004 and 75.006 do not tie even though they differ by less
    /// than 0.01.
    #[serde(default = "default_score_tie_precision")]
    pub score_tie_precision: u32,
    /// Renumber the board after a pinned bot is moved to the top.
    /// When false, ranks keep the values computed before the move.
    #[serde(default = "default_renumber_after_pin")]
    pub renumber_after_pin: bool,
}

fn default_minimum_nav_floor() -> Decimal {
    Decimal::from(500) // $500
}

fn default_median_multiplier() -> Decimal {
    Decimal::new(12, 1) // 1.2x median
}

fn default_view_result_limit() -> usize {
    20
}

fn default_score_tie_precision() -> u32 {
    2 // 0.01 points
}

fn default_renumber_after_pin() -> bool {
    true
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            minimum_nav_floor: default_minimum_nav_floor(),
            median_multiplier: default_median_multiplier(),
            view_result_limit: default_view_result_limit(),
            score_tie_precision: default_score_tie_precision(),
            renumber_after_pin: default_renumber_after_pin(),
        }
    }
}

impl RankingConfig {
    /// Validate configuration values.
    ///
    /// Returns Err if values are invalid:
    /// - minimum_nav_floor < 0
    /// - median_multiplier <= 0
    /// - view_result_limit == 0
    /// - score_tie_precision > MAX_SCORE_TIE_PRECISION
    pub fn validate(&self) -> RankingResult<()> {
        if self.minimum_nav_floor.is_sign_negative() && !self.minimum_nav_floor.is_zero() {
            return Err(RankingError::InvalidConfig(format!(
                "minimum_nav_floor ({}) must be non-negative",
                self.minimum_nav_floor
            )));
        }

        if self.median_multiplier.is_sign_negative() || self.median_multiplier.is_zero() {
            return Err(RankingError::InvalidConfig(format!(
                "median_multiplier ({}) must be positive",
                self.median_multiplier
            )));
        }

        if self.view_result_limit == 0 {
            return Err(RankingError::InvalidConfig(
                "view_result_limit must be at least 1".to_string(),
            ));
        }

        if self.score_tie_precision > MAX_SCORE_TIE_PRECISION {
            return Err(RankingError::InvalidConfig(format!(
                "score_tie_precision ({}) must be at most {}",
                self.score_tie_precision, MAX_SCORE_TIE_PRECISION
            )));
        }

        Ok(())
    }
}

/// Per-request ranking options.
///
/// `None` fields fall back to the engine's `RankingConfig`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankOptions {
    /// Override for the scale board NAV floor.
    #[serde(default)]
    pub minimum_nav_floor: Option<Decimal>,
    /// Override for the scale board median multiplier.
    #[serde(default)]
    pub median_multiplier: Option<Decimal>,
    /// Explicit board length. Applies to every view, including score.
    #[serde(default)]
    pub result_limit: Option<usize>,
    /// Deep-link reference (bot id or name fragment) to pin at the top.
    /// Surrounding whitespace is trimmed; a blank reference pins nothing.
    #[serde(default)]
    pub pinned_reference: Option<String>,
    /// Metric for the popularity board.
    #[serde(default)]
    pub popularity_metric: PopularityMetric,
    /// Replaces the board's default order after filtering.
    #[serde(default)]
    pub sort_by: Option<SortKey>,
    /// Drop ineligible bots before ranking.
    #[serde(default)]
    pub eligible_only: bool,
}

impl RankOptions {
    /// Options with only a pin reference set.
    pub fn pinned(reference: impl Into<String>) -> Self {
        Self {
            pinned_reference: Some(reference.into()),
            ..Default::default()
        }
    }

    /// The pin reference, if it is set and not blank.
    pub fn pin_reference(&self) -> Option<&str> {
        self.pinned_reference
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }

    /// Board length for `view`, resolved against `config`.
    ///
    /// Returns None for an unlimited board.
    pub fn result_limit_for(&self, view: ViewMode, config: &RankingConfig) -> Option<usize> {
        match self.result_limit {
            Some(limit) => Some(limit),
            None if view.is_truncated() => Some(config.view_result_limit),
            None => None,
        }
    }
}
