//! Leaderboard engine.
//!
//! One pass over a borrowed roster:
//! 1. Score every bot (manual override or formula)
//! 2. Apply the board filter (scale threshold, non-negative PnL)
//! 3. Stable sort by the board's key (or the requested `sort_by`)
//! 4. Truncate to the board length
//! 5. Assign ranks 1..=n
//! 6. Pin the deep-linked bot, if any
//!
//! The roster is never mutated; every call allocates a fresh board.

use crate::config::{RankOptions, RankingConfig};
use crate::filter::{median_nav, nav_threshold, retain_for_view};
use crate::order::{assign_ranks, sort_entries, sort_key_for};
use crate::pin::pin_reference;
use crate::score::effective_score;
use arena_core::{BotRecord, RankedBot, SortKey, Usd, ViewMode};
use arena_telemetry::Metrics;
use serde::Serialize;
use tracing::debug;

/// A computed board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leaderboard {
    pub view: ViewMode,
    /// Ordering that was applied.
    pub sort_key: SortKey,
    pub entries: Vec<RankedBot>,
    /// Median NAV of the full roster (None for an empty roster).
    pub median_nav: Option<Usd>,
    /// Scale board NAV threshold. Reported for every view so it can be shown.
    pub nav_threshold: Usd,
    /// Records considered before board filters and limits.
    pub candidate_count: usize,
    /// Id of the pinned bot, if the reference matched.
    pub pinned_id: Option<String>,
}

impl Leaderboard {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Stateless ranking engine bound to a `RankingConfig`.
#[derive(Debug, Clone, Default)]
pub struct LeaderboardEngine {
    config: RankingConfig,
}

impl LeaderboardEngine {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    /// Get current configuration.
    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Compute the board for `view`.
    pub fn rank(
        &self,
        records: &[BotRecord],
        view: ViewMode,
        options: &RankOptions,
    ) -> Leaderboard {
        let floor = options
            .minimum_nav_floor
            .unwrap_or(self.config.minimum_nav_floor);
        let multiplier = options
            .median_multiplier
            .unwrap_or(self.config.median_multiplier);

        // Median over the full roster, before eligibility or board filters
        let median = median_nav(records);
        let threshold = nav_threshold(median, floor, multiplier);

        let mut entries: Vec<RankedBot> = records
            .iter()
            .filter(|b| !options.eligible_only || b.eligible)
            .map(|b| RankedBot::unranked(b.clone(), effective_score(b)))
            .collect();
        let candidate_count = entries.len();

        retain_for_view(&mut entries, view, threshold);

        let sort_key = sort_key_for(view, options.popularity_metric, options.sort_by);
        sort_entries(&mut entries, sort_key, self.config.score_tie_precision);

        if let Some(limit) = options.result_limit_for(view, &self.config) {
            entries.truncate(limit);
        }

        assign_ranks(&mut entries);

        let pinned_id = options.pin_reference().and_then(|reference| {
            let pinned = pin_reference(&mut entries, reference, self.config.renumber_after_pin);
            Metrics::pin_attempt(pinned.is_some());
            pinned
        });

        Metrics::rank_computed(view.as_str(), candidate_count, entries.len());
        debug!(
            %view,
            %sort_key,
            candidates = candidate_count,
            entries = entries.len(),
            nav_threshold = %threshold,
            pinned = ?pinned_id,
            "Leaderboard computed"
        );

        Leaderboard {
            view,
            sort_key,
            entries,
            median_nav: median,
            nav_threshold: threshold,
            candidate_count,
            pinned_id,
        }
    }
}

/// Rank `records` with the default configuration.
///
/// Convenience for callers that only need the ordered entries.
pub fn rank(records: &[BotRecord], view: ViewMode, options: &RankOptions) -> Vec<RankedBot> {
    LeaderboardEngine::default()
        .rank(records, view, options)
        .entries
}
