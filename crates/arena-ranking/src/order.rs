//! Board ordering.
//!
//! All orders are descending and applied with a stable sort, so entries that
//! compare equal keep their roster order.

use arena_core::{PopularityMetric, RankedBot, SortKey, ViewMode};
use std::cmp::Ordering;

/// Resolve the ordering for a board.
///
/// An explicit `sort_by` replaces the board default.
pub fn sort_key_for(
    view: ViewMode,
    metric: PopularityMetric,
    sort_by: Option<SortKey>,
) -> SortKey {
    if let Some(key) = sort_by {
        return key;
    }
    match view {
        ViewMode::Score => SortKey::Score,
        ViewMode::Scale => SortKey::Nav,
        ViewMode::Popularity => metric.sort_key(),
        ViewMode::Pnl => SortKey::Pnl,
    }
}

/// Compare two entries, higher first.
///
/// `SortKey::Score` compares scores at `tie_precision` decimal places, then
/// falls back to higher NAV, then higher PnL.
pub fn compare(a: &RankedBot, b: &RankedBot, key: SortKey, tie_precision: u32) -> Ordering {
    match key {
        SortKey::Score => b
            .score
            .round_dp(tie_precision)
            .cmp(&a.score.round_dp(tie_precision))
            .then_with(|| b.bot.current_nav.cmp(&a.bot.current_nav))
            .then_with(|| b.bot.current_pnl.cmp(&a.bot.current_pnl)),
        SortKey::Nav => b.bot.current_nav.cmp(&a.bot.current_nav),
        SortKey::Pnl => b.bot.current_pnl.cmp(&a.bot.current_pnl),
        SortKey::NavGrowth7d => b.bot.nav_growth_7d_pct.cmp(&a.bot.nav_growth_7d_pct),
        SortKey::Pnl7dAvg => b.bot.pnl_7d_avg.cmp(&a.bot.pnl_7d_avg),
        SortKey::Subscribers => b.bot.subscriber_count.cmp(&a.bot.subscriber_count),
        SortKey::Volume => b.bot.volume.cmp(&a.bot.volume),
    }
}

/// Stable sort of `entries` by `key`.
pub fn sort_entries(entries: &mut [RankedBot], key: SortKey, tie_precision: u32) {
    entries.sort_by(|a, b| compare(a, b, key, tie_precision));
}

/// Assign contiguous 1-based ranks in list order.
pub fn assign_ranks(entries: &mut [RankedBot]) {
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = u32::try_from(index + 1).unwrap_or(u32::MAX);
    }
}
