//! Board filters.
//!
//! The scale board admits bots whose NAV reaches
//! `max(floor, median_nav * multiplier)`, where the median is taken over the
//! whole roster before any filtering. The pnl board admits non-negative PnL.

use arena_core::{BotRecord, RankedBot, Usd, ViewMode};
use rust_decimal::Decimal;

/// Median of `current_nav` over all records.
///
/// An even count averages the two middle values. Returns None for an empty
/// roster.
pub fn median_nav(records: &[BotRecord]) -> Option<Usd> {
    if records.is_empty() {
        return None;
    }

    let mut navs: Vec<Usd> = records.iter().map(|b| b.current_nav).collect();
    navs.sort_unstable();

    let mid = navs.len() / 2;
    if navs.len() % 2 == 1 {
        return Some(navs[mid]);
    }

    let (low, high) = (navs[mid - 1].inner(), navs[mid].inner());
    let median = match low.checked_add(high) {
        Some(sum) => sum / Decimal::TWO,
        None => low / Decimal::TWO + high / Decimal::TWO,
    };
    Some(Usd::new(median))
}

/// Scale board NAV threshold: `max(floor, median * multiplier)`.
///
/// Without a median (empty roster) the floor applies. The product saturates
/// at `Decimal::MAX`.
pub fn nav_threshold(median: Option<Usd>, floor: Decimal, multiplier: Decimal) -> Usd {
    let floor = Usd::new(floor);
    match median {
        Some(median) => floor.max(Usd::new(median.inner().saturating_mul(multiplier))),
        None => floor,
    }
}

/// Apply the board filter of `view` in place.
pub(crate) fn retain_for_view(entries: &mut Vec<RankedBot>, view: ViewMode, threshold: Usd) {
    match view {
        ViewMode::Scale => entries.retain(|e| e.bot.current_nav >= threshold),
        ViewMode::Pnl => entries.retain(|e| !e.bot.current_pnl.is_negative()),
        ViewMode::Score | ViewMode::Popularity => {}
    }
}
