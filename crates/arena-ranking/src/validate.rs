//! Roster validation.
//!
//! The engine itself accepts any roster. Data sources call
//! `validate_roster` at load time to reject rosters that break the record
//! invariants before they reach a board.

use crate::error::{RankingError, RankingResult};
use arena_core::{BotRecord, Score, Usd};
use std::collections::HashSet;

/// Check record invariants across a roster.
///
/// - ids are non-empty and unique
/// - NAV, peak NAV, peak PnL and volume are non-negative
/// - a manual score, when set, is at most 100
pub fn validate_roster(records: &[BotRecord]) -> RankingResult<()> {
    let mut seen = HashSet::with_capacity(records.len());

    for bot in records {
        if bot.id.trim().is_empty() {
            return Err(invalid(bot, "id must not be empty"));
        }
        if !seen.insert(bot.id.as_str()) {
            return Err(RankingError::DuplicateId(bot.id.clone()));
        }

        let non_negative: [(&str, Usd); 4] = [
            ("current_nav", bot.current_nav),
            ("max_nav", bot.max_nav),
            ("max_pnl", bot.max_pnl),
            ("volume", bot.volume),
        ];
        for (field, value) in non_negative {
            if value.is_negative() {
                return Err(invalid(bot, &format!("{field} ({value}) must be non-negative")));
            }
        }

        if let Some(score) = bot.manual_score {
            if score > Score::MAX {
                return Err(invalid(bot, &format!("manual_score ({score}) exceeds 100")));
            }
        }
    }

    Ok(())
}

fn invalid(bot: &BotRecord, reason: &str) -> RankingError {
    RankingError::InvalidRecord {
        id: bot.id.clone(),
        reason: reason.to_string(),
    }
}
