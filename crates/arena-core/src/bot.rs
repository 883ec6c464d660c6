//! Bot performance records.
//!
//! `BotRecord` is what the data source supplies; `RankedBot` is what the
//! ranking engine hands to the presentation layer. Rank and score are never
//! stored on the input record: they are derived on every ranking pass.

use crate::{Score, Usd};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One trading bot's performance snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotRecord {
    /// Stable identifier, unique across the roster.
    pub id: String,
    /// Display name. Not unique; used as the fallback pin match key.
    pub name: String,
    /// Current net asset value.
    #[serde(default, alias = "aum", alias = "currentNav")]
    pub current_nav: Usd,
    /// Current profit/loss (signed).
    #[serde(default, alias = "pnl", alias = "currentPnl")]
    pub current_pnl: Usd,
    /// Historical peak NAV (score denominator).
    #[serde(default, alias = "maxNav")]
    pub max_nav: Usd,
    /// Historical peak PnL (score denominator).
    #[serde(default, alias = "maxPnl")]
    pub max_pnl: Usd,
    /// Cumulative trading volume.
    #[serde(default)]
    pub volume: Usd,
    #[serde(default, alias = "subscribers", alias = "subscriberCount")]
    pub subscriber_count: u64,
    /// Curated score. When positive it replaces the computed score.
    #[serde(default, alias = "score", alias = "manualScore")]
    pub manual_score: Option<Score>,
    /// Competition eligibility, independent of board filters.
    #[serde(default = "default_eligible")]
    pub eligible: bool,
    #[serde(default, alias = "isPinned")]
    pub is_pinned: bool,
    #[serde(default, alias = "isFeatured", alias = "featured")]
    pub is_featured: bool,

    // --- Presentation fields, carried through untouched ---
    #[serde(default, alias = "roi")]
    pub roi_pct: Decimal,
    #[serde(default, alias = "maxDrawdown")]
    pub max_drawdown_pct: Decimal,
    #[serde(default, alias = "winRate")]
    pub win_rate_pct: Decimal,
    #[serde(default, alias = "navGrowth7d")]
    pub nav_growth_7d_pct: Decimal,
    #[serde(default, alias = "pnl7dAvg")]
    pub pnl_7d_avg: Usd,
    #[serde(default, alias = "peakTime")]
    pub peak_date: Option<NaiveDate>,
    #[serde(default, alias = "isKOL")]
    pub is_kol: bool,
    #[serde(default, alias = "unqualifiedReason")]
    pub unqualified_reason: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

fn default_eligible() -> bool {
    true
}

impl BotRecord {
    /// Create a record with zeroed figures.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            current_nav: Usd::ZERO,
            current_pnl: Usd::ZERO,
            max_nav: Usd::ZERO,
            max_pnl: Usd::ZERO,
            volume: Usd::ZERO,
            subscriber_count: 0,
            manual_score: None,
            eligible: default_eligible(),
            is_pinned: false,
            is_featured: false,
            roi_pct: Decimal::ZERO,
            max_drawdown_pct: Decimal::ZERO,
            win_rate_pct: Decimal::ZERO,
            nav_growth_7d_pct: Decimal::ZERO,
            pnl_7d_avg: Usd::ZERO,
            peak_date: None,
            is_kol: false,
            unqualified_reason: None,
            avatar: None,
        }
    }

    /// Manual score if it is set and positive.
    pub fn active_manual_score(&self) -> Option<Score> {
        self.manual_score.filter(Score::is_positive)
    }

    /// Check whether a deep-link reference designates this bot.
    ///
    /// Matches on exact id, or on a case-insensitive substring of the name.
    pub fn matches_reference(&self, reference: &str) -> bool {
        self.id == reference || self.name.to_lowercase().contains(&reference.to_lowercase())
    }
}

/// A bot record positioned on a computed board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedBot {
    /// 1-based position on the board.
    pub rank: u32,
    /// Effective score (manual override or computed).
    pub score: Score,
    /// Highlighted entry (input flag or pinned by reference).
    pub featured: bool,
    /// Moved to the top by a deep-link reference.
    pub pinned: bool,
    #[serde(flatten)]
    pub bot: BotRecord,
}

impl RankedBot {
    /// Wrap a record before rank assignment.
    pub fn unranked(bot: BotRecord, score: Score) -> Self {
        Self {
            rank: 0,
            score,
            featured: bot.is_featured,
            pinned: false,
            bot,
        }
    }

    pub fn id(&self) -> &str {
        &self.bot.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_matches_reference() {
        let bot = BotRecord::new("leonidas", "Leonidas Alpha Bot");

        assert!(bot.matches_reference("leonidas"));
        assert!(bot.matches_reference("ALPHA"));
        assert!(bot.matches_reference("alpha bot"));
        assert!(!bot.matches_reference("spartan"));
    }

    #[test]
    fn test_id_match_is_exact() {
        let bot = BotRecord::new("bot-7", "Seven");
        assert!(bot.matches_reference("bot-7"));
        assert!(!bot.matches_reference("BOT-7"));
    }

    #[test]
    fn test_active_manual_score() {
        let mut bot = BotRecord::new("a", "A");
        assert_eq!(bot.active_manual_score(), None);

        bot.manual_score = Some(Score::ZERO);
        assert_eq!(bot.active_manual_score(), None);

        bot.manual_score = Some(Score::new(dec!(97.7)));
        assert_eq!(bot.active_manual_score(), Some(Score::new(dec!(97.7))));
    }

    #[test]
    fn test_deserialize_frontend_names() {
        let json = r#"{
            "id": "helios",
            "name": "Helios Bot",
            "aum": 180000,
            "pnl": -51200.5,
            "maxNav": "200000",
            "maxPnl": 55000,
            "subscribers": 42,
            "peakTime": "2025-01-12"
        }"#;
        let bot: BotRecord = serde_json::from_str(json).unwrap();

        assert_eq!(bot.current_nav.inner(), dec!(180000));
        assert_eq!(bot.current_pnl.inner(), dec!(-51200.5));
        assert_eq!(bot.max_nav.inner(), dec!(200000));
        assert_eq!(bot.subscriber_count, 42);
        assert_eq!(bot.manual_score, None);
        assert!(bot.eligible);
        assert_eq!(
            bot.peak_date,
            Some(NaiveDate::from_ymd_opt(2025, 1, 12).unwrap())
        );
    }

    #[test]
    fn test_ranked_bot_serializes_flat() {
        let mut bot = BotRecord::new("zeus", "Zeus Bot");
        bot.is_featured = true;
        let mut ranked = RankedBot::unranked(bot, Score::new(dec!(68.5)));
        ranked.rank = 3;

        let value = serde_json::to_value(&ranked).unwrap();
        assert_eq!(value["rank"], 3);
        assert_eq!(value["id"], "zeus");
        assert_eq!(value["featured"], true);
        assert_eq!(value["pinned"], false);
    }
}
