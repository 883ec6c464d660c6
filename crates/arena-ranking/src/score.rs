//! Score calculation.
//!
//! ```text
//! nav_ratio = current_nav / max_nav        (0 when max_nav is 0)
//! pnl_ratio = current_pnl / max_pnl        (0 when max_pnl is 0)
//! score     = min(nav_ratio + pnl_ratio, 2.0) * 50
//! ```
//!
//! The upper bound is 100. There is no lower bound: a deep loss relative to
//! the PnL peak yields a negative score. A positive manual score replaces the
//! formula entirely.

use arena_core::{BotRecord, Score};
use rust_decimal::Decimal;
use serde::Serialize;

/// Cap on the combined NAV + PnL ratio.
pub const SCORE_RATIO_CAP: Decimal = Decimal::TWO;

/// Scale from the capped ratio to score points.
pub const SCORE_SCALE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Score from the NAV/PnL formula, ignoring any manual score.
pub fn computed_score(bot: &BotRecord) -> Score {
    ScoreBreakdown::of(bot).computed
}

/// Score used for ranking: a positive manual score wins unconditionally.
pub fn effective_score(bot: &BotRecord) -> Score {
    bot.active_manual_score().unwrap_or_else(|| computed_score(bot))
}

/// Intermediate values of the score formula for one bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub nav_ratio: Decimal,
    pub pnl_ratio: Decimal,
    pub base_percentage: Decimal,
    /// Formula result.
    pub computed: Score,
    /// Positive manual score, if any.
    pub manual: Option<Score>,
    /// Score actually used for ranking.
    pub effective: Score,
}

impl ScoreBreakdown {
    pub fn of(bot: &BotRecord) -> Self {
        let nav_ratio = bot.current_nav.ratio_to(bot.max_nav);
        let pnl_ratio = bot.current_pnl.ratio_to(bot.max_pnl);
        let base_percentage = nav_ratio.saturating_add(pnl_ratio);

        let capped = base_percentage.min(SCORE_RATIO_CAP);
        let computed = Score::new(capped.saturating_mul(SCORE_SCALE));
        let manual = bot.active_manual_score();

        Self {
            nav_ratio,
            pnl_ratio,
            base_percentage,
            computed,
            manual,
            effective: manual.unwrap_or(computed),
        }
    }

    pub fn is_manual(&self) -> bool {
        self.manual.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::Usd;
    use rust_decimal_macros::dec;

    fn bot(nav: Decimal, max_nav: Decimal, pnl: Decimal, max_pnl: Decimal) -> BotRecord {
        BotRecord {
            current_nav: Usd::new(nav),
            max_nav: Usd::new(max_nav),
            current_pnl: Usd::new(pnl),
            max_pnl: Usd::new(max_pnl),
            ..BotRecord::new("a", "Alpha")
        }
    }

    #[test]
    fn test_documented_example() {
        // min(10000/10000 + 2000/4000, 2.0) * 50 = min(1.5, 2.0) * 50 = 75
        let b = bot(dec!(10000), dec!(10000), dec!(2000), dec!(4000));
        assert_eq!(computed_score(&b).inner(), dec!(75));
    }

    #[test]
    fn test_upper_bound_is_100() {
        // Both ratios above peak: 1.5 + 3 = 4.5 -> capped at 2.0
        let b = bot(dec!(15000), dec!(10000), dec!(3000), dec!(1000));
        assert_eq!(computed_score(&b), Score::MAX);
    }

    #[test]
    fn test_negative_score_not_clamped() {
        // 0.5 + (-4000/1000) = -3.5 -> -175
        let b = bot(dec!(5000), dec!(10000), dec!(-4000), dec!(1000));
        assert_eq!(computed_score(&b).inner(), dec!(-175));
    }

    #[test]
    fn test_zero_peaks_score_zero() {
        let b = bot(dec!(12000), Decimal::ZERO, dec!(-200), Decimal::ZERO);
        assert_eq!(computed_score(&b), Score::ZERO);
        assert_eq!(effective_score(&b), Score::ZERO);
    }

    #[test]
    fn test_single_zero_peak() {
        // PnL peak missing: only the NAV ratio counts
        let b = bot(dec!(8000), dec!(10000), dec!(500), Decimal::ZERO);
        assert_eq!(computed_score(&b).inner(), dec!(40));
    }

    #[test]
    fn test_manual_score_overrides() {
        let mut b = bot(dec!(10000), dec!(10000), dec!(2000), dec!(4000));
        b.manual_score = Some(Score::new(dec!(97.7)));

        assert_eq!(effective_score(&b).inner(), dec!(97.7));
        assert_eq!(computed_score(&b).inner(), dec!(75));

        let breakdown = ScoreBreakdown::of(&b);
        assert!(breakdown.is_manual());
        assert_eq!(breakdown.effective.inner(), dec!(97.7));
        assert_eq!(breakdown.base_percentage, dec!(1.5));
    }

    #[test]
    fn test_non_positive_manual_score_ignored() {
        let mut b = bot(dec!(10000), dec!(10000), dec!(2000), dec!(4000));
        b.manual_score = Some(Score::new(dec!(-3)));

        assert_eq!(effective_score(&b).inner(), dec!(75));
        assert!(!ScoreBreakdown::of(&b).is_manual());
    }

    #[test]
    fn test_extreme_ratios_do_not_panic() {
        let b = bot(Decimal::MAX, dec!(0.0000001), Decimal::MIN, dec!(0.0000001));
        // Saturated ratios cancel out
        let score = computed_score(&b);
        assert!(score <= Score::MAX);
    }
}
