//! Board-level properties of the ranking engine.
//!
//! Runs every view over the demo roster and a family of generated rosters
//! and checks the invariants the presentation layer relies on:
//! - the input roster is never mutated
//! - ranks are 1..=n with no gaps or duplicates
//! - scores never exceed 100
//! - board filters and orders hold
//! - pinning and idempotence

use arena_core::{BotRecord, PopularityMetric, RankedBot, Score, Usd, ViewMode};
use arena_ranking::{
    median_nav, nav_threshold, rank, validate_roster, LeaderboardEngine, RankOptions,
    RankingConfig,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn demo_roster() -> Vec<BotRecord> {
    serde_json::from_str(include_str!("../../../data/bots.json")).expect("demo roster parses")
}

/// Deterministic rosters with repeated NAVs, subscriber ties, negative PnL
/// and zero peaks.
fn generated_roster(size: usize, seed: u64) -> Vec<BotRecord> {
    (0..size)
        .map(|i| {
            let k = (i as u64 + 1) * 7919 + seed * 104_729;
            let nav = Decimal::from((k % 50) * 1000);
            let max_nav = if k % 11 == 0 {
                Decimal::ZERO
            } else {
                nav + Decimal::from(k % 7 * 500)
            };
            let pnl = Decimal::from(k % 900) - Decimal::from(300);
            BotRecord {
                current_nav: Usd::new(nav),
                max_nav: Usd::new(max_nav),
                current_pnl: Usd::new(pnl),
                max_pnl: Usd::new(Decimal::from(k % 4 * 250)),
                volume: Usd::new(Decimal::from(k % 13 * 10_000)),
                subscriber_count: k % 5 * 100,
                manual_score: (k % 9 == 0).then(|| Score::new(dec!(88.8))),
                eligible: k % 6 != 0,
                ..BotRecord::new(format!("bot-{seed}-{i}"), format!("Generated {i}"))
            }
        })
        .collect()
}

fn all_rosters() -> Vec<Vec<BotRecord>> {
    let mut rosters = vec![demo_roster(), Vec::new()];
    for (size, seed) in [(1, 0), (2, 1), (7, 2), (25, 3), (40, 4)] {
        rosters.push(generated_roster(size, seed));
    }
    rosters
}

fn option_sets() -> Vec<RankOptions> {
    vec![
        RankOptions::default(),
        RankOptions::pinned("bot"),
        RankOptions {
            popularity_metric: PopularityMetric::Volume,
            eligible_only: true,
            ..Default::default()
        },
        RankOptions {
            result_limit: Some(5),
            pinned_reference: Some("Generated 3".to_string()),
            ..Default::default()
        },
    ]
}

fn ranks(entries: &[RankedBot]) -> Vec<u32> {
    entries.iter().map(|e| e.rank).collect()
}

fn ids(entries: &[RankedBot]) -> Vec<&str> {
    entries.iter().map(RankedBot::id).collect()
}

#[test]
fn test_demo_roster_is_valid() {
    let roster = demo_roster();
    assert_eq!(roster.len(), 16);
    assert!(validate_roster(&roster).is_ok());
}

#[test]
fn test_input_never_mutated() {
    for roster in all_rosters() {
        let before = roster.clone();
        for view in ViewMode::ALL {
            for options in option_sets() {
                let _ = rank(&roster, view, &options);
                assert_eq!(roster, before);
            }
        }
    }
}

#[test]
fn test_ranks_contiguous_from_one() {
    for roster in all_rosters() {
        for view in ViewMode::ALL {
            for options in option_sets() {
                let entries = rank(&roster, view, &options);
                let expected: Vec<u32> = (1..=entries.len() as u32).collect();
                assert_eq!(ranks(&entries), expected, "view {view}, options {options:?}");
            }
        }
    }
}

#[test]
fn test_scores_never_exceed_100() {
    for roster in all_rosters() {
        for entry in rank(&roster, ViewMode::Score, &RankOptions::default()) {
            assert!(entry.score <= Score::MAX, "{} scored {}", entry.id(), entry.score);
        }
    }
}

#[test]
fn test_zero_peaks_without_manual_score_is_zero() {
    let bot = BotRecord {
        current_nav: Usd::new(dec!(75000)),
        current_pnl: Usd::new(dec!(1200)),
        ..BotRecord::new("nopeak", "No Peak")
    };
    let entries = rank(&[bot], ViewMode::Score, &RankOptions::default());
    assert_eq!(entries[0].score, Score::ZERO);
}

#[test]
fn test_scale_board_respects_threshold() {
    let config = RankingConfig::default();
    for roster in all_rosters() {
        let threshold = nav_threshold(
            median_nav(&roster),
            config.minimum_nav_floor,
            config.median_multiplier,
        );
        let board =
            LeaderboardEngine::default().rank(&roster, ViewMode::Scale, &RankOptions::default());

        assert_eq!(board.nav_threshold, threshold);
        for entry in &board.entries {
            assert!(entry.bot.current_nav >= threshold);
        }
        assert!(board.len() <= config.view_result_limit);
    }
}

#[test]
fn test_popularity_sorted_and_stable() {
    for roster in all_rosters() {
        let entries = rank(&roster, ViewMode::Popularity, &RankOptions::default());
        let position = |id: &str| roster.iter().position(|b| b.id == id).unwrap();

        for pair in entries.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.bot.subscriber_count >= b.bot.subscriber_count);
            if a.bot.subscriber_count == b.bot.subscriber_count {
                assert!(position(a.id()) < position(b.id()), "tie order broken");
            }
        }
    }
}

#[test]
fn test_idempotent() {
    let engine = LeaderboardEngine::default();
    for roster in all_rosters() {
        for view in ViewMode::ALL {
            for options in option_sets() {
                let first = engine.rank(&roster, view, &options);
                let second = engine.rank(&roster, view, &options);
                assert_eq!(first, second);
            }
        }
    }
}

#[test]
fn test_pinning_moves_match_to_top() {
    let roster = demo_roster();
    let board = rank(&roster, ViewMode::Score, &RankOptions::default());

    for entry in &board {
        let pinned = rank(&roster, ViewMode::Score, &RankOptions::pinned(entry.id()));
        assert_eq!(pinned[0].id(), entry.id());
        assert!(pinned[0].featured);
        assert!(pinned[0].pinned);
        assert_eq!(pinned.len(), board.len());
    }
}

#[test]
fn test_pin_by_name_picks_highest_ranked_match() {
    // "spartan" matches "SPARTANS Alpha" (rank 5) and "SPARTANSX Bot" (rank 6)
    let entries = rank(&demo_roster(), ViewMode::Score, &RankOptions::pinned("spartan"));
    assert_eq!(entries[0].id(), "spartan_alpha");
    assert_eq!(entries[5].id(), "spartanx");
}

#[test]
fn test_demo_score_board() {
    let entries = rank(&demo_roster(), ViewMode::Score, &RankOptions::default());

    assert_eq!(entries.len(), 16);
    assert_eq!(
        ids(&entries[..5]),
        vec!["leonidas", "atlas", "ares", "gladiator", "spartan_alpha"]
    );
    let last = entries.last().unwrap();
    assert_eq!(last.id(), "perseus");
    // 12000/15000 + (-200/500) = 0.4 -> 20
    assert_eq!(last.score.inner(), dec!(20));
}

#[test]
fn test_demo_scale_board() {
    let board =
        LeaderboardEngine::default().rank(&demo_roster(), ViewMode::Scale, &RankOptions::default());

    // Median of 16 NAVs = (210000 + 280000) / 2, threshold = 245000 * 1.2
    assert_eq!(board.median_nav, Some(Usd::new(dec!(245000))));
    assert_eq!(board.nav_threshold.inner(), dec!(294000));
    assert_eq!(
        ids(&board.entries),
        vec!["atlas", "hyperion", "ares", "spartanx", "odysseus", "leonidas"]
    );
}

#[test]
fn test_demo_popularity_board() {
    let entries = rank(&demo_roster(), ViewMode::Popularity, &RankOptions::default());

    assert_eq!(entries[0].id(), "atlas");
    // spartanx and hyperion share 1180 subscribers; roster order decides
    let spartanx = entries.iter().position(|e| e.id() == "spartanx").unwrap();
    let hyperion = entries.iter().position(|e| e.id() == "hyperion").unwrap();
    assert_eq!(hyperion, spartanx + 1);
}

#[test]
fn test_demo_pnl_board() {
    let entries = rank(&demo_roster(), ViewMode::Pnl, &RankOptions::default());

    assert_eq!(entries.len(), 15);
    assert_eq!(entries[0].id(), "ares");
    assert!(entries.iter().all(|e| e.id() != "perseus"));
}

#[test]
fn test_scale_scenario() {
    let roster: Vec<BotRecord> = [dec!(100), dec!(300), dec!(500)]
        .into_iter()
        .enumerate()
        .map(|(i, nav)| BotRecord {
            current_nav: Usd::new(nav),
            ..BotRecord::new(format!("b{i}"), format!("B{i}"))
        })
        .collect();

    let options = RankOptions {
        minimum_nav_floor: Some(dec!(500)),
        median_multiplier: Some(dec!(1.2)),
        ..Default::default()
    };
    let entries = rank(&roster, ViewMode::Scale, &options);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].bot.current_nav.inner(), dec!(500));
}

#[test]
fn test_empty_roster_every_view() {
    for view in ViewMode::ALL {
        assert!(rank(&[], view, &RankOptions::default()).is_empty());
    }
}

#[test]
fn test_huge_navs_rank_in_every_view() {
    let half_plus_one = Decimal::MAX / Decimal::TWO + Decimal::ONE;
    let huge = |id: &str, nav: Decimal| BotRecord {
        current_nav: Usd::new(nav),
        max_nav: Usd::new(nav),
        current_pnl: Usd::new(nav),
        max_pnl: Usd::new(dec!(1)),
        volume: Usd::new(nav),
        ..BotRecord::new(id, id.to_uppercase())
    };
    let rosters = [
        vec![huge("max", Decimal::MAX)],
        vec![huge("a", half_plus_one), huge("b", half_plus_one)],
        vec![
            huge("max", Decimal::MAX),
            huge("a", half_plus_one),
            huge("b", half_plus_one),
        ],
    ];

    for roster in &rosters {
        assert!(validate_roster(roster).is_ok());
        for view in ViewMode::ALL {
            for options in option_sets() {
                let entries = rank(roster, view, &options);
                let expected: Vec<u32> = (1..=entries.len() as u32).collect();
                assert_eq!(ranks(&entries), expected, "{view}");
                assert!(entries.iter().all(|e| e.score.inner() <= dec!(100)));
            }
        }
    }

    let median = median_nav(&rosters[1]).expect("non-empty roster");
    assert_eq!(median.inner(), half_plus_one);

    let scale = rank(&rosters[0], ViewMode::Scale, &RankOptions::default());
    assert_eq!(ids(&scale), vec!["max"]);
    assert_eq!(rank(&rosters[1], ViewMode::Popularity, &RankOptions::default()).len(), 2);
}
