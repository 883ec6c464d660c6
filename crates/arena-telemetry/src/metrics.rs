//! Prometheus metrics for the leaderboard arena.
//!
//! # Panics
//!
//! Metric registration uses `unwrap()` intentionally. If registration fails,
//! it indicates a fatal configuration error (e.g., duplicate metric names)
//! that should cause an immediate crash at startup rather than silent failure.
//! These panics only occur during static initialization, never at runtime.

use crate::error::TelemetryResult;
use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec, register_histogram_vec, register_int_gauge, CounterVec, Encoder,
    HistogramVec, IntGauge, TextEncoder,
};

/// Total ranking passes.
/// Labels: view (score/scale/popularity/pnl)
pub static RANK_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!("arena_rank_total", "Total leaderboard ranking passes", &["view"])
        .unwrap()
});

/// Entries returned per ranking pass.
pub static RANK_ENTRIES: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "arena_rank_entries",
        "Entries returned per ranking pass",
        &["view"],
        vec![0.0, 1.0, 5.0, 10.0, 20.0, 50.0, 100.0, 500.0]
    )
    .unwrap()
});

/// Records dropped by board filters and top-N limits.
pub static RANK_FILTERED_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "arena_rank_filtered_total",
        "Records removed by board filters and limits",
        &["view"]
    )
    .unwrap()
});

/// Pin attempts by outcome (hit/miss).
pub static PIN_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "arena_pin_total",
        "Deep-link pin attempts by outcome",
        &["outcome"]
    )
    .unwrap()
});

/// Current roster size served by the API.
pub static ROSTER_SIZE: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!("arena_roster_size", "Bots in the current roster").unwrap()
});

/// Metrics helper.
pub struct Metrics;

impl Metrics {
    /// Record one ranking pass.
    pub fn rank_computed(view: &str, candidates: usize, entries: usize) {
        RANK_TOTAL.with_label_values(&[view]).inc();
        RANK_ENTRIES
            .with_label_values(&[view])
            .observe(entries as f64);
        RANK_FILTERED_TOTAL
            .with_label_values(&[view])
            .inc_by(candidates.saturating_sub(entries) as f64);
    }

    /// Record a pin attempt.
    pub fn pin_attempt(hit: bool) {
        let outcome = if hit { "hit" } else { "miss" };
        PIN_TOTAL.with_label_values(&[outcome]).inc();
    }

    /// Set roster size.
    pub fn roster_size(size: usize) {
        ROSTER_SIZE.set(i64::try_from(size).unwrap_or(i64::MAX));
    }
}

/// Render every registered metric in the Prometheus text format.
pub fn gather_text() -> TelemetryResult<String> {
    let encoder = TextEncoder::new();
    let families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
