//! Prometheus metrics and structured logging for the leaderboard arena.
//!
//! - Prometheus metrics for ranking passes, pins and roster size
//! - Structured JSON logging with tracing

pub mod error;
pub mod logging;
pub mod metrics;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::init_logging;
pub use metrics::{gather_text, Metrics};
