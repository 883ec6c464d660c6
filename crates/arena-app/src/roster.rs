//! Roster loading.

use std::path::Path;

use arena_core::BotRecord;
use arena_ranking::validate_roster;
use tracing::info;

use crate::error::{AppError, AppResult};

/// Read, parse and validate a roster JSON file.
pub fn load_roster(path: impl AsRef<Path>) -> AppResult<Vec<BotRecord>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::Roster(format!("Failed to read {}: {e}", path.display())))?;

    let roster = parse_roster(&content)?;
    info!(path = %path.display(), bots = roster.len(), "Roster loaded");
    Ok(roster)
}

/// Parse and validate roster JSON (an array of bot records).
pub fn parse_roster(content: &str) -> AppResult<Vec<BotRecord>> {
    let roster: Vec<BotRecord> = serde_json::from_str(content)?;
    validate_roster(&roster)?;
    Ok(roster)
}
