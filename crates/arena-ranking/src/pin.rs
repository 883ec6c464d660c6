//! Deep-link pinning.
//!
//! A referenced bot (e.g. `?ref_bot=leonidas`) is moved to the top of an
//! already ranked board and marked featured. Only bots that made it onto the
//! board can be pinned.

use crate::order::assign_ranks;
use arena_core::RankedBot;
use tracing::info;

/// Move the first entry matching `reference` to index 0.
///
/// Matches on exact id or case-insensitive name substring, scanning in board
/// order. With `renumber` the board is renumbered after the move; without it
/// every entry keeps the rank computed before the move.
///
/// Returns the pinned bot id, or None if nothing matched.
pub fn pin_reference(
    entries: &mut Vec<RankedBot>,
    reference: &str,
    renumber: bool,
) -> Option<String> {
    let index = entries
        .iter()
        .position(|e| e.bot.matches_reference(reference))?;

    let mut pinned = entries.remove(index);
    pinned.featured = true;
    pinned.pinned = true;
    let id = pinned.bot.id.clone();
    info!(bot_id = %id, reference, from_rank = pinned.rank, "Pinned bot to top of board");
    entries.insert(0, pinned);

    if renumber {
        assign_ranks(entries);
    }

    Some(id)
}
