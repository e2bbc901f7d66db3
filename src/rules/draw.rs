//! Draw detection logic.

use crate::types::Board;
use chrono::{DateTime, Utc};
use tracing::instrument;

/// Wall-clock cap on a game, in seconds.
pub const DEFAULT_TIME_CAP_SECS: i64 = 180;

/// Cap on total accepted placements in a game.
pub const DEFAULT_MOVE_CAP: u32 = 60;

/// Checks if the game is a draw.
///
/// The conditions are evaluated in order: board full, then move cap, then
/// time cap. Any single condition suffices.
#[instrument]
pub fn check_draw(
    board: &Board,
    move_count: u32,
    started_at: DateTime<Utc>,
    now: DateTime<Utc>,
    time_cap_secs: i64,
    move_cap: u32,
) -> bool {
    if board.is_full() {
        return true;
    }

    if move_count >= move_cap {
        return true;
    }

    (now - started_at).num_seconds() >= time_cap_secs
}
