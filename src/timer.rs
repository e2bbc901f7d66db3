//! Wall-clock display values derived from a game state.

use crate::clock::Clock;
use crate::types::{GameResult, GameState};
use serde::Serialize;

/// Default wall-clock cap on a game, in milliseconds.
pub const DEFAULT_TIME_CAP_MS: i64 = 180_000;

/// Display-ready timer values for a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimerState {
    /// Milliseconds since game start.
    pub elapsed_ms: i64,
    /// Milliseconds until the time cap, clamped at zero.
    pub remaining_ms: i64,
    /// Whether the game is still ongoing.
    pub is_running: bool,
    /// `mm:ss.t` rendering of the remaining time while running, or of the
    /// elapsed time once finished.
    pub formatted: String,
}

/// Milliseconds elapsed since game start.
pub fn elapsed_ms(state: &GameState, clock: &impl Clock) -> i64 {
    (clock.now() - state.started_at()).num_milliseconds()
}

/// Milliseconds remaining until the time cap, clamped at zero.
pub fn remaining_ms(state: &GameState, time_cap_ms: i64, clock: &impl Clock) -> i64 {
    (time_cap_ms - elapsed_ms(state, clock)).max(0)
}

/// Formats a millisecond duration as `mm:ss.t`.
///
/// Minutes, seconds, and the tenths digit are truncated, not rounded.
/// Negative inputs clamp to `00:00.0`.
pub fn format_time(time_ms: i64) -> String {
    let time_ms = time_ms.max(0);
    let minutes = time_ms / 60_000;
    let seconds = (time_ms / 1000) % 60;
    let tenths = (time_ms % 1000) / 100;
    format!("{minutes:02}:{seconds:02}.{tenths}")
}

/// Computes the complete timer state for a game.
pub fn timer_state(state: &GameState, time_cap_ms: i64, clock: &impl Clock) -> TimerState {
    let elapsed_ms = elapsed_ms(state, clock);
    let remaining_ms = (time_cap_ms - elapsed_ms).max(0);
    let is_running = state.result() == GameResult::Ongoing;

    // Count down while playing, show the total once the game is over.
    let display_ms = if is_running { remaining_ms } else { elapsed_ms };

    TimerState {
        elapsed_ms,
        remaining_ms,
        is_running,
        formatted: format_time(display_ms),
    }
}
