//! Score computation for finished (or ongoing) games.
//!
//! The formula is `round(1000 * L * R * (1 / (1 + 0.02*K + 0.01*T)))` where
//! `L` is the level multiplier, `R` the result multiplier, `K` the move
//! count, and `T` the elapsed seconds at call time. Elapsed time is read
//! from the injected clock, not frozen at game end, so callers should
//! compute scores promptly after a game finishes.

use crate::clock::Clock;
use crate::types::{Difficulty, GameResult, GameState, Player};
use tracing::instrument;

impl GameResult {
    /// Result multiplier `R`: win 1.0, draw 0.5, ongoing (and loss) 0.0.
    pub fn score_multiplier(self) -> f64 {
        match self {
            GameResult::Win => 1.0,
            GameResult::Draw => 0.5,
            GameResult::Ongoing => 0.0,
        }
    }
}

impl Difficulty {
    /// Level multiplier `L`: beginner 1.0, moderate 1.2, hard 1.5.
    pub fn score_multiplier(self) -> f64 {
        match self {
            Difficulty::Beginner => 1.0,
            Difficulty::Moderate => 1.2,
            Difficulty::Hard => 1.5,
        }
    }
}

/// All intermediate quantities of a score computation, for display and
/// debugging.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ScoreBreakdown {
    /// Result from the scored player's perspective (a loss is `Ongoing`).
    pub result: GameResult,
    /// Result multiplier `R`.
    pub result_multiplier: f64,
    /// Level multiplier `L`.
    pub level_multiplier: f64,
    /// Move count `K`.
    pub move_count: u32,
    /// Elapsed seconds `T` at call time.
    pub time_seconds: f64,
    /// `1 / (1 + 0.02*K + 0.01*T)`.
    pub time_multiplier: f64,
    /// `1000 * L * R`.
    pub base_score: f64,
    /// `round(base_score * time_multiplier)`.
    pub final_score: i64,
}

/// Computes the score breakdown for `player` at `level`.
///
/// The result is taken from the player's perspective: a won game counts as
/// a win only for the player holding the winning line (the state's current
/// player, since no turn switch happens on a win); for the loser it scores
/// identically to an unfinished game.
#[instrument(skip(clock))]
pub fn calculate_score(
    state: &GameState,
    player: Player,
    level: Difficulty,
    clock: &impl Clock,
) -> ScoreBreakdown {
    let result = match state.result() {
        GameResult::Win if state.current_player() == player => GameResult::Win,
        GameResult::Win => GameResult::Ongoing,
        other => other,
    };

    let result_multiplier = result.score_multiplier();
    let level_multiplier = level.score_multiplier();

    let move_count = state.move_count();
    let time_seconds = (clock.now() - state.started_at()).num_milliseconds() as f64 / 1000.0;

    let time_multiplier = 1.0 / (1.0 + 0.02 * f64::from(move_count) + 0.01 * time_seconds);
    let base_score = 1000.0 * level_multiplier * result_multiplier;
    let final_score = (base_score * time_multiplier).round() as i64;

    ScoreBreakdown {
        result,
        result_multiplier,
        level_multiplier,
        move_count,
        time_seconds,
        time_multiplier,
        base_score,
        final_score,
    }
}

/// Quick score calculation without the breakdown.
pub fn final_score(state: &GameState, player: Player, level: Difficulty, clock: &impl Clock) -> i64 {
    calculate_score(state, player, level, clock).final_score
}
