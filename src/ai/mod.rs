//! Move selection strategies for the computer opponent.
//!
//! All tiers operate through the rules and the move applier only: candidate
//! moves are evaluated by simulating them on a copy of the state and
//! discarding the result. The tiers never mutate the caller's state.

mod beginner;
mod heuristic;
mod minimax;
mod moderate;

pub use heuristic::{calculate_heuristic, evaluate_move};

use crate::clock::Clock;
use crate::rules;
use crate::types::{Board, Difficulty, GameState, Player, Square};
use derive_more::{Display, Error};
use rand::Rng;
use tracing::{debug, instrument};

/// A chosen move with its selection score and a human-readable reason.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiMove {
    /// Target cell index (0-8).
    pub cell: usize,
    /// Strategy-specific score of the chosen move.
    pub score: f64,
    /// Why this move was chosen.
    pub reason: &'static str,
}

/// Contract violations by the caller.
///
/// These are hard failures, not recoverable game outcomes: the embedding
/// application must not invoke the AI once the game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum AiError {
    /// The board has no empty cell to play.
    #[display("no legal moves available")]
    NoLegalMoves,
}

/// Returns all empty cell indices, in ascending order.
pub fn legal_moves(state: &GameState) -> Vec<usize> {
    (0..9).filter(|&pos| state.board().is_empty(pos)).collect()
}

/// Finds the first cell (ascending scan) where placing `player`'s mark
/// completes a line, skipping `exclude` if given.
pub fn find_immediate_win(board: &Board, player: Player, exclude: Option<usize>) -> Option<usize> {
    for pos in 0..9 {
        if Some(pos) == exclude || !board.is_empty(pos) {
            continue;
        }

        let mut trial = board.clone();
        trial.set(pos, Square::Occupied(player));
        if rules::check_win(&trial, player).is_some() {
            return Some(pos);
        }
    }
    None
}

/// Finds the cell that blocks the opponent's immediate win, i.e. the cell
/// the opponent would win at.
pub fn find_immediate_block(
    board: &Board,
    opponent: Player,
    exclude: Option<usize>,
) -> Option<usize> {
    find_immediate_win(board, opponent, exclude)
}

/// Selects a move for `player` at the given difficulty tier.
///
/// The random source drives the beginner tier's coin flips and tie-breaks;
/// the clock feeds the simulated draw checks. Callers must guard with the
/// game-over check before invoking this.
///
/// # Errors
///
/// Returns [`AiError::NoLegalMoves`] if the board has no empty cell.
#[instrument(skip(rng, clock))]
pub fn get_ai_move(
    state: &GameState,
    player: Player,
    difficulty: Difficulty,
    rng: &mut impl Rng,
    clock: &impl Clock,
) -> Result<AiMove, AiError> {
    let chosen = match difficulty {
        Difficulty::Beginner => beginner::choose(state, player, rng),
        Difficulty::Moderate => moderate::choose(state, player, clock),
        Difficulty::Hard => minimax::choose(state, player, clock),
    }?;
    debug!(
        cell = chosen.cell,
        score = chosen.score,
        reason = chosen.reason,
        "AI selected move"
    );
    Ok(chosen)
}
