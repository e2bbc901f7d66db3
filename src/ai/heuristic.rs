//! Static positional evaluation and 1-ply move lookahead.

use super::find_immediate_win;
use crate::clock::Clock;
use crate::rules::WIN_LINES;
use crate::types::{Board, GameResult, GameState, Player, Square};

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Scores a board position for `player`. Higher is better.
///
/// This is a static evaluator, not a search: each winning line contributes
/// by occupancy (two marks and an empty: ±500, one mark and two empties:
/// ±50, a fully open line: +5), plus ±5 for the center and ±3 per corner.
pub fn calculate_heuristic(board: &Board, player: Player) -> i32 {
    let opponent = player.opponent();
    let mut score = 0;

    for line in &WIN_LINES {
        let count_of = |square: Square| {
            line.iter()
                .filter(|&&pos| board.get(pos) == Some(square))
                .count()
        };
        let player_count = count_of(Square::Occupied(player));
        let opponent_count = count_of(Square::Occupied(opponent));
        let empty_count = count_of(Square::Empty);

        if opponent_count == 0 && empty_count > 0 {
            score += match (player_count, empty_count) {
                (2, 1) => 500,
                (1, 2) => 50,
                (0, 3) => 5,
                _ => 0,
            };
        }

        if player_count == 0 && empty_count > 0 {
            score -= match (opponent_count, empty_count) {
                (2, 1) => 500,
                (1, 2) => 50,
                _ => 0,
            };
        }
    }

    match board.get(CENTER) {
        Some(Square::Occupied(p)) if p == player => score += 5,
        Some(Square::Occupied(_)) => score -= 5,
        _ => {}
    }

    for corner in CORNERS {
        match board.get(corner) {
            Some(Square::Occupied(p)) if p == player => score += 3,
            Some(Square::Occupied(_)) => score -= 3,
            _ => {}
        }
    }

    score
}

/// Evaluates placing at `cell` with a 1-ply lookahead.
///
/// Returns negative infinity if the move is rejected, 1000 if it wins
/// outright, the heuristic of the resulting board if the opponent has no
/// immediate winning reply, and -100 otherwise.
pub fn evaluate_move(state: &GameState, cell: usize, player: Player, clock: &impl Clock) -> f64 {
    let Ok(next) = state.apply_move(cell, clock) else {
        return f64::NEG_INFINITY;
    };

    if next.result() == GameResult::Win && next.current_player() == player {
        return 1000.0;
    }

    if next.result() == GameResult::Ongoing
        && find_immediate_win(next.board(), player.opponent(), None).is_none()
    {
        return f64::from(calculate_heuristic(next.board(), player));
    }

    // The opponent keeps an immediate win after this move.
    -100.0
}
