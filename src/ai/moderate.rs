//! Moderate tier: win, block, then 1-ply lookahead.

use super::{AiError, AiMove, evaluate_move, find_immediate_block, find_immediate_win, legal_moves};
use crate::clock::Clock;
use crate::types::{GameState, Player};

/// Deterministic priority: take an immediate win, block the opponent's
/// immediate win, otherwise pick the best 1-ply evaluation. Ties favor the
/// lowest cell index.
pub fn choose(state: &GameState, player: Player, clock: &impl Clock) -> Result<AiMove, AiError> {
    let legal = legal_moves(state);
    if legal.is_empty() {
        return Err(AiError::NoLegalMoves);
    }

    if let Some(cell) = find_immediate_win(state.board(), player, None) {
        return Ok(AiMove {
            cell,
            score: 1000.0,
            reason: "Immediate win",
        });
    }

    if let Some(cell) = find_immediate_block(state.board(), player.opponent(), None) {
        return Ok(AiMove {
            cell,
            score: 500.0,
            reason: "Blocked opponent win",
        });
    }

    let mut best_cell = legal[0];
    let mut best_score = f64::NEG_INFINITY;
    for &cell in &legal {
        let score = evaluate_move(state, cell, player, clock);
        if score > best_score {
            best_score = score;
            best_cell = cell;
        }
    }

    Ok(AiMove {
        cell: best_cell,
        score: best_score,
        reason: "Heuristic evaluation",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    fn clock() -> FixedClock {
        FixedClock(Utc.timestamp_opt(1_000_000_000, 0).unwrap())
    }

    fn play(cells: &[usize]) -> GameState {
        cells.iter().fold(GameState::new(Player::X, &clock()), |s, &cell| {
            s.apply_move(cell, &clock()).expect("legal move")
        })
    }

    #[test]
    fn prefers_a_win_over_a_block() {
        // X can win at 2 while O threatens at 5; the win takes priority.
        let state = play(&[0, 3, 1, 4]);
        let chosen = choose(&state, Player::X, &clock()).unwrap();
        assert_eq!(chosen.cell, 2);
        assert_eq!(chosen.score, 1000.0);
        assert_eq!(chosen.reason, "Immediate win");
    }

    #[test]
    fn blocks_when_it_cannot_win() {
        // O threatens [3,4,5]; X has no win of its own.
        let state = play(&[0, 3, 8, 4]);
        let chosen = choose(&state, Player::X, &clock()).unwrap();
        assert_eq!(chosen.cell, 5);
        assert_eq!(chosen.reason, "Blocked opponent win");
    }

    #[test]
    fn opens_in_the_center() {
        // No wins or threats on an empty board: the lookahead favors the
        // center, which scores highest on the positional table.
        let state = GameState::new(Player::X, &clock());
        let chosen = choose(&state, Player::X, &clock()).unwrap();
        assert_eq!(chosen.cell, 4);
        assert_eq!(chosen.reason, "Heuristic evaluation");
    }

    #[test]
    fn ties_favor_the_lowest_index() {
        // Symmetric position for O: several corners evaluate equally; the
        // scan order keeps the first one.
        let state = play(&[4]);
        let chosen = choose(&state, Player::O, &clock()).unwrap();
        assert_eq!(chosen.reason, "Heuristic evaluation");
        let expected: f64 = [0, 1, 2, 3, 5, 6, 7, 8]
            .iter()
            .map(|&cell| evaluate_move(&state, cell, Player::O, &clock()))
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(
            evaluate_move(&state, chosen.cell, Player::O, &clock()),
            expected
        );
        // All four corners tie; 0 is scanned first.
        assert_eq!(chosen.cell, 0);
    }
}
