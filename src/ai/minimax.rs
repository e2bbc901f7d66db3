//! Hard tier: game-tree search through the real move applier.
//!
//! The search must simulate moves with the genuine rolling-removal logic,
//! since removals change which cells open up later. Values are relative to
//! the side to move (negamax): decisive scores shrink by one per ply, so
//! faster wins and slower losses are preferred, and positions repeat-proof
//! dithering toward a forced win cannot stall the line.

use std::collections::HashMap;

use super::{AiError, AiMove, calculate_heuristic, legal_moves};
use crate::clock::{Clock, FixedClock};
use crate::types::{GameResult, GameState, Player, Square};
use tracing::debug;

/// Search horizon in plies. The 60-move cap makes the literal full tree
/// intractable, but every forced line in this game resolves well inside
/// this horizon; beyond it the positional heuristic stands in.
const MAX_DEPTH: u8 = 8;

/// Value of a win at the node it occurs in; one ply of distance costs one
/// point.
const WIN_SCORE: i32 = 10_000;

/// Scores beyond this magnitude are forced wins or losses.
const DECISIVE: i32 = 9_000;

const INFINITY: i32 = i32::MAX - 1;

/// Cell visit order for better alpha-beta cutoffs: center, corners, edges.
const SEARCH_ORDER: [usize; 9] = [4, 0, 2, 6, 8, 1, 3, 5, 7];

#[derive(Debug, Clone, Copy)]
enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy)]
struct TtEntry {
    depth: u8,
    value: i32,
    bound: Bound,
}

type TranspositionTable = HashMap<u64, TtEntry>;

/// Picks the minimax-optimal move for the side to move. Root candidates are
/// scanned in ascending cell order, so ties favor the lowest index.
pub fn choose(state: &GameState, player: Player, clock: &impl Clock) -> Result<AiMove, AiError> {
    let legal = legal_moves(state);
    if legal.is_empty() {
        return Err(AiError::NoLegalMoves);
    }

    // Freeze the clock so draw evaluation is stable across the search.
    let frozen = FixedClock(clock.now());
    let mut tt = TranspositionTable::new();

    let mut best_cell = legal[0];
    let mut best_score = -INFINITY;
    for &cell in &legal {
        let Ok(next) = state.apply_move(cell, &frozen) else {
            continue;
        };
        let score = match next.result() {
            GameResult::Win => WIN_SCORE - 1,
            GameResult::Draw => 0,
            GameResult::Ongoing => {
                let reply = negamax(&next, MAX_DEPTH - 1, -INFINITY, -best_score, &mut tt, &frozen);
                -toward_zero(reply)
            }
        };
        if score > best_score {
            best_score = score;
            best_cell = cell;
        }
    }

    debug!(
        player = %player,
        cell = best_cell,
        score = best_score,
        nodes = tt.len(),
        "minimax search finished"
    );

    Ok(AiMove {
        cell: best_cell,
        score: f64::from(best_score),
        reason: "Minimax evaluation",
    })
}

fn negamax(
    state: &GameState,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    tt: &mut TranspositionTable,
    clock: &FixedClock,
) -> i32 {
    if depth == 0 {
        return calculate_heuristic(state.board(), state.current_player());
    }

    let key = position_key(state);
    if let Some(entry) = tt.get(&key)
        && entry.depth >= depth
    {
        match entry.bound {
            Bound::Exact => return entry.value,
            Bound::Lower if entry.value >= beta => return entry.value,
            Bound::Upper if entry.value <= alpha => return entry.value,
            _ => {}
        }
    }

    let original_alpha = alpha;
    let mut best = -INFINITY;
    for cell in SEARCH_ORDER {
        let Ok(next) = state.apply_move(cell, clock) else {
            continue;
        };
        let score = match next.result() {
            GameResult::Win => WIN_SCORE - 1,
            GameResult::Draw => 0,
            GameResult::Ongoing => {
                -toward_zero(negamax(&next, depth - 1, -beta, -alpha, tt, clock))
            }
        };
        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break;
        }
    }

    if best == -INFINITY {
        // No playable cell; cannot happen while the game is ongoing.
        return 0;
    }

    let bound = if best <= original_alpha {
        Bound::Upper
    } else if best >= beta {
        Bound::Lower
    } else {
        Bound::Exact
    };
    tt.insert(
        key,
        TtEntry {
            depth,
            value: best,
            bound,
        },
    );

    best
}

/// Moves a decisive score one ply closer to zero; heuristic scores pass
/// through unchanged.
fn toward_zero(value: i32) -> i32 {
    if value > DECISIVE {
        value - 1
    } else if value < -DECISIVE {
        value + 1
    } else {
        value
    }
}

/// Packs the position into a transposition key.
///
/// Future play depends on the board, the side to move, the move count (for
/// the draw cap), and the *age order* of each player's surviving marks,
/// which governs upcoming removals. The age order is recovered from the
/// history with the same first-match scan the move applier uses.
fn position_key(state: &GameState) -> u64 {
    let mut key = 0u64;
    for player in [Player::X, Player::O] {
        let mut seen = [false; 9];
        let mut queue = 0u64;
        for &cell in state.move_history() {
            if !seen[cell] && state.board().get(cell) == Some(Square::Occupied(player)) {
                seen[cell] = true;
                queue = (queue << 4) | (cell as u64 + 1);
            }
        }
        key = (key << 16) | queue;
    }
    key = (key << 1) | u64::from(state.current_player() == Player::X);
    (key << 7) | u64::from(state.move_count() & 0x7f)
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn takes_an_immediate_win() {
        let state = play(&[0, 3, 1, 4]);
        let chosen = choose(&state, Player::X, &clock()).unwrap();
        assert_eq!(chosen.cell, 2);
        assert_eq!(chosen.reason, "Minimax evaluation");
        assert!(chosen.score as i32 > DECISIVE);
    }

    #[test]
    fn blocks_an_immediate_loss() {
        // O threatens [3,4,5]; every non-blocking X move loses next ply.
        let state = play(&[0, 3, 8, 4]);
        let chosen = choose(&state, Player::X, &clock()).unwrap();
        assert_eq!(chosen.cell, 5);
    }

    #[test]
    fn distinct_positions_get_distinct_keys() {
        let a = play(&[0, 3]);
        let b = play(&[3, 0]);
        // Same marks would collide, but ownership differs.
        assert_ne!(position_key(&a), position_key(&b));

        // Same cells for the same players, different age order.
        let c = play(&[0, 3, 1, 4]);
        let d = play(&[1, 4, 0, 3]);
        assert_ne!(position_key(&c), position_key(&d));
    }

    #[test]
    fn key_reflects_removals() {
        // After the rolling removal of X's mark at 0, the key must match a
        // game that never had it.
        let rolled = play(&[0, 1, 2, 3, 5, 4, 7]);
        assert!(rolled.board().is_empty(0));
        let key = position_key(&rolled);
        assert_ne!(key, position_key(&play(&[0, 1, 2, 3, 5, 4])));
        // Sanity: the key survives a round-trip through an equal state.
        assert_eq!(key, position_key(&rolled.clone()));
    }
}
