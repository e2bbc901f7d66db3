//! Beginner tier: random with light positional preferences.

use super::{AiError, AiMove, find_immediate_block, legal_moves};
use crate::types::{GameState, Player};
use rand::Rng;

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];
const EDGES: [usize; 4] = [1, 3, 5, 7];

/// Picks a move: half the time an existing immediate threat is blocked,
/// otherwise a uniform choice over the preference-ordered candidates
/// (center, then corners, then edges).
pub fn choose(
    state: &GameState,
    player: Player,
    rng: &mut impl Rng,
) -> Result<AiMove, AiError> {
    let legal = legal_moves(state);
    if legal.is_empty() {
        return Err(AiError::NoLegalMoves);
    }

    if rng.random_bool(0.5)
        && let Some(cell) = find_immediate_block(state.board(), player.opponent(), None)
    {
        return Ok(AiMove {
            cell,
            score: 50.0,
            reason: "Blocked opponent win",
        });
    }

    let mut preferred = Vec::with_capacity(legal.len());
    if legal.contains(&CENTER) {
        preferred.push(CENTER);
    }
    preferred.extend(CORNERS.iter().copied().filter(|c| legal.contains(c)));
    preferred.extend(EDGES.iter().copied().filter(|c| legal.contains(c)));

    if !preferred.is_empty() {
        let cell = preferred[rng.random_range(0..preferred.len())];
        return Ok(AiMove {
            cell,
            score: 10.0,
            reason: "Random move with preference",
        });
    }

    // Unreachable in practice (every cell is center, corner, or edge), kept
    // as the final fallback.
    let cell = legal[rng.random_range(0..legal.len())];
    Ok(AiMove {
        cell,
        score: 1.0,
        reason: "Random move",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn clock() -> FixedClock {
        FixedClock(Utc.timestamp_opt(1_000_000_000, 0).unwrap())
    }

    fn threatened_state() -> GameState {
        // O threatens [3,4,5]; X to move.
        let state = GameState::new(Player::X, &clock());
        let state = state.apply_move(0, &clock()).unwrap(); // X
        let state = state.apply_move(3, &clock()).unwrap(); // O
        let state = state.apply_move(8, &clock()).unwrap(); // X
        state.apply_move(4, &clock()).unwrap() // O
    }

    #[test]
    fn always_returns_a_legal_move() {
        let state = threatened_state();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let chosen = choose(&state, Player::X, &mut rng).unwrap();
            assert!(state.board().is_empty(chosen.cell));
            assert!(matches!(
                chosen.reason,
                "Blocked opponent win" | "Random move with preference"
            ));
        }
    }

    #[test]
    fn blocks_roughly_half_the_time_when_threatened() {
        let state = threatened_state();
        let mut blocks = 0;
        let mut other = 0;
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let chosen = choose(&state, Player::X, &mut rng).unwrap();
            if chosen.reason == "Blocked opponent win" {
                assert_eq!(chosen.cell, 5);
                assert_eq!(chosen.score, 50.0);
                blocks += 1;
            } else {
                other += 1;
            }
        }
        // The coin flip makes both branches common.
        assert!(blocks > 50, "blocked only {blocks} of 200 runs");
        assert!(other > 50, "skipped blocking only {other} of 200 runs");
    }

    #[test]
    fn without_threats_every_choice_is_a_preference_move() {
        let state = GameState::new(Player::X, &clock());
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let chosen = choose(&state, Player::X, &mut rng).unwrap();
            assert_eq!(chosen.reason, "Random move with preference");
            assert_eq!(chosen.score, 10.0);
        }
    }
}
