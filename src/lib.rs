//! Rolling tic-tac-toe engine.
//!
//! A variant of tic-tac-toe where each player is capped at three marks:
//! placing a fourth removes that player's oldest surviving mark, unless the
//! placement itself completes a winning line. The crate provides the pure
//! game logic only - rules, the move applier, scoring, a timer, and a
//! three-tier computer opponent - and leaves rendering, persistence, and
//! transport to the embedding application.
//!
//! # Architecture
//!
//! - **Rules**: win and draw predicates over a board
//! - **Move applier**: the single transition function between immutable
//!   [`GameState`] values
//! - **Scoring**: the level/result/time score formula
//! - **AI**: beginner, moderate, and hard (minimax) move selection
//! - **Timer**: elapsed/remaining display values
//!
//! Wall-clock reads go through the injectable [`Clock`], and the AI's
//! randomness through a caller-supplied [`rand::Rng`], so both are
//! deterministic under test.
//!
//! # Example
//!
//! ```
//! use rolling_tictactoe::{
//!     Difficulty, GameState, Player, SystemClock, get_ai_move,
//! };
//!
//! let clock = SystemClock;
//! let state = GameState::new(Player::X, &clock);
//! let state = state.apply_move(4, &clock)?;
//!
//! let mut rng = rand::rng();
//! let reply = get_ai_move(&state, Player::O, Difficulty::Moderate, &mut rng, &clock)?;
//! let state = state.apply_move(reply.cell, &clock)?;
//! assert_eq!(state.current_player(), Player::X);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod apply;
mod clock;
mod rules;
mod scoring;
mod timer;
mod types;

pub use ai::{
    AiError, AiMove, calculate_heuristic, evaluate_move, find_immediate_block, find_immediate_win,
    get_ai_move, legal_moves,
};
pub use apply::MoveError;
pub use clock::{Clock, FixedClock, SystemClock};
pub use rules::{DEFAULT_MOVE_CAP, DEFAULT_TIME_CAP_SECS, WIN_LINES, check_draw, check_win};
pub use scoring::{ScoreBreakdown, calculate_score, final_score};
pub use timer::{
    DEFAULT_TIME_CAP_MS, TimerState, elapsed_ms, format_time, remaining_ms, timer_state,
};
pub use types::{Board, Difficulty, GameResult, GameState, Player, Square};
