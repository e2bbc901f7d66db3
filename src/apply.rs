//! The move applier: the single authoritative transition from one game
//! state to the next.

use crate::clock::Clock;
use crate::rules::{self, DEFAULT_MOVE_CAP, DEFAULT_TIME_CAP_SECS};
use crate::types::{GameResult, GameState, Square};
use derive_more::{Display, Error};
use tracing::instrument;

/// Rejection reasons for a move. The input state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The game has already been won or drawn.
    #[display("Game is already finished")]
    GameFinished,
    /// The target cell already holds a mark.
    #[display("Cell is already occupied")]
    CellOccupied,
    /// The cell index is not in 0-8.
    #[display("Cell index out of bounds (must be 0-8)")]
    OutOfBounds,
}

impl GameState {
    /// Applies the current player's move at `cell`, producing a new state.
    ///
    /// The rolling rule, in exact order:
    /// 1. Place the mark, append to history, increment the move count.
    /// 2. If the placement completes a line the game is won immediately:
    ///    no removal happens (even on a 4th mark) and no turn switch.
    /// 3. Otherwise, if the mover already held three marks before this
    ///    placement, the oldest surviving mark is removed.
    /// 4. Draw conditions are checked on the post-removal board.
    /// 5. The turn switches only while the game remains ongoing.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the game is finished, the cell is out of
    /// range, or the cell is occupied. The state is unchanged on rejection.
    #[instrument(skip(clock))]
    pub fn apply_move(&self, cell: usize, clock: &impl Clock) -> Result<GameState, MoveError> {
        if self.result != GameResult::Ongoing {
            return Err(MoveError::GameFinished);
        }
        if cell >= 9 {
            return Err(MoveError::OutOfBounds);
        }
        if !self.board.is_empty(cell) {
            return Err(MoveError::CellOccupied);
        }

        let mover = self.current_player;

        let mut board = self.board.clone();
        board.set(cell, Square::Occupied(mover));

        let mut move_history = self.move_history.clone();
        move_history.push(cell);
        let move_count = self.move_count + 1;

        // Win check precedes rolling removal: a win is never undone by the
        // removal step, so the winning board may transiently hold 4 marks.
        if let Some(line) = rules::check_win(&board, mover) {
            return Ok(GameState {
                board,
                current_player: mover,
                result: GameResult::Win,
                move_count,
                started_at: self.started_at,
                win_line: Some(line),
                move_history,
            });
        }

        // Rolling removal. The mark count and the oldest-mark lookup are
        // both judged against the pre-move board, so the mark just placed
        // can never be mistaken for the oldest.
        if self.board.count_marks(mover) >= 3 {
            for &past in &move_history[..move_history.len() - 1] {
                if self.board.get(past) == Some(Square::Occupied(mover)) {
                    board.set(past, Square::Empty);
                    break;
                }
            }
        }

        let is_draw = rules::check_draw(
            &board,
            move_count,
            self.started_at,
            clock.now(),
            DEFAULT_TIME_CAP_SECS,
            DEFAULT_MOVE_CAP,
        );
        let (result, current_player) = if is_draw {
            (GameResult::Draw, mover)
        } else {
            (GameResult::Ongoing, mover.opponent())
        };

        Ok(GameState {
            board,
            current_player,
            result,
            move_count,
            started_at: self.started_at,
            win_line: None,
            move_history,
        })
    }
}
