//! Core domain types for rolling tic-tac-toe.

use crate::clock::Clock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first by default).
    X,
    /// Player O (goes second by default).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 board with squares in row-major order (0-8).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Sets the square at the given position. Out-of-range positions are
    /// rejected by the move applier before this is reached.
    pub(crate) fn set(&mut self, pos: usize, square: Square) {
        if let Some(slot) = self.squares.get_mut(pos) {
            *slot = square;
        }
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Counts how many marks the player has on the board.
    pub fn count_marks(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Returns the positions of the player's marks, in ascending order.
    pub fn mark_indices(&self, player: Player) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Occupied(player))
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => ".".to_string(),
                    Square::Occupied(p) => p.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of the game so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    /// Game is ongoing.
    Ongoing,
    /// Game ended with a winner (the player who did not get a turn switch).
    Win,
    /// Game ended in a draw.
    Draw,
}

/// AI difficulty tier, doubling as the scoring level.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Random with light preferences; blocks threats half the time.
    Beginner,
    /// Win, block, then 1-ply look-ahead with a positional heuristic.
    Moderate,
    /// Full game-tree search accounting for the rolling rule.
    Hard,
}

/// Complete game state.
///
/// States are immutable values: every accepted move produces a brand-new
/// state, and a rejected move leaves the input untouched. `move_history`
/// records every accepted placement in order, including marks later removed
/// by the rolling rule; it is the ordering oracle for "oldest surviving
/// mark" lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) result: GameResult,
    pub(crate) move_count: u32,
    pub(crate) started_at: DateTime<Utc>,
    pub(crate) win_line: Option<[usize; 3]>,
    pub(crate) move_history: Vec<usize>,
}

impl GameState {
    /// Creates a new game with the given player moving first.
    pub fn new(first: Player, clock: &impl Clock) -> Self {
        Self {
            board: Board::new(),
            current_player: first,
            result: GameResult::Ongoing,
            move_count: 0,
            started_at: clock.now(),
            win_line: None,
            move_history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose move is next. Once the game is won this is
    /// the winner (no turn switch happens on the winning move).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game result.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Returns the number of accepted placements since game start.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Returns the timestamp fixed at game creation.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Returns the completed line, present iff the game was won.
    pub fn win_line(&self) -> Option<[usize; 3]> {
        self.win_line
    }

    /// Returns every accepted placement in order, including marks later
    /// removed by the rolling rule.
    pub fn move_history(&self) -> &[usize] {
        &self.move_history
    }
}
