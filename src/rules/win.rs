//! Win detection logic.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// All winning line combinations, in the fixed enumeration order callers
/// rely on: rows 0-2, then columns 0-2, then the two diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if the player has won on the board.
///
/// Returns the first fully occupied triple in [`WIN_LINES`] order, so the
/// reported line is deterministic even if several lines complete at once.
#[instrument]
pub fn check_win(board: &Board, player: Player) -> Option<[usize; 3]> {
    WIN_LINES
        .iter()
        .find(|line| {
            line.iter()
                .all(|&pos| board.get(pos) == Some(Square::Occupied(player)))
        })
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn no_win_on_empty_board() {
        let board = Board::new();
        assert_eq!(check_win(&board, Player::X), None);
        assert_eq!(check_win(&board, Player::O), None);
    }

    #[test]
    fn detects_top_row() {
        let board = board_with(&[(0, Player::X), (1, Player::X), (2, Player::X)]);
        assert_eq!(check_win(&board, Player::X), Some([0, 1, 2]));
        assert_eq!(check_win(&board, Player::O), None);
    }

    #[test]
    fn detects_column_and_diagonal() {
        let board = board_with(&[(1, Player::O), (4, Player::O), (7, Player::O)]);
        assert_eq!(check_win(&board, Player::O), Some([1, 4, 7]));

        let board = board_with(&[(2, Player::X), (4, Player::X), (6, Player::X)]);
        assert_eq!(check_win(&board, Player::X), Some([2, 4, 6]));
    }

    #[test]
    fn incomplete_line_is_not_a_win() {
        let board = board_with(&[(0, Player::X), (1, Player::X)]);
        assert_eq!(check_win(&board, Player::X), None);
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Player::X), (1, Player::O), (2, Player::X)]);
        assert_eq!(check_win(&board, Player::X), None);
        assert_eq!(check_win(&board, Player::O), None);
    }

    #[test]
    fn simultaneous_lines_report_enumeration_order() {
        // Row [0,1,2] and column [0,3,6] both complete; the row comes first.
        let board = board_with(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::X),
            (6, Player::X),
        ]);
        assert_eq!(check_win(&board, Player::X), Some([0, 1, 2]));
    }
}
