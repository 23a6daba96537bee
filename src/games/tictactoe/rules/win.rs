//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player};

/// The 8 winning lines as cell indices: rows, then columns, then diagonals.
///
/// Checked in this fixed order so that a board holding several complete
/// lines always reports the same winner.
pub const WINNING_LINES: [[usize; 3]; 8] = [
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

/// Checks if there is a winner on the board.
///
/// Returns the occupant of the first line (in [`WINNING_LINES`] order)
/// whose three cells hold the same player, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Some(player) if cells[b] == Some(player) && cells[c] == Some(player) => Some(player),
        _ => None,
    })
}
