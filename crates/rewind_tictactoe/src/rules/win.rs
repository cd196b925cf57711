//! Win detection.

use crate::cell::Cell;
use crate::types::{Board, Square, Win};
use tracing::instrument;

/// The 8 winning lines, checked in fixed order: rows, columns, diagonals.
const LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Checks whether the board has a winner.
///
/// Returns the first line (in the fixed row/column/diagonal order) whose
/// three cells hold the same mark, paired with that mark. The tie-break
/// matters only for highlighting: a board reached through legal play never
/// holds two winning lines for different marks.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Win> {
    for line in LINES {
        let [a, b, c] = line;
        let Square::Occupied(mark) = board.get(a) else {
            continue;
        };
        if board.get(b) == Square::Occupied(mark) && board.get(c) == Square::Occupied(mark) {
            return Some(Win::new(mark, line));
        }
    }

    None
}
