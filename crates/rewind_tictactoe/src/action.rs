//! First-class move values and the move validation error.

use crate::cell::Cell;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A move: a mark placed at a cell.
///
/// Moves are first-class values. Snapshots record the move that produced
/// them, which keeps history entries serializable and loggable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    mark: Mark,
    cell: Cell,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, cell: Cell) -> Self {
        Self { mark, cell }
    }

    /// Returns the mark placed by this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the cell this move was placed at.
    pub fn cell(&self) -> Cell {
        self.cell
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.cell)
    }
}

/// Error that can occur when validating a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell is already occupied.
    #[display("cell {} is already occupied", _0)]
    CellOccupied(Cell),

    /// The board at the current position already has a winner.
    #[display("game is already won by {}", _0)]
    GameOver(Mark),
}

impl std::error::Error for MoveError {}
