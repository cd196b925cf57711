//! Board cells with index conversion for presentation shells.

use serde::{Deserialize, Serialize};

/// A cell on the tic-tac-toe board.
///
/// Cells are laid out in row-major order, so `to_index` and `from_index`
/// map to the familiar 0-8 numbering a presentation grid uses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Cell {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Cell {
    /// All 9 cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Converts the cell to its board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates a cell from a board index.
    ///
    /// Returns `None` for indices outside 0-8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Cell::TopLeft => "top-left",
            Cell::TopCenter => "top-center",
            Cell::TopRight => "top-right",
            Cell::MiddleLeft => "middle-left",
            Cell::Center => "center",
            Cell::MiddleRight => "middle-right",
            Cell::BottomLeft => "bottom-left",
            Cell::BottomCenter => "bottom-center",
            Cell::BottomRight => "bottom-right",
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
