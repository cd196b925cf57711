//! The ordered snapshot sequence from game start to the latest move.

use crate::action::Move;
use crate::snapshot::Snapshot;
use crate::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Ordered sequence of snapshots.
///
/// Always starts with the game-start snapshot; `snapshots[i].move_number()`
/// equals `i` for all entries. Branching from a past position discards every
/// snapshot after it, so there is no redo once a new move is played from a
/// rewound state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    pub(crate) snapshots: Vec<Snapshot>,
}

impl History {
    pub(crate) fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::game_start()],
        }
    }

    /// Returns the snapshot at `move_number`, if recorded.
    pub fn snapshot(&self, move_number: usize) -> Option<&Snapshot> {
        self.snapshots.get(move_number)
    }

    /// Returns all snapshots in move order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Returns the most recent snapshot.
    pub fn latest(&self) -> &Snapshot {
        self.snapshots
            .last()
            .expect("history always holds the game-start snapshot")
    }

    /// Discards every snapshot after `position`, then appends a new snapshot
    /// for `placed` with the resulting `board`.
    ///
    /// Returns the new snapshot's move number, `position + 1`.
    #[instrument(skip(self, board))]
    pub(crate) fn branch_from(&mut self, position: usize, placed: Move, board: Board) -> usize {
        self.snapshots.truncate(position + 1);
        let move_number = self.snapshots.len();
        self.snapshots.push(Snapshot::new(move_number, Some(placed), board));
        move_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::types::{Mark, Square};

    fn board_with(cell: Cell, mark: Mark) -> Board {
        let mut board = Board::new();
        board.set(cell, Square::Occupied(mark));
        board
    }

    #[test]
    fn test_new_history_is_game_start() {
        let history = History::new();
        assert_eq!(history.snapshots().len(), 1);
        assert!(history.latest().is_game_start());
    }

    #[test]
    fn test_branch_from_end_appends() {
        let mut history = History::new();
        let move_number = history.branch_from(
            0,
            Move::new(Mark::X, Cell::Center),
            board_with(Cell::Center, Mark::X),
        );
        assert_eq!(move_number, 1);
        assert_eq!(history.snapshots().len(), 2);
        assert_eq!(history.latest().move_number(), 1);
    }

    #[test]
    fn test_branch_from_past_discards_future() {
        let mut history = History::new();
        history.branch_from(
            0,
            Move::new(Mark::X, Cell::Center),
            board_with(Cell::Center, Mark::X),
        );
        history.branch_from(
            1,
            Move::new(Mark::O, Cell::TopLeft),
            board_with(Cell::TopLeft, Mark::O),
        );

        // Branch from game start: both recorded moves are gone.
        let move_number = history.branch_from(
            0,
            Move::new(Mark::X, Cell::BottomRight),
            board_with(Cell::BottomRight, Mark::X),
        );
        assert_eq!(move_number, 1);
        assert_eq!(history.snapshots().len(), 2);
        let placed = history.latest().placed().expect("branched snapshot has a move");
        assert_eq!(placed.cell(), Cell::BottomRight);
    }
}
