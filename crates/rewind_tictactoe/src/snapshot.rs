//! Immutable board snapshots recorded in history.

use crate::action::Move;
use crate::types::Board;
use serde::{Deserialize, Serialize};

/// A recorded board state plus metadata about the move that produced it.
///
/// Snapshots are created once per move and never mutated afterwards. The
/// synthetic game-start snapshot carries no move: `placed` is `None` exactly
/// there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub(crate) move_number: usize,
    pub(crate) placed: Option<Move>,
    pub(crate) board: Board,
}

impl Snapshot {
    pub(crate) fn new(move_number: usize, placed: Option<Move>, board: Board) -> Self {
        Self {
            move_number,
            placed,
            board,
        }
    }

    /// The synthetic snapshot every history starts with: move 0, empty board.
    pub(crate) fn game_start() -> Self {
        Self::new(0, None, Board::new())
    }

    /// Returns this snapshot's position in history.
    pub fn move_number(&self) -> usize {
        self.move_number
    }

    /// Returns the move that produced this snapshot, if any.
    pub fn placed(&self) -> Option<Move> {
        self.placed
    }

    /// Returns the board at this point.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Checks whether this is the synthetic game-start snapshot.
    pub fn is_game_start(&self) -> bool {
        self.placed.is_none() && self.move_number == 0
    }

    /// Display label for history navigation.
    pub fn label(&self) -> String {
        if self.is_game_start() {
            "game start".to_string()
        } else {
            format!("move #{}", self.move_number)
        }
    }
}
