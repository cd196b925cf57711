//! The game state engine: snapshot history, cursor, and move application.

use crate::action::{Move, MoveError};
use crate::cell::Cell;
use crate::history::History;
use crate::invariants::assert_invariants;
use crate::rules;
use crate::snapshot::Snapshot;
use crate::types::{Board, GameStatus, Mark, Square, Win};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tic-tac-toe game state engine with snapshot history and time travel.
///
/// The engine owns the snapshot [`History`] and a cursor into it. Everything
/// a presentation shell renders is derived from those two: the displayed
/// board is the snapshot at the cursor, and the active mark is the cursor's
/// parity. Playing a move while rewound discards the snapshots after the
/// cursor before recording the new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) history: History,
    pub(crate) cursor: usize,
}

impl Game {
    /// Creates a new game with an empty board at move 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            cursor: 0,
        }
    }

    /// Returns the board at the current position in history.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Returns the snapshot history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the current position in history.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Returns the mark that plays next.
    ///
    /// Derived from the cursor parity: X plays at even positions, O at odd
    /// ones. Jumping through history therefore always leaves the active mark
    /// consistent with the displayed board.
    pub fn to_move(&self) -> Mark {
        if self.cursor % 2 == 0 { Mark::X } else { Mark::O }
    }

    /// Returns the winner at the current position, if any, with the
    /// completed line.
    pub fn winner(&self) -> Option<Win> {
        rules::check_winner(self.board())
    }

    /// Returns the status of the board at the current position.
    pub fn status(&self) -> GameStatus {
        if let Some(win) = self.winner() {
            GameStatus::Won(win)
        } else if rules::is_full(self.board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns the header text for the current position.
    pub fn status_line(&self) -> String {
        match self.status() {
            GameStatus::Won(win) => format!("Winner is {}", win.mark()),
            GameStatus::Draw => "Draw".to_string(),
            GameStatus::InProgress => format!("Next player is {}", self.to_move()),
        }
    }

    /// Applies a move at `cell` for the active mark.
    ///
    /// This is the presentation-facing operation: a rejected move (occupied
    /// cell, board already decided) leaves the state untouched and surfaces
    /// no error. Rejections show up on the debug log only. Use [`try_move`]
    /// to observe the rejection reason.
    ///
    /// [`try_move`]: Game::try_move
    #[instrument(skip(self), fields(position = self.cursor))]
    pub fn apply_move(&mut self, cell: Cell) {
        if let Err(reason) = self.try_move(cell) {
            debug!(%cell, %reason, "move ignored");
        }
    }

    /// Applies a move at `cell` for the active mark, reporting rejections.
    ///
    /// On success the history is truncated to the current position, a new
    /// snapshot with move number `position + 1` is appended, and the cursor
    /// advances to it. The active mark toggles implicitly, since it derives
    /// from the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::CellOccupied`] if `cell` is not empty, or
    /// [`MoveError::GameOver`] if the board at the cursor already has a
    /// winner. Jumping to a snapshot before the winning move re-opens the
    /// game.
    #[instrument(skip(self), fields(position = self.cursor))]
    pub fn try_move(&mut self, cell: Cell) -> Result<(), MoveError> {
        if let Some(win) = self.winner() {
            return Err(MoveError::GameOver(win.mark()));
        }
        if !self.board().is_empty(cell) {
            return Err(MoveError::CellOccupied(cell));
        }

        let mark = self.to_move();
        let mut board = self.board().clone();
        board.set(cell, Square::Occupied(mark));
        self.cursor = self
            .history
            .branch_from(self.cursor, Move::new(mark, cell), board);

        debug!(%cell, %mark, move_number = self.cursor, "move applied");
        assert_invariants(self);
        Ok(())
    }

    /// Jumps to the snapshot at `move_number`.
    ///
    /// The displayed board becomes that snapshot's board; the active mark is
    /// recomputed from the new position's parity.
    ///
    /// # Panics
    ///
    /// Panics if `move_number` is not a recorded position in history.
    /// Passing one is a caller contract violation, not a recoverable
    /// condition.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_number: usize) {
        assert!(
            self.history.snapshot(move_number).is_some(),
            "move number {move_number} is outside history"
        );
        self.cursor = move_number;
        debug!(move_number, "jumped");
    }

    fn current(&self) -> &Snapshot {
        self.history
            .snapshot(self.cursor)
            .expect("cursor always points into history")
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
