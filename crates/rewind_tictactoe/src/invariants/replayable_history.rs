//! Replayable history invariant: every snapshot extends its predecessor by
//! exactly the recorded move.

use super::Invariant;
use crate::game::Game;
use crate::types::{Board, Mark, Square};

/// Invariant: history replays.
///
/// The game-start snapshot carries an empty board and no move. Every later
/// snapshot records a move onto a cell that was empty in its predecessor,
/// marks alternating starting with X, and its board is the predecessor's
/// board plus exactly that move.
pub struct ReplayableHistoryInvariant;

impl Invariant<Game> for ReplayableHistoryInvariant {
    fn holds(game: &Game) -> bool {
        let snapshots = game.history().snapshots();

        let Some(genesis) = snapshots.first() else {
            return false;
        };
        if genesis.placed().is_some() || *genesis.board() != Board::new() {
            return false;
        }

        let mut expected_mark = Mark::X;
        for pair in snapshots.windows(2) {
            let (previous, current) = (&pair[0], &pair[1]);

            let Some(placed) = current.placed() else {
                return false;
            };
            if placed.mark() != expected_mark {
                return false;
            }
            if !previous.board().is_empty(placed.cell()) {
                return false;
            }

            let mut replayed = previous.board().clone();
            replayed.set(placed.cell(), Square::Occupied(placed.mark()));
            if replayed != *current.board() {
                return false;
            }

            expected_mark = expected_mark.opponent();
        }

        true
    }

    fn description() -> &'static str {
        "Each snapshot extends its predecessor by exactly the recorded move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    #[test]
    fn test_new_game_holds() {
        assert!(ReplayableHistoryInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut game = Game::new();
        for cell in [Cell::TopLeft, Cell::Center, Cell::TopRight, Cell::BottomLeft] {
            game.apply_move(cell);
        }
        assert!(ReplayableHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_branching() {
        let mut game = Game::new();
        game.apply_move(Cell::TopLeft);
        game.apply_move(Cell::Center);
        game.jump_to(1);
        game.apply_move(Cell::BottomRight);
        assert!(ReplayableHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_board_not_matching_move_violates() {
        let mut game = Game::new();
        game.apply_move(Cell::TopLeft);

        // A square filled without a recorded move.
        game.history.snapshots[1]
            .board
            .set(Cell::Center, Square::Occupied(Mark::O));
        assert!(!ReplayableHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_non_alternating_marks_violate() {
        let mut game = Game::new();
        game.apply_move(Cell::TopLeft);
        game.apply_move(Cell::Center);

        // Rewrite move 2 as another X.
        let placed = game.history.snapshots[2].placed.as_mut().unwrap();
        *placed = crate::Move::new(Mark::X, placed.cell());
        assert!(!ReplayableHistoryInvariant::holds(&game));
    }
}
