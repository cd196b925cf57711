//! Indexed history invariant: move numbers match history positions.

use super::Invariant;
use crate::game::Game;

/// Invariant: `history[i].move_number() == i` for every snapshot, and the
/// cursor points at a recorded snapshot.
///
/// Branching preserves this: truncation discards a suffix, and the appended
/// snapshot is numbered by its new position.
pub struct IndexedHistoryInvariant;

impl Invariant<Game> for IndexedHistoryInvariant {
    fn holds(game: &Game) -> bool {
        let indexed = game
            .history()
            .snapshots()
            .iter()
            .enumerate()
            .all(|(i, snapshot)| snapshot.move_number() == i);

        indexed && game.position() < game.history().snapshots().len()
    }

    fn description() -> &'static str {
        "Snapshot move numbers equal their history positions and the cursor is in range"
    }
}
