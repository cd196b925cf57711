//! Mark balance invariant: X leads O by at most one on every board.

use super::Invariant;
use crate::game::Game;
use crate::types::Mark;

/// Invariant: every snapshot's board holds exactly as many X as O, or one
/// more X than O.
///
/// This is what turn alternation starting with X looks like on a board.
pub struct MarkBalanceInvariant;

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        game.history().snapshots().iter().all(|snapshot| {
            let x = snapshot.board().count(Mark::X);
            let o = snapshot.board().count(Mark::O);
            x == o || x == o + 1
        })
    }

    fn description() -> &'static str {
        "Every board holds as many X as O, or one more X"
    }
}
