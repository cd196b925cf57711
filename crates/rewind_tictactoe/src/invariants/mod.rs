//! First-class invariants for the game state engine.
//!
//! Invariants are logical properties that must hold across every state
//! transition. They are testable independently and double as documentation
//! of what the engine guarantees.

use crate::game::Game;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples, so a set is spelled as a type
/// alias over its members.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if every invariant holds, or the list of violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

pub mod indexed_history;
pub mod mark_balance;
pub mod replayable_history;

pub use indexed_history::IndexedHistoryInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use replayable_history::ReplayableHistoryInvariant;

/// All engine invariants as a composable set.
pub type GameInvariants = (
    MarkBalanceInvariant,
    IndexedHistoryInvariant,
    ReplayableHistoryInvariant,
);

/// Asserts that all engine invariants hold (debug builds only).
pub(crate) fn assert_invariants(game: &Game) {
    debug_assert!(
        GameInvariants::check_all(game).is_ok(),
        "engine invariants violated: {:?}",
        GameInvariants::check_all(game)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::game::Game;
    use crate::types::{Mark, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::new();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let mut game = Game::new();
        game.apply_move(Cell::TopLeft);
        game.apply_move(Cell::Center);
        game.jump_to(1);
        game.apply_move(Cell::BottomRight);
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_violations() {
        let mut game = Game::new();
        game.apply_move(Cell::Center);

        // Overwrite the recorded X with an O: mark balance and replayability
        // are both broken.
        game.history.snapshots[1]
            .board
            .set(Cell::Center, Square::Occupied(Mark::O));

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Game::new();

        type TwoInvariants = (MarkBalanceInvariant, IndexedHistoryInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
