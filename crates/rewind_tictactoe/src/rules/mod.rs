//! Pure rules for evaluating a board.
//!
//! Rules are separated from board storage and from the engine so they can
//! be applied to any board a caller constructs.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;
