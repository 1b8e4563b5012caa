//! Guessing strategies
//!
//! Four solver variants behind one capability interface. `MoveSource` is the
//! seam the game session consumes; the human adapter implements it too, so
//! the session cannot tell a person from a machine.

pub mod color_probe;
pub mod consistency;
pub mod exhaustive;
pub mod kind;
pub mod minimax;

pub use color_probe::ColorProbe;
pub use consistency::{ConsistencyFilter, retain_consistent};
pub use exhaustive::Exhaustive;
pub use kind::{AnySolver, SolverKind};
pub use minimax::Minimax;

use crate::core::{Code, Feedback};

/// A source of guesses for one game
///
/// `next_guess` returning `None` is the abandonment sentinel; the automated
/// solvers never produce it under truthful feedback, only the human adapter
/// does. `observe` is only called with the feedback for the most recent
/// guess.
pub trait MoveSource {
    fn next_guess(&mut self) -> Option<Code>;
    fn observe(&mut self, feedback: Feedback);
}

/// An automated move source that can be reused across games
pub trait Solver: MoveSource {
    /// Reinitialize all internal state for a fresh game
    fn reset(&mut self);
}
