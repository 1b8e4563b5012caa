//! Exhaustive baseline solver
//!
//! Ignores all feedback and walks the full enumeration in fixed order.
//! Worst case: 1296 guesses. Pure baseline for the evaluation harness.

use super::{MoveSource, Solver};
use crate::core::{Code, CodeSpace, Feedback};

/// Variant 1: fixed-order enumeration, no pruning
pub struct Exhaustive {
    codes: Vec<Code>,
    index: usize,
}

impl Exhaustive {
    #[must_use]
    pub fn new(space: &CodeSpace) -> Self {
        Self {
            codes: space.enumerate_all(),
            index: 0,
        }
    }

    /// Codes not yet offered in the current game
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.codes.len().saturating_sub(self.index)
    }
}

impl MoveSource for Exhaustive {
    fn next_guess(&mut self) -> Option<Code> {
        // The secret is part of the enumeration, so the walk always hits it
        // before running out.
        let guess = self.codes.get(self.index).copied();
        self.index += 1;
        guess
    }

    fn observe(&mut self, _feedback: Feedback) {}
}

impl Solver for Exhaustive {
    fn reset(&mut self) {
        self.index = 0;
    }
}
