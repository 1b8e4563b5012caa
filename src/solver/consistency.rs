//! Consistency-filtering solver
//!
//! Keeps every code consistent with all feedback observed so far and guesses
//! uniformly at random from that set. Because true feedback is symmetric,
//! the secret itself can never be filtered out.

use super::{MoveSource, Solver};
use crate::core::{Code, CodeSpace, Feedback};
use rand::Rng;

/// Drop every candidate that would not have produced `observed` for `guess`
///
/// This is the shared filtering step of the consistency and minimax solvers:
/// a candidate `k` survives iff `score(k, guess) == observed`.
pub fn retain_consistent(candidates: &mut Vec<Code>, guess: &Code, observed: Feedback) {
    candidates.retain(|k| Feedback::score(k, guess) == observed);
}

/// Variant 3: random guesses from the feedback-consistent candidate set
pub struct ConsistencyFilter {
    universe: Vec<Code>,
    candidates: Vec<Code>,
    last_guess: Option<Code>,
}

impl ConsistencyFilter {
    #[must_use]
    pub fn new(space: &CodeSpace) -> Self {
        let universe = space.enumerate_all();
        Self {
            candidates: universe.clone(),
            universe,
            last_guess: None,
        }
    }

    /// Codes still consistent with every observed feedback
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }
}

impl MoveSource for ConsistencyFilter {
    fn next_guess(&mut self) -> Option<Code> {
        // Empty only if feedback was inconsistent with any secret; with a
        // truthful opponent the secret is always still in the set.
        if self.candidates.is_empty() {
            return None;
        }
        let index = rand::rng().random_range(0..self.candidates.len());
        let guess = self.candidates.swap_remove(index);
        self.last_guess = Some(guess);
        Some(guess)
    }

    fn observe(&mut self, feedback: Feedback) {
        if let Some(guess) = self.last_guess {
            retain_consistent(&mut self.candidates, &guess, feedback);
        }
    }
}

impl Solver for ConsistencyFilter {
    fn reset(&mut self) {
        self.candidates = self.universe.clone();
        self.last_guess = None;
    }
}
