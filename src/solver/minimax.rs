//! Knuth-style minimax solver
//!
//! Filters candidates exactly like the consistency solver, but after the
//! first (random) guess selects the candidate whose worst possible feedback
//! leaves the smallest bucket of survivors. The O(n²) scoring pass is the
//! hot spot of the whole crate and runs under rayon.

use super::consistency::retain_consistent;
use super::{MoveSource, Solver};
use crate::core::{Code, CodeSpace, Feedback};
use rand::Rng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Worst-case bucket size for a hypothetical guess
///
/// Partitions `candidates` by the feedback `guess` would receive against each
/// of them and returns the size of the largest bucket.
#[must_use]
pub fn worst_case_bucket(guess: &Code, candidates: &[Code]) -> usize {
    let mut buckets: FxHashMap<Feedback, usize> = FxHashMap::default();
    for target in candidates {
        *buckets.entry(Feedback::score(guess, target)).or_insert(0) += 1;
    }
    buckets.values().max().copied().unwrap_or(0)
}

/// Select the candidate minimizing the worst-case bucket size
///
/// Ties are broken arbitrarily; only worst-case minimality matters.
/// Returns `None` on an empty candidate set.
#[must_use]
pub fn select_min_worst_case(candidates: &[Code]) -> Option<Code> {
    candidates
        .par_iter()
        .map(|guess| (*guess, worst_case_bucket(guess, candidates)))
        .min_by_key(|(_, worst)| *worst)
        .map(|(guess, _)| guess)
}

/// Variant 4: worst-case-minimizing guess selection
pub struct Minimax {
    universe: Vec<Code>,
    candidates: Vec<Code>,
    last_guess: Option<Code>,
    observed_any: bool,
}

impl Minimax {
    #[must_use]
    pub fn new(space: &CodeSpace) -> Self {
        let universe = space.enumerate_all();
        Self {
            candidates: universe.clone(),
            universe,
            last_guess: None,
            observed_any: false,
        }
    }

    /// Codes still consistent with every observed feedback
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }
}

impl MoveSource for Minimax {
    fn next_guess(&mut self) -> Option<Code> {
        if self.candidates.is_empty() {
            return None;
        }

        let guess = if self.observed_any {
            select_min_worst_case(&self.candidates)?
        } else {
            // No information yet; any opening is as good as any other for
            // the worst case, so draw one at random.
            self.candidates[rand::rng().random_range(0..self.candidates.len())]
        };

        if let Some(position) = self.candidates.iter().position(|c| *c == guess) {
            self.candidates.swap_remove(position);
        }
        self.last_guess = Some(guess);
        Some(guess)
    }

    fn observe(&mut self, feedback: Feedback) {
        self.observed_any = true;
        if let Some(guess) = self.last_guess {
            retain_consistent(&mut self.candidates, &guess, feedback);
        }
    }
}

impl Solver for Minimax {
    fn reset(&mut self) {
        self.candidates = self.universe.clone();
        self.last_guess = None;
        self.observed_any = false;
    }
}
