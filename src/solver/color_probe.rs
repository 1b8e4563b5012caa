//! Color probing solver
//!
//! Phase A guesses one monochrome code per alphabet color. A probe answered
//! with zero pegs proves its color absent from the secret, eliminating every
//! candidate containing it. Phase B walks the surviving candidates in
//! enumeration order.

use super::{MoveSource, Solver};
use crate::core::{Code, CodeSpace, Color, Feedback};

/// Variant 2: monochrome probes, then restricted enumeration
pub struct ColorProbe {
    universe: Vec<Code>,
    probes: Vec<Code>,
    candidates: Vec<Code>,
    next_probe: usize,
    next_candidate: usize,
    last_probe_color: Option<Color>,
}

impl ColorProbe {
    #[must_use]
    pub fn new(space: &CodeSpace) -> Self {
        let universe = space.enumerate_all();
        Self {
            candidates: universe.clone(),
            universe,
            probes: space.monochromes(),
            next_probe: 0,
            next_candidate: 0,
            last_probe_color: None,
        }
    }

    /// Whether the solver is still in the probing phase
    #[inline]
    fn probing(&self) -> bool {
        self.next_probe < self.probes.len()
    }

    /// Candidates surviving the probe eliminations
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len().saturating_sub(self.next_candidate)
    }
}

impl MoveSource for ColorProbe {
    fn next_guess(&mut self) -> Option<Code> {
        if self.probing() {
            let probe = self.probes[self.next_probe];
            self.next_probe += 1;
            self.last_probe_color = Some(probe.color_at(0));
            // Issued probes leave the candidate list so Phase B never
            // re-offers them.
            self.candidates.retain(|c| *c != probe);
            Some(probe)
        } else {
            self.last_probe_color = None;
            let guess = self.candidates.get(self.next_candidate).copied();
            self.next_candidate += 1;
            guess
        }
    }

    fn observe(&mut self, feedback: Feedback) {
        // Zero pegs on a monochrome probe proves the color absent.
        if feedback.exact() == 0 && feedback.color_only() == 0 {
            if let Some(absent) = self.last_probe_color.take() {
                self.candidates.retain(|c| !c.contains(absent));
            }
        }
    }
}

impl Solver for ColorProbe {
    fn reset(&mut self) {
        self.candidates = self.universe.clone();
        self.next_probe = 0;
        self.next_candidate = 0;
        self.last_probe_color = None;
    }
}
