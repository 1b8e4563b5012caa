//! Solver selection
//!
//! A closed enum over the four variants, allowing runtime selection while
//! keeping static dispatch inside each variant.

use super::{ColorProbe, ConsistencyFilter, Exhaustive, Minimax, MoveSource, Solver};
use crate::core::{Code, CodeSpace, Feedback};

/// The four solver variants, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverKind {
    Exhaustive,
    ColorProbe,
    ConsistencyFilter,
    Minimax,
}

impl SolverKind {
    /// All variants, in the order the evaluation sweep runs them
    pub const ALL: [Self; 4] = [
        Self::Exhaustive,
        Self::ColorProbe,
        Self::ConsistencyFilter,
        Self::Minimax,
    ];

    /// Short name used in CLI flags and report labels
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exhaustive => "exhaustive",
            Self::ColorProbe => "color-probe",
            Self::ConsistencyFilter => "consistency",
            Self::Minimax => "minimax",
        }
    }

    /// Parse a solver name as given on the command line
    ///
    /// Supported names: "exhaustive", "color-probe", "consistency",
    /// "minimax".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "exhaustive" => Some(Self::Exhaustive),
            "color-probe" | "colorprobe" => Some(Self::ColorProbe),
            "consistency" | "filter" => Some(Self::ConsistencyFilter),
            "minimax" => Some(Self::Minimax),
            _ => None,
        }
    }

    /// Instantiate a fresh solver of this kind over the given space
    #[must_use]
    pub fn build(self, space: &CodeSpace) -> AnySolver {
        match self {
            Self::Exhaustive => AnySolver::Exhaustive(Exhaustive::new(space)),
            Self::ColorProbe => AnySolver::ColorProbe(ColorProbe::new(space)),
            Self::ConsistencyFilter => {
                AnySolver::ConsistencyFilter(ConsistencyFilter::new(space))
            }
            Self::Minimax => AnySolver::Minimax(Minimax::new(space)),
        }
    }
}

/// Enum wrapper over all solver variants
pub enum AnySolver {
    Exhaustive(Exhaustive),
    ColorProbe(ColorProbe),
    ConsistencyFilter(ConsistencyFilter),
    Minimax(Minimax),
}

impl AnySolver {
    /// Codes the solver still considers possible (or has yet to try)
    #[must_use]
    pub fn remaining(&self) -> usize {
        match self {
            Self::Exhaustive(s) => s.remaining(),
            Self::ColorProbe(s) => s.remaining(),
            Self::ConsistencyFilter(s) => s.remaining(),
            Self::Minimax(s) => s.remaining(),
        }
    }
}

impl MoveSource for AnySolver {
    fn next_guess(&mut self) -> Option<Code> {
        match self {
            Self::Exhaustive(s) => s.next_guess(),
            Self::ColorProbe(s) => s.next_guess(),
            Self::ConsistencyFilter(s) => s.next_guess(),
            Self::Minimax(s) => s.next_guess(),
        }
    }

    fn observe(&mut self, feedback: Feedback) {
        match self {
            Self::Exhaustive(s) => s.observe(feedback),
            Self::ColorProbe(s) => s.observe(feedback),
            Self::ConsistencyFilter(s) => s.observe(feedback),
            Self::Minimax(s) => s.observe(feedback),
        }
    }
}

impl Solver for AnySolver {
    fn reset(&mut self) {
        match self {
            Self::Exhaustive(s) => s.reset(),
            Self::ColorProbe(s) => s.reset(),
            Self::ConsistencyFilter(s) => s.reset(),
            Self::Minimax(s) => s.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_name() {
        for kind in SolverKind::ALL {
            assert_eq!(SolverKind::from_name(kind.label()), Some(kind));
        }
    }

    #[test]
    fn unknown_name_rejected() {
        assert_eq!(SolverKind::from_name("random"), None);
        assert_eq!(SolverKind::from_name(""), None);
    }

    #[test]
    fn every_kind_builds_and_guesses() {
        let space = CodeSpace::standard();
        for kind in SolverKind::ALL {
            let mut solver = kind.build(&space);
            assert!(solver.next_guess().is_some(), "{} gave no guess", kind.label());
        }
    }

    #[test]
    fn every_kind_terminates_within_universe_bound() {
        let space = CodeSpace::standard();
        let secret = Code::parse("goyb").unwrap();

        for kind in SolverKind::ALL {
            let mut solver = kind.build(&space);
            let mut rounds = 0;
            loop {
                rounds += 1;
                assert!(rounds <= 1296 + 6, "{} exceeded bound", kind.label());
                let guess = solver.next_guess().unwrap();
                let feedback = Feedback::score(&secret, &guess);
                if feedback.is_win() {
                    break;
                }
                solver.observe(feedback);
            }
        }
    }
}
