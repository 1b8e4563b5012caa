//! Watch one solver solve one secret
//!
//! Wraps the solver in a recording move source so every round's guess,
//! feedback, and surviving-candidate count can be shown afterwards.

use crate::core::{Code, CodeSpace, Feedback};
use crate::game::GameSession;
use crate::output::feedback_pegs;
use crate::solver::{AnySolver, MoveSource, SolverKind};
use colored::Colorize;

/// One traced round
#[derive(Debug, Clone)]
pub struct RoundTrace {
    pub round: usize,
    pub guess: Code,
    pub feedback: Feedback,
    pub remaining: usize,
}

/// Full trace of one watched game
#[derive(Debug, Clone)]
pub struct WatchResult {
    pub solver: &'static str,
    pub secret: Code,
    pub attempts: Option<usize>,
    pub rounds: Vec<RoundTrace>,
}

/// Move-source decorator that records each round
struct Recorder<'a> {
    solver: &'a mut AnySolver,
    rounds: &'a mut Vec<RoundTrace>,
    pending: Option<Code>,
}

impl MoveSource for Recorder<'_> {
    fn next_guess(&mut self) -> Option<Code> {
        let guess = self.solver.next_guess()?;
        self.pending = Some(guess);
        Some(guess)
    }

    fn observe(&mut self, feedback: Feedback) {
        self.solver.observe(feedback);
        if let Some(guess) = self.pending.take() {
            self.rounds.push(RoundTrace {
                round: self.rounds.len() + 1,
                guess,
                feedback,
                remaining: self.solver.remaining(),
            });
        }
    }
}

/// Run one solver against a given (or random) secret, tracing every round
#[must_use]
pub fn run_watch(kind: SolverKind, space: &CodeSpace, secret: Option<Code>) -> WatchResult {
    let secret = secret.unwrap_or_else(|| space.random_secret());
    let mut solver = kind.build(space);
    let mut rounds = Vec::new();

    let mut session = GameSession::new(secret);
    let outcome = session.play(&mut Recorder {
        solver: &mut solver,
        rounds: &mut rounds,
        pending: None,
    });

    WatchResult {
        solver: kind.label(),
        secret,
        attempts: outcome.attempts(),
        rounds,
    }
}

/// Print a watched game round by round
pub fn print_watch_result(result: &WatchResult) {
    println!(
        "\nSolver {} vs secret {}\n",
        result.solver.bright_cyan().bold(),
        result.secret.aliases().bright_white().bold()
    );

    for trace in &result.rounds {
        println!(
            "  {:>4}. {} {} ({} left)",
            trace.round.to_string().bright_black(),
            trace.guess.aliases().bright_white(),
            feedback_pegs(trace.feedback),
            trace.remaining
        );
    }

    match result.attempts {
        Some(attempts) => println!(
            "\n{}",
            format!("Solved in {attempts} attempts").bright_green().bold()
        ),
        None => println!("\nAborted"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_solves_and_records_every_round() {
        let space = CodeSpace::standard();
        let secret = Code::parse("rgbo").unwrap();

        let result = run_watch(SolverKind::ConsistencyFilter, &space, Some(secret));

        let attempts = result.attempts.expect("solver should solve");
        assert_eq!(result.rounds.len(), attempts);
        assert_eq!(result.rounds.last().unwrap().feedback, Feedback::WIN);
        assert_eq!(result.rounds.last().unwrap().guess, secret);
    }

    #[test]
    fn watch_rounds_are_numbered_sequentially() {
        let space = CodeSpace::standard();
        let result = run_watch(
            SolverKind::ColorProbe,
            &space,
            Some(Code::parse("ygpo").unwrap()),
        );

        for (i, trace) in result.rounds.iter().enumerate() {
            assert_eq!(trace.round, i + 1);
        }
    }

    #[test]
    fn watch_random_secret_used_when_unspecified() {
        let space = CodeSpace::standard();
        let result = run_watch(SolverKind::ConsistencyFilter, &space, None);

        assert!(result.attempts.is_some());
        assert_eq!(result.rounds.last().unwrap().guess, result.secret);
    }
}
