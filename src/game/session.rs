//! A single play-through
//!
//! Owns one secret code and drives the guess/feedback/termination loop
//! against any move source.

use crate::core::{Code, CodeSpace, Feedback};
use crate::solver::MoveSource;

/// Terminal result of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Secret found; `attempts` is the winning round number
    Solved { attempts: usize },
    /// Move source abandoned; no attempt count recorded
    Aborted,
}

impl GameOutcome {
    /// Attempt count, or `None` for an aborted game
    #[must_use]
    pub const fn attempts(self) -> Option<usize> {
        match self {
            Self::Solved { attempts } => Some(attempts),
            Self::Aborted => None,
        }
    }
}

/// One game against a fixed secret
pub struct GameSession {
    secret: Code,
    round: usize,
}

impl GameSession {
    /// Start a session with a known secret
    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self { secret, round: 0 }
    }

    /// Start a session with a freshly drawn random secret
    #[must_use]
    pub fn with_random_secret(space: &CodeSpace) -> Self {
        Self::new(space.random_secret())
    }

    /// The secret being guessed
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> Code {
        self.secret
    }

    /// Rounds played so far
    #[inline]
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.round
    }

    /// Run the game to completion
    ///
    /// Each round: ask the player for a guess (a `None` abandons the game),
    /// score it against the secret, hand the feedback back to the player,
    /// and stop once all four positions match.
    pub fn play(&mut self, player: &mut impl MoveSource) -> GameOutcome {
        loop {
            let Some(guess) = player.next_guess() else {
                return GameOutcome::Aborted;
            };
            self.round += 1;

            let feedback = Feedback::score(&self.secret, &guess);
            player.observe(feedback);

            if feedback.is_win() {
                return GameOutcome::Solved {
                    attempts: self.round,
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plays a fixed script of guesses, then abandons
    struct Scripted {
        guesses: Vec<Code>,
        observed: Vec<Feedback>,
    }

    impl Scripted {
        fn new(guesses: Vec<Code>) -> Self {
            Self {
                guesses,
                observed: Vec::new(),
            }
        }
    }

    impl MoveSource for Scripted {
        fn next_guess(&mut self) -> Option<Code> {
            if self.guesses.is_empty() {
                None
            } else {
                Some(self.guesses.remove(0))
            }
        }

        fn observe(&mut self, feedback: Feedback) {
            self.observed.push(feedback);
        }
    }

    #[test]
    fn correct_first_guess_solves_in_one() {
        let secret = Code::parse("rgbo").unwrap();
        let mut session = GameSession::new(secret);
        let mut player = Scripted::new(vec![secret]);

        let outcome = session.play(&mut player);
        assert_eq!(outcome, GameOutcome::Solved { attempts: 1 });
        assert_eq!(player.observed, vec![Feedback::WIN]);
    }

    #[test]
    fn abandonment_terminates_without_attempts() {
        let secret = Code::parse("rgbo").unwrap();
        let mut session = GameSession::new(secret);
        let mut player = Scripted::new(vec![Code::parse("yyyy").unwrap()]);

        let outcome = session.play(&mut player);
        assert_eq!(outcome, GameOutcome::Aborted);
        assert_eq!(outcome.attempts(), None);
        assert_eq!(session.rounds_played(), 1);
    }

    #[test]
    fn every_round_gets_feedback() {
        let secret = Code::parse("rgbo").unwrap();
        let mut session = GameSession::new(secret);
        let mut player = Scripted::new(vec![
            Code::parse("yyyy").unwrap(),
            Code::parse("rrrr").unwrap(),
            secret,
        ]);

        let outcome = session.play(&mut player);
        assert_eq!(outcome.attempts(), Some(3));
        assert_eq!(player.observed.len(), 3);
        assert_eq!(player.observed[1], Feedback::new(1, 0));
    }

    #[test]
    fn solver_game_ends_solved() {
        use crate::solver::SolverKind;

        let space = CodeSpace::standard();
        let mut solver = SolverKind::ConsistencyFilter.build(&space);
        let mut session = GameSession::with_random_secret(&space);

        match session.play(&mut solver) {
            GameOutcome::Solved { attempts } => assert!(attempts >= 1),
            GameOutcome::Aborted => panic!("automated solver abandoned"),
        }
    }
}
