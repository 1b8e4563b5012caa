//! Interactive human game
//!
//! The human player is just another `MoveSource`: guesses come from stdin as
//! four-alias strings, malformed input is re-prompted at this boundary, and
//! the abandon keyword maps to the `None` sentinel. The session cannot tell
//! a person from a solver.

use crate::core::{Code, CodeSpace, Feedback};
use crate::game::{GameOutcome, GameSession};
use crate::output::feedback_pegs;
use crate::solver::MoveSource;
use colored::Colorize;
use std::io::{self, Write};

/// Stdin-backed move source
pub struct HumanPlayer {
    name: String,
    round: usize,
}

impl HumanPlayer {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            round: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl MoveSource for HumanPlayer {
    fn next_guess(&mut self) -> Option<Code> {
        self.round += 1;
        println!("Round {}:", self.round);

        loop {
            // An unreadable stdin counts as abandoning the game
            let input = get_user_input("Your guess").ok()?;
            let input = input.to_lowercase();

            if matches!(input.as_str(), "end" | "quit" | "q") {
                return None;
            }

            match Code::parse(&input) {
                Ok(code) => {
                    println!("{code}");
                    return Some(code);
                }
                Err(e) => {
                    println!(
                        "{} {e}. Please enter four colors.\n",
                        "Not a valid color code!".red()
                    );
                }
            }
        }
    }

    fn observe(&mut self, feedback: Feedback) {
        println!(
            "\nFeedback: {}\n  Correct color & position: {}\n  Correct color, wrong position: {}\n",
            feedback_pegs(feedback),
            feedback.exact(),
            feedback.color_only()
        );
    }
}

/// Print the rules banner with the color aliases
fn print_rules(space: &CodeSpace, name: &str) {
    println!("\nLet's play Mastermind, {}!", name.bright_cyan().bold());
    print!("Colors: ");
    for (i, color) in space.alphabet().iter().enumerate() {
        if i > 0 {
            print!(", ");
        }
        print!("{}({})", color, color.alias());
    }
    println!("\nExample guess: rrgb");
    println!("Type 'end' to abandon.\n");
}

/// Run one interactive game against a random secret
pub fn run_play(space: &CodeSpace, name: &str) {
    print_rules(space, name);

    let mut player = HumanPlayer::new(name);
    let mut session = GameSession::with_random_secret(space);

    match session.play(&mut player) {
        GameOutcome::Solved { attempts } => {
            println!(
                "{}",
                format!("Bravo, {name}! Solved in {attempts} rounds!")
                    .bright_green()
                    .bold()
            );
        }
        GameOutcome::Aborted => {
            println!("Game abandoned. The secret was: {}", session.secret());
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
