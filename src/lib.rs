//! Mastermind Solver
//!
//! Plays and evaluates strategies for the classic 6-color, 4-position
//! code-breaking game: four solver variants from a naive exhaustive walk up
//! to Knuth-style worst-case minimax, plus a parallel evaluation harness
//! that reduces many independent games to a mean attempt count.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_minimax::core::{Code, CodeSpace, Feedback};
//!
//! let secret = Code::parse("rrgb").unwrap();
//! let guess = Code::parse("rggy").unwrap();
//!
//! let feedback = Feedback::score(&secret, &guess);
//! assert_eq!(feedback.exact(), 2);
//!
//! // The full universe the solvers search
//! assert_eq!(CodeSpace::standard().universe_size(), 1296);
//! ```

// Core domain types
pub mod core;

// Guessing strategies
pub mod solver;

// Single-game sessions
pub mod game;

// Parallel evaluation harness
pub mod eval;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
