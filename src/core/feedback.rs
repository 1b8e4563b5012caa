//! Guess feedback calculation and representation
//!
//! Feedback is the classic black/white peg pair:
//! - exact: positions where guess and secret share the same color
//! - `color_only`: colors present in both but not aligned by position,
//!   counted via multiset intersection after removing exact matches

use super::code::CODE_LEN;
use super::{Code, Color};
use std::fmt;

/// Feedback for one guess against one secret
///
/// Invariant: `exact + color_only <= 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    exact: u8,
    color_only: u8,
}

impl Feedback {
    /// All four positions correct (the winning feedback)
    pub const WIN: Self = Self {
        exact: CODE_LEN as u8,
        color_only: 0,
    };

    /// Create feedback from raw counts
    ///
    /// # Panics
    /// Panics in debug mode if `exact + color_only > 4`
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, color_only: u8) -> Self {
        debug_assert!(exact + color_only <= CODE_LEN as u8);
        Self { exact, color_only }
    }

    /// Number of exact-position matches (black pegs)
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of color-only matches (white pegs)
    #[inline]
    #[must_use]
    pub const fn color_only(self) -> u8 {
        self.color_only
    }

    /// Check if this feedback means the guess equals the secret
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.exact == CODE_LEN as u8
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: count exact-position matches; positions that match are
    ///    consumed and excluded from the second pass.
    /// 2. Second pass: among the remaining positions, count per-color multiset
    ///    intersection. The per-color minimum makes the count invariant to
    ///    scan order.
    ///
    /// The result is symmetric: `score(a, b) == score(b, a)`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::{Code, Feedback};
    ///
    /// let secret = Code::parse("rrgb").unwrap();
    /// let guess = Code::parse("rggy").unwrap();
    /// let feedback = Feedback::score(&secret, &guess);
    ///
    /// // Red and Green match at positions 0 and 2; the leftover
    /// // Red/Blue vs Green/Yellow share no color.
    /// assert_eq!(feedback.exact(), 2);
    /// assert_eq!(feedback.color_only(), 0);
    /// ```
    #[must_use]
    pub fn score(secret: &Code, guess: &Code) -> Self {
        let mut exact = 0u8;
        let mut secret_left = [0u8; Color::COUNT];
        let mut guess_left = [0u8; Color::COUNT];

        for i in 0..CODE_LEN {
            let (s, g) = (secret.color_at(i), guess.color_at(i));
            if s == g {
                exact += 1;
            } else {
                secret_left[s.index()] += 1;
                guess_left[g.index()] += 1;
            }
        }

        let mut color_only = 0u8;
        for c in 0..Color::COUNT {
            color_only += secret_left[c].min(guess_left[c]);
        }

        Self { exact, color_only }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} color-only", self.exact, self.color_only)
    }
}
