//! Code representation
//!
//! A Code is an ordered sequence of exactly four colors, repetition allowed.
//! It serves as both the hidden secret and every guess.

use super::Color;
use std::fmt;

/// Number of positions in a code
pub const CODE_LEN: usize = 4;

/// A four-color code (secret or guess)
///
/// Immutable value type; equality is element-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    colors: [Color; CODE_LEN],
}

/// Error type for invalid code input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    UnknownAlias(char),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LEN} colors, got {len}")
            }
            Self::UnknownAlias(c) => write!(f, "Unknown color alias '{c}'"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from a color array
    #[inline]
    #[must_use]
    pub const fn new(colors: [Color; CODE_LEN]) -> Self {
        Self { colors }
    }

    /// Get the colors as an array
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; CODE_LEN] {
        &self.colors
    }

    /// Get the color at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn color_at(&self, position: usize) -> Color {
        self.colors[position]
    }

    /// Check whether the code contains a color at any position
    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// Parse a code from a string of one-character aliases
    ///
    /// Leading and trailing whitespace is ignored; aliases are
    /// case-insensitive.
    ///
    /// # Errors
    /// Returns `CodeError` if the input is not exactly four characters or
    /// contains a character that is not a color alias.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::{Code, Color};
    ///
    /// let code = Code::parse("rrgb").unwrap();
    /// assert_eq!(code.color_at(0), Color::Red);
    /// assert_eq!(code.color_at(3), Color::Blue);
    ///
    /// assert!(Code::parse("rgb").is_err());
    /// assert!(Code::parse("rrgx").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, CodeError> {
        let chars: Vec<char> = s.trim().chars().collect();

        if chars.len() != CODE_LEN {
            return Err(CodeError::InvalidLength(chars.len()));
        }

        let mut colors = [Color::Yellow; CODE_LEN];
        for (i, &c) in chars.iter().enumerate() {
            colors[i] = Color::from_alias(c).ok_or(CodeError::UnknownAlias(c))?;
        }

        Ok(Self { colors })
    }

    /// The code as its four-character alias string, e.g. "rrgb"
    #[must_use]
    pub fn aliases(&self) -> String {
        self.colors.iter().map(|c| c.alias()).collect()
    }
}

impl fmt::Display for Code {
    /// Full color names separated by spaces, e.g. "Red Red Green Blue"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.colors.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let code = Code::parse("rrgb").unwrap();
        assert_eq!(
            code.colors(),
            &[Color::Red, Color::Red, Color::Green, Color::Blue]
        );
    }

    #[test]
    fn parse_uppercase_and_whitespace() {
        let code = Code::parse("  RRGB ").unwrap();
        assert_eq!(code, Code::parse("rrgb").unwrap());
    }

    #[test]
    fn parse_invalid_length() {
        assert!(matches!(Code::parse("rgb"), Err(CodeError::InvalidLength(3))));
        assert!(matches!(
            Code::parse("rrgbo"),
            Err(CodeError::InvalidLength(5))
        ));
        assert!(matches!(Code::parse(""), Err(CodeError::InvalidLength(0))));
    }

    #[test]
    fn parse_unknown_alias() {
        assert!(matches!(
            Code::parse("rrgx"),
            Err(CodeError::UnknownAlias('x'))
        ));
    }

    #[test]
    fn contains_reports_membership() {
        let code = Code::parse("rrgb").unwrap();
        assert!(code.contains(Color::Red));
        assert!(code.contains(Color::Blue));
        assert!(!code.contains(Color::Purple));
    }

    #[test]
    fn aliases_round_trip() {
        for s in ["yyyy", "rgbo", "pppp", "orgb"] {
            let code = Code::parse(s).unwrap();
            assert_eq!(code.aliases(), s);
        }
    }

    #[test]
    fn display_uses_full_names() {
        let code = Code::parse("rrgb").unwrap();
        assert_eq!(format!("{code}"), "Red Red Green Blue");
    }

    #[test]
    fn equality_is_elementwise() {
        let a = Code::parse("rrgb").unwrap();
        let b = Code::parse("rrgb").unwrap();
        let c = Code::parse("rgrb").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c); // Same multiset, different order
    }
}
