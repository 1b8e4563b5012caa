//! Game colors
//!
//! The fixed six-color alphabet codes are built from, with the one-character
//! aliases used for guess entry (y/r/b/g/o/p).

use std::fmt;

/// One of the six peg colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Yellow,
    Red,
    Blue,
    Green,
    Orange,
    Purple,
}

impl Color {
    /// Number of colors in the standard alphabet
    pub const COUNT: usize = 6;

    /// The standard alphabet, in canonical enumeration order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Yellow,
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Orange,
        Self::Purple,
    ];

    /// Index of this color in the canonical order (0-5)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// One-character alias used for guess input
    #[inline]
    #[must_use]
    pub const fn alias(self) -> char {
        match self {
            Self::Yellow => 'y',
            Self::Red => 'r',
            Self::Blue => 'b',
            Self::Green => 'g',
            Self::Orange => 'o',
            Self::Purple => 'p',
        }
    }

    /// Full color name
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yellow => "Yellow",
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Orange => "Orange",
            Self::Purple => "Purple",
        }
    }

    /// Look up a color by its one-character alias (case-insensitive)
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::Color;
    ///
    /// assert_eq!(Color::from_alias('r'), Some(Color::Red));
    /// assert_eq!(Color::from_alias('G'), Some(Color::Green));
    /// assert_eq!(Color::from_alias('x'), None);
    /// ```
    #[must_use]
    pub fn from_alias(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'y' => Some(Self::Yellow),
            'r' => Some(Self::Red),
            'b' => Some(Self::Blue),
            'g' => Some(Self::Green),
            'o' => Some(Self::Orange),
            'p' => Some(Self::Purple),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
