//! The universe of possible codes
//!
//! `CodeSpace` carries the alphabet as an explicit configuration value
//! instead of process-wide state, and enumerates the full K^L universe.

use super::code::CODE_LEN;
use super::{Code, Color};
use rand::Rng;

/// The space of all codes over a given alphabet
#[derive(Debug, Clone)]
pub struct CodeSpace {
    alphabet: Vec<Color>,
}

impl CodeSpace {
    /// Create a space over a custom alphabet
    ///
    /// # Panics
    /// Panics if the alphabet is empty.
    #[must_use]
    pub fn new(alphabet: Vec<Color>) -> Self {
        assert!(!alphabet.is_empty(), "alphabet must not be empty");
        Self { alphabet }
    }

    /// The canonical six-color space (6^4 = 1296 codes)
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Color::ALL.to_vec())
    }

    /// The alphabet this space is built over
    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &[Color] {
        &self.alphabet
    }

    /// Total number of codes in this space (K^L)
    #[inline]
    #[must_use]
    pub fn universe_size(&self) -> usize {
        self.alphabet.len().pow(CODE_LEN as u32)
    }

    /// Enumerate every code in the space
    ///
    /// Order is lexicographic by alphabet index, rightmost position
    /// fastest-varying. Strategies that walk the universe rely on this
    /// being deterministic.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::CodeSpace;
    ///
    /// let codes = CodeSpace::standard().enumerate_all();
    /// assert_eq!(codes.len(), 1296);
    /// assert_eq!(codes[0].aliases(), "yyyy");
    /// assert_eq!(codes[1].aliases(), "yyyr");
    /// ```
    #[must_use]
    pub fn enumerate_all(&self) -> Vec<Code> {
        let k = self.alphabet.len();
        let mut codes = Vec::with_capacity(self.universe_size());

        for index in 0..self.universe_size() {
            let mut colors = [self.alphabet[0]; CODE_LEN];
            let mut n = index;
            for position in (0..CODE_LEN).rev() {
                colors[position] = self.alphabet[n % k];
                n /= k;
            }
            codes.push(Code::new(colors));
        }

        codes
    }

    /// Draw a uniformly random secret, each position independent
    ///
    /// Uses the thread-local generator, so parallel workers get
    /// independent streams.
    #[must_use]
    pub fn random_secret(&self) -> Code {
        let mut rng = rand::rng();
        let mut colors = [self.alphabet[0]; CODE_LEN];
        for slot in &mut colors {
            *slot = self.alphabet[rng.random_range(0..self.alphabet.len())];
        }
        Code::new(colors)
    }

    /// The monochrome probe codes, one per alphabet color, in alphabet order
    #[must_use]
    pub fn monochromes(&self) -> Vec<Code> {
        self.alphabet
            .iter()
            .map(|&color| Code::new([color; CODE_LEN]))
            .collect()
    }
}
