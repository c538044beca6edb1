//! Word scoring
//!
//! Standard Boggle points by word length.

/// Shortest word that scores
pub const MIN_WORD_LENGTH: usize = 3;

/// Longest word that fits on the board (one letter per cell, `qu` aside)
pub const MAX_WORD_LENGTH: usize = 16;

/// Word length to point value table
///
/// | Length | Points |
/// |--------|--------|
/// | 3, 4   | 1      |
/// | 5      | 2      |
/// | 6      | 3      |
/// | 7      | 5      |
/// | 8+     | 11     |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoringTable;

impl ScoringTable {
    /// Points for a word of the given length
    ///
    /// Lengths below 3 never reach scoring and return 0.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::ScoringTable;
    ///
    /// assert_eq!(ScoringTable::score(4), 1);
    /// assert_eq!(ScoringTable::score(7), 5);
    /// assert_eq!(ScoringTable::score(12), 11);
    /// ```
    #[inline]
    #[must_use]
    pub const fn score(length: usize) -> u32 {
        match length {
            0..=2 => 0,
            3 | 4 => 1,
            5 => 2,
            6 => 3,
            7 => 5,
            _ => 11,
        }
    }

    /// Points for a word, by its text length
    #[inline]
    #[must_use]
    pub const fn score_word(word: &str) -> u32 {
        Self::score(word.len())
    }
}
