//! Word representation
//!
//! A Word is a lowercase ASCII letter sequence. Words of any length are allowed,
//! but only words of the same length can ever be compared or linked in the graph.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A lowercase word, one vertex of the word graph
///
/// Ordering is plain lexicographic order of the text, which is the order used
/// everywhere a deterministic enumeration is needed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_chains::core::Word;
    ///
    /// let word = Word::new("Cold").unwrap();
    /// assert_eq!(word.text(), "cold");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c0ld").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: a Word is never empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of positions at which the two words differ
    ///
    /// Returns `None` for words of different lengths, which are never comparable.
    ///
    /// # Examples
    /// ```
    /// use word_chains::core::Word;
    ///
    /// let cold = Word::new("cold").unwrap();
    /// let cord = Word::new("cord").unwrap();
    /// let card = Word::new("card").unwrap();
    ///
    /// assert_eq!(cold.hamming_distance(&cord), Some(1));
    /// assert_eq!(cold.hamming_distance(&card), Some(2));
    /// assert_eq!(cold.hamming_distance(&Word::new("cod").unwrap()), None);
    /// ```
    #[must_use]
    pub fn hamming_distance(&self, other: &Self) -> Option<usize> {
        if self.len() != other.len() {
            return None;
        }
        Some(
            self.chars()
                .iter()
                .zip(other.chars())
                .filter(|(a, b)| a != b)
                .count(),
        )
    }

    /// Check if the two words differ at exactly one position
    #[inline]
    #[must_use]
    pub fn is_one_letter_from(&self, other: &Self) -> bool {
        self.hamming_distance(other) == Some(1)
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars().contains(&letter)
    }

    /// Check if any letter of this word appears anywhere in `other`
    #[must_use]
    pub fn shares_letter_with(&self, other: &Self) -> bool {
        self.chars().iter().any(|&letter| other.has_letter(letter))
    }

    /// Positions where this word and `other` hold different letters
    ///
    /// Positions beyond the shorter word are not reported.
    #[must_use]
    pub fn changed_positions(&self, other: &Self) -> Vec<usize> {
        self.chars()
            .iter()
            .zip(other.chars())
            .enumerate()
            .filter_map(|(i, (a, b))| (a != b).then_some(i))
            .collect()
    }

    /// Copy of this word with the letter at `position` replaced
    ///
    /// Returns `None` if the position is out of range or the letter is not a
    /// lowercase ASCII letter.
    #[must_use]
    pub fn with_letter(&self, position: usize, letter: char) -> Option<Self> {
        let letter = letter.to_ascii_lowercase();
        if position >= self.len() || !letter.is_ascii_lowercase() {
            return None;
        }
        let mut bytes = self.text.clone().into_bytes();
        bytes[position] = letter as u8;
        String::from_utf8(bytes).ok().map(|text| Self { text })
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
