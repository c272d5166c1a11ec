use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

use super::letter_set::LetterSet;

/// Shortest word that counts towards a solution
pub const MIN_WORD_LENGTH: usize = 3;

/// A dictionary word candidate (or a found word). Compared, ordered and
/// hashed by its text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Lexeme {
    value: String,
}

impl Lexeme {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Length in characters, so a "qu" tile adds two
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn is_length_eligible(&self) -> bool {
        self.len() >= MIN_WORD_LENGTH
    }

    pub fn score(&self) -> u32 {
        match self.len() {
            0..=2 => 0,
            3 | 4 => 1,
            5 => 2,
            6 => 3,
            7 => 5,
            _ => 11,
        }
    }

    /// Coarse pre-filter: does the word share any character with the set
    pub fn overlaps(&self, letters: &LetterSet) -> bool {
        letters.overlaps(&self.value)
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl From<String> for Lexeme {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Lexeme {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for Lexeme {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Borrow<str> for Lexeme {
    fn borrow(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
