use std::collections::HashSet;

use serde::Serialize;

use super::word::Lexeme;

/// Words found on a board and their total score
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    score: u32,
    words: HashSet<Lexeme>,
}

/// Response shape, with the words in lexical order
#[derive(Debug, Serialize)]
pub struct SolutionResponse<'a> {
    pub score: u32,
    pub words: Vec<&'a Lexeme>,
}

impl Solution {
    pub fn from_words(words: HashSet<Lexeme>) -> Self {
        let score = words.iter().map(Lexeme::score).sum();
        Self { score, words }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn words(&self) -> &HashSet<Lexeme> {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn sorted_words(&self) -> Vec<&Lexeme> {
        let mut words = self.words.iter().collect::<Vec<_>>();
        words.sort_unstable();
        words
    }

    pub fn to_response(&self) -> SolutionResponse<'_> {
        SolutionResponse {
            score: self.score,
            words: self.sorted_words(),
        }
    }
}

impl FromIterator<Lexeme> for Solution {
    fn from_iter<T: IntoIterator<Item = Lexeme>>(iter: T) -> Self {
        Self::from_words(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_is_sum_of_words() {
        let solution = ["tie", "ties", "tiers", "tinsel", "tinsels", "straight"]
            .iter()
            .map(|w| Lexeme::from(*w))
            .collect::<Solution>();
        assert_eq!(solution.score(), 1 + 1 + 2 + 3 + 5 + 11);
        assert_eq!(solution.len(), 6);
        assert!(solution.contains("tinsel"));
    }

    #[test]
    fn test_duplicates_count_once() {
        let solution = ["set", "set", "sit"].iter().map(|w| Lexeme::from(*w)).collect::<Solution>();
        assert_eq!(solution.score(), 2);
    }

    #[test]
    fn test_empty() {
        let solution = Solution::default();
        assert!(solution.is_empty());
        assert_eq!(solution.score(), 0);
    }

    #[test]
    fn test_response_is_sorted() {
        let solution = ["ties", "set", "tie"].iter().map(|w| Lexeme::from(*w)).collect::<Solution>();
        let json = serde_json::to_string(&solution.to_response()).unwrap();
        assert_eq!(json, r#"{"score":3,"words":["set","tie","ties"]}"#);
    }
}
