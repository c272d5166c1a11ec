use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::board::Board;
use super::solution::Solution;
use super::vocab;
use super::word::Lexeme;
use crate::errors::SolveError;

/// Settings for building a [`Solver`]
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Word list, one word per line
    pub vocabulary_path: PathBuf,
    /// Lowercase the word list while loading it
    pub lowercase: bool,
    /// Give up on a board after this long
    pub timeout: Option<Duration>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            vocabulary_path: PathBuf::from("vocabulary-english.txt"),
            lowercase: true,
            timeout: None,
        }
    }
}

/// Solves boards against a shared word list. Cloning is cheap and the word
/// list is never modified, so solvers can be handed to other threads.
#[derive(Debug, Clone)]
pub struct Solver {
    vocabulary: Arc<Vec<Lexeme>>,
    timeout: Option<Duration>,
}

impl Solver {
    pub fn new(vocabulary: Vec<Lexeme>) -> Self {
        Self {
            vocabulary: Arc::new(vocabulary),
            timeout: None,
        }
    }

    pub fn from_config(config: &SolverConfig) -> Result<Self, SolveError> {
        let vocabulary = vocab::load_vocabulary(&config.vocabulary_path, config.lowercase)?;
        Ok(Self::new(vocabulary).with_timeout(config.timeout))
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn vocabulary(&self) -> &[Lexeme] {
        &self.vocabulary
    }

    pub fn solve(&self, board: &Board) -> Result<Solution, SolveError> {
        let deadline = self.timeout.map(|t| Instant::now() + t);
        let words = board.enumerate_words_until(&self.vocabulary, deadline)?;
        let solution = Solution::from_words(words);
        log::debug!(
            "Solved {}x{} board: {} words, score {}",
            board.size(),
            board.size(),
            solution.len(),
            solution.score()
        );
        Ok(solution)
    }

    /// Builds the board from raw rows and solves it
    pub fn solve_grid<S: AsRef<str>>(&self, rows: &[Vec<S>]) -> Result<Solution, SolveError> {
        let board = Board::new(rows)?;
        self.solve(&board)
    }
}
