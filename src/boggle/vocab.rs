//! Loading the word list handed to the solver.
//!
//! The engine matches strings exactly, so normalization happens here: lines
//! are trimmed, blank lines skipped, words optionally lowercased, and repeats
//! dropped (the first occurrence wins).

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::word::Lexeme;
use crate::errors::SolveError;

/// Normalizes an iterator of raw lines into a word list
pub fn parse_lines<I, S>(lines: I, lowercase: bool) -> Vec<Lexeme>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for line in lines {
        let word = line.as_ref().trim();
        if word.is_empty() {
            continue;
        }
        let word = if lowercase {
            word.to_lowercase()
        } else {
            word.to_string()
        };
        if seen.insert(word.clone()) {
            words.push(Lexeme::from(word));
        }
    }
    words
}

pub fn parse_vocabulary(contents: &str, lowercase: bool) -> Vec<Lexeme> {
    parse_lines(contents.lines(), lowercase)
}

/// Reads a word list with one word per line
pub fn load_vocabulary<P: AsRef<Path>>(path: P, lowercase: bool) -> Result<Vec<Lexeme>, SolveError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SolveError::io(path, e))?;
    let reader = BufReader::new(file);
    let lines = reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| SolveError::io(path, e))?;
    let words = parse_lines(lines, lowercase);
    log::debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
