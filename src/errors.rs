//! Error types for board construction and solving, with error codes and
//! help text for the CLI.
//!
//! - E001: `BoardError::Empty`
//! - E002: `BoardError::Ragged`
//! - E003: `BoardError::NotSquare`
//! - E004: `BoardError::EmptyTile`
//! - E005: `SolveError::Io`
//! - E006: `SolveError::Json`
//! - E007: `SolveError::DeadlineExceeded`
//! - E008: `SolveError::Input`

use std::io;
use std::time::Duration;

/// A grid that cannot be turned into a board. Raised before any cell is built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board has no tiles")]
    Empty,

    #[error("row {row} has {found} tiles, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("board is not square: {rows} rows of {columns} tiles")]
    NotSquare { rows: usize, columns: usize },

    #[error("tile at row {row}, column {col} is empty")]
    EmptyTile { row: usize, col: usize },
}

impl BoardError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            BoardError::Empty => "E001",
            BoardError::Ragged { .. } => "E002",
            BoardError::NotSquare { .. } => "E003",
            BoardError::EmptyTile { .. } => "E004",
        }
    }

    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            BoardError::Empty => Some("Supply at least one row, eg {\"board\": [[\"a\"]]}"),
            BoardError::Ragged { .. } | BoardError::NotSquare { .. } => {
                Some("Boards must be N×N: N rows, each with exactly N tiles")
            }
            BoardError::EmptyTile { .. } => Some("Every tile needs at least one letter"),
        }
    }
}

/// Anything that can stop a solve from producing a solution
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error("invalid board: {0}")]
    Board(#[from] BoardError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("search stopped after {elapsed:?} ({explored} steps explored)")]
    DeadlineExceeded { elapsed: Duration, explored: usize },

    #[error("could not read board from input: {0}")]
    Input(String),
}

impl SolveError {
    pub(crate) fn io(path: impl AsRef<std::path::Path>, source: io::Error) -> Self {
        SolveError::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolveError::Board(e) => e.code(),
            SolveError::Io { .. } => "E005",
            SolveError::Json(_) => "E006",
            SolveError::DeadlineExceeded { .. } => "E007",
            SolveError::Input(_) => "E008",
        }
    }

    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolveError::Board(e) => e.help(),
            SolveError::Json(_) => Some("Expected a payload like {\"board\": [[\"t\",\"i\"],[\"e\",\"s\"]]}"),
            SolveError::DeadlineExceeded { .. } => Some("Raise --timeout-ms or drop it to search without a deadline"),
            SolveError::Input(_) => Some("Enter the board size, then one row per line (eg \"t i\" or \"ti\")"),
            SolveError::Io { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
