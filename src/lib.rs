//! Finds every dictionary word that can be traced through adjacent tiles of
//! an N×N letter grid, and scores the result.

pub mod boggle;
pub mod errors;
pub mod logging;
pub mod utils;

pub use crate::boggle::{Board, Lexeme, Solution, Solver, SolverConfig};
pub use crate::errors::{BoardError, SolveError};
