pub mod board;
pub mod cell;
pub mod dictionary;
pub mod letter_set;
pub mod path;
pub mod solution;
pub mod solver;
pub mod util;
pub mod vocab;
pub mod word;

pub use self::board::{Board, BoardRequest};
pub use self::dictionary::{PrefixIndex, PrefixView};
pub use self::solution::{Solution, SolutionResponse};
pub use self::solver::{Solver, SolverConfig};
pub use self::word::Lexeme;
