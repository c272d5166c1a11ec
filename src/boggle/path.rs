use std::collections::HashSet;

use super::cell::Cell;
use super::util::Coordinate;
use super::word::Lexeme;

/// Mutable context of one depth-first enumeration: the cells of the current
/// path (root first) and the set of squares already on it.
#[derive(Debug, Default)]
pub struct TraversalState<'a> {
    path: Vec<&'a Cell>,
    visited: HashSet<Coordinate>,
}

impl<'a> TraversalState<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visited(&self, cell: &Cell) -> bool {
        self.visited.contains(&cell.coordinate())
    }

    /// Extends the path with the cell. Returns false, leaving the path as it
    /// was, if the cell is already on it.
    pub fn enter(&mut self, cell: &'a Cell) -> bool {
        if !self.visited.insert(cell.coordinate()) {
            return false;
        }
        self.path.push(cell);
        true
    }

    /// Backtracks one step, freeing the frontier cell for sibling branches
    pub fn leave(&mut self) -> Option<&'a Cell> {
        let cell = self.path.pop()?;
        self.visited.remove(&cell.coordinate());
        Some(cell)
    }

    /// The word spelled by the path, read from the root to the frontier
    pub fn path_as_word(&self) -> Lexeme {
        self.path
            .iter()
            .map(|cell| cell.letter())
            .collect::<String>()
            .into()
    }

    pub fn cells(&self) -> &[&'a Cell] {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_reads_root_to_frontier() {
        let cells = [
            Cell::new(Coordinate::new(2, 0, 0), "t"),
            Cell::new(Coordinate::new(2, 0, 1), "i"),
            Cell::new(Coordinate::new(2, 1, 0), "e"),
        ];
        let mut state = TraversalState::new();
        for cell in cells.iter() {
            assert!(state.enter(cell));
        }
        assert_eq!(state.path_as_word().as_str(), "tie");

        state.leave();
        assert_eq!(state.path_as_word().as_str(), "ti");
        assert!(!state.is_visited(&cells[2]));
        assert!(state.is_visited(&cells[0]));
    }

    #[test]
    fn test_cell_is_used_once_per_path() {
        let cell = Cell::new(Coordinate::new(1, 0, 0), "qu");
        let mut state = TraversalState::new();
        assert!(state.enter(&cell));
        assert!(!state.enter(&cell));
        assert_eq!(state.len(), 1);
        assert_eq!(state.path_as_word().as_str(), "qu");

        assert_eq!(state.leave(), Some(&cell));
        assert!(state.is_empty());
        assert_eq!(state.leave(), None);
        assert!(state.enter(&cell));
    }
}
