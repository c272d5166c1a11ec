use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use super::util::Coordinate;

/// Index of a cell inside its board
pub type CellId = usize;

/// A tile on the board. Cells are identified by their coordinate; the
/// neighbor list is wired once, after every cell of the board exists.
#[derive(Debug, Clone)]
pub struct Cell {
    coordinate: Coordinate,
    letter: String,
    neighbors: Vec<CellId>,
}

impl Cell {
    pub fn new(coordinate: Coordinate, letter: impl Into<String>) -> Self {
        Self {
            coordinate,
            letter: letter.into(),
            neighbors: Vec::new(),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Letters printed on the tile. May be more than one character (eg "qu")
    pub fn letter(&self) -> &str {
        &self.letter
    }

    pub fn neighbors(&self) -> &[CellId] {
        &self.neighbors
    }

    /// Resolves the adjacent coordinates to the cells occupying them
    pub(crate) fn populate_neighbors(&mut self, cells_by_coordinate: &HashMap<Coordinate, CellId>) {
        self.neighbors = self
            .coordinate
            .neighbors()
            .filter_map(|pos| cells_by_coordinate.get(&pos).copied())
            .collect();
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coordinate == other.coordinate
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coordinate.hash(state)
    }
}
