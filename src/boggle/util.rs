use std::hash::{Hash, Hasher};

/// Row/column offsets of the 8 surrounding squares, in row-major order
static OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Position of a tile on an N×N grid. The grid size only decides validity,
/// two coordinates are the same square when row and column match.
#[derive(Debug, Clone, Copy)]
pub struct Coordinate {
    grid_size: usize,
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(grid_size: usize, row: usize, col: usize) -> Self {
        Self {
            grid_size,
            row,
            col,
        }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn is_valid(&self) -> bool {
        self.row < self.grid_size && self.col < self.grid_size
    }

    /// Returns the square offset by (d_row, d_col) if it still lies on the grid
    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<Coordinate> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let pos = Coordinate::new(self.grid_size, row, col);
        if pos.is_valid() {
            Some(pos)
        } else {
            None
        }
    }

    /// Returns all the valid adjacent positions (including diagonals) to this position.
    /// Interior squares have 8, edges 5 and corners 3.
    pub fn neighbors(&self) -> impl Iterator<Item = Coordinate> + '_ {
        OFFSETS
            .iter()
            .filter_map(move |&(d_row, d_col)| self.offset(d_row, d_col))
    }

    /// Converts the row/col to a 1d index
    pub fn as_index(&self) -> usize {
        self.row * self.grid_size + self.col
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.col == other.col
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.col.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::Coordinate;

    #[test]
    fn test_neighbor_counts() {
        let corner = Coordinate::new(4, 0, 0);
        let edge = Coordinate::new(4, 0, 2);
        let interior = Coordinate::new(4, 2, 1);

        assert_eq!(corner.neighbors().count(), 3);
        assert_eq!(edge.neighbors().count(), 5);
        assert_eq!(interior.neighbors().count(), 8);
        assert_eq!(Coordinate::new(4, 3, 3).neighbors().count(), 3);
    }

    #[test]
    fn test_single_square_has_no_neighbors() {
        assert_eq!(Coordinate::new(1, 0, 0).neighbors().count(), 0);
    }

    #[test]
    fn test_neighbors_are_in_bounds_and_distinct() {
        let pos = Coordinate::new(3, 1, 1);
        let adjacent = pos.neighbors().collect::<Vec<_>>();
        assert_eq!(adjacent.len(), 8);
        assert!(!adjacent.contains(&pos));
        assert!(adjacent.iter().all(|p| p.is_valid()));
        assert_eq!(adjacent[0], Coordinate::new(3, 0, 0));
        assert_eq!(adjacent[7], Coordinate::new(3, 2, 2));
    }

    #[test]
    fn test_equality_ignores_grid_size() {
        assert_eq!(Coordinate::new(3, 1, 2), Coordinate::new(5, 1, 2));
        assert!(!Coordinate::new(2, 2, 0).is_valid());
        assert_eq!(Coordinate::new(4, 2, 3).as_index(), 11);
    }
}
