use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::time::Instant;

use serde::Deserialize;

use super::cell::{Cell, CellId};
use super::dictionary::{PrefixIndex, PrefixView};
use super::letter_set::LetterSet;
use super::path::TraversalState;
use super::util::Coordinate;
use super::word::Lexeme;
use crate::errors::{BoardError, SolveError};
use crate::utils::serialization;

/// Request payload: the grid as rows of tiles, eg `{"board": [["t","i"],["e","s"]]}`
#[derive(Debug, Clone, Deserialize)]
pub struct BoardRequest {
    pub board: Vec<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    /// Cells in row-major order, neighbors wired
    cells: Vec<Cell>,
    /// Every character printed on the board
    letters: LetterSet,
}

impl Board {
    /// Builds the board from rows of tiles. The grid must be non-empty and
    /// square, and every tile must hold at least one letter.
    pub fn new<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self, BoardError> {
        let size = rows.len();
        let columns = rows.first().map(Vec::len).ok_or(BoardError::Empty)?;
        if columns == 0 {
            return Err(BoardError::Empty);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != columns)
        {
            return Err(BoardError::Ragged {
                row,
                expected: columns,
                found,
            });
        }
        if columns != size {
            return Err(BoardError::NotSquare {
                rows: size,
                columns,
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, tiles) in rows.iter().enumerate() {
            for (col, tile) in tiles.iter().enumerate() {
                let tile = tile.as_ref();
                if tile.is_empty() {
                    return Err(BoardError::EmptyTile { row, col });
                }
                cells.push(Cell::new(Coordinate::new(size, row, col), tile));
            }
        }

        // Only needed while wiring
        let cells_by_coordinate: HashMap<Coordinate, CellId> = cells
            .iter()
            .enumerate()
            .map(|(id, cell)| (cell.coordinate(), id))
            .collect();
        for cell in cells.iter_mut() {
            cell.populate_neighbors(&cells_by_coordinate);
        }

        let letters = LetterSet::from_tiles(cells.iter().map(Cell::letter));
        log::debug!("Built {size}x{size} board with letters {letters:?}");

        Ok(Self {
            size,
            cells,
            letters,
        })
    }

    /// Parses a JSON request payload
    pub fn from_json(data: &str) -> Result<Self, SolveError> {
        let request: BoardRequest = serialization::parse_json(data)?;
        Ok(Self::new(&request.board)?)
    }

    /// Reads a JSON request payload from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SolveError> {
        let request: BoardRequest = serialization::load_json(path)?;
        Ok(Self::new(&request.board)?)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        let pos = Coordinate::new(self.size, row, col);
        if pos.is_valid() {
            self.cells.get(pos.as_index())
        } else {
            None
        }
    }

    pub fn letters(&self) -> &LetterSet {
        &self.letters
    }

    /// Drops the words that share no character at all with the board.
    /// This is only a cheap first cut; the traversal decides what is playable.
    pub fn candidates<'v>(&'v self, vocabulary: &'v [Lexeme]) -> impl Iterator<Item = &'v Lexeme> + 'v {
        vocabulary
            .iter()
            .filter(move |word| word.overlaps(&self.letters))
    }

    /// Prefix index over the candidates for this board
    pub fn build_index(&self, vocabulary: &[Lexeme]) -> PrefixIndex {
        let index: PrefixIndex = self.candidates(vocabulary).cloned().collect();
        log::debug!(
            "Indexed {} of {} vocabulary words for the board",
            index.len(),
            vocabulary.len()
        );
        index
    }

    /// Finds every dictionary word of three or more letters that can be spelled
    /// along a path of adjacent cells, using each cell at most once per word
    pub fn enumerate_words(&self, vocabulary: &[Lexeme]) -> HashSet<Lexeme> {
        let index = self.build_index(vocabulary);
        let mut search = Enumeration::new(self, None);
        // Without a deadline the search cannot fail
        match search.run(&index) {
            Ok(()) => search.found,
            Err(_) => HashSet::new(),
        }
    }

    /// Same as [`Board::enumerate_words`], but gives up once `deadline` has passed
    pub fn enumerate_words_until(
        &self,
        vocabulary: &[Lexeme],
        deadline: Option<Instant>,
    ) -> Result<HashSet<Lexeme>, SolveError> {
        let index = self.build_index(vocabulary);
        let mut search = Enumeration::new(self, deadline);
        search.run(&index)?;
        Ok(search.found)
    }
}

/// Book-keeping for one enumeration over a board. Owned by a single call and
/// dropped when it returns.
struct Enumeration<'b> {
    board: &'b Board,
    state: TraversalState<'b>,
    found: HashSet<Lexeme>,
    deadline: Option<Instant>,
    started: Instant,
    explored: usize,
}

impl<'b> Enumeration<'b> {
    fn new(board: &'b Board, deadline: Option<Instant>) -> Self {
        Self {
            board,
            state: TraversalState::new(),
            found: HashSet::new(),
            deadline,
            started: Instant::now(),
            explored: 0,
        }
    }

    fn run(&mut self, index: &PrefixIndex) -> Result<(), SolveError> {
        if index.is_empty() {
            log::debug!("No candidate words overlap the board, skipping traversal");
            return Ok(());
        }
        let vocabulary = index.view();
        for id in 0..self.board.cells.len() {
            self.depth_first(id, &vocabulary)?;
        }
        log::debug!(
            "Explored {} steps, found {} words in {:?}",
            self.explored,
            self.found.len(),
            self.started.elapsed()
        );
        Ok(())
    }

    fn depth_first(&mut self, id: CellId, vocabulary: &PrefixView<'_>) -> Result<(), SolveError> {
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(SolveError::DeadlineExceeded {
                    elapsed: self.started.elapsed(),
                    explored: self.explored,
                });
            }
        }

        let board = self.board;
        let cell = &board.cells[id];
        if !self.state.enter(cell) {
            return Ok(());
        }
        self.explored += 1;

        let word = self.state.path_as_word();
        let narrowed = vocabulary.narrow(word.as_str());
        if word.is_length_eligible() && narrowed.contains(word.as_str()) {
            self.found.insert(word);
        }

        let mut outcome = Ok(());
        if !narrowed.is_empty() {
            for &neighbor in cell.neighbors() {
                outcome = self.depth_first(neighbor, &narrowed);
                if outcome.is_err() {
                    break;
                }
            }
        }

        self.state.leave();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|t| t.to_string()).collect())
            .collect()
    }

    fn vocab(words: &[&str]) -> Vec<Lexeme> {
        words.iter().map(|w| Lexeme::from(*w)).collect()
    }

    fn sorted(words: HashSet<Lexeme>) -> Vec<String> {
        let mut words = words.into_iter().map(Lexeme::into_string).collect::<Vec<_>>();
        words.sort();
        words
    }

    #[test]
    fn test_rejects_malformed_grids() {
        let empty: Vec<Vec<String>> = vec![];
        assert_eq!(Board::new(&empty).unwrap_err(), BoardError::Empty);
        assert_eq!(Board::new(&grid(&[&[]])).unwrap_err(), BoardError::Empty);
        assert_eq!(
            Board::new(&grid(&[&["a", "b"], &["c"]])).unwrap_err(),
            BoardError::Ragged { row: 1, expected: 2, found: 1 }
        );
        assert_eq!(
            Board::new(&grid(&[&["a", "b"]])).unwrap_err(),
            BoardError::NotSquare { rows: 1, columns: 2 }
        );
        assert_eq!(
            Board::new(&grid(&[&["a", ""], &["c", "d"]])).unwrap_err(),
            BoardError::EmptyTile { row: 0, col: 1 }
        );
    }

    #[test]
    fn test_adjacency_wiring() {
        let board = Board::new(&grid(&[&["a", "b", "c"], &["d", "e", "f"], &["g", "h", "i"]])).unwrap();
        assert_eq!(board.size(), 3);
        let letters_around = |row, col| {
            let cell = board.cell(row, col).unwrap();
            cell.neighbors()
                .iter()
                .map(|&id| board.cells()[id].letter())
                .collect::<String>()
        };
        assert_eq!(letters_around(0, 0), "bde");
        assert_eq!(letters_around(0, 1), "acdef");
        assert_eq!(letters_around(1, 1), "abcdfghi");
        assert!(board.cell(3, 0).is_none());
    }

    #[test]
    fn test_two_by_two() {
        let board = Board::new(&grid(&[&["t", "i"], &["e", "s"]])).unwrap();
        let words = board.enumerate_words(&vocab(&["ties", "tie", "sit", "set"]));
        assert_eq!(sorted(words), vec!["set", "sit", "tie", "ties"]);
    }

    #[test]
    fn test_path_must_be_adjacent() {
        // a x c
        // y z e
        // w v u
        let board = Board::new(&grid(&[&["a", "x", "c"], &["y", "z", "e"], &["w", "v", "u"]])).unwrap();
        let words = board.enumerate_words(&vocab(&["ace", "awe", "zxc", "uva"]));
        assert_eq!(sorted(words), vec!["zxc"]);
    }

    #[test]
    fn test_cells_are_not_reused() {
        let board = Board::new(&grid(&[&["a", "n"], &["x", "x"]])).unwrap();
        let words = board.enumerate_words(&vocab(&["nan", "ann", "axn"]));
        assert_eq!(sorted(words), vec!["axn"]);
    }

    #[test]
    fn test_short_words_do_not_block_longer_ones() {
        let board = Board::new(&grid(&[&["a", "t"], &["e", "s"]])).unwrap();
        let words = board.enumerate_words(&vocab(&["at", "ate", "ates", "sea"]));
        assert_eq!(sorted(words), vec!["ate", "ates", "sea"]);
    }

    #[test]
    fn test_multi_letter_tiles() {
        let board = Board::new(&grid(&[&["qu", "i"], &["t", "e"]])).unwrap();
        let words = board.enumerate_words(&vocab(&["quit", "quiet", "quite", "tie"]));
        assert_eq!(sorted(words), vec!["quiet", "quit", "quite", "tie"]);
    }

    #[test]
    fn test_single_cell_board() {
        let board = Board::new(&grid(&[&["a"]])).unwrap();
        assert!(board.cell(0, 0).unwrap().neighbors().is_empty());
        assert!(board.enumerate_words(&vocab(&["a", "aa", "aaa"])).is_empty());
    }

    #[test]
    fn test_overlap_filter_is_coarse() {
        let board = Board::new(&grid(&[&["a", "b"], &["c", "d"]])).unwrap();
        let words = vocab(&["xyz", "axe", "bad", "qqq"]);
        let kept = board.candidates(&words).map(Lexeme::as_str).collect::<Vec<_>>();
        // "axe" shares only the "a" but still goes through
        assert_eq!(kept, vec!["axe", "bad"]);
        assert_eq!(sorted(board.enumerate_words(&words)), vec!["bad"]);
    }

    #[test]
    fn test_no_overlap() {
        let board = Board::new(&grid(&[&["e", "e"], &["e", "e"]])).unwrap();
        let words = vocab(&["cat", "dog"]);
        assert!(board.build_index(&words).is_empty());
        assert!(board.enumerate_words(&words).is_empty());
    }

    #[test]
    fn test_deadline() {
        let board = Board::new(&grid(&[&["t", "i"], &["e", "s"]])).unwrap();
        let words = vocab(&["ties", "tie"]);
        let expired = Instant::now() - Duration::from_millis(1);
        match board.enumerate_words_until(&words, Some(expired)) {
            Err(SolveError::DeadlineExceeded { explored, .. }) => assert_eq!(explored, 0),
            other => panic!("expected deadline error, got {:?}", other),
        }

        let later = Instant::now() + Duration::from_secs(60);
        let found = board.enumerate_words_until(&words, Some(later)).unwrap();
        assert_eq!(sorted(found), vec!["tie", "ties"]);
    }

    #[test]
    fn test_from_json() {
        let board = Board::from_json(r#"{"board": [["t","i"],["e","s"]]}"#).unwrap();
        assert_eq!(board.cell(1, 0).unwrap().letter(), "e");
        assert!(matches!(
            Board::from_json(r#"{"board": [["t","i"]]}"#),
            Err(SolveError::Board(BoardError::NotSquare { .. }))
        ));
        assert!(matches!(Board::from_json("[1, 2]"), Err(SolveError::Json(_))));
    }
}
