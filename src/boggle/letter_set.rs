use std::collections::BTreeSet;
use std::fmt;

/// Set of characters. Latin-1 characters live in a bitset, anything wider
/// goes to the overflow set.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct LetterSet {
    // bit is one if letter is in it
    accepted: [u128; 2],
    extended: BTreeSet<char>,
}

impl LetterSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Collects every character printed on the given tiles
    pub fn from_tiles<'a>(tiles: impl IntoIterator<Item = &'a str>) -> Self {
        tiles.into_iter().flat_map(str::chars).collect()
    }

    pub fn contains(&self, letter: char) -> bool {
        let i = letter as usize;
        if i < 256 {
            (self.accepted[i / 128] & (1 << (i % 128))) != 0
        } else {
            self.extended.contains(&letter)
        }
    }

    pub fn insert(&mut self, letter: char) {
        let i = letter as usize;
        if i < 256 {
            self.accepted[i / 128] |= 1 << (i % 128)
        } else {
            self.extended.insert(letter);
        }
    }

    /// True if at least one character of the text is in the set
    pub fn overlaps(&self, text: &str) -> bool {
        text.chars().any(|c| self.contains(c))
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.iter().all(|&l| l == 0) && self.extended.is_empty()
    }

    pub fn len(&self) -> usize {
        self.accepted
            .iter()
            .map(|l| l.count_ones() as usize)
            .sum::<usize>()
            + self.extended.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        (0u8..=255)
            .map(char::from)
            .filter(move |&c| self.contains(c))
            .chain(self.extended.iter().copied())
    }
}

impl std::iter::FromIterator<char> for LetterSet {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = char>,
    {
        let mut tmp = Self::default();
        iter.into_iter().for_each(|l| tmp.insert(l));
        tmp
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for l in self.iter() {
            write!(f, "{}", l)?;
        }
        write!(f, "]")
    }
}
