use std::collections::BTreeMap;

use super::word::Lexeme;

/// Prefix tree node
#[derive(Debug, Default)]
struct TrieNode {
    next: BTreeMap<char, TrieNode>,
    /// Word ending at this node, if any
    entry: Option<Lexeme>,
}

impl TrieNode {
    /// Adds a word below this node. Returns false if the key was already present,
    /// in which case the earlier entry is kept.
    fn add_word(&mut self, lexeme: Lexeme) -> bool {
        let mut node = self;
        for c in lexeme.as_str().chars() {
            node = node.next.entry(c).or_default();
        }
        if node.entry.is_some() {
            return false;
        }
        node.entry = Some(lexeme);
        true
    }

    fn next_node(&self, c: char) -> Option<&TrieNode> {
        self.next.get(&c)
    }

    /// Walks down the tree one character at a time
    fn descend(&self, path: &str) -> Option<&TrieNode> {
        path.chars().try_fold(self, |node, c| node.next_node(c))
    }

    /// Nodes only get created on the way to an entry, so anything but an
    /// untouched root has at least one key below it
    fn is_empty(&self) -> bool {
        self.entry.is_none() && self.next.is_empty()
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a Lexeme>) {
        if let Some(lexeme) = &self.entry {
            out.push(lexeme);
        }
        for child in self.next.values() {
            child.collect(out);
        }
    }
}

/// Trie over the candidate words of a board. Built once and never modified;
/// prefix queries hand out [`PrefixView`] cursors into it.
#[derive(Debug, Default)]
pub struct PrefixIndex {
    root: TrieNode,
    len: usize,
}

impl PrefixIndex {
    pub fn new<I: IntoIterator<Item = Lexeme>>(lexemes: I) -> Self {
        let mut index = Self::default();
        for lexeme in lexemes {
            if index.root.add_word(lexeme) {
                index.len += 1;
            }
        }
        index
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// View over every key in the index
    pub fn view(&self) -> PrefixView<'_> {
        PrefixView {
            node: Some(&self.root),
            prefix: String::new(),
        }
    }

    pub fn narrow(&self, prefix: &str) -> PrefixView<'_> {
        self.view().narrow(prefix)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The entry stored under the key (the first one inserted)
    pub fn get(&self, key: &str) -> Option<&Lexeme> {
        self.root.descend(key).and_then(|node| node.entry.as_ref())
    }
}

impl std::iter::FromIterator<Lexeme> for PrefixIndex {
    fn from_iter<T: IntoIterator<Item = Lexeme>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// The keys of a [`PrefixIndex`] that start with `prefix`. Holds a borrowed
/// node of the trie, so narrowing costs the length of the new prefix and
/// never touches the index itself.
#[derive(Debug, Clone)]
pub struct PrefixView<'a> {
    node: Option<&'a TrieNode>,
    prefix: String,
}

impl<'a> PrefixView<'a> {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Restricts the view to keys starting with `prefix`. The prefix is given
    /// from the start of the key, not relative to this view.
    pub fn narrow(&self, prefix: &str) -> PrefixView<'a> {
        if let Some(rest) = prefix.strip_prefix(self.prefix.as_str()) {
            PrefixView {
                node: self.node.and_then(|node| node.descend(rest)),
                prefix: prefix.to_string(),
            }
        } else if self.prefix.starts_with(prefix) {
            // Every key here already starts with the shorter prefix
            self.clone()
        } else {
            PrefixView {
                node: None,
                prefix: prefix.to_string(),
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.node.map_or(true, TrieNode::is_empty)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&'a Lexeme> {
        let rest = key.strip_prefix(self.prefix.as_str())?;
        self.node?.descend(rest)?.entry.as_ref()
    }

    /// All keys in the view, in lexical order
    pub fn lexemes(&self) -> Vec<&'a Lexeme> {
        let mut out = Vec::new();
        if let Some(node) = self.node {
            node.collect(&mut out);
        }
        out
    }
}
