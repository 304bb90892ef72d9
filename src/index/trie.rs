//! Prefix-searchable dictionary index
//!
//! A sorted byte trie built once from the word list and immutable afterward.
//! The search engine needs two answers for any byte sequence: "is this
//! exactly an indexed word" and "does any indexed word start with this
//! sequence". The second is what lets the permutation search abandon whole
//! subtrees, so it has to cost no more than a walk to the sequence's node,
//! never a scan of the dictionary.

use crate::core::Word;

/// Result of probing the index with a byte sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    /// The sequence is exactly an indexed word
    pub exact: bool,
    /// Some indexed word starts with the sequence
    pub prefix: bool,
}

/// Node arena entry: sorted child edges plus the terminal flag
#[derive(Debug, Default)]
struct Node {
    children: Vec<(u8, u32)>,
    terminal: bool,
}

/// Immutable dictionary index over uppercase byte sequences
///
/// Built once with [`DictionaryIndex::build`]; no insertions afterward.
/// Shared read-only across concurrent searches.
#[derive(Debug)]
pub struct DictionaryIndex {
    nodes: Vec<Node>,
    len: usize,
}

impl DictionaryIndex {
    /// Build the index from a sequence of words. Duplicates collapse.
    pub fn build<I>(words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        let mut index = Self {
            nodes: vec![Node::default()],
            len: 0,
        };

        for word in words {
            if index.insert(word.as_bytes()) {
                index.len += 1;
            }
        }

        index
    }

    /// Number of distinct indexed words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no words are indexed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True iff `seq` is exactly an indexed word
    #[must_use]
    pub fn contains(&self, seq: &[u8]) -> bool {
        self.probe(seq).exact
    }

    /// True iff some indexed word starts with `seq`.
    ///
    /// The empty sequence is a prefix of every word, so it answers true
    /// whenever the index is non-empty.
    #[must_use]
    pub fn has_prefix(&self, seq: &[u8]) -> bool {
        self.probe(seq).prefix
    }

    /// Answer both membership questions in a single walk
    #[must_use]
    pub fn probe(&self, seq: &[u8]) -> Probe {
        match self.walk(seq) {
            Some(id) => {
                let node = &self.nodes[id as usize];
                Probe {
                    exact: node.terminal,
                    prefix: node.terminal || !node.children.is_empty(),
                }
            }
            None => Probe {
                exact: false,
                prefix: false,
            },
        }
    }

    /// Walk `seq` from the root; None when the path leaves the trie
    fn walk(&self, seq: &[u8]) -> Option<u32> {
        let mut id = 0u32;
        for &byte in seq {
            let node = &self.nodes[id as usize];
            let slot = node
                .children
                .binary_search_by_key(&byte, |&(edge, _)| edge)
                .ok()?;
            id = node.children[slot].1;
        }
        Some(id)
    }

    /// Insert during build. Returns true when the word was not yet present.
    fn insert(&mut self, bytes: &[u8]) -> bool {
        let mut id = 0usize;
        for &byte in bytes {
            match self.nodes[id]
                .children
                .binary_search_by_key(&byte, |&(edge, _)| edge)
            {
                Ok(slot) => {
                    id = self.nodes[id].children[slot].1 as usize;
                }
                Err(slot) => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[id].children.insert(slot, (byte, next as u32));
                    id = next;
                }
            }
        }

        let node = &mut self.nodes[id];
        let fresh = !node.terminal;
        node.terminal = true;
        fresh
    }
}
