//! Permutation search with prefix pruning
//!
//! Explores every ordering of every subset of the query letters by swapping
//! positions in place, and abandons a branch the moment the index reports
//! that no word starts with the current prefix. Without that cut the space
//! is factorial in the query length; with it, exploration is bounded by the
//! dictionary's actual branching structure.

use crate::core::{Query, Word};
use crate::index::DictionaryIndex;
use rustc_hash::FxHashSet;

/// Anagram search over a shared read-only dictionary index
///
/// The engine itself holds no mutable state: the hit set and the candidate
/// buffer live for a single [`SearchEngine::search`] call, so one engine may
/// serve concurrent callers.
pub struct SearchEngine<'a> {
    index: &'a DictionaryIndex,
}

impl<'a> SearchEngine<'a> {
    /// Create an engine over a fully-built index
    #[must_use]
    pub const fn new(index: &'a DictionaryIndex) -> Self {
        Self { index }
    }

    /// The index this engine searches
    #[must_use]
    pub const fn index(&self) -> &'a DictionaryIndex {
        self.index
    }

    /// Find every dictionary word formable from a subset of the query letters.
    ///
    /// The input is uppercased; each `?` expands to every alphabet letter
    /// (all of them, Cartesian, when several are present). Results are
    /// deduplicated and ordered longest first, alphabetical within a length.
    /// An empty result is the "no results" outcome, never an error.
    #[must_use]
    pub fn search(&self, input: &str) -> Vec<Word> {
        let query = Query::parse(input);
        let mut hits: FxHashSet<Word> = FxHashSet::default();

        for mut buffer in query.expansions() {
            self.permute(&mut buffer, 0, &mut hits);
        }

        order_hits(hits)
    }

    /// Backtracking step: the first `depth` letters of `buffer` are fixed.
    ///
    /// Try, recurse, undo: each remaining position is swapped into `depth`
    /// and swapped back, so the caller-owned buffer is restored on return
    /// and no allocation happens per step.
    fn permute(&self, buffer: &mut [u8], depth: usize, hits: &mut FxHashSet<Word>) {
        let probe = self.index.probe(&buffer[..depth]);

        if probe.exact && depth > 0 {
            hits.insert(Word::from_indexed_bytes(&buffer[..depth]));
        }

        if !probe.prefix || depth == buffer.len() {
            return;
        }

        for j in depth..buffer.len() {
            buffer.swap(depth, j);
            self.permute(buffer, depth + 1, hits);
            buffer.swap(depth, j);
        }
    }
}

/// Apply the result-ordering policy: descending length, then alphabetical
fn order_hits(hits: FxHashSet<Word>) -> Vec<Word> {
    let mut ordered: Vec<Word> = hits.into_iter().collect();
    ordered.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.text().cmp(b.text())));
    ordered
}
