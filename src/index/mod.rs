//! Dictionary index
//!
//! Prefix-searchable word index built once at startup, read-only afterward.

mod trie;

pub use trie::{DictionaryIndex, Probe};
