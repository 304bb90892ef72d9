//! Anagram Finder
//!
//! Finds every dictionary word that can be formed from some subset of a
//! given multiset of letters, with wildcard support. The search permutes the
//! letters in place and prunes against a prefix-tree index, so exploration
//! is bounded by the dictionary's branching structure instead of the
//! factorial permutation space.
//!
//! # Quick Start
//!
//! ```rust
//! use anagram_finder::core::Word;
//! use anagram_finder::index::DictionaryIndex;
//! use anagram_finder::search::SearchEngine;
//!
//! let index = DictionaryIndex::build(
//!     ["CAT", "ACT", "AT"].iter().map(|w| Word::new(*w).unwrap()),
//! );
//! let engine = SearchEngine::new(&index);
//!
//! let hits = engine.search("TAC");
//! assert_eq!(hits[0].text(), "ACT");
//! ```

// Core domain types
pub mod core;

// Dictionary index
pub mod index;

// Permutation search
pub mod search;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
