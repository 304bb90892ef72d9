//! One-shot find command
//!
//! Runs a single query against the engine and captures the outcome.

use crate::core::Word;
use crate::search::SearchEngine;
use std::time::{Duration, Instant};

/// Result of a single find invocation
pub struct FindResult {
    pub query: String,
    pub hits: Vec<Word>,
    pub duration: Duration,
}

/// Search for every word formable from `letters`
#[must_use]
pub fn find_words(engine: &SearchEngine, letters: &str) -> FindResult {
    let start = Instant::now();
    let hits = engine.search(letters);
    let duration = start.elapsed();

    FindResult {
        query: letters.to_uppercase(),
        hits,
        duration,
    }
}
