//! Benchmark command
//!
//! Measures search throughput over randomized letter racks. Queries run in
//! parallel against the shared read-only index; each query owns its hit set.

use crate::core::{ALPHABET, Word};
use crate::search::SearchEngine;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::prelude::{IndexedRandom, SliceRandom};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_queries: usize,
    pub total_hits: usize,
    pub min_hits: usize,
    pub max_hits: usize,
    pub average_hits: f64,
    pub duration: Duration,
    pub queries_per_second: f64,
}

/// Generate `count` random racks: a random dictionary word's letters,
/// shuffled, with `extra_letters` random letters mixed in.
#[must_use]
pub fn random_racks(words: &[Word], count: usize, extra_letters: usize) -> Vec<String> {
    let mut rng = rand::rng();
    let mut racks = Vec::with_capacity(count);

    for _ in 0..count {
        let mut letters: Vec<u8> = match words.choose(&mut rng) {
            Some(word) => word.as_bytes().to_vec(),
            None => Vec::new(),
        };
        for _ in 0..extra_letters {
            letters.push(ALPHABET[rng.random_range(0..ALPHABET.len())]);
        }
        letters.shuffle(&mut rng);
        racks.push(String::from_utf8_lossy(&letters).into_owned());
    }

    racks
}

/// Run every query and aggregate hit-count statistics
#[must_use]
pub fn run_benchmark(engine: &SearchEngine, queries: &[String]) -> BenchmarkResult {
    let pb = ProgressBar::new(queries.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let hit_counts: Vec<usize> = queries
        .par_iter()
        .map(|query| {
            let hits = engine.search(query).len();
            pb.inc(1);
            hits
        })
        .collect();

    let duration = start.elapsed();
    pb.finish_and_clear();

    let total_queries = queries.len();
    let total_hits: usize = hit_counts.iter().sum();

    BenchmarkResult {
        total_queries,
        total_hits,
        min_hits: hit_counts.iter().copied().min().unwrap_or(0),
        max_hits: hit_counts.iter().copied().max().unwrap_or(0),
        average_hits: if total_queries == 0 {
            0.0
        } else {
            total_hits as f64 / total_queries as f64
        },
        duration,
        queries_per_second: total_queries as f64 / duration.as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DictionaryIndex;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn random_racks_have_expected_shape() {
        let words = words_from_slice(&WORDS[..50]);
        let racks = random_racks(&words, 10, 2);

        assert_eq!(racks.len(), 10);
        for rack in &racks {
            assert!(rack.len() >= 3); // Shortest word is 1 letter + 2 extra
            assert!(rack.bytes().all(|b| b.is_ascii_uppercase()));
        }
    }

    #[test]
    fn random_racks_from_empty_word_list() {
        let racks = random_racks(&[], 3, 2);

        assert_eq!(racks.len(), 3);
        for rack in &racks {
            assert_eq!(rack.len(), 2); // Only the extra letters
        }
    }

    #[test]
    fn benchmark_runs() {
        let words = words_from_slice(&WORDS[..200]);
        let index = DictionaryIndex::build(words.iter().cloned());
        let engine = SearchEngine::new(&index);

        let racks = random_racks(&words, 20, 1);
        let result = run_benchmark(&engine, &racks);

        assert_eq!(result.total_queries, 20);
        // Every rack embeds a real word, so every query hits at least once
        assert!(result.min_hits >= 1);
        assert!(result.queries_per_second > 0.0);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let words = words_from_slice(&WORDS[..200]);
        let index = DictionaryIndex::build(words.iter().cloned());
        let engine = SearchEngine::new(&index);

        let racks = random_racks(&words, 10, 0);
        let result = run_benchmark(&engine, &racks);

        assert!(result.average_hits >= result.min_hits as f64);
        assert!(result.average_hits <= result.max_hits as f64);
        assert!(result.total_hits >= result.max_hits);
    }

    #[test]
    fn benchmark_empty_query_list() {
        let words = words_from_slice(&WORDS[..10]);
        let index = DictionaryIndex::build(words.iter().cloned());
        let engine = SearchEngine::new(&index);

        let result = run_benchmark(&engine, &[]);

        assert_eq!(result.total_queries, 0);
        assert_eq!(result.total_hits, 0);
        assert_eq!(result.min_hits, 0);
        assert_eq!(result.max_hits, 0);
    }
}
