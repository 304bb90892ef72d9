//! Word lists
//!
//! Provides the embedded dictionary compiled into the binary plus loading of
//! custom dictionaries from files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid_entries() {
        // Every entry must be non-empty uppercase A-Z
        for &word in WORDS {
            assert!(!word.is_empty(), "blank dictionary entry");
            assert!(
                word.bytes().all(|b| b.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn words_are_sorted_and_distinct() {
        for pair in WORDS.windows(2) {
            assert!(pair[0] < pair[1], "'{}' >= '{}'", pair[0], pair[1]);
        }
    }

    #[test]
    fn common_words_present() {
        for expected in ["A", "CAT", "DOG", "ANAGRAM", "STONE"] {
            assert!(WORDS.contains(&expected), "'{expected}' missing");
        }
    }
}
