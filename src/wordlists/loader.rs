//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded
//! dictionary.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// entries that fail validation.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened. This is fatal
/// to startup: there is no partial index.
///
/// # Examples
/// ```no_run
/// use anagram_finder::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use anagram_finder::wordlists::loader::words_from_slice;
/// use anagram_finder::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["CAT", "STONE", "A"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CAT");
        assert_eq!(words[1].text(), "STONE");
        assert_eq!(words[2].text(), "A");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["CAT", "", "C4T", "DOG"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CAT");
        assert_eq!(words[1].text(), "DOG");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_embedded_dictionary() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let result = load_from_file("no/such/dictionary.txt");
        assert!(result.is_err());
    }
}
