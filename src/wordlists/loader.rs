//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Every entry is trimmed and lower-cased; blank lines and entries containing
//! anything other than letters are skipped.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordpool::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Normalize an embedded string slice into owned words
///
/// # Examples
/// ```
/// use wordpool::wordlists::loader::words_from_slice;
/// use wordpool::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a, I: IntoIterator<Item = &'a str>>(lines: I) -> Vec<String> {
    lines.into_iter().filter_map(normalize).collect()
}

fn normalize(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || !trimmed.chars().all(char::is_alphabetic) {
        return None;
    }
    Some(trimmed.to_lowercase())
}
