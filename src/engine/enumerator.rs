//! Word enumeration
//!
//! Scans the whole dictionary for every word that can be spelled from a pool of
//! letters. This is the one expensive operation in the engine, so the scan runs
//! in parallel and never touches the word list source.

use super::dictionary::{Dictionary, can_form};
use crate::core::LetterCounts;
use log::debug;
use rayon::prelude::*;

/// Every dictionary word formable from `letters`
///
/// The letter pool is lower-cased first. Results follow dictionary order
/// (alphabetical); an unavailable dictionary yields nothing.
///
/// # Examples
/// ```
/// use wordpool::engine::{Dictionary, possible_words};
///
/// let dictionary = Dictionary::from_words(["lava", "val", "al", "pal"]);
/// assert_eq!(possible_words(&dictionary, "lava"), vec!["al", "lava", "val"]);
/// ```
#[must_use]
pub fn possible_words(dictionary: &Dictionary, letters: &str) -> Vec<String> {
    if !dictionary.is_available() {
        return Vec::new();
    }

    let pool = LetterCounts::from_word(letters);
    let found: Vec<String> = dictionary
        .words()
        .par_iter()
        .filter(|word| can_form(word, &pool))
        .cloned()
        .collect();

    debug!(
        "{} of {} words formable from '{pool}'",
        found.len(),
        dictionary.len()
    );
    found
}
