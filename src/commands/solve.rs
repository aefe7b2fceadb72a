//! Letter pool solving command
//!
//! Lists every dictionary word that can be spelled from an arbitrary pool.

use crate::engine::{Dictionary, possible_words};

/// Words formable from a letter pool
pub struct SolveResult {
    pub letters: String,
    /// Longest words first, alphabetical within a length
    pub words: Vec<String>,
}

impl SolveResult {
    /// Score of the best single word (its length)
    #[must_use]
    pub fn best_score(&self) -> usize {
        self.words.first().map_or(0, |w| w.chars().count())
    }
}

/// Enumerate the words formable from `letters`
#[must_use]
pub fn solve_letters(dictionary: &Dictionary, letters: &str) -> SolveResult {
    let letters = letters.trim().to_lowercase();
    let mut words = possible_words(dictionary, &letters);
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    SolveResult { letters, words }
}
