//! Dictionary of valid words
//!
//! Loaded once, then shared read-only by every session. A dictionary whose word
//! list failed to load stays usable in a degraded mode: every lookup misses.

use crate::core::LetterCounts;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use crate::wordlists::WORDS;
use log::{error, info};
use rustc_hash::FxHashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Failure to load a word list
#[derive(Debug, Clone, Error)]
pub enum DictionaryError {
    #[error("dictionary unavailable: cannot read {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },
}

/// Whether the dictionary holds a word list
#[derive(Debug, Clone)]
pub enum DictionaryStatus {
    Loaded { words: usize },
    Unavailable(DictionaryError),
}

/// An immutable set of lowercase words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    index: FxHashSet<String>,
    status: DictionaryStatus,
}

impl Dictionary {
    /// Build a dictionary from any sequence of words
    ///
    /// Words are trimmed and lower-cased; blanks and duplicates are dropped.
    ///
    /// # Examples
    /// ```
    /// use wordpool::engine::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["Lava", "val", "al"]);
    /// assert!(dictionary.is_valid_word("LAVA"));
    /// assert!(!dictionary.is_valid_word("lav"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        words.sort_unstable();
        words.dedup();

        let index = words.iter().cloned().collect();
        let status = DictionaryStatus::Loaded { words: words.len() };
        Self {
            words,
            index,
            status,
        }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(words_from_slice(WORDS))
    }

    /// Load a word list file, one word per line
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Unavailable` if the file cannot be read.
    pub fn try_load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let words = load_from_file(path).map_err(|source| DictionaryError::Unavailable {
            path: path.to_path_buf(),
            source: Arc::new(source),
        })?;
        let dictionary = Self::from_words(words);
        info!(
            "Loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Load a word list file, degrading to an empty dictionary on failure
    ///
    /// The failure is logged here, once, and stays observable through
    /// [`Dictionary::status`].
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        Self::try_load(path).unwrap_or_else(|err| {
            error!("{err}; every word will be rejected");
            Self::unavailable(err)
        })
    }

    /// An empty dictionary recording why it has no words
    #[must_use]
    pub fn unavailable(err: DictionaryError) -> Self {
        Self {
            words: Vec::new(),
            index: FxHashSet::default(),
            status: DictionaryStatus::Unavailable(err),
        }
    }

    /// Whether the word list loaded, and why not if it failed
    #[must_use]
    pub const fn status(&self) -> &DictionaryStatus {
        &self.status
    }

    /// `true` unless the word list failed to load
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self.status, DictionaryStatus::Loaded { .. })
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// `true` if the dictionary holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in alphabetical order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Exact, case-insensitive membership
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        if self.index.is_empty() {
            return false;
        }
        self.index.contains(word.to_lowercase().as_str())
    }

    /// `true` iff `word` can be spelled from `available`, respecting multiplicity
    ///
    /// Does not consult the word list itself; a degraded dictionary answers
    /// `false` for every word.
    #[must_use]
    pub fn can_form_from_letters(&self, word: &str, available: &LetterCounts) -> bool {
        self.is_available() && can_form(word, available)
    }
}

/// Multiset check shared by single lookups and the dictionary scan
pub(crate) fn can_form(word: &str, available: &LetterCounts) -> bool {
    // Cheap length guard before counting
    if word.chars().count() > available.total() as usize {
        return false;
    }
    available.covers(&LetterCounts::from_word(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::from_words(["lava", "val", "al", "apple", "pal", "Zebra", "  pal  ", ""])
    }

    #[test]
    fn from_words_normalizes_and_dedups() {
        let dictionary = sample();
        assert_eq!(dictionary.len(), 6);
        assert_eq!(
            dictionary.words(),
            &["al", "apple", "lava", "pal", "val", "zebra"]
        );
        assert!(dictionary.is_available());
    }

    #[test]
    fn is_valid_word_is_case_insensitive() {
        let dictionary = sample();
        assert!(dictionary.is_valid_word("apple"));
        assert!(dictionary.is_valid_word("APPLE"));
        assert!(dictionary.is_valid_word("zebra"));
        assert!(!dictionary.is_valid_word("appl"));
        assert!(!dictionary.is_valid_word("apples"));
        assert!(!dictionary.is_valid_word(""));
    }

    #[test]
    fn can_form_from_letters_counts_duplicates() {
        let dictionary = sample();
        let pool = LetterCounts::from_word("lava");
        assert!(dictionary.can_form_from_letters("lava", &pool));
        assert!(dictionary.can_form_from_letters("val", &pool));
        assert!(dictionary.can_form_from_letters("al", &pool));
        assert!(!dictionary.can_form_from_letters("valla", &pool));
        assert!(!dictionary.can_form_from_letters("pal", &pool));
    }

    #[test]
    fn can_form_from_letters_ignores_membership() {
        let dictionary = sample();
        let pool = LetterCounts::from_word("lava");
        assert!(dictionary.can_form_from_letters("ava", &pool));
    }

    #[test]
    fn missing_file_degrades() {
        let dictionary = Dictionary::load("no/such/dictionary.txt");

        assert!(!dictionary.is_available());
        assert!(dictionary.is_empty());
        assert!(matches!(
            dictionary.status(),
            DictionaryStatus::Unavailable(DictionaryError::Unavailable { .. })
        ));
        assert!(!dictionary.is_valid_word("apple"));
        assert!(!dictionary.can_form_from_letters("al", &LetterCounts::from_word("lava")));
    }

    #[test]
    fn try_load_reports_error() {
        let err = Dictionary::try_load("no/such/dictionary.txt").unwrap_err();
        assert!(err.to_string().contains("no/such/dictionary.txt"));
    }

    #[test]
    fn try_load_reads_file() {
        let path =
            std::env::temp_dir().join(format!("wordpool-dictionary-{}.txt", std::process::id()));
        std::fs::write(&path, "Lava\nval\nal\n").unwrap();

        let dictionary = Dictionary::try_load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.is_valid_word("lava"));
    }

    #[test]
    fn embedded_dictionary_loads() {
        let dictionary = Dictionary::embedded();
        assert!(dictionary.is_available());
        assert!(dictionary.is_valid_word("apple"));
        assert!(dictionary.is_valid_word("pal"));
    }
}
