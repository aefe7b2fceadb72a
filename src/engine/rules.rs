//! Game rules
//!
//! Tunable limits applied by the judge before any dictionary or letter lookup.

/// Longest word a default 14-letter puzzle can produce
pub const MAX_WORD_LEN: usize = 14;
/// Shortest word worth submitting
pub const MIN_WORD_LEN: usize = 2;

/// Configuration for judging submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub min_word_len: usize,
    pub max_word_len: usize,
    /// Reject submissions once a session has been finished
    pub reject_after_finish: bool,
    /// Accept a word already accepted earlier in the same session
    pub allow_repeat_words: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            min_word_len: MIN_WORD_LEN,
            max_word_len: MAX_WORD_LEN,
            reject_after_finish: true,
            allow_repeat_words: true,
        }
    }
}

impl Rules {
    /// Default rules with custom word length bounds
    #[must_use]
    pub fn with_lengths(min_word_len: usize, max_word_len: usize) -> Self {
        Self {
            min_word_len,
            max_word_len,
            ..Self::default()
        }
    }
}
