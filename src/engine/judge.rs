//! Word judge
//!
//! Decides whether a submission is accepted against a session and what it is
//! worth. Judging is pure; applying a verdict is a separate, all-or-nothing step.

use super::ledger::{append_used, can_use_word};
use super::{Dictionary, Rules};
use crate::core::{PuzzleSession, Rejection, Submission, ValidationError};
use log::{debug, info};

/// An accepted submission, ready to be applied to its session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    word: String,
    points: u32,
    used_letters: Vec<char>,
}

impl Verdict {
    /// The accepted word, lower-cased
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Apply score, ledger and submission record in one step
    ///
    /// Callers persist the session and the returned submission together.
    pub fn apply(self, session: &mut PuzzleSession) -> (Accepted, Submission) {
        session.record_accepted(self.points, self.used_letters);
        let accepted = Accepted {
            word: self.word.clone(),
            points: self.points,
            total_score: session.score(),
        };
        let submission = Submission {
            session: session.id(),
            word: self.word,
            points: self.points,
        };
        (accepted, submission)
    }
}

/// Outcome reported to the player for an accepted word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub word: String,
    pub points: u32,
    pub total_score: u32,
}

/// Judges submissions against a shared dictionary
#[derive(Debug, Clone, Copy)]
pub struct WordJudge<'a> {
    dictionary: &'a Dictionary,
    rules: Rules,
}

impl<'a> WordJudge<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, rules: Rules) -> Self {
        Self { dictionary, rules }
    }

    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Judge `word` against `session`
    ///
    /// `history` is the session's earlier submissions; it is only consulted when
    /// repeated words are disallowed.
    ///
    /// # Errors
    ///
    /// Returns the specific `Rejection` for the first check that fails, in this
    /// order: session completed, word shape, dictionary membership, repeated
    /// word, letter availability.
    pub fn judge(
        &self,
        session: &PuzzleSession,
        word: &str,
        history: &[Submission],
    ) -> Result<Verdict, Rejection> {
        if self.rules.reject_after_finish && session.is_completed() {
            return Err(Rejection::SessionCompleted);
        }

        let word = word.trim().to_lowercase();
        self.validate(&word)?;

        if !self.dictionary.is_valid_word(&word) {
            info!("Word not found: {word}");
            return Err(Rejection::InvalidWord);
        }

        if !self.rules.allow_repeat_words
            && history
                .iter()
                .any(|s| s.session == session.id() && s.word == word)
        {
            return Err(Rejection::AlreadySubmitted(word));
        }

        if !can_use_word(&word, session) {
            return Err(Rejection::LettersUnavailable);
        }

        let points = word.chars().count() as u32;
        let used_letters = append_used(&word, session);
        debug!("Accepted '{word}' for {points} points in session {}", session.id());

        Ok(Verdict {
            word,
            points,
            used_letters,
        })
    }

    /// Judge and, on acceptance, apply to `session`
    ///
    /// # Errors
    ///
    /// Returns the `Rejection` from [`WordJudge::judge`]; the session is left
    /// untouched in that case.
    pub fn submit(
        &self,
        session: &mut PuzzleSession,
        word: &str,
        history: &[Submission],
    ) -> Result<(Accepted, Submission), Rejection> {
        let verdict = self.judge(session, word, history)?;
        Ok(verdict.apply(session))
    }

    fn validate(&self, word: &str) -> Result<(), ValidationError> {
        if word.is_empty() {
            return Err(ValidationError::Missing("word"));
        }

        let len = word.chars().count();
        if len < self.rules.min_word_len || len > self.rules.max_word_len {
            return Err(ValidationError::InvalidLength {
                len,
                min: self.rules.min_word_len,
                max: self.rules.max_word_len,
            });
        }

        if !word.chars().all(char::is_alphabetic) {
            return Err(ValidationError::InvalidCharacters);
        }

        Ok(())
    }
}
