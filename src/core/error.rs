//! Rejection reasons for word submissions

use thiserror::Error;

/// Input that fails basic shape checks before any dictionary or letter lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("word must be between {min} and {max} letters, got {len}")]
    InvalidLength { len: usize, min: usize, max: usize },
    #[error("word must contain only letters")]
    InvalidCharacters,
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Why a submission was not accepted
///
/// Every rejected submission carries exactly one of these, so callers can report
/// the specific reason to the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Word is not in the dictionary (or the dictionary failed to load)
    #[error("Invalid English word.")]
    InvalidWord,
    /// Word needs letters the puzzle no longer has
    #[error("Letters not available or reused.")]
    LettersUnavailable,
    #[error("game is already completed")]
    SessionCompleted,
    #[error("word '{0}' was already submitted")]
    AlreadySubmitted(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_messages_are_specific() {
        assert_eq!(Rejection::InvalidWord.to_string(), "Invalid English word.");
        assert_eq!(
            Rejection::LettersUnavailable.to_string(),
            "Letters not available or reused."
        );
    }

    #[test]
    fn validation_message_passes_through() {
        let rejection = Rejection::from(ValidationError::InvalidLength {
            len: 1,
            min: 2,
            max: 14,
        });
        assert_eq!(
            rejection.to_string(),
            "word must be between 2 and 14 letters, got 1"
        );
        assert_eq!(
            Rejection::from(ValidationError::Missing("player name")).to_string(),
            "player name is required"
        );
    }
}
