//! Session commands
//!
//! Start a session, submit a word, finish a session. Rejections are reported as
//! part of the result rather than as errors, so the caller can show the reason.

use crate::core::{PuzzleSession, Rejection, SessionId};
use crate::engine::Accepted;
use crate::engine::ledger::remaining_letters;
use crate::game::{FinishSummary, GameError, GameService};
use crate::puzzle::PUZZLE_LENGTH;
use crate::store::SessionStore;
use rand::Rng;

/// Configuration for starting a session
pub struct StartConfig {
    pub player: String,
    /// Use this puzzle instead of generating one
    pub puzzle: Option<String>,
    pub length: usize,
}

impl StartConfig {
    #[must_use]
    pub const fn new(player: String) -> Self {
        Self {
            player,
            puzzle: None,
            length: PUZZLE_LENGTH,
        }
    }
}

/// Result of submitting a word
pub struct SubmitResult {
    pub session: SessionId,
    pub word: String,
    pub outcome: Result<Accepted, Rejection>,
    /// Puzzle letters still unused after this submission
    pub remaining: String,
}

/// Start a new session
///
/// # Errors
///
/// Returns an error if the player name or puzzle is invalid, or the store fails.
pub fn start_game<S: SessionStore, R: Rng>(
    service: &GameService<S>,
    config: StartConfig,
    rng: &mut R,
) -> Result<PuzzleSession, GameError> {
    match config.puzzle {
        Some(puzzle) => service.start_session(&config.player, &puzzle),
        None => service.start_random_session(&config.player, config.length, rng),
    }
}

/// Submit a word to a session
///
/// # Errors
///
/// Returns an error only if the session cannot be loaded or saved; rejected
/// words are reported in [`SubmitResult::outcome`].
pub fn submit_word<S: SessionStore>(
    service: &GameService<S>,
    session: SessionId,
    word: &str,
) -> Result<SubmitResult, GameError> {
    let outcome = match service.submit_word(session, word) {
        Ok(accepted) => Ok(accepted),
        Err(GameError::Rejected(rejection)) => Err(rejection),
        Err(other) => return Err(other),
    };
    let remaining = remaining_letters(&service.session(session)?);

    Ok(SubmitResult {
        session,
        word: word.trim().to_lowercase(),
        outcome,
        remaining,
    })
}

/// Finish a session
///
/// # Errors
///
/// Returns an error if the session cannot be loaded or saved.
pub fn finish_game<S: SessionStore>(
    service: &GameService<S>,
    session: SessionId,
) -> Result<FinishSummary, GameError> {
    service.finish_session(session)
}
