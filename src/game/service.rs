//! Game service: start, submit, finish, leaderboard

use super::leaderboard::{PlayerScore, WordScore, top_players, top_words};
use crate::core::{PuzzleSession, Rejection, SessionId, ValidationError};
use crate::engine::ledger::remaining_letters;
use crate::engine::{Accepted, Dictionary, Rules, WordJudge, possible_words};
use crate::puzzle;
use crate::store::{SessionStore, StoreError};
use log::{debug, info, warn};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

/// Longest accepted player name
const MAX_PLAYER_NAME_LEN: usize = 255;

/// Times a change is rebuilt from a fresh load after losing a commit race
const MAX_COMMIT_ATTEMPTS: usize = 5;

/// Failure of a game operation
#[derive(Debug, Error)]
pub enum GameError {
    /// The player's input was refused; the session is unchanged
    #[error(transparent)]
    Rejected(#[from] Rejection),
    #[error("session {0} not found")]
    SessionNotFound(SessionId),
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for GameError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::SessionNotFound(id),
            other => Self::Store(other),
        }
    }
}

impl From<ValidationError> for GameError {
    fn from(err: ValidationError) -> Self {
        Self::Rejected(err.into())
    }
}

/// Result of finishing a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishSummary {
    pub session: SessionId,
    pub final_score: u32,
    /// Puzzle letters never used, in puzzle order
    pub remaining: String,
    /// Dictionary words still formable from `remaining`
    pub possible_words: Vec<String>,
}

/// One lock per session, created on first use
#[derive(Debug, Default)]
struct SessionLocks {
    table: Mutex<FxHashMap<SessionId, Arc<Mutex<()>>>>,
}

impl SessionLocks {
    /// Run `f` while holding the lock for `id`
    fn with_lock<T>(&self, id: SessionId, f: impl FnOnce() -> T) -> T {
        let lock = self.acquire(id);
        let value = {
            let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
            f()
        };
        self.release(id, lock);
        value
    }

    fn acquire(&self, id: SessionId) -> Arc<Mutex<()>> {
        // The table and the per-session locks guard no data, so a poisoned lock is still usable
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(table.entry(id).or_default())
    }

    fn release(&self, id: SessionId, lock: Arc<Mutex<()>>) {
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        drop(lock);
        // Only the table still holds it: no caller is using or waiting on this session
        if table.get(&id).is_some_and(|entry| Arc::strong_count(entry) == 1) {
            table.remove(&id);
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.table.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

/// Runs games against a shared dictionary and a session store
pub struct GameService<S> {
    dictionary: Arc<Dictionary>,
    store: S,
    rules: Rules,
    locks: SessionLocks,
}

impl<S: SessionStore> GameService<S> {
    pub fn new(dictionary: Arc<Dictionary>, store: S, rules: Rules) -> Self {
        Self {
            dictionary,
            store,
            rules,
            locks: SessionLocks::default(),
        }
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Start a session with the given puzzle string
    ///
    /// # Errors
    ///
    /// Rejects an empty or overlong player name and an empty puzzle; fails if
    /// the store cannot be written.
    pub fn start_session(&self, player: &str, puzzle: &str) -> Result<PuzzleSession, GameError> {
        let player = player.trim();
        if player.is_empty() {
            return Err(ValidationError::Missing("player name").into());
        }
        if player.chars().count() > MAX_PLAYER_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "player name",
                max: MAX_PLAYER_NAME_LEN,
            }
            .into());
        }
        if puzzle.is_empty() {
            return Err(ValidationError::Missing("puzzle").into());
        }

        let session = self.store.create(player, puzzle)?;
        info!(
            "Started session {} for {} with puzzle '{}'",
            session.id(),
            session.player(),
            session.puzzle()
        );
        Ok(session)
    }

    /// Start a session with a freshly generated puzzle of `len` letters
    ///
    /// # Errors
    ///
    /// See [`GameService::start_session`].
    pub fn start_random_session<R: Rng>(
        &self,
        player: &str,
        len: usize,
        rng: &mut R,
    ) -> Result<PuzzleSession, GameError> {
        self.start_session(player, &puzzle::generate(rng, len))
    }

    /// Reload a session
    ///
    /// # Errors
    ///
    /// Fails with `GameError::SessionNotFound` for an unknown id.
    pub fn session(&self, id: SessionId) -> Result<PuzzleSession, GameError> {
        Ok(self.store.load(id)?)
    }

    /// Submit a word to a session
    ///
    /// The check and the update happen under the session's lock, so concurrent
    /// submissions to one session are applied one after another. Writers in
    /// other processes are caught by the store's revision check; the word is
    /// then judged again against the session they left behind.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Rejected` with the specific reason when the word is
    /// not accepted, or a store error.
    pub fn submit_word(&self, id: SessionId, word: &str) -> Result<Accepted, GameError> {
        self.locks
            .with_lock(id, || retry_on_conflict(id, || self.try_submit(id, word)))
    }

    fn try_submit(&self, id: SessionId, word: &str) -> Result<Accepted, GameError> {
        let mut session = self.store.load(id)?;
        let history = if self.rules.allow_repeat_words {
            Vec::new()
        } else {
            self.store.submissions_for(id)?
        };

        let judge = WordJudge::new(&self.dictionary, self.rules);
        let verdict = judge.judge(&session, word, &history).inspect_err(|rejection| {
            info!("Session {id}: rejected '{word}': {rejection}");
        })?;

        let (accepted, submission) = verdict.apply(&mut session);
        self.store.commit(&session, Some(&submission))?;
        info!(
            "Session {id}: accepted '{}' (+{}), total {}",
            accepted.word, accepted.points, accepted.total_score
        );
        Ok(accepted)
    }

    /// Finish a session and list the words its leftover letters still allow
    ///
    /// Finishing twice is harmless: the session stays completed and the same
    /// summary is returned.
    ///
    /// # Errors
    ///
    /// Fails if the session cannot be loaded or saved.
    pub fn finish_session(&self, id: SessionId) -> Result<FinishSummary, GameError> {
        self.locks
            .with_lock(id, || retry_on_conflict(id, || self.try_finish(id)))
    }

    fn try_finish(&self, id: SessionId) -> Result<FinishSummary, GameError> {
        let mut session = self.store.load(id)?;
        if session.mark_completed() {
            self.store.commit(&session, None)?;
            info!("Session {id} finished with {} points", session.score());
        } else {
            debug!("Session {id} was already finished");
        }

        let remaining = remaining_letters(&session);
        let possible_words = possible_words(&self.dictionary, &remaining);

        Ok(FinishSummary {
            session: id,
            final_score: session.score(),
            remaining,
            possible_words,
        })
    }

    /// Best-scoring distinct words across all sessions
    ///
    /// # Errors
    ///
    /// Fails if the store cannot be read.
    pub fn leaderboard(&self, limit: usize) -> Result<Vec<WordScore>, GameError> {
        Ok(top_words(&self.store.submissions()?, limit))
    }

    /// Highest-scoring sessions
    ///
    /// # Errors
    ///
    /// Fails if the store cannot be read.
    pub fn top_players(&self, limit: usize) -> Result<Vec<PlayerScore>, GameError> {
        Ok(top_players(&self.store.sessions()?, limit))
    }
}

/// Rerun `attempt` while its commit loses to another writer
fn retry_on_conflict<T>(
    id: SessionId,
    mut attempt: impl FnMut() -> Result<T, GameError>,
) -> Result<T, GameError> {
    let mut tries = 1;
    loop {
        match attempt() {
            Err(GameError::Store(StoreError::Conflict(_))) if tries < MAX_COMMIT_ATTEMPTS => {
                warn!("Session {id} changed underneath us, retrying ({tries}/{MAX_COMMIT_ATTEMPTS})");
                tries += 1;
            }
            result => return result,
        }
    }
}
