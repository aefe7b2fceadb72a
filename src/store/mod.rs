//! Session persistence
//!
//! The engine never stores anything itself. A `SessionStore` holds sessions and
//! their submission log; the game service reloads a session before every
//! operation and commits the result afterwards.

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use crate::core::{PuzzleSession, SessionId, Submission};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure inside a store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session {0} not found")]
    NotFound(SessionId),
    #[error("cannot access store {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("store {} is not valid JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The stored session moved on since the caller loaded it
    #[error("session {0} was changed by another writer")]
    Conflict(SessionId),
    #[error("store lock poisoned")]
    Poisoned,
}

/// Durable home for sessions and submissions
pub trait SessionStore: Send + Sync {
    /// Persist a fresh session and return it with its assigned id
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the store cannot be written.
    fn create(&self, player: &str, puzzle: &str) -> Result<PuzzleSession, StoreError>;

    /// Reload a session by id
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown id.
    fn load(&self, id: SessionId) -> Result<PuzzleSession, StoreError>;

    /// Save a session together with the submission that changed it, if any
    ///
    /// Both are written or neither is. `session` must be exactly one revision
    /// ahead of the stored copy, so a change built on a stale load is refused
    /// instead of overwriting another writer's update.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the session was never created, or
    /// `StoreError::Conflict` if the stored copy is not its direct predecessor.
    fn commit(
        &self,
        session: &PuzzleSession,
        submission: Option<&Submission>,
    ) -> Result<(), StoreError>;

    /// Every stored session, in creation order
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the store cannot be read.
    fn sessions(&self) -> Result<Vec<PuzzleSession>, StoreError>;

    /// Every stored submission, in acceptance order
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the store cannot be read.
    fn submissions(&self) -> Result<Vec<Submission>, StoreError>;

    /// Submissions belonging to one session
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the store cannot be read.
    fn submissions_for(&self, id: SessionId) -> Result<Vec<Submission>, StoreError> {
        Ok(self
            .submissions()?
            .into_iter()
            .filter(|s| s.session == id)
            .collect())
    }
}

/// Everything a store holds, in its serialized shape
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct Snapshot {
    #[serde(default)]
    next_id: u64,
    #[serde(default)]
    sessions: Vec<PuzzleSession>,
    #[serde(default)]
    submissions: Vec<Submission>,
}

impl Snapshot {
    fn create(&mut self, player: &str, puzzle: &str) -> PuzzleSession {
        // Ids start at 1, and never go backwards even if next_id was lost
        let highest = self.sessions.iter().map(|s| s.id().0).max().unwrap_or(0);
        let id = SessionId(self.next_id.max(highest) + 1);
        self.next_id = id.0;

        let session = PuzzleSession::new(id, player, puzzle);
        self.sessions.push(session.clone());
        session
    }

    fn load(&self, id: SessionId) -> Result<PuzzleSession, StoreError> {
        self.sessions
            .iter()
            .find(|s| s.id() == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn commit(
        &mut self,
        session: &PuzzleSession,
        submission: Option<&Submission>,
    ) -> Result<(), StoreError> {
        let slot = self
            .sessions
            .iter_mut()
            .find(|s| s.id() == session.id())
            .ok_or(StoreError::NotFound(session.id()))?;
        if session.revision().checked_sub(1) != Some(slot.revision()) {
            return Err(StoreError::Conflict(session.id()));
        }
        *slot = session.clone();

        if let Some(submission) = submission {
            self.submissions.push(submission.clone());
        }
        Ok(())
    }
}
