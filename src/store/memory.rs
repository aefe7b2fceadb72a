//! In-process session store

use super::{SessionStore, Snapshot, StoreError};
use crate::core::{PuzzleSession, SessionId, Submission};
use std::sync::RwLock;

/// Sessions held in memory for the life of the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<Snapshot>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn create(&self, player: &str, puzzle: &str) -> Result<PuzzleSession, StoreError> {
        let mut state = self.state.write().map_err(|_| StoreError::Poisoned)?;
        Ok(state.create(player, puzzle))
    }

    fn load(&self, id: SessionId) -> Result<PuzzleSession, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::Poisoned)?;
        state.load(id)
    }

    fn commit(
        &self,
        session: &PuzzleSession,
        submission: Option<&Submission>,
    ) -> Result<(), StoreError> {
        let mut state = self.state.write().map_err(|_| StoreError::Poisoned)?;
        state.commit(session, submission)
    }

    fn sessions(&self) -> Result<Vec<PuzzleSession>, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::Poisoned)?;
        Ok(state.sessions.clone())
    }

    fn submissions(&self) -> Result<Vec<Submission>, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::Poisoned)?;
        Ok(state.submissions.clone())
    }
}
