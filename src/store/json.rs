//! JSON file session store
//!
//! The whole store lives in one JSON document that is read, modified and
//! rewritten on every change. Writers in one process are serialized by an
//! internal mutex, writers in separate processes by an exclusive lock on a
//! sibling `.lock` file. Session revisions catch a commit built on a load that
//! another process has since overtaken.

use super::{SessionStore, Snapshot, StoreError};
use crate::core::{PuzzleSession, SessionId, Submission};
use log::debug;
use std::fs;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Store backed by a JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Use `path` as the store file; it is created on first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Snapshot, StoreError> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Snapshot::default()),
            Err(source) => return Err(self.io_error(source)),
        };

        serde_json::from_reader(BufReader::new(file)).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        // Write a sibling file first so a crash never leaves a half-written store
        let tmp = self.path.with_extension("json.tmp");
        let file = fs::File::create(&tmp).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, snapshot).map_err(|source| {
            StoreError::Json {
                path: tmp.clone(),
                source,
            }
        })?;
        writer.flush().map_err(|e| self.io_error(e))?;
        drop(writer);

        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;
        debug!(
            "Wrote {} sessions, {} submissions to {}",
            snapshot.sessions.len(),
            snapshot.submissions.len(),
            self.path.display()
        );
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Sibling file other processes lock while they rewrite the store
    #[must_use]
    pub fn lock_path(&self) -> PathBuf {
        self.path.with_extension("json.lock")
    }

    /// Run `f` on the current snapshot and write back the result
    fn modify<T>(
        &self,
        f: impl FnOnce(&mut Snapshot) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let lock_file = fs::OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.lock_path())
            .map_err(|e| self.io_error(e))?;
        // Released when `lock_file` is dropped
        lock_file.lock().map_err(|e| self.io_error(e))?;

        let mut snapshot = self.read()?;
        let value = f(&mut snapshot)?;
        self.write(&snapshot)?;
        Ok(value)
    }

    fn view(&self) -> Result<Snapshot, StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        self.read()
    }
}

impl SessionStore for JsonFileStore {
    fn create(&self, player: &str, puzzle: &str) -> Result<PuzzleSession, StoreError> {
        self.modify(|snapshot| Ok(snapshot.create(player, puzzle)))
    }

    fn load(&self, id: SessionId) -> Result<PuzzleSession, StoreError> {
        self.view()?.load(id)
    }

    fn commit(
        &self,
        session: &PuzzleSession,
        submission: Option<&Submission>,
    ) -> Result<(), StoreError> {
        self.modify(|snapshot| snapshot.commit(session, submission))
    }

    fn sessions(&self) -> Result<Vec<PuzzleSession>, StoreError> {
        Ok(self.view()?.sessions)
    }

    fn submissions(&self) -> Result<Vec<Submission>, StoreError> {
        Ok(self.view()?.submissions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> JsonFileStore {
        let path = std::env::temp_dir().join(format!(
            "wordpool-store-{name}-{}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        JsonFileStore::new(path)
    }

    fn cleanup(store: &JsonFileStore) {
        let _ = fs::remove_file(store.path());
        let _ = fs::remove_file(store.lock_path());
    }

    #[test]
    fn second_handle_cannot_overwrite_newer_session() {
        let store = temp_store("race");
        let other = JsonFileStore::new(store.path().to_path_buf());
        let id = store.create("Ada", "pal").unwrap().id();

        // Both handles load the same fresh session, as two CLI runs would
        let mut first = store.load(id).unwrap();
        let mut second = other.load(id).unwrap();
        first.record_accepted(3, vec!['p', 'a', 'l']);
        second.record_accepted(3, vec!['l', 'a', 'p']);
        let pal = Submission {
            session: id,
            word: "pal".to_string(),
            points: 3,
        };
        let lap = Submission {
            session: id,
            word: "lap".to_string(),
            points: 3,
        };

        store.commit(&first, Some(&pal)).unwrap();
        assert!(matches!(
            other.commit(&second, Some(&lap)),
            Err(StoreError::Conflict(conflicted)) if conflicted == id
        ));

        let saved = other.load(id).unwrap();
        assert_eq!(saved.score(), 3);
        assert_eq!(saved.used_letters(), &['p', 'a', 'l']);
        let logged: u32 = other.submissions().unwrap().iter().map(|s| s.points).sum();
        assert_eq!(logged, saved.score());

        cleanup(&store);
    }

    #[test]
    fn services_on_separate_handles_never_double_spend() {
        use crate::core::Rejection;
        use crate::engine::{Dictionary, Rules};
        use crate::game::{GameError, GameService};
        use std::sync::Arc;

        let store = temp_store("services");
        let path = store.path().to_path_buf();
        let dictionary = Arc::new(Dictionary::from_words(["pal", "lap"]));
        let a = GameService::new(Arc::clone(&dictionary), store, Rules::default());
        let b = GameService::new(dictionary, JsonFileStore::new(path), Rules::default());
        let id = a.start_session("Ada", "pal").unwrap().id();

        let handles: Vec<_> = [(a, "pal"), (b, "lap")]
            .into_iter()
            .map(|(service, word)| {
                std::thread::spawn(move || (service.submit_word(id, word), service))
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let accepted = results.iter().filter(|(r, _)| r.is_ok()).count();
        assert_eq!(accepted, 1);
        assert!(results.iter().any(|(r, _)| matches!(
            r,
            Err(GameError::Rejected(Rejection::LettersUnavailable))
        )));

        let service = &results[0].1;
        let session = service.session(id).unwrap();
        assert_eq!(session.score(), 3);
        assert!(session.ledger_is_consistent());
        assert_eq!(service.store().submissions().unwrap().len(), 1);

        cleanup(service.store());
    }

    #[test]
    fn missing_file_is_empty_store() {
        let store = temp_store("missing");
        assert!(store.sessions().unwrap().is_empty());
        assert!(store.submissions().unwrap().is_empty());
    }

    #[test]
    fn sessions_persist_across_instances() {
        let store = temp_store("persist");
        let session = store.create("Ada", "apple").unwrap();
        let mut updated = session.clone();
        updated.record_accepted(3, vec!['p', 'a', 'l']);
        let submission = Submission {
            session: session.id(),
            word: "pal".to_string(),
            points: 3,
        };
        store.commit(&updated, Some(&submission)).unwrap();

        let reopened = JsonFileStore::new(store.path().to_path_buf());
        let loaded = reopened.load(session.id()).unwrap();
        assert_eq!(loaded.used_letters(), &['p', 'a', 'l']);
        assert_eq!(reopened.submissions().unwrap(), vec![submission]);

        cleanup(&store);
    }

    #[test]
    fn string_encoded_ledger_is_decoded_on_load() {
        let store = temp_store("encoded");
        fs::write(
            store.path(),
            r#"{
                "next_id": 1,
                "sessions": [{
                    "id": 1,
                    "player": "Ada",
                    "puzzle": "apple",
                    "used_letters": "[\"p\",\"l\"]",
                    "score": 2,
                    "completed": false
                }],
                "submissions": []
            }"#,
        )
        .unwrap();

        let loaded = store.load(SessionId(1)).unwrap();
        assert_eq!(loaded.used_letters(), &['p', 'l']);

        cleanup(&store);
    }

    #[test]
    fn malformed_ledger_loads_as_empty() {
        let store = temp_store("malformed");
        fs::write(
            store.path(),
            r#"{"sessions": [{"id": 4, "player": "Ada", "puzzle": "apple", "used_letters": {"x": 1}}]}"#,
        )
        .unwrap();

        let loaded = store.load(SessionId(4)).unwrap();
        assert!(loaded.used_letters().is_empty());
        // Ids continue after the highest stored session
        assert_eq!(store.create("Bob", "lava").unwrap().id(), SessionId(5));

        cleanup(&store);
    }

    #[test]
    fn corrupt_file_is_reported() {
        let store = temp_store("corrupt");
        fs::write(store.path(), "not json").unwrap();

        assert!(matches!(store.sessions(), Err(StoreError::Json { .. })));

        cleanup(&store);
    }
}
