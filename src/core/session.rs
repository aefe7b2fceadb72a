//! Puzzle sessions and their submission log
//!
//! A session is one player's game: a fixed puzzle string, the ordered ledger of
//! letters consumed so far, and the running score.

use super::LetterCounts;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier assigned to a session by its store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// One player's game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleSession {
    id: SessionId,
    player: String,
    puzzle: String,
    #[serde(default, deserialize_with = "deserialize_used_letters")]
    used_letters: Vec<char>,
    #[serde(default)]
    score: u32,
    #[serde(default)]
    completed: bool,
    /// Bumped by every change; a store refuses a commit built on a stale copy
    #[serde(default)]
    revision: u64,
}

impl PuzzleSession {
    /// Create a fresh session: nothing used, zero score, not completed
    ///
    /// The puzzle string is stored exactly as given.
    #[must_use]
    pub fn new(id: SessionId, player: impl Into<String>, puzzle: impl Into<String>) -> Self {
        Self {
            id,
            player: player.into(),
            puzzle: puzzle.into(),
            used_letters: Vec::new(),
            score: 0,
            completed: false,
            revision: 0,
        }
    }

    /// Replace the used-letter ledger, e.g. when restoring a saved game
    ///
    /// Letters are lower-cased, matching [`PuzzleSession::puzzle_letters`].
    #[must_use]
    pub fn with_used_letters<I: IntoIterator<Item = char>>(mut self, letters: I) -> Self {
        self.used_letters = letters.into_iter().flat_map(char::to_lowercase).collect();
        self
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    /// The puzzle string as it was given at creation
    #[must_use]
    pub fn puzzle(&self) -> &str {
        &self.puzzle
    }

    /// Puzzle characters, lower-cased, in their original order
    pub fn puzzle_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.puzzle.chars().flat_map(char::to_lowercase)
    }

    /// Letters consumed by accepted words, in acceptance order
    #[must_use]
    pub fn used_letters(&self) -> &[char] {
        &self.used_letters
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Number of changes applied since the session was created
    #[inline]
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// `true` iff every used letter was available in the puzzle
    #[must_use]
    pub fn ledger_is_consistent(&self) -> bool {
        let puzzle: LetterCounts = self.puzzle_letters().collect();
        let used: LetterCounts = self.used_letters.iter().copied().collect();
        used.is_subset_of(&puzzle)
    }

    /// Apply an accepted word's effects together
    pub(crate) fn record_accepted(&mut self, points: u32, used_letters: Vec<char>) {
        self.score += points;
        self.used_letters = used_letters;
        self.revision += 1;
    }

    /// Mark the session completed; returns `false` if it already was
    pub(crate) fn mark_completed(&mut self) -> bool {
        if self.completed {
            return false;
        }
        self.completed = true;
        self.revision += 1;
        true
    }
}

/// An accepted word, as logged against its session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub session: SessionId,
    pub word: String,
    pub points: u32,
}

/// Decode a stored used-letter ledger into its canonical form
///
/// Accepts a JSON array of single-character strings, a JSON string holding such
/// an array, or `null`. Array elements longer than one character contribute all
/// of their characters, and every letter is lower-cased. Any other shape is
/// malformed and decodes as an empty ledger.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use wordpool::core::decode_used_letters;
///
/// assert_eq!(decode_used_letters(&json!(["p", "l"])), vec!['p', 'l']);
/// assert_eq!(decode_used_letters(&json!("[\"a\"]")), vec!['a']);
/// assert!(decode_used_letters(&json!(42)).is_empty());
/// ```
#[must_use]
pub fn decode_used_letters(raw: &Value) -> Vec<char> {
    let decoded = match raw {
        Value::Null => Some(Vec::new()),
        Value::Array(items) => letters_from_array(items),
        Value::String(encoded) if encoded.trim().is_empty() => Some(Vec::new()),
        Value::String(encoded) => match serde_json::from_str::<Value>(encoded) {
            Ok(Value::Array(items)) => letters_from_array(&items),
            Ok(Value::Null) => Some(Vec::new()),
            _ => None,
        },
        _ => None,
    };

    decoded.unwrap_or_else(|| {
        warn!("Malformed used-letter ledger {raw}, treating as empty");
        Vec::new()
    })
}

fn letters_from_array(items: &[Value]) -> Option<Vec<char>> {
    let mut letters = Vec::with_capacity(items.len());
    for item in items {
        letters.extend(item.as_str()?.chars().flat_map(char::to_lowercase));
    }
    Some(letters)
}

fn deserialize_used_letters<'de, D>(deserializer: D) -> Result<Vec<char>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(decode_used_letters(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_session_is_fresh() {
        let session = PuzzleSession::new(SessionId(1), "Ada", "apple");
        assert_eq!(session.player(), "Ada");
        assert_eq!(session.puzzle(), "apple");
        assert!(session.used_letters().is_empty());
        assert_eq!(session.score(), 0);
        assert!(!session.is_completed());
    }

    #[test]
    fn puzzle_letters_are_lowercased() {
        let session = PuzzleSession::new(SessionId(1), "Ada", "ApPLe");
        let letters: String = session.puzzle_letters().collect();
        assert_eq!(letters, "apple");
        assert_eq!(session.puzzle(), "ApPLe");
    }

    #[test]
    fn record_accepted_updates_score_and_ledger() {
        let mut session = PuzzleSession::new(SessionId(1), "Ada", "apple");
        session.record_accepted(3, vec!['p', 'a', 'l']);
        assert_eq!(session.score(), 3);
        assert_eq!(session.used_letters(), &['p', 'a', 'l']);
    }

    #[test]
    fn mark_completed_only_once() {
        let mut session = PuzzleSession::new(SessionId(1), "Ada", "apple");
        assert!(session.mark_completed());
        assert!(!session.mark_completed());
        assert!(session.is_completed());
    }

    #[test]
    fn ledger_consistency() {
        let session = PuzzleSession::new(SessionId(1), "Ada", "apple").with_used_letters(['p', 'p']);
        assert!(session.ledger_is_consistent());

        let corrupt =
            PuzzleSession::new(SessionId(1), "Ada", "apple").with_used_letters(['p', 'p', 'p']);
        assert!(!corrupt.ledger_is_consistent());
    }

    #[test]
    fn session_id_parses_and_displays() {
        let id: SessionId = " 42 ".parse().unwrap();
        assert_eq!(id, SessionId(42));
        assert_eq!(id.to_string(), "42");
        assert!("abc".parse::<SessionId>().is_err());
    }

    #[test]
    fn decode_native_array() {
        assert_eq!(decode_used_letters(&json!(["a", "p", "p"])), vec!['a', 'p', 'p']);
    }

    #[test]
    fn decode_encoded_string() {
        assert_eq!(decode_used_letters(&json!("[\"p\",\"l\"]")), vec!['p', 'l']);
        assert!(decode_used_letters(&json!("[]")).is_empty());
        assert!(decode_used_letters(&json!("")).is_empty());
    }

    #[test]
    fn decode_lowercases_letters() {
        assert_eq!(decode_used_letters(&json!(["A", "P", "p"])), vec!['a', 'p', 'p']);
        assert_eq!(decode_used_letters(&json!("[\"L\"]")), vec!['l']);
    }

    #[test]
    fn uppercase_stored_ledger_still_consumes_letters() {
        let raw = json!({
            "id": 2,
            "player": "Ada",
            "puzzle": "apple",
            "used_letters": ["A", "P", "P"]
        });
        let session: PuzzleSession = serde_json::from_value(raw).unwrap();

        assert_eq!(session.used_letters(), &['a', 'p', 'p']);
        assert!(session.ledger_is_consistent());
        assert_eq!(crate::engine::ledger::remaining_letters(&session), "le");
        assert!(!crate::engine::ledger::can_use_word("apple", &session));
    }

    #[test]
    fn with_used_letters_lowercases() {
        let session = PuzzleSession::new(SessionId(1), "Ada", "apple").with_used_letters(['P', 'a']);
        assert_eq!(session.used_letters(), &['p', 'a']);
    }

    #[test]
    fn changes_bump_revision() {
        let mut session = PuzzleSession::new(SessionId(1), "Ada", "apple");
        assert_eq!(session.revision(), 0);
        session.record_accepted(3, vec!['p', 'a', 'l']);
        assert_eq!(session.revision(), 1);
        session.mark_completed();
        assert_eq!(session.revision(), 2);
        session.mark_completed();
        assert_eq!(session.revision(), 2);
    }

    #[test]
    fn decode_flattens_multi_char_elements() {
        assert_eq!(decode_used_letters(&json!(["pa", "l"])), vec!['p', 'a', 'l']);
    }

    #[test]
    fn decode_malformed_is_empty() {
        assert!(decode_used_letters(&json!("not json")).is_empty());
        assert!(decode_used_letters(&json!("{\"a\":1}")).is_empty());
        assert!(decode_used_letters(&json!([1, 2])).is_empty());
        assert!(decode_used_letters(&json!({"a": 1})).is_empty());
        assert!(decode_used_letters(&json!(7)).is_empty());
    }

    #[test]
    fn decode_null_is_empty() {
        assert!(decode_used_letters(&Value::Null).is_empty());
    }

    #[test]
    fn session_round_trips_through_json() {
        let session = PuzzleSession::new(SessionId(7), "Ada", "apple").with_used_letters(['a']);
        let text = serde_json::to_string(&session).unwrap();
        let back: PuzzleSession = serde_json::from_str(&text).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn session_loads_string_encoded_ledger() {
        let raw = json!({
            "id": 3,
            "player": "Ada",
            "puzzle": "apple",
            "used_letters": "[\"p\",\"l\"]",
            "score": 2,
            "completed": false
        });
        let session: PuzzleSession = serde_json::from_value(raw).unwrap();
        assert_eq!(session.used_letters(), &['p', 'l']);
        assert_eq!(session.score(), 2);
    }

    #[test]
    fn session_loads_with_missing_ledger() {
        let raw = json!({ "id": 3, "player": "Ada", "puzzle": "apple" });
        let session: PuzzleSession = serde_json::from_value(raw).unwrap();
        assert!(session.used_letters().is_empty());
        assert_eq!(session.score(), 0);
        assert!(!session.is_completed());
    }
}
