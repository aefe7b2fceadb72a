//! Letter ledger
//!
//! Pure functions over a session's two multisets: the fixed puzzle letters and
//! the accumulated used letters. Nothing here mutates the session.

use crate::core::{LetterCounts, PuzzleSession};
use log::debug;

/// Puzzle letters minus used letters, floored at zero per character
///
/// The floor only matters if the ledger was corrupted; a consistent session
/// never uses a letter it did not have.
#[must_use]
pub fn available_letters(session: &PuzzleSession) -> LetterCounts {
    let puzzle: LetterCounts = session.puzzle_letters().collect();
    let used: LetterCounts = session.used_letters().iter().copied().collect();
    puzzle.saturating_sub(&used)
}

/// `true` iff `word` can be built from the session's available letters
///
/// # Examples
/// ```
/// use wordpool::core::{PuzzleSession, SessionId};
/// use wordpool::engine::ledger::can_use_word;
///
/// let session = PuzzleSession::new(SessionId(1), "Ada", "apple").with_used_letters(['a', 'p', 'p']);
/// assert!(can_use_word("le", &session));
/// assert!(!can_use_word("apple", &session));
/// ```
#[must_use]
pub fn can_use_word(word: &str, session: &PuzzleSession) -> bool {
    let available = available_letters(session);
    let needed = LetterCounts::from_word(word);

    debug!(
        "Session {}: puzzle '{}', used '{}', available '{available}', trying '{}'",
        session.id(),
        session.puzzle(),
        session.used_letters().iter().collect::<String>(),
        word.to_lowercase()
    );

    match available.first_shortfall(&needed) {
        Some(missing) => {
            debug!("Cannot form '{}': missing letter '{missing}'", word.to_lowercase());
            false
        }
        None => true,
    }
}

/// The used-letter ledger after accepting `word`
///
/// Prior letters keep their order; the word's lower-cased letters follow in
/// left-to-right order. The session itself is left untouched.
#[must_use]
pub fn append_used(word: &str, session: &PuzzleSession) -> Vec<char> {
    session
        .used_letters()
        .iter()
        .copied()
        .chain(word.chars().flat_map(char::to_lowercase))
        .collect()
}

/// Puzzle letters left over after removing one occurrence per used letter
///
/// Survivors keep their original puzzle order. Used letters with no remaining
/// occurrence in the puzzle are ignored.
#[must_use]
pub fn remaining_letters(session: &PuzzleSession) -> String {
    session
        .puzzle_letters()
        .zip(consumed_positions(session))
        .filter_map(|(ch, consumed)| (!consumed).then_some(ch))
        .collect()
}

/// For each puzzle position, whether a used letter has claimed it
///
/// Each used letter claims the first unclaimed position holding that letter.
#[must_use]
pub fn consumed_positions(session: &PuzzleSession) -> Vec<bool> {
    let puzzle: Vec<char> = session.puzzle_letters().collect();
    let mut consumed = vec![false; puzzle.len()];

    for &used in session.used_letters() {
        if let Some(i) = (0..puzzle.len()).find(|&i| !consumed[i] && puzzle[i] == used) {
            consumed[i] = true;
        }
    }

    consumed
}
