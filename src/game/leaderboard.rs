//! Leaderboard aggregation over stored records

use crate::core::{PuzzleSession, SessionId, Submission};
use rustc_hash::FxHashMap;

/// Default number of leaderboard rows
pub const LEADERBOARD_SIZE: usize = 10;

/// Best score achieved with a word across all sessions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordScore {
    pub word: String,
    pub score: u32,
}

/// A session's total score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScore {
    pub session: SessionId,
    pub player: String,
    pub score: u32,
    pub completed: bool,
}

/// Distinct words by their best score, highest first
///
/// Ties are broken alphabetically so the board is stable.
#[must_use]
pub fn top_words(submissions: &[Submission], limit: usize) -> Vec<WordScore> {
    let mut best: FxHashMap<&str, u32> = FxHashMap::default();
    for submission in submissions {
        let score = best.entry(submission.word.as_str()).or_insert(0);
        *score = (*score).max(submission.points);
    }

    let mut rows: Vec<WordScore> = best
        .into_iter()
        .map(|(word, score)| WordScore {
            word: word.to_string(),
            score,
        })
        .collect();
    rows.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
    rows.truncate(limit);
    rows
}

/// Sessions by total score, highest first; ties go to the earlier session
#[must_use]
pub fn top_players(sessions: &[PuzzleSession], limit: usize) -> Vec<PlayerScore> {
    let mut rows: Vec<PlayerScore> = sessions
        .iter()
        .map(|s| PlayerScore {
            session: s.id(),
            player: s.player().to_string(),
            score: s.score(),
            completed: s.is_completed(),
        })
        .collect();
    rows.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.session.cmp(&b.session)));
    rows.truncate(limit);
    rows
}
