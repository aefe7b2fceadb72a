//! Leaderboard command

use crate::game::{GameError, GameService, PlayerScore, WordScore};
use crate::store::SessionStore;

/// Which board to show
pub enum Leaderboard {
    Words(Vec<WordScore>),
    Players(Vec<PlayerScore>),
}

/// Read the top `limit` words, or the top sessions when `players` is set
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn leaderboard<S: SessionStore>(
    service: &GameService<S>,
    limit: usize,
    players: bool,
) -> Result<Leaderboard, GameError> {
    if players {
        service.top_players(limit).map(Leaderboard::Players)
    } else {
        service.leaderboard(limit).map(Leaderboard::Words)
    }
}
