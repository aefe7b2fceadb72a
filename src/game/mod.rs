//! Game service
//!
//! The operations a boundary layer calls: start a session, submit a word, finish
//! a session, read the leaderboard. Sessions are reloaded from the store for
//! every operation, and mutations of one session never interleave.

pub mod leaderboard;
mod service;

pub use leaderboard::{LEADERBOARD_SIZE, PlayerScore, WordScore};
pub use service::{FinishSummary, GameError, GameService};
