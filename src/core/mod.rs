//! Core domain types for the word game
//!
//! Letter multisets, sessions and rejection reasons. Everything here is plain
//! data with no I/O; the engine and the stores build on it.

mod error;
mod letters;
mod session;

pub use error::{Rejection, ValidationError};
pub use letters::LetterCounts;
pub use session::{PuzzleSession, SessionId, Submission, decode_used_letters};
