//! Command implementations

pub mod benchmark;
pub mod leaderboard;
pub mod session;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use leaderboard::{Leaderboard, leaderboard};
pub use session::{StartConfig, SubmitResult, finish_game, start_game, submit_word};
pub use solve::{SolveResult, solve_letters};
