//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_finish_summary, print_leaderboard, print_session_started,
    print_solve_result, print_submit_result,
};
