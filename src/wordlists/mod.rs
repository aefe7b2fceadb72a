//! Word lists for the dictionary
//!
//! Provides the embedded default dictionary and loaders for custom word lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
