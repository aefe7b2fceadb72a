//! Wordpool
//!
//! A word game over a pool of letters: players spell dictionary words, each
//! puzzle letter can be used once, and every accepted word scores its length.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use wordpool::engine::{Dictionary, Rules};
//! use wordpool::game::GameService;
//! use wordpool::store::MemoryStore;
//!
//! let dictionary = Arc::new(Dictionary::from_words(["pal", "apple"]));
//! let service = GameService::new(dictionary, MemoryStore::new(), Rules::default());
//!
//! let session = service.start_session("Ada", "apple").unwrap();
//! let accepted = service.submit_word(session.id(), "pal").unwrap();
//! assert_eq!(accepted.total_score, 3);
//!
//! let summary = service.finish_session(session.id()).unwrap();
//! assert_eq!(summary.remaining, "pe");
//! ```

// Core domain types
pub mod core;

// Dictionary, ledger, judge, enumerator
pub mod engine;

// Game orchestration and leaderboards
pub mod game;

// Puzzle generation
pub mod puzzle;

// Session persistence
pub mod store;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
