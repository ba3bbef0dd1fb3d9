//! Daily Wordle
//!
//! A daily five-letter word puzzle. The target word is picked from the
//! calendar date, guesses are checked against a dictionary and scored
//! letter by letter, and each scored row is revealed one tile at a time
//! while input is held off.
//!
//! # Quick Start
//!
//! ```rust
//! use daily_wordle::config::GameConfig;
//! use daily_wordle::core::Word;
//! use daily_wordle::game::{GamePhase, Session};
//! use daily_wordle::wordlists::embedded_dictionary;
//!
//! let target = Word::new("crane").unwrap();
//! let mut session = Session::new(GameConfig::new(), target, embedded_dictionary());
//!
//! session.guess("crane");
//! assert_eq!(session.reveal_all(), GamePhase::Won);
//! println!("{}", session.share_text());
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Session configuration
pub mod config;

// Board, turn controller and session
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
