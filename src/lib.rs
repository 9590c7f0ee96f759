//! Gallows: hangman in your terminal
//!
//! A single-session hangman game: a secret word is drawn from the word
//! list, you guess letters, and you try to solve the word before the
//! figure on the gallows is complete.
//!
//! # Game Mechanics
//!
//! - **Rounds**: each round draws a random secret word from the word list
//! - **Guesses**: a correct letter reveals every occurrence, a miss costs a try
//! - **Seven tries**: run out of tries and the round is lost
//! - **Score**: solved words add to the player's score and win streak
//!
//! # Architecture
//!
//! - `game` - Core game logic: the round state machine, commands, events
//! - `tui` - Terminal user interface with ratatui
//! - `data` - Player, words, letters, and session history
//! - `config` - Config file and command-line flags

pub mod config;
pub mod data;
pub mod game;
pub mod tui;

pub use data::*;
pub use game::Game;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("word list is empty")]
    EmptyWordList,

    #[error("invalid word {0:?}: words must be alphabetic")]
    InvalidWord(String),

    #[error("invalid game state: {0}")]
    InvalidState(String),
}
