//! Data structures for the game
//!
//! Defines the player, words, letters, and session history.

pub mod history;
pub mod player;
pub mod word;
pub mod wordlist;

pub use history::*;
pub use player::*;
pub use word::*;
pub use wordlist::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What the player is up to, as shown in the player bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStatus {
    NotPlaying,
    Playing,
    Winner,
    Loser,
}

impl PlayerStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            PlayerStatus::NotPlaying => "·",
            PlayerStatus::Playing => "▶",
            PlayerStatus::Winner => "★",
            PlayerStatus::Loser => "✗",
        }
    }
}

impl std::fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerStatus::NotPlaying => write!(f, "not playing"),
            PlayerStatus::Playing => write!(f, "playing"),
            PlayerStatus::Winner => write!(f, "winner"),
            PlayerStatus::Loser => write!(f, "loser"),
        }
    }
}

/// Kind of a message shown in the message panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    Info,
    Good,
    Bad,
    Alert,
}

impl MessageKind {
    pub fn symbol(&self) -> &'static str {
        match self {
            MessageKind::Info => "ℹ",
            MessageKind::Good => "✓",
            MessageKind::Bad => "✗",
            MessageKind::Alert => "▲",
        }
    }
}

/// A unique identifier wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Id(pub Uuid);

impl Id {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}
