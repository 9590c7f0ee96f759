//! Player state and session progression

use super::PlayerStatus;
use serde::{Deserialize, Serialize};

/// The player: created once at startup, mutated by round outcomes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub score: u32,
    pub status: PlayerStatus,

    // Session tallies
    pub rounds_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub current_streak: u32,
    pub best_streak: u32,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            score: 0,
            status: PlayerStatus::NotPlaying,
            rounds_played: 0,
            wins: 0,
            losses: 0,
            current_streak: 0,
            best_streak: 0,
        }
    }

    /// A solved word: score up, streak up
    pub fn win(&mut self) {
        self.score += 1;
        self.status = PlayerStatus::Winner;
        self.rounds_played += 1;
        self.wins += 1;
        self.current_streak += 1;
        self.best_streak = self.best_streak.max(self.current_streak);
    }

    /// Out of tries: streak broken
    pub fn lose(&mut self) {
        self.status = PlayerStatus::Loser;
        self.rounds_played += 1;
        self.losses += 1;
        self.current_streak = 0;
    }

    /// Round aborted: counts for neither side
    pub fn abandon(&mut self) {
        self.status = PlayerStatus::NotPlaying;
        self.rounds_played += 1;
    }

    pub fn start_playing(&mut self) {
        self.status = PlayerStatus::Playing;
    }

    pub fn rename(&mut self, name: &str) {
        self.name = name.to_string();
    }
}
