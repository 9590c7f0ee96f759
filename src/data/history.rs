//! Session round history
//!
//! In-memory only; nothing outlives the process.

use super::Id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Won,
    Lost,
    /// Aborted by the player mid-round
    Killed,
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::Won => write!(f, "won"),
            RoundOutcome::Lost => write!(f, "lost"),
            RoundOutcome::Killed => write!(f, "aborted"),
        }
    }
}

/// One finished round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRecord {
    pub id: Id,
    pub word: String,
    pub outcome: RoundOutcome,
    pub misses: u32,
    pub finished_at: DateTime<Utc>,
}

impl RoundRecord {
    pub fn new(word: &str, outcome: RoundOutcome, misses: u32) -> Self {
        Self {
            id: Id::new(),
            word: word.to_string(),
            outcome,
            misses,
            finished_at: Utc::now(),
        }
    }
}

/// Every round finished this session, oldest first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionHistory {
    records: Vec<RoundRecord>,
}

impl SessionHistory {
    pub fn record(&mut self, record: RoundRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&RoundRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
