//! Landing leaderboard
//!
//! Kept in memory for the life of the process. Landings rank by score, then
//! by fuel left in the tank, then by the quicker touchdown.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::sim::{GameState, GameStatus};

/// Maximum number of landings kept
pub const MAX_HIGH_SCORES: usize = 10;

/// One successful landing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandingRecord {
    pub score: u32,
    /// Fuel left at touchdown
    pub fuel: f32,
    /// Episode duration (ms)
    pub time_ms: f32,
}

impl LandingRecord {
    /// Snapshot of a landed episode, `None` for any other outcome
    pub fn from_state(state: &GameState) -> Option<Self> {
        (state.status == GameStatus::Landed).then(|| Self {
            score: state.score,
            fuel: state.lander.fuel,
            time_ms: state.time_ms,
        })
    }

    /// `Less` when `self` belongs above `other` on the board
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.fuel.total_cmp(&self.fuel))
            .then_with(|| self.time_ms.total_cmp(&other.time_ms))
    }
}

/// Best landings of the session, best first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<LandingRecord>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished episode
    ///
    /// Returns the 1-indexed rank when the landing makes the board. Crashes
    /// never do; equal records keep the earlier one ahead.
    pub fn record(&mut self, state: &GameState) -> Option<usize> {
        let record = LandingRecord::from_state(state)?;
        let pos = self
            .entries
            .partition_point(|e| e.rank_cmp(&record) != Ordering::Greater);
        if pos >= MAX_HIGH_SCORES {
            return None;
        }

        self.entries.insert(pos, record);
        self.entries.truncate(MAX_HIGH_SCORES);
        log::info!(
            "Landing ranked #{}: score {}, fuel {:.1}",
            pos + 1,
            record.score,
            record.fuel
        );
        Some(pos + 1)
    }

    pub fn best(&self) -> Option<&LandingRecord> {
        self.entries.first()
    }

    pub fn top_score(&self) -> Option<u32> {
        self.best().map(|e| e.score)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
