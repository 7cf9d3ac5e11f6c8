//! In-memory row table shared by the stores.

use serde::{Deserialize, Serialize};

use graze_core::enums::GameMode;

use crate::{LeaderboardEntry, ScoreSubmission};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    next_id: u64,
    rows: Vec<LeaderboardEntry>,
}

impl Table {
    /// Overwrite the (name, mode) row or append a new one.
    pub fn upsert(&mut self, submission: &ScoreSubmission, created_at: u64) -> LeaderboardEntry {
        if let Some(row) = self
            .rows
            .iter_mut()
            .find(|r| r.player_name == submission.player_name && r.mode == submission.mode)
        {
            row.score = submission.score;
            row.graze_count = submission.graze_count;
            row.wave = submission.wave;
            row.time_ms = submission.time_ms;
            row.created_at = created_at;
            return row.clone();
        }

        let entry = LeaderboardEntry {
            id: self.next_id,
            player_name: submission.player_name.clone(),
            mode: submission.mode,
            score: submission.score,
            graze_count: submission.graze_count,
            wave: submission.wave,
            time_ms: submission.time_ms,
            created_at,
        };
        self.next_id += 1;
        self.rows.push(entry.clone());
        entry
    }

    pub fn rows(&self, mode: GameMode) -> Vec<LeaderboardEntry> {
        self.rows.iter().filter(|r| r.mode == mode).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
