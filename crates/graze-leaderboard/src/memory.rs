//! Process-local store. Contents vanish with the process.

use graze_core::enums::GameMode;

use crate::table::Table;
use crate::{LeaderboardEntry, LeaderboardError, ScoreStore, ScoreSubmission};

#[derive(Debug, Default)]
pub struct MemoryStore {
    table: Table,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl ScoreStore for MemoryStore {
    fn upsert(
        &mut self,
        submission: &ScoreSubmission,
        created_at: u64,
    ) -> Result<LeaderboardEntry, LeaderboardError> {
        Ok(self.table.upsert(submission, created_at))
    }

    fn entries(&self, mode: GameMode) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        Ok(self.table.rows(mode))
    }
}
