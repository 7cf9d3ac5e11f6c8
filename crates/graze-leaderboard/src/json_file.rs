//! Store persisted as one pretty-printed JSON document.
//!
//! The whole table is rewritten on every submission. Last writer wins.

use std::fs;
use std::path::{Path, PathBuf};

use graze_core::enums::GameMode;

use crate::table::Table;
use crate::{LeaderboardEntry, LeaderboardError, ScoreStore, ScoreSubmission};

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    table: Table,
}

impl JsonFileStore {
    /// Load the table at `path`, or start empty if the file does not exist.
    pub fn open(path: &Path) -> Result<Self, LeaderboardError> {
        let table = match fs::read_to_string(path) {
            Ok(json) => serde_json::from_str(&json).map_err(LeaderboardError::Serialize)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Table::default(),
            Err(source) => {
                return Err(LeaderboardError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        };
        Ok(Self {
            path: path.to_path_buf(),
            table,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn persist(&self) -> Result<(), LeaderboardError> {
        let io_err = |source| LeaderboardError::Io {
            path: self.path.display().to_string(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(&self.table).map_err(LeaderboardError::Serialize)?;
        fs::write(&self.path, json).map_err(io_err)
    }
}

impl ScoreStore for JsonFileStore {
    fn upsert(
        &mut self,
        submission: &ScoreSubmission,
        created_at: u64,
    ) -> Result<LeaderboardEntry, LeaderboardError> {
        let entry = self.table.upsert(submission, created_at);
        self.persist()?;
        Ok(entry)
    }

    fn entries(&self, mode: GameMode) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        Ok(self.table.rows(mode))
    }
}
