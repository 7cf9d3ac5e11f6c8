//! Leaderboard persistence for GRAZE.
//!
//! One row per (player name, mode); a new submission overwrites the old row.
//! Names are stored lower-cased so lookups are case-insensitive. Storage sits
//! behind `ScoreStore`; ranking and ordering live in `Leaderboard`.

pub mod json_file;
pub mod memory;
pub mod table;

use std::cmp::Ordering;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use graze_core::enums::GameMode;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Rows returned by `Leaderboard::fetch_leaderboard`.
pub const LEADERBOARD_SIZE: usize = 10;

/// Neighbours shown on each side of a rank preview.
pub const RANK_PREVIEW_NEIGHBOURS: usize = 2;

/// A finished run, as submitted by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    pub player_name: String,
    pub mode: GameMode,
    pub score: u64,
    pub graze_count: u32,
    pub wave: u32,
    pub time_ms: u64,
}

/// A stored leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: u64,
    pub player_name: String,
    pub mode: GameMode,
    pub score: u64,
    pub graze_count: u32,
    pub wave: u32,
    pub time_ms: u64,
    /// Unix milliseconds of the latest submission for this row.
    pub created_at: u64,
}

/// Column a leaderboard is ordered by (always descending).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Score,
    Wave,
    GrazeCount,
    TimeMs,
}

impl SortField {
    pub fn default_for(mode: GameMode) -> Self {
        match mode {
            GameMode::Normal => SortField::Score,
            GameMode::Endless => SortField::Wave,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "score" => Some(Self::Score),
            "wave" => Some(Self::Wave),
            "graze_count" => Some(Self::GrazeCount),
            "time_ms" => Some(Self::TimeMs),
            _ => None,
        }
    }

    fn key(self, entry: &LeaderboardEntry) -> u64 {
        match self {
            SortField::Score => entry.score,
            SortField::Wave => entry.wave as u64,
            SortField::GrazeCount => entry.graze_count as u64,
            SortField::TimeMs => entry.time_ms,
        }
    }
}

/// Where a result would land, with its neighbours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankPreview {
    /// 1-based.
    pub rank: usize,
    /// Up to two rows directly above, best first.
    pub above: Vec<LeaderboardEntry>,
    /// Up to two rows directly below, best first.
    pub below: Vec<LeaderboardEntry>,
}

#[derive(Debug)]
pub enum LeaderboardError {
    Io {
        path: String,
        source: std::io::Error,
    },
    Serialize(serde_json::Error),
    /// Player name is empty after trimming.
    EmptyName,
}

impl fmt::Display for LeaderboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "leaderboard file {path}: {source}"),
            Self::Serialize(err) => write!(f, "leaderboard encoding: {err}"),
            Self::EmptyName => write!(f, "player name must not be empty"),
        }
    }
}

impl std::error::Error for LeaderboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
            Self::EmptyName => None,
        }
    }
}

/// Storage for leaderboard rows.
pub trait ScoreStore {
    /// Insert a row, or overwrite the row with the same (name, mode).
    /// The name is already normalised.
    fn upsert(
        &mut self,
        submission: &ScoreSubmission,
        created_at: u64,
    ) -> Result<LeaderboardEntry, LeaderboardError>;

    /// Every row for a mode, in no particular order.
    fn entries(&self, mode: GameMode) -> Result<Vec<LeaderboardEntry>, LeaderboardError>;
}

pub fn now_unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Ranking and submission rules on top of a store.
pub struct Leaderboard<S> {
    store: S,
}

impl<S: ScoreStore> Leaderboard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn try_submit(
        &mut self,
        submission: &ScoreSubmission,
    ) -> Result<LeaderboardEntry, LeaderboardError> {
        let player_name = normalize_name(&submission.player_name);
        if player_name.is_empty() {
            return Err(LeaderboardError::EmptyName);
        }
        let normalized = ScoreSubmission {
            player_name,
            ..submission.clone()
        };
        self.store.upsert(&normalized, now_unix_ms())
    }

    /// Store a result. Failures are logged and reported as `false`.
    pub fn submit_score(&mut self, submission: &ScoreSubmission) -> bool {
        match self.try_submit(submission) {
            Ok(entry) => {
                tracing::debug!(name = %entry.player_name, mode = entry.mode.as_str(), score = entry.score, "score submitted");
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to submit score");
                false
            }
        }
    }

    /// Top rows for a mode, descending by `sort` (mode default when `None`).
    pub fn try_fetch_leaderboard(
        &self,
        mode: GameMode,
        sort: Option<SortField>,
    ) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let sort = sort.unwrap_or_else(|| SortField::default_for(mode));
        let mut rows = self.store.entries(mode)?;
        rows.sort_by(|a, b| {
            sort.key(b)
                .cmp(&sort.key(a))
                .then_with(|| a.created_at.cmp(&b.created_at))
                .then_with(|| a.id.cmp(&b.id))
        });
        rows.truncate(LEADERBOARD_SIZE);
        Ok(rows)
    }

    /// Like `try_fetch_leaderboard`, but a failing store yields an empty board.
    pub fn fetch_leaderboard(&self, mode: GameMode, sort: Option<SortField>) -> Vec<LeaderboardEntry> {
        self.try_fetch_leaderboard(mode, sort).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to fetch leaderboard");
            Vec::new()
        })
    }

    /// Rank a result would take. Normal ranks by score; endless by wave,
    /// then score. Ties place the new result above existing rows.
    pub fn try_fetch_rank_preview(
        &self,
        mode: GameMode,
        score: u64,
        wave: u32,
    ) -> Result<RankPreview, LeaderboardError> {
        let mut rows = self.store.entries(mode)?;
        rows.sort_by(|a, b| {
            rank_order(mode, (b.score, b.wave), (a.score, a.wave))
                .then_with(|| a.created_at.cmp(&b.created_at))
                .then_with(|| a.id.cmp(&b.id))
        });

        let better = rows
            .iter()
            .take_while(|e| rank_order(mode, (e.score, e.wave), (score, wave)) == Ordering::Greater)
            .count();
        let above_start = better.saturating_sub(RANK_PREVIEW_NEIGHBOURS);
        let below_end = (better + RANK_PREVIEW_NEIGHBOURS).min(rows.len());

        Ok(RankPreview {
            rank: better + 1,
            above: rows[above_start..better].to_vec(),
            below: rows[better..below_end].to_vec(),
        })
    }

    pub fn fetch_rank_preview(&self, mode: GameMode, score: u64, wave: u32) -> Option<RankPreview> {
        match self.try_fetch_rank_preview(mode, score, wave) {
            Ok(preview) => Some(preview),
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch rank preview");
                None
            }
        }
    }
}

/// Compare two (score, wave) results under a mode's ranking rule.
fn rank_order(mode: GameMode, a: (u64, u32), b: (u64, u32)) -> Ordering {
    match mode {
        GameMode::Normal => a.0.cmp(&b.0),
        GameMode::Endless => a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)),
    }
}

#[cfg(test)]
mod tests;
