//! Running a whole match with a pilot, either unthrottled or through the
//! real-time game loop, and turning the result into a leaderboard row.

use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use serde::Serialize;

use graze_core::commands::MatchCommand;
use graze_core::constants::DT_MS;
use graze_core::enums::{GameMode, MatchPhase};
use graze_core::state::FrameSnapshot;
use graze_leaderboard::ScoreSubmission;
use graze_sim::{MatchEngine, SimConfig};

use crate::autopilot::Pilot;
use crate::state::HostState;

/// How a finished (or abandoned) run ended up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub mode: GameMode,
    /// Phase when the run stopped. `Active` means the time limit hit first.
    pub outcome: MatchPhase,
    pub score: u64,
    pub graze_count: u32,
    pub wave: u32,
    pub time_ms: u64,
    pub ticks: u64,
}

impl RunSummary {
    pub fn from_snapshot(snapshot: &FrameSnapshot) -> Self {
        Self {
            mode: snapshot.mode,
            outcome: snapshot.phase,
            score: snapshot.stats.score,
            graze_count: snapshot.stats.graze_count,
            wave: snapshot.wave,
            time_ms: snapshot.stats.elapsed_ms.max(0.0) as u64,
            ticks: snapshot.clock.tick,
        }
    }

    pub fn submission(&self, player_name: &str) -> ScoreSubmission {
        ScoreSubmission {
            player_name: player_name.to_string(),
            mode: self.mode,
            score: self.score,
            graze_count: self.graze_count,
            wave: self.wave,
            time_ms: self.time_ms,
        }
    }
}

/// What the host should do after seeing a snapshot.
enum Reaction {
    Send(MatchCommand),
    Stop,
}

/// Shared decision step for both runners. `limit_ms` is in match time.
fn react(pilot: &mut dyn Pilot, snapshot: &FrameSnapshot, limit_ms: f32) -> Reaction {
    if snapshot.phase.is_terminal() || snapshot.stats.elapsed_ms >= limit_ms {
        return Reaction::Stop;
    }
    match snapshot.phase {
        MatchPhase::BossDefeated => {
            let kind = pilot.choose_upgrade(snapshot);
            tracing::debug!(wave = snapshot.wave, upgrade = kind.as_str(), "pilot picked upgrade");
            Reaction::Send(MatchCommand::ApplyUpgrade { kind })
        }
        _ => Reaction::Send(MatchCommand::SetInput {
            input: pilot.next_input(snapshot),
        }),
    }
}

/// Tick budget for a headless run. Slow motion stretches match time, so
/// the cap leaves generous room over the nominal tick count.
fn tick_cap(limit_ms: f32) -> u64 {
    ((limit_ms.max(0.0) / DT_MS) as u64 + 1) * 8
}

/// Play a match as fast as the engine goes.
pub fn run_headless(
    config: SimConfig,
    mode: GameMode,
    limit_ms: f32,
    pilot: &mut dyn Pilot,
) -> RunSummary {
    tracing::debug!(seed = config.seed, mode = mode.as_str(), pilot = pilot.id(), "headless run");
    pilot.reset();
    let mut engine = MatchEngine::new(config);
    engine.queue_command(MatchCommand::StartMatch { mode });

    let mut snapshot = engine.tick();
    for _ in 0..tick_cap(limit_ms) {
        match react(pilot, &snapshot, limit_ms) {
            Reaction::Send(cmd) => engine.queue_command(cmd),
            Reaction::Stop => break,
        }
        snapshot = engine.tick();
    }
    RunSummary::from_snapshot(&snapshot)
}

/// Play a match on the 60Hz game loop thread.
pub fn run_realtime(
    config: SimConfig,
    mode: GameMode,
    limit_ms: f32,
    pilot: &mut dyn Pilot,
) -> io::Result<RunSummary> {
    tracing::debug!(seed = config.seed, mode = mode.as_str(), pilot = pilot.id(), "real-time run");
    pilot.reset();
    let host = HostState::new();
    let (snap_tx, snap_rx) = mpsc::channel();
    let handle = host.start(config, Some(snap_tx))?;
    host.send(MatchCommand::StartMatch { mode });

    // Wall-clock guard in case the loop stalls or the match pauses.
    let deadline = Instant::now() + Duration::from_secs_f32(limit_ms.max(0.0) / 1000.0 * 8.0 + 1.0);
    let mut last = None;

    while Instant::now() < deadline {
        let snapshot = match snap_rx.recv_timeout(Duration::from_secs(1)) {
            Ok(snapshot) => snapshot,
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        };
        // Snapshots from before the start command landed are skipped.
        if snapshot.phase == MatchPhase::Idle {
            continue;
        }
        let reaction = react(pilot, &snapshot, limit_ms);
        last = Some(snapshot);
        match reaction {
            Reaction::Send(cmd) => {
                host.send(cmd);
            }
            Reaction::Stop => break,
        }
    }

    host.stop();
    if handle.join().is_err() {
        return Err(io::Error::other("game loop thread panicked"));
    }

    let snapshot = last.or_else(|| host.latest()).unwrap_or_default();
    Ok(RunSummary::from_snapshot(&snapshot))
}
