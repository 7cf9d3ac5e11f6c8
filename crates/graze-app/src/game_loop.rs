//! Game loop thread: runs the match engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside the thread and never leaves it. Commands
//! arrive via `mpsc`; snapshots go to the shared latest-snapshot slot and,
//! optionally, an outbound channel.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use graze_core::constants::TICK_RATE;
use graze_core::state::FrameSnapshot;
use graze_sim::{MatchEngine, SimConfig};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
    snapshot_tx: Option<mpsc::Sender<FrameSnapshot>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("graze-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot, snapshot_tx);
        })?;

    Ok((cmd_tx, handle))
}

/// Runs until Shutdown or until every command sender is dropped.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
    mut snapshot_tx: Option<mpsc::Sender<FrameSnapshot>>,
) {
    tracing::debug!(seed = config.seed, "game loop started");
    let mut engine = MatchEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Match(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    tracing::debug!(tick = engine.clock().tick, "game loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick (pause is handled by the engine)
        let snapshot = engine.tick();

        // 3. Forward to the listener, dropping it once it hangs up
        if let Some(tx) = &snapshot_tx {
            if tx.send(snapshot.clone()).is_err() {
                snapshot_tx = None;
            }
        }

        // 4. Store for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; skip ahead instead of bursting
            next_tick_time = now;
        }
    }
}
