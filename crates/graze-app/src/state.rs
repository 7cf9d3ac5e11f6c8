//! Host state shared between the caller and the game loop thread.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use graze_core::commands::MatchCommand;
use graze_core::state::FrameSnapshot;
use graze_sim::SimConfig;

use crate::game_loop;

/// Messages accepted by the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Forward to the match engine; applied at the next tick boundary.
    Match(MatchCommand),
    /// Stop the loop.
    Shutdown,
}

/// Handle on a (possibly running) game loop.
///
/// - `mpsc::Sender` is wrapped in `Mutex` so the state can be shared across threads
/// - `Mutex<Option<...>>` for the sender, which only exists once the loop is started
/// - `Arc<Mutex<...>>` for the latest snapshot (written by the loop thread)
pub struct HostState {
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
    pub running: Mutex<bool>,
}

impl Default for HostState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl HostState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop. Snapshots are also forwarded to `snapshot_tx`
    /// when given.
    pub fn start(
        &self,
        config: SimConfig,
        snapshot_tx: Option<mpsc::Sender<FrameSnapshot>>,
    ) -> io::Result<JoinHandle<()>> {
        let (tx, handle) =
            game_loop::spawn_game_loop(config, Arc::clone(&self.latest_snapshot), snapshot_tx)?;
        if let Ok(mut slot) = self.command_tx.lock() {
            *slot = Some(tx);
        }
        if let Ok(mut running) = self.running.lock() {
            *running = true;
        }
        Ok(handle)
    }

    /// Forward a match command. False when no loop is listening.
    pub fn send(&self, command: MatchCommand) -> bool {
        self.send_raw(GameLoopCommand::Match(command))
    }

    /// Ask the loop to stop and forget its sender.
    pub fn stop(&self) {
        self.send_raw(GameLoopCommand::Shutdown);
        if let Ok(mut slot) = self.command_tx.lock() {
            *slot = None;
        }
        if let Ok(mut running) = self.running.lock() {
            *running = false;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.lock().map(|r| *r).unwrap_or(false)
    }

    pub fn latest(&self) -> Option<FrameSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|s| s.clone())
    }

    fn send_raw(&self, command: GameLoopCommand) -> bool {
        match self.command_tx.lock() {
            Ok(slot) => slot.as_ref().is_some_and(|tx| tx.send(command).is_ok()),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_state_creation() {
        let state = HostState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest().is_none());
        assert!(!state.is_running());
    }

    #[test]
    fn test_send_without_loop_is_rejected() {
        let state = HostState::new();
        assert!(!state.send(MatchCommand::Pause));
        state.stop();
        assert!(!state.is_running());
    }
}
