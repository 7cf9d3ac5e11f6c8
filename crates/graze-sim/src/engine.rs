//! Match engine: the core of the game.
//!
//! `MatchEngine` owns the player, boss, projectile pool and release scheduler,
//! processes host commands, runs the per-tick update order, and produces
//! `FrameSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use graze_core::commands::{ControlInput, MatchCommand};
use graze_core::config::Tunables;
use graze_core::constants::{BOSS_DEFEAT_BONUS, DT_MS};
use graze_core::enums::{BossPhase, GameMode, MatchPhase};
use graze_core::events::MatchEvent;
use graze_core::state::FrameSnapshot;
use graze_core::types::{Arena, MatchClock};
use graze_core::upgrades::{
    endless_boss_move_speed, next_wave_boss_health, outcome_after_defeat, DefeatOutcome,
    UpgradeKind, UpgradeState,
};
use graze_patterns::orders::SpawnOrder;

use crate::boss::{self, Boss, NullVisual, VisualHandle};
use crate::collision;
use crate::player::{self, Player};
use crate::pool::ProjectilePool;
use crate::release::release;
use crate::scheduler::EventScheduler;
use crate::snapshot::{build_snapshot, SnapshotSource};

/// Configuration for starting a new engine.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same match.
    pub seed: u64,
    pub tunables: Tunables,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tunables: Tunables::default(),
        }
    }
}

pub struct MatchEngine {
    tunables: Tunables,
    arena: Arena,
    rng: ChaCha8Rng,
    phase: MatchPhase,
    mode: GameMode,
    wave: u32,
    clock: MatchClock,
    score: u64,
    graze_count: u32,
    slow_motion_remaining_ms: f32,
    input: ControlInput,
    upgrades: UpgradeState,
    player: Player,
    boss: Boss,
    pool: ProjectilePool,
    scheduler: EventScheduler<SpawnOrder>,
    command_queue: VecDeque<MatchCommand>,
    events: Vec<MatchEvent>,
}

impl MatchEngine {
    pub fn new(config: SimConfig) -> Self {
        Self::with_visual(config, Box::new(NullVisual))
    }

    /// Create an engine whose boss drives a render-side handle.
    pub fn with_visual(config: SimConfig, visual: Box<dyn VisualHandle>) -> Self {
        let tunables = config.tunables;
        let arena = tunables.arena();
        Self {
            arena,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            phase: MatchPhase::Idle,
            mode: GameMode::Normal,
            wave: 1,
            clock: MatchClock::default(),
            score: 0,
            graze_count: 0,
            slow_motion_remaining_ms: 0.0,
            input: ControlInput::default(),
            upgrades: UpgradeState::default(),
            player: Player::new(player::spawn_point(arena), &tunables),
            boss: Boss::new(boss::spawn_point(arena), &tunables, visual),
            pool: ProjectilePool::new(tunables.pool_capacity, tunables.projectile_lifetime_ms),
            scheduler: EventScheduler::new(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            tunables,
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: MatchCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = MatchCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one nominal host tick.
    pub fn tick(&mut self) -> FrameSnapshot {
        self.tick_dt(DT_MS)
    }

    /// Advance by `dt_ms` of wall time and return the resulting snapshot.
    pub fn tick_dt(&mut self, dt_ms: f32) -> FrameSnapshot {
        self.process_commands();

        if self.phase == MatchPhase::Active {
            self.step(dt_ms);
        }

        self.snapshot()
    }

    fn snapshot(&mut self) -> FrameSnapshot {
        let events = std::mem::take(&mut self.events);
        build_snapshot(
            SnapshotSource {
                clock: self.clock,
                phase: self.phase,
                mode: self.mode,
                wave: self.wave,
                score: self.score,
                graze_count: self.graze_count,
                player: &self.player,
                boss: &self.boss,
                pool: &self.pool,
            },
            events,
        )
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: MatchCommand) {
        match command {
            MatchCommand::StartMatch { mode } => self.start(mode),
            MatchCommand::Restart => self.start(self.mode),
            MatchCommand::SetInput { input } => self.input = input,
            MatchCommand::ApplyUpgrade { kind } => self.apply_upgrade(kind),
            MatchCommand::Pause => {
                if self.phase == MatchPhase::Active {
                    self.phase = MatchPhase::Paused;
                }
            }
            MatchCommand::Resume => {
                if self.phase == MatchPhase::Paused {
                    self.phase = MatchPhase::Active;
                }
            }
        }
    }

    /// Discard all transient state and begin wave 1.
    fn start(&mut self, mode: GameMode) {
        self.mode = mode;
        self.wave = 1;
        self.clock = MatchClock::default();
        self.score = 0;
        self.graze_count = 0;
        self.slow_motion_remaining_ms = 0.0;
        self.input = ControlInput::default();
        self.upgrades = UpgradeState::default();
        self.player = Player::new(player::spawn_point(self.arena), &self.tunables);
        self.boss.reset(boss::spawn_point(self.arena), &self.tunables);
        self.pool.clear();
        self.scheduler.clear();
        self.events.clear();
        self.phase = MatchPhase::Active;
        tracing::debug!(mode = mode.as_str(), "match started");
    }

    fn apply_upgrade(&mut self, kind: UpgradeKind) {
        if self.phase != MatchPhase::BossDefeated {
            return;
        }
        let effect = self.upgrades.apply(kind);
        self.player.apply_upgrade(effect);

        let before = self.boss.phase();
        self.boss.begin_wave(next_wave_boss_health(self.boss.max_health()));
        self.note_phase_change(before);

        self.wave += 1;
        if self.mode == GameMode::Endless {
            self.boss.set_move_speed(endless_boss_move_speed(self.wave));
        }
        self.events.push(MatchEvent::UpgradeApplied { kind });
        self.phase = MatchPhase::Active;
        tracing::debug!(upgrade = kind.as_str(), wave = self.wave, "next wave");
    }

    /// One active tick: player, boss, releases, projectiles, zones, collisions.
    fn step(&mut self, raw_dt_ms: f32) {
        let dt_ms = if self.slow_motion_remaining_ms > 0.0 {
            self.slow_motion_remaining_ms -= raw_dt_ms;
            raw_dt_ms * self.tunables.slow_motion_scale
        } else {
            raw_dt_ms
        };
        self.clock.advance(dt_ms);
        let now = self.clock.elapsed_ms;

        // 1. Player
        self.player.update(dt_ms, &self.input, self.arena);

        // 2. Boss: attacks and due releases
        let before = self.boss.phase();
        let orders = self
            .boss
            .update(dt_ms, self.player.position, self.arena, &mut self.rng);
        self.note_phase_change(before);
        for order in orders {
            self.scheduler.schedule(now + order.delay_ms, order);
        }
        for order in self.scheduler.drain_due(now) {
            release(
                &order,
                self.boss.position(),
                self.boss.spiral_angle(),
                &mut self.pool,
            );
        }

        // 3. Projectiles
        let bursts = self.pool.update(dt_ms, self.player.position, self.arena);
        self.events.extend(
            bursts
                .into_iter()
                .map(|position| MatchEvent::ProjectileExploded { position }),
        );

        // 4. Slow zones
        self.player.slowed = self.boss.is_in_slow_zone(self.player.position);

        // 5. Collisions
        let before = self.boss.phase();
        let report = collision::resolve(
            &mut self.player,
            &mut self.boss,
            &mut self.pool,
            &self.upgrades,
            self.slow_motion_remaining_ms > 0.0,
        );
        self.note_phase_change(before);

        self.score = self.score.saturating_add(report.score_gained);
        self.graze_count += report.grazes;
        if report.start_slow_motion {
            self.slow_motion_remaining_ms = self.tunables.slow_motion_duration_ms;
        }
        self.events.extend(report.events);

        if report.player_died {
            self.game_over();
        } else if report.boss_defeated {
            self.boss_defeated();
        }
    }

    fn note_phase_change(&mut self, before: BossPhase) {
        let after = self.boss.phase();
        if after != before {
            self.events.push(MatchEvent::PhaseChanged { phase: after });
        }
    }

    fn boss_defeated(&mut self) {
        self.score = self.score.saturating_add(BOSS_DEFEAT_BONUS);
        self.pool.clear();
        self.scheduler.clear();
        self.events.push(MatchEvent::BossDefeated { wave: self.wave });
        self.phase = match outcome_after_defeat(self.mode, self.wave) {
            DefeatOutcome::Victory => MatchPhase::Victory,
            DefeatOutcome::UpgradeOffer => MatchPhase::BossDefeated,
        };
        tracing::debug!(wave = self.wave, score = self.score, phase = ?self.phase, "boss defeated");
    }

    fn game_over(&mut self) {
        self.phase = MatchPhase::GameOver;
        self.events.push(MatchEvent::GameOver {
            final_score: self.score,
            final_time_ms: self.clock.elapsed_ms,
        });
        tracing::debug!(score = self.score, elapsed_ms = self.clock.elapsed_ms, "game over");
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn clock(&self) -> MatchClock {
        self.clock
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn graze_count(&self) -> u32 {
        self.graze_count
    }

    pub fn upgrades(&self) -> &UpgradeState {
        &self.upgrades
    }

    pub fn slow_motion_active(&self) -> bool {
        self.slow_motion_remaining_ms > 0.0
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn boss(&self) -> &Boss {
        &self.boss
    }

    pub fn pool(&self) -> &ProjectilePool {
        &self.pool
    }

    pub fn pending_releases(&self) -> usize {
        self.scheduler.len()
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[cfg(test)]
    pub(crate) fn boss_mut(&mut self) -> &mut Boss {
        &mut self.boss
    }

    #[cfg(test)]
    pub(crate) fn pool_mut(&mut self) -> &mut ProjectilePool {
        &mut self.pool
    }

    #[cfg(test)]
    pub(crate) fn upgrades_mut(&mut self) -> &mut UpgradeState {
        &mut self.upgrades
    }
}
