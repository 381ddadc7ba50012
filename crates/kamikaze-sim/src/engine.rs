//! Simulation engine.
//!
//! `SimulationEngine` owns the world state, processes player commands, runs
//! all systems in a fixed order, and produces `FrameSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use kamikaze_core::commands::{InputIntent, PlayerCommand};
use kamikaze_core::constants::{CLOUD_FIELD_SCALE, RESOLUTION_HEIGHT, RESOLUTION_WIDTH};
use kamikaze_core::enums::{GamePhase, LifeState};
use kamikaze_core::state::{CloudView, FrameSnapshot};
use kamikaze_core::types::{SimTime, Vector2D};

use crate::config::SimConfig;
use crate::state::SimulationState;
use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns the world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    state: SimulationState,
    phase: GamePhase,
    intent: InputIntent,
    command_queue: VecDeque<PlayerCommand>,
    clouds: Vec<CloudView>,
}

impl SimulationEngine {
    /// Create an engine with the player and the first enemy wave in place.
    pub fn new(config: SimConfig) -> Self {
        log::info!("Creating simulation (seed {})", config.seed);
        let mut state = SimulationState::new(config.seed);
        let extent = Vector2D::new(
            RESOLUTION_WIDTH * CLOUD_FIELD_SCALE,
            RESOLUTION_HEIGHT * CLOUD_FIELD_SCALE,
        );
        let clouds = world_setup::scatter_clouds(&mut state.rng, config.tuning.world.cloud_count, extent);
        world_setup::setup_mission(&mut state, &config.tuning);

        Self {
            config,
            state,
            phase: GamePhase::Active,
            intent: InputIntent::default(),
            command_queue: VecDeque::new(),
            clouds,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one tick of `fixed_dt × time_scale` and return the resulting snapshot.
    pub fn tick(&mut self) -> FrameSnapshot {
        let dt = self.config.fixed_dt * self.config.time_scale;
        self.step(dt);
        self.snapshot()
    }

    /// Advance one tick of `dt` seconds.
    ///
    /// Events left over from the previous step are discarded, so after a step
    /// `state().events` holds only what that step produced. Commands are
    /// applied next. Nothing else happens unless the phase is `Active`, and a
    /// negative or non-finite `dt` leaves the world untouched.
    pub fn step(&mut self, dt: f64) {
        self.state.events.clear();
        self.process_commands();

        if !dt.is_finite() || dt < 0.0 {
            log::warn!("Ignoring step with invalid dt {dt} at tick {}", self.state.time.tick);
            return;
        }

        if self.phase == GamePhase::Active {
            self.run_systems(dt);
            self.state.time.advance(dt);
        }
    }

    /// Build a snapshot of the current world, draining pending events.
    pub fn snapshot(&mut self) -> FrameSnapshot {
        systems::snapshot::build_snapshot(&mut self.state, &self.config.tuning, self.phase)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.state.time
    }

    /// The input intent the player airplane is currently flying with.
    pub fn intent(&self) -> InputIntent {
        self.intent
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Read-only access to the world.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Mutable access to the world, for arranging test scenarios.
    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    /// The static background, generated once at creation.
    pub fn clouds(&self) -> &[CloudView] {
        &self.clouds
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetIntent { intent } => {
                self.intent = intent;
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    log::debug!("Paused at tick {}", self.state.time.tick);
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    log::debug!("Resumed at tick {}", self.state.time.tick);
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::Restart => {
                log::info!("Restarting sortie");
                world_setup::setup_mission(&mut self.state, &self.config.tuning);
                self.intent = InputIntent::default();
                self.phase = GamePhase::Active;
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        let tuning = &self.config.tuning;
        let state = &mut self.state;

        // 1. Player steering, thrust and trigger
        systems::player::run(state, tuning, self.intent, dt);
        // 2. Enemy pursuit and fire
        systems::enemy_ai::run(state, tuning, dt);
        // 3. Bullet flight, expiry and hits
        systems::bullets::run(state, tuning, dt);
        // 4. Spark expiry
        let now_ms = state.time.now_ms();
        systems::sparks::run(&mut state.sparks, now_ms, tuning.world.spark_lifespan_ms);
        // 5. Camera
        systems::camera::run(state, &tuning.camera);
        // 6. Scratch vectors are dead past this point
        state.arena.reset();

        if state.player.life == LifeState::Dead {
            log::info!(
                "Player destroyed at tick {}; {} enemies remain",
                state.time.tick,
                state.enemies.active_count()
            );
            self.phase = GamePhase::GameOver;
        }
    }
}
