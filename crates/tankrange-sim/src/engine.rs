//! Simulation engine: the core of the range.
//!
//! `SimulationEngine` owns the hecs ECS world, processes queued commands,
//! runs all systems in phase order, and produces `RangeSnapshot`s. Completely
//! headless, enabling deterministic testing.
//!
//! Each `tick()` is one frame:
//! 1. input-apply: drain the command queue
//! 2. physics: zero or more fixed steps (tank drive, integration, collisions)
//! 3. frame update: bullet countdowns, target motion, tank feedback
//! 4. late update: aim, then hierarchy propagation
//! 5. cleanup, then snapshot

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tankrange_core::commands::SessionCommand;
use tankrange_core::components::{AimRig, MainCamera, TankDrive, TargetMotion};
use tankrange_core::config::RangeConfig;
use tankrange_core::constants::{FIXED_DT, MAX_PHYSICS_STEPS_PER_TICK};
use tankrange_core::enums::SessionPhase;
use tankrange_core::events::AudioEvent;
use tankrange_core::state::RangeSnapshot;
use tankrange_core::types::{SimTime, Transform};

use crate::session::{Hit, ScoreState};
use crate::systems;
use crate::world_setup;

/// Slack for comparing the physics accumulator against `FIXED_DT`.
const STEP_EPSILON: f64 = 1e-9;

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    config: RangeConfig,
    time: SimTime,
    phase: SessionPhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<SessionCommand>,
    despawn_buffer: Vec<Entity>,
    audio_events: Vec<AudioEvent>,
    physics_accumulator: f64,

    tank: Option<Entity>,
    /// Targets still in the world, in spawn order.
    active_targets: Vec<Entity>,
    next_target_id: u32,
    last_shot_secs: Option<f64>,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create a new simulation engine.
    ///
    /// The config is not validated here; use `RangeConfig::validate` (or
    /// `RangeConfig::load`) first. Out-of-range values never panic, but
    /// they can make the range behave oddly.
    pub fn new(config: RangeConfig) -> Self {
        Self {
            world: World::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            time: SimTime::default(),
            phase: SessionPhase::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            physics_accumulator: 0.0,
            tank: None,
            active_targets: Vec::new(),
            next_target_id: 0,
            last_shot_secs: None,
            score: ScoreState::default(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SessionCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SessionCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame and return the resulting snapshot.
    pub fn tick(&mut self) -> RangeSnapshot {
        self.process_commands();

        if self.phase == SessionPhase::Active {
            self.run_systems();
            self.time.advance(self.config.frame_dt);
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            audio_events,
            &self.score,
            self.active_targets.len(),
        )
    }

    /// Get the current session phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The tank hull entity, once a session has started.
    pub fn tank(&self) -> Option<Entity> {
        self.tank
    }

    /// Targets still alive, in spawn order.
    pub fn active_targets(&self) -> &[Entity] {
        &self.active_targets
    }

    // --- Tank control surface ---
    //
    // These act on the tank immediately, bypassing the command queue, so an
    // external driver can steer between ticks. Before a session starts there
    // is no tank: setters do nothing and getters report zero.

    /// Set forward/backward input, clamped to [-1, 1].
    pub fn set_forward_input(&mut self, input: f64) {
        if let Some(mut drive) = self.tank_drive_mut() {
            drive.set_forward_input(input);
        }
    }

    /// Set turn input, clamped to [-1 (left), 1 (right)].
    pub fn set_turn_input(&mut self, input: f64) {
        if let Some(mut drive) = self.tank_drive_mut() {
            drive.set_turn_input(input);
        }
    }

    /// Forward speed in m/s.
    pub fn current_speed(&self) -> f64 {
        self.read_drive(TankDrive::current_speed)
    }

    /// |speed| as a fraction of max speed.
    pub fn speed_percentage(&self) -> f64 {
        self.read_drive(TankDrive::speed_percentage)
    }

    pub fn left_tread_speed(&self) -> f64 {
        self.read_drive(TankDrive::left_tread_speed)
    }

    pub fn right_tread_speed(&self) -> f64 {
        self.read_drive(TankDrive::right_tread_speed)
    }

    fn tank_drive_mut(&self) -> Option<hecs::RefMut<'_, TankDrive>> {
        self.tank.and_then(|tank| self.world.get::<&mut TankDrive>(tank).ok())
    }

    fn read_drive(&self, read: impl Fn(&TankDrive) -> f64) -> f64 {
        self.tank
            .and_then(|tank| self.world.get::<&TankDrive>(tank).ok())
            .map(|drive| read(&*drive))
            .unwrap_or(0.0)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::StartSession => {
                if self.phase == SessionPhase::Idle {
                    self.start_session();
                }
            }
            SessionCommand::Pause => {
                if self.phase == SessionPhase::Active {
                    self.phase = SessionPhase::Paused;
                }
            }
            SessionCommand::Resume => {
                if self.phase == SessionPhase::Paused {
                    self.phase = SessionPhase::Active;
                }
            }
            SessionCommand::SetForwardInput { value } => self.set_forward_input(value),
            SessionCommand::SetTurnInput { value } => self.set_turn_input(value),
            SessionCommand::SetAimInput { turn, up } => {
                for (_entity, rig) in self.world.query_mut::<&mut AimRig>() {
                    rig.set_input(turn, up);
                }
            }
            SessionCommand::Fire => {
                if self.phase == SessionPhase::Active {
                    self.fire();
                }
            }
            SessionCommand::SetTargetDead { target_id, dead } => {
                for (_entity, motion) in self.world.query_mut::<&mut TargetMotion>() {
                    if motion.target_id == target_id {
                        motion.is_dead = dead;
                    }
                }
            }
        }
    }

    fn start_session(&mut self) {
        let entities = world_setup::setup_session(
            &mut self.world,
            &mut self.rng,
            &self.config,
            &mut self.next_target_id,
        );
        self.tank = Some(entities.tank);
        self.score.targets_spawned += entities.targets.len() as u32;
        self.active_targets = entities.targets;
        self.phase = SessionPhase::Active;

        tracing::info!(
            seed = self.config.seed,
            targets = self.active_targets.len(),
            "range session started"
        );
    }

    /// Spawn a bullet from the main camera, subject to the fire cooldown.
    fn fire(&mut self) {
        let now = self.time.elapsed_secs;
        let cooldown = self.config.bullet.fire_cooldown_secs;
        if let Some(last) = self.last_shot_secs {
            if now - last < cooldown {
                tracing::trace!(now, last, "fire ignored, cooling down");
                return;
            }
        }

        let muzzle = self
            .world
            .query::<(&MainCamera, &Transform)>()
            .iter()
            .next()
            .map(|(_, (_, transform))| *transform);
        let Some(muzzle) = muzzle else {
            tracing::debug!("fire ignored, no camera");
            return;
        };

        let bullet = world_setup::spawn_bullet(&mut self.world, &muzzle, &self.config.bullet);
        self.last_shot_secs = Some(now);
        self.score.shots_fired += 1;
        self.audio_events.push(AudioEvent::Shot);
        tracing::debug!(?bullet, position = %muzzle.position, "bullet fired");
    }

    /// Run all systems in phase order.
    fn run_systems(&mut self) {
        let frame_dt = self.config.frame_dt;

        // 1. Physics: as many fixed steps as the frame covers
        self.physics_accumulator += frame_dt;
        let mut steps = 0;
        while self.physics_accumulator + STEP_EPSILON >= FIXED_DT {
            if steps == MAX_PHYSICS_STEPS_PER_TICK {
                tracing::warn!(
                    dropped_secs = self.physics_accumulator,
                    "physics falling behind, dropping time"
                );
                self.physics_accumulator = 0.0;
                break;
            }
            self.fixed_step();
            self.physics_accumulator -= FIXED_DT;
            steps += 1;
        }
        tracing::trace!(tick = self.time.tick, steps, "physics steps");

        // 2. Bullet countdowns
        systems::bullet::run(&mut self.world, frame_dt, &mut self.despawn_buffer);
        // 3. Target motion
        systems::target_motion::run(&mut self.world, frame_dt);
        // 4. Tread visuals and engine audio
        systems::feedback::run(&mut self.world, frame_dt, &mut self.audio_events);
        // 5. Aim
        systems::aim::run(&mut self.world);
        // 6. Child transforms
        systems::hierarchy::propagate(&mut self.world);
        // 7. Cleanup
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.active_targets,
        );
    }

    /// One fixed physics step.
    fn fixed_step(&mut self) {
        systems::tank_drive::run(&mut self.world, FIXED_DT);
        systems::physics::integrate(&mut self.world, FIXED_DT);
        let hits = systems::collision::detect(&self.world, FIXED_DT);
        for hit in hits {
            self.apply_hit(hit);
        }
        self.time.physics_steps += 1;
    }

    /// A bullet struck a target: both are removed at once.
    fn apply_hit(&mut self, hit: Hit) {
        let _ = self.world.despawn(hit.bullet);
        let _ = self.world.despawn(hit.target);
        self.active_targets.retain(|&target| target != hit.target);
        self.score.targets_destroyed += 1;
        self.audio_events.push(AudioEvent::TargetHit {
            target_id: hit.target_id,
        });
        tracing::debug!(target_id = hit.target_id, "target hit");
    }

    /// Spawn an extra target at a fixed position (for tests).
    #[cfg(test)]
    pub fn spawn_test_target(
        &mut self,
        position: glam::DVec3,
        pattern: tankrange_core::enums::MotionPattern,
    ) -> Entity {
        let target_id = self.next_target_id;
        self.next_target_id += 1;
        let entity = world_setup::spawn_target(
            &mut self.world,
            position,
            pattern,
            &self.config.target,
            target_id,
        );
        self.active_targets.push(entity);
        self.score.targets_spawned += 1;
        entity
    }

    /// Get a mutable reference to the ECS world (for tests).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
