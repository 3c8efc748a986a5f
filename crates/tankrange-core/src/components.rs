//! ECS components for hecs entities.
//!
//! Components are plain data. Per-tick behaviour lives in the systems of
//! `tankrange-sim`; the small impls here only guard invariants on writes.
//! Components that reference other entities live in `tankrange-sim::scene`.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::config::{AimTuning, EngineAudioTuning, TankTuning, TargetTuning};
use crate::constants::DEFAULT_ANGULAR_DAMPING;
use crate::enums::{CollisionCategory, MotionPattern};
use crate::math::clamp_between;

/// Dynamic body integrated by the physics phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RigidBody {
    /// Linear velocity (m/s, world space).
    pub velocity: DVec3,
    /// Angular velocity (rad/s, world space).
    pub angular_velocity: DVec3,
    pub mass: f64,
    /// Scalar moment of inertia.
    pub inertia: f64,
    pub linear_damping: f64,
    pub angular_damping: f64,
    pub use_gravity: bool,
    /// Force accumulated this step (N). Cleared after integration.
    pub force: DVec3,
    /// Torque accumulated this step (N·m). Cleared after integration.
    pub torque: DVec3,
    /// Mass-independent acceleration accumulated this step (m/s²).
    pub acceleration: DVec3,
}

/// Sphere collider used for overlap tests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f64,
    pub category: CollisionCategory,
}

/// Differential-drive state of a tracked vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankDrive {
    pub tuning: TankTuning,
    /// Forward/backward input in [-1, 1].
    forward_input: f64,
    /// Turn input in [-1, 1]; negative turns left.
    turn_input: f64,
    /// Signed speed along the hull's forward axis (m/s).
    pub current_speed: f64,
    pub left_tread_speed: f64,
    pub right_tread_speed: f64,
    /// Yaw rate after limiting (deg/s).
    pub rotation_speed: f64,
}

/// Aiming state of the camera rig mounted on a tank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AimRig {
    pub tuning: AimTuning,
    /// Yaw in degrees, [0, 360).
    pub horizontal_angle: f64,
    /// Pitch in degrees, within the tuning bounds. Positive looks down.
    pub vertical_angle: f64,
    pub turn_input: f64,
    pub up_input: f64,
}

/// Text readout of the aim angles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AimReadout {
    pub horizontal_text: String,
    pub vertical_text: String,
}

/// Scrolling tread textures.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TreadVisuals {
    /// Texture offsets in [0, 1).
    pub left_offset: f64,
    pub right_offset: f64,
    pub scroll_factor: f64,
}

/// Engine sound state driven by the tank's speed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EngineAudio {
    pub tuning: EngineAudioTuning,
    pub pitch: f64,
    pub volume: f64,
    pub playing: bool,
}

/// A fired projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub instant_velocity: f64,
    /// Seconds until self-destruction.
    pub remaining_secs: f64,
}

/// Movement state of a range target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetMotion {
    /// Stable identifier for external references.
    pub target_id: u32,
    pub pattern: MotionPattern,
    pub tuning: TargetTuning,
    pub initial_position: DVec3,
    pub elapsed_secs: f64,
    /// Horizontal position of the sweeping pattern.
    pub current_x: f64,
    /// +1 sweeping right, -1 sweeping left.
    pub horizontal_direction: f64,
    /// Set externally; a dead target stops moving.
    pub is_dead: bool,
}

/// Marks the player's tank hull.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tank;

/// Marks a range target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target;

/// Marks a projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// Marks the camera targets face and bullets are fired from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MainCamera;

impl RigidBody {
    pub fn new(mass: f64, inertia: f64) -> Self {
        Self {
            velocity: DVec3::ZERO,
            angular_velocity: DVec3::ZERO,
            mass,
            inertia,
            linear_damping: 0.0,
            angular_damping: DEFAULT_ANGULAR_DAMPING,
            use_gravity: false,
            force: DVec3::ZERO,
            torque: DVec3::ZERO,
            acceleration: DVec3::ZERO,
        }
    }

    pub fn add_force(&mut self, force: DVec3) {
        self.force += force;
    }

    pub fn add_torque(&mut self, torque: DVec3) {
        self.torque += torque;
    }

    pub fn add_acceleration(&mut self, acceleration: DVec3) {
        self.acceleration += acceleration;
    }

    pub fn clear_accumulators(&mut self) {
        self.force = DVec3::ZERO;
        self.torque = DVec3::ZERO;
        self.acceleration = DVec3::ZERO;
    }
}

impl TankDrive {
    pub fn new(tuning: TankTuning) -> Self {
        Self {
            tuning,
            forward_input: 0.0,
            turn_input: 0.0,
            current_speed: 0.0,
            left_tread_speed: 0.0,
            right_tread_speed: 0.0,
            rotation_speed: 0.0,
        }
    }

    /// Set forward/backward input, clamped to [-1, 1].
    pub fn set_forward_input(&mut self, input: f64) {
        self.forward_input = clamp_axis(input);
    }

    /// Set turn input, clamped to [-1 (left), 1 (right)].
    pub fn set_turn_input(&mut self, input: f64) {
        self.turn_input = clamp_axis(input);
    }

    pub fn forward_input(&self) -> f64 {
        self.forward_input
    }

    pub fn turn_input(&self) -> f64 {
        self.turn_input
    }

    /// Forward speed in m/s, measured at the start of the last physics step.
    pub fn current_speed(&self) -> f64 {
        self.current_speed
    }

    /// |speed| as a fraction of `max_speed`.
    pub fn speed_percentage(&self) -> f64 {
        self.current_speed.abs() / self.tuning.max_speed
    }

    pub fn left_tread_speed(&self) -> f64 {
        self.left_tread_speed
    }

    pub fn right_tread_speed(&self) -> f64 {
        self.right_tread_speed
    }
}

impl AimRig {
    /// Start level, or at the nearest bound if level is out of range.
    pub fn new(tuning: AimTuning) -> Self {
        Self {
            tuning,
            horizontal_angle: 0.0,
            vertical_angle: clamp_between(
                0.0,
                tuning.min_vertical_angle,
                tuning.max_vertical_angle,
            ),
            turn_input: 0.0,
            up_input: 0.0,
        }
    }

    /// Store this frame's aim axes, each clamped to [-1, 1].
    pub fn set_input(&mut self, turn: f64, up: f64) {
        self.turn_input = clamp_axis(turn);
        self.up_input = clamp_axis(up);
    }
}

impl EngineAudio {
    pub fn new(tuning: EngineAudioTuning) -> Self {
        Self {
            tuning,
            pitch: tuning.idle_pitch,
            volume: tuning.idle_volume,
            playing: false,
        }
    }
}

/// Clamp an input axis to [-1, 1]. NaN reads as no input.
pub fn clamp_axis(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}
