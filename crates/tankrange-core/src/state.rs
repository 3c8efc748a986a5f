//! Range state snapshot: the complete visible state handed to the host each tick.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioEvent;
use crate::types::SimTime;

/// Complete range state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RangeSnapshot {
    pub time: SimTime,
    pub phase: SessionPhase,
    pub tank: Option<TankView>,
    pub aim: Option<AimView>,
    pub camera: Option<CameraView>,
    pub bullets: Vec<BulletView>,
    pub targets: Vec<TargetView>,
    pub audio_events: Vec<AudioEvent>,
    pub score: ScoreView,
}

/// Tank hull telemetry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankView {
    pub position: DVec3,
    /// Hull heading (degrees, 0 = +z, clockwise from above).
    pub heading: f64,
    pub forward_input: f64,
    pub turn_input: f64,
    /// Signed forward speed (m/s).
    pub current_speed: f64,
    pub speed_percentage: f64,
    pub left_tread_speed: f64,
    pub right_tread_speed: f64,
    /// Yaw rate (deg/s).
    pub rotation_speed: f64,
    /// Tread texture offsets (left, right), when tread visuals are attached.
    pub tread_offsets: Option<(f64, f64)>,
    pub engine: Option<EngineView>,
}

/// Engine sound parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EngineView {
    pub pitch: f64,
    pub volume: f64,
    pub playing: bool,
}

/// Aim angles and readouts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AimView {
    pub horizontal_angle: f64,
    pub vertical_angle: f64,
    pub horizontal_text: Option<String>,
    pub vertical_text: Option<String>,
}

/// World placement of the main camera.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraView {
    pub position: DVec3,
    pub rotation: DQuat,
    pub forward: DVec3,
}

/// A projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BulletView {
    pub position: DVec3,
    pub velocity: DVec3,
    pub remaining_secs: f64,
}

/// A range target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetView {
    pub target_id: u32,
    pub position: DVec3,
    pub pattern: MotionPattern,
    /// Facing (degrees, 0 = +z).
    pub facing: f64,
    pub is_dead: bool,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub targets_spawned: u32,
    pub targets_destroyed: u32,
    pub targets_remaining: u32,
    pub shots_fired: u32,
}
