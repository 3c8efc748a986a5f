//! Fundamental geometric and simulation types.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// World-space placement of an entity (meters, y up, +z forward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: DVec3,
    pub rotation: DQuat,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current frame number (increments by 1 each tick).
    pub tick: u64,
    /// Number of fixed physics steps run so far.
    pub physics_steps: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
        }
    }
}

impl Transform {
    pub fn new(position: DVec3, rotation: DQuat) -> Self {
        Self { position, rotation }
    }

    pub fn from_position(position: DVec3) -> Self {
        Self {
            position,
            rotation: DQuat::IDENTITY,
        }
    }

    /// Local +z axis in world space.
    pub fn forward(&self) -> DVec3 {
        self.rotation * DVec3::Z
    }

    /// Local +y axis in world space.
    pub fn up(&self) -> DVec3 {
        self.rotation * DVec3::Y
    }

    /// Local +x axis in world space.
    pub fn right(&self) -> DVec3 {
        self.rotation * DVec3::X
    }

    /// Heading of the forward axis in degrees, [0, 360), 0 = +z, clockwise seen from above.
    pub fn heading_deg(&self) -> f64 {
        let f = self.forward();
        crate::math::wrap_degrees(f.x.atan2(f.z).to_degrees())
    }

    /// Transform a point given in this transform's local space into world space.
    pub fn transform_point(&self, local: DVec3) -> DVec3 {
        self.position + self.rotation * local
    }
}

impl SimTime {
    /// Advance by one frame of `frame_dt` seconds.
    pub fn advance(&mut self, frame_dt: f64) {
        self.tick += 1;
        self.elapsed_secs += frame_dt;
    }
}
