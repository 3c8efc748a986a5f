//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level session state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Nothing spawned yet; waiting for `StartSession`.
    #[default]
    Idle,
    Active,
    Paused,
}

/// Movement pattern of a target, chosen once at spawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotionPattern {
    /// Vertical sine bob while sweeping back and forth horizontally.
    #[default]
    Sign,
    /// Horizontal sine oscillation only.
    Horizontal,
    /// Circle in the x-y plane.
    Circular,
}

/// What a collider is, for collision dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionCategory {
    Scenery,
    Tank,
    Projectile,
    Target,
}

impl MotionPattern {
    pub const COUNT: u32 = 3;

    /// Map an index in `0..COUNT` to a pattern. Out-of-range indices wrap.
    pub fn from_index(index: u32) -> Self {
        match index % Self::COUNT {
            0 => MotionPattern::Sign,
            1 => MotionPattern::Horizontal,
            _ => MotionPattern::Circular,
        }
    }
}
