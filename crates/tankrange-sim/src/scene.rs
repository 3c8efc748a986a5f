//! Scene-graph components that reference other entities.
//!
//! These hold `hecs::Entity` handles, so they live here rather than in
//! `tankrange-core`.

use glam::{DQuat, DVec3};
use hecs::Entity;

/// Attaches an entity to a parent. The hierarchy system derives the child's
/// world `Transform` from the parent's every frame.
#[derive(Debug, Clone, Copy)]
pub struct Parent {
    pub entity: Entity,
    pub local_position: DVec3,
    pub local_rotation: DQuat,
}

/// Entities an aim rig drives. Any of them may be absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct AimLinks {
    pub camera: Option<Entity>,
    /// Follows the horizontal angle only.
    pub turret: Option<Entity>,
    /// Follows the vertical angle only.
    pub barrel: Option<Entity>,
}

/// Marks the yaw pivot of a turret.
#[derive(Debug, Clone, Copy)]
pub struct TurretPivot;

/// Marks the pitch pivot of a gun barrel.
#[derive(Debug, Clone, Copy)]
pub struct BarrelPivot;

impl Parent {
    pub fn new(entity: Entity, local_position: DVec3) -> Self {
        Self {
            entity,
            local_position,
            local_rotation: DQuat::IDENTITY,
        }
    }
}
