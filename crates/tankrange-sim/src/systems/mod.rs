//! ECS systems that operate on the range world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components or the engine.

pub mod aim;
pub mod bullet;
pub mod cleanup;
pub mod collision;
pub mod feedback;
pub mod hierarchy;
pub mod physics;
pub mod snapshot;
pub mod tank_drive;
pub mod target_motion;
pub mod target_spawner;
