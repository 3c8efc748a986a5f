//! Session bookkeeping.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities.

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub targets_spawned: u32,
    pub targets_destroyed: u32,
    pub shots_fired: u32,
}

/// A bullet striking a target during a physics step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub bullet: hecs::Entity,
    pub target: hecs::Entity,
    pub target_id: u32,
}
