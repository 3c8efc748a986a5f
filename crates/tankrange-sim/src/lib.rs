//! Simulation engine for TANKRANGE.
//!
//! Owns the hecs ECS world, runs the range systems in phase order each
//! frame, and produces RangeSnapshots for the host.

pub mod engine;
pub mod scene;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use tankrange_core as core;
