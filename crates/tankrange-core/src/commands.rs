//! Commands sent by an input source to the simulation.
//!
//! Commands are queued and applied at the next tick boundary, before physics.

use serde::{Deserialize, Serialize};

/// All possible driver and session actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionCommand {
    // --- Session control ---
    /// Spawn the tank, camera rig and targets, and start simulating.
    StartSession,
    Pause,
    Resume,

    // --- Tank ---
    /// Forward/backward axis; clamped to [-1, 1].
    SetForwardInput { value: f64 },
    /// Turn axis; clamped to [-1, 1].
    SetTurnInput { value: f64 },

    // --- Aim ---
    /// Aim axes for this frame; each clamped to [-1, 1].
    SetAimInput { turn: f64, up: f64 },
    /// Fire a bullet from the camera along the aim direction.
    Fire,

    // --- Targets ---
    /// External hit signal: a dead target stops moving.
    SetTargetDead { target_id: u32, dead: bool },
}
