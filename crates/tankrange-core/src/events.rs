//! Events emitted by the simulation for audio feedback.

use serde::{Deserialize, Serialize};

/// Audio events for the host's sound system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Engine loop should start playing.
    EngineStart { pitch: f64, volume: f64 },
    /// Engine loop should stop.
    EngineStop,
    /// A bullet left the muzzle.
    Shot,
    /// A bullet struck a target; both are gone.
    TargetHit { target_id: u32 },
}
