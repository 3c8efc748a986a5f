//! Tank feedback system: tread texture scrolling and engine sound.

use hecs::World;

use tankrange_core::components::{EngineAudio, TankDrive, TreadVisuals};
use tankrange_core::events::AudioEvent;
use tankrange_core::math::lerp;

/// Run per-frame feedback for every tank that carries it.
pub fn run(world: &mut World, frame_dt: f64, audio_events: &mut Vec<AudioEvent>) {
    for (_entity, (drive, treads)) in world.query_mut::<(&TankDrive, &mut TreadVisuals)>() {
        let factor = treads.scroll_factor * frame_dt;
        treads.left_offset = scroll(treads.left_offset, drive.left_tread_speed * factor);
        treads.right_offset = scroll(treads.right_offset, drive.right_tread_speed * factor);
    }

    for (_entity, (drive, engine)) in world.query_mut::<(&TankDrive, &mut EngineAudio)>() {
        update_engine(drive, engine, audio_events);
    }
}

/// Advance a texture offset, wrapped into [0, 1).
fn scroll(offset: f64, delta: f64) -> f64 {
    let wrapped = (offset + delta).rem_euclid(1.0);
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// Set pitch and volume from speed and start or stop the engine loop.
pub fn update_engine(
    drive: &TankDrive,
    engine: &mut EngineAudio,
    audio_events: &mut Vec<AudioEvent>,
) {
    let tuning = engine.tuning;
    let load = drive.speed_percentage().min(1.0);
    engine.pitch = lerp(tuning.idle_pitch, tuning.max_pitch, load);
    engine.volume = lerp(tuning.idle_volume, tuning.max_volume, load);

    let running = drive.forward_input().abs() > tuning.input_threshold
        || drive.turn_input().abs() > tuning.input_threshold
        || drive.current_speed().abs() > tuning.speed_threshold;

    if running && !engine.playing {
        engine.playing = true;
        audio_events.push(AudioEvent::EngineStart {
            pitch: engine.pitch,
            volume: engine.volume,
        });
    } else if !running && engine.playing {
        engine.playing = false;
        audio_events.push(AudioEvent::EngineStop);
    }
}
