//! Snapshot system: queries the ECS world and builds a complete RangeSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use tankrange_core::components::*;
use tankrange_core::enums::SessionPhase;
use tankrange_core::events::AudioEvent;
use tankrange_core::state::*;
use tankrange_core::types::{SimTime, Transform};

use crate::session::ScoreState;

/// Build a complete RangeSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: SessionPhase,
    audio_events: Vec<AudioEvent>,
    score: &ScoreState,
    targets_remaining: usize,
) -> RangeSnapshot {
    let (tank, aim) = build_tank_and_aim(world);

    RangeSnapshot {
        time: *time,
        phase,
        tank,
        aim,
        camera: build_camera(world),
        bullets: build_bullets(world),
        targets: build_targets(world),
        audio_events,
        score: ScoreView {
            targets_spawned: score.targets_spawned,
            targets_destroyed: score.targets_destroyed,
            targets_remaining: targets_remaining as u32,
            shots_fired: score.shots_fired,
        },
    }
}

/// Telemetry for the first tank found, and its aim rig.
fn build_tank_and_aim(world: &World) -> (Option<TankView>, Option<AimView>) {
    let mut query = world.query::<(
        &Tank,
        &Transform,
        &TankDrive,
        Option<&TreadVisuals>,
        Option<&EngineAudio>,
        Option<&AimRig>,
        Option<&AimReadout>,
    )>();

    let Some((_, (_, transform, drive, treads, engine, rig, readout))) = query.iter().next() else {
        return (None, None);
    };

    let tank = TankView {
        position: transform.position,
        heading: transform.heading_deg(),
        forward_input: drive.forward_input(),
        turn_input: drive.turn_input(),
        current_speed: drive.current_speed(),
        speed_percentage: drive.speed_percentage(),
        left_tread_speed: drive.left_tread_speed(),
        right_tread_speed: drive.right_tread_speed(),
        rotation_speed: drive.rotation_speed,
        tread_offsets: treads.map(|t| (t.left_offset, t.right_offset)),
        engine: engine.map(|e| EngineView {
            pitch: e.pitch,
            volume: e.volume,
            playing: e.playing,
        }),
    };

    let aim = rig.map(|rig| AimView {
        horizontal_angle: rig.horizontal_angle,
        vertical_angle: rig.vertical_angle,
        horizontal_text: readout.map(|r| r.horizontal_text.clone()),
        vertical_text: readout.map(|r| r.vertical_text.clone()),
    });

    (Some(tank), aim)
}

fn build_camera(world: &World) -> Option<CameraView> {
    world
        .query::<(&MainCamera, &Transform)>()
        .iter()
        .next()
        .map(|(_, (_, transform))| CameraView {
            position: transform.position,
            rotation: transform.rotation,
            forward: transform.forward(),
        })
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    world
        .query::<(&Bullet, &Transform, &RigidBody)>()
        .iter()
        .map(|(_, (bullet, transform, body))| BulletView {
            position: transform.position,
            velocity: body.velocity,
            remaining_secs: bullet.remaining_secs,
        })
        .collect()
}

/// Targets sorted by id so output order does not depend on storage layout.
fn build_targets(world: &World) -> Vec<TargetView> {
    let mut targets: Vec<TargetView> = world
        .query::<(&TargetMotion, &Transform)>()
        .iter()
        .map(|(_, (motion, transform))| TargetView {
            target_id: motion.target_id,
            position: transform.position,
            pattern: motion.pattern,
            facing: transform.heading_deg(),
            is_dead: motion.is_dead,
        })
        .collect();
    targets.sort_by_key(|t| t.target_id);
    targets
}
