//! Aim system, run after physics each frame.
//!
//! Integrates the aim angles from the stored input axes, refreshes the
//! readouts, and writes local rotations for the camera and the turret and
//! barrel pivots. World transforms follow in the hierarchy pass.

use glam::DQuat;
use hecs::{Entity, World};

use tankrange_core::components::{AimReadout, AimRig};
use tankrange_core::math::{clamp_between, euler_degrees, wrap_degrees};

use crate::scene::{AimLinks, Parent};

/// Run the aim update for every rig.
pub fn run(world: &mut World) {
    let mut pivots: Vec<(Entity, DQuat)> = Vec::new();

    for (_entity, (rig, readout, links)) in
        world.query_mut::<(&mut AimRig, Option<&mut AimReadout>, Option<&AimLinks>)>()
    {
        integrate(rig);

        if let Some(readout) = readout {
            readout.horizontal_text = format_angle(rig.horizontal_angle);
            readout.vertical_text = format_angle(rig.vertical_angle);
        }

        let Some(links) = links else { continue };
        if let Some(turret) = links.turret {
            pivots.push((turret, DQuat::from_rotation_y(rig.horizontal_angle.to_radians())));
        }
        if let Some(barrel) = links.barrel {
            pivots.push((barrel, DQuat::from_rotation_x(rig.vertical_angle.to_radians())));
        }
        if let Some(camera) = links.camera {
            pivots.push((
                camera,
                euler_degrees(rig.vertical_angle, rig.horizontal_angle, 0.0),
            ));
        }
    }

    // Links to despawned entities are skipped.
    for (entity, local_rotation) in pivots {
        if let Ok(mut parent) = world.get::<&mut Parent>(entity) {
            parent.local_rotation = local_rotation;
        }
    }
}

/// Apply one frame of input: yaw wraps into [0, 360), pitch is clamped.
pub fn integrate(rig: &mut AimRig) {
    let tuning = rig.tuning;
    let horizontal = rig.horizontal_angle + rig.turn_input * tuning.horizontal_velocity;
    let vertical = rig.vertical_angle - rig.up_input * tuning.vertical_velocity;

    rig.horizontal_angle = wrap_degrees(horizontal);
    rig.vertical_angle =
        clamp_between(vertical, tuning.min_vertical_angle, tuning.max_vertical_angle);
}

fn format_angle(angle: f64) -> String {
    format!("{angle:.1}°")
}
