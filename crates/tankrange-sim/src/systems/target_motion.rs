//! Target motion system: faces targets toward the camera and animates them
//! along their movement pattern each frame.

use glam::DVec3;
use hecs::World;

use tankrange_core::components::{MainCamera, TargetMotion};
use tankrange_core::config::TargetTuning;
use tankrange_core::enums::MotionPattern;
use tankrange_core::math::yaw_towards;
use tankrange_core::types::Transform;

/// Run target motion for one frame. Dead targets are left untouched.
pub fn run(world: &mut World, frame_dt: f64) {
    let camera_pos = world
        .query::<(&MainCamera, &Transform)>()
        .iter()
        .next()
        .map(|(_, (_, transform))| transform.position);

    for (_entity, (transform, motion)) in world.query_mut::<(&mut Transform, &mut TargetMotion)>() {
        if motion.is_dead {
            continue;
        }

        if let Some(camera_pos) = camera_pos {
            face_camera(transform, camera_pos);
        }
        transform.position = advance(motion, frame_dt);
    }
}

/// Turn the target about the vertical axis so it faces the camera.
/// A camera directly above or below leaves the rotation unchanged.
pub fn face_camera(transform: &mut Transform, camera_pos: DVec3) {
    let to_camera = camera_pos - transform.position;
    if let Some(rotation) = yaw_towards(to_camera.x, to_camera.z) {
        transform.rotation = rotation;
    }
}

/// Advance the target's clock by `dt` and return its new position.
pub fn advance(motion: &mut TargetMotion, dt: f64) -> DVec3 {
    motion.elapsed_secs += dt;
    let tuning = motion.tuning;
    let initial = motion.initial_position;

    match motion.pattern {
        MotionPattern::Sign => {
            let y_offset =
                (motion.elapsed_secs * tuning.vertical_frequency).sin() * tuning.vertical_range;

            motion.current_x += tuning.horizontal_speed * dt * motion.horizontal_direction;
            if motion.current_x > initial.x + tuning.horizontal_range {
                motion.current_x = initial.x + tuning.horizontal_range;
                motion.horizontal_direction = -1.0;
            } else if motion.current_x < initial.x - tuning.horizontal_range {
                motion.current_x = initial.x - tuning.horizontal_range;
                motion.horizontal_direction = 1.0;
            }

            DVec3::new(motion.current_x, initial.y + y_offset, initial.z)
        }
        MotionPattern::Horizontal => initial + horizontal_offset(motion.elapsed_secs, &tuning),
        MotionPattern::Circular => initial + circular_offset(motion.elapsed_secs, &tuning),
    }
}

/// Offset of the horizontal pattern at `elapsed` seconds.
pub fn horizontal_offset(elapsed: f64, tuning: &TargetTuning) -> DVec3 {
    let x = (elapsed * tuning.speed_horizontal).sin() * tuning.movement_range_horizontal;
    DVec3::new(x, 0.0, 0.0)
}

/// Offset of the circular pattern at `elapsed` seconds, in the x-y plane.
pub fn circular_offset(elapsed: f64, tuning: &TargetTuning) -> DVec3 {
    let phase = elapsed * tuning.speed_circular;
    DVec3::new(
        phase.cos() * tuning.movement_range_circular,
        phase.sin() * tuning.movement_range_circular,
        0.0,
    )
}
