//! Differential-drive tank locomotion, run once per physics step.
//!
//! Input sets target tread speeds; tread speeds ease toward them; the mean
//! tread speed pushes the hull forward and the tread difference turns it.
//! Speed and yaw rate are capped after the forces are applied.

use glam::DVec3;
use hecs::World;

use tankrange_core::components::{RigidBody, TankDrive};
use tankrange_core::config::TankTuning;
use tankrange_core::constants::*;
use tankrange_core::math::lerp;
use tankrange_core::types::Transform;

/// Run tank drive for all tanks: measure speed, update treads, apply forces and limits.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (transform, body, drive)) in
        world.query_mut::<(&Transform, &mut RigidBody, &mut TankDrive)>()
    {
        let forward = transform.forward();
        let up = transform.up();
        let tuning = drive.tuning;

        drive.current_speed = body.velocity.dot(forward);

        let (target_left, target_right) = target_tread_speeds(
            drive.forward_input(),
            drive.turn_input(),
            tuning.max_tread_speed,
        );
        let blend = dt * tuning.acceleration_force;
        drive.left_tread_speed = lerp(drive.left_tread_speed, target_left, blend);
        drive.right_tread_speed = lerp(drive.right_tread_speed, target_right, blend);

        let (forward_force, torque) = tread_forces(
            drive.left_tread_speed,
            drive.right_tread_speed,
            tuning.tread_power,
        );
        body.add_force(forward * forward_force);
        body.add_torque(up * torque);

        let idle = drive.forward_input().abs() < IDLE_INPUT_THRESHOLD
            && drive.turn_input().abs() < IDLE_INPUT_THRESHOLD;
        body.linear_damping = if idle {
            tuning.deceleration_force
        } else {
            DRIVING_LINEAR_DAMPING
        };

        limit_speed(body, forward, &tuning);
        drive.rotation_speed = body.angular_velocity.y.to_degrees();
    }
}

/// Target (left, right) tread speeds for the given inputs.
///
/// Both treads follow the forward input. A turn moves one tread toward zero
/// by `|turn| * max_tread_speed`: the left tread for a right turn when
/// driving forward, the right tread for a right turn when reversing. Either
/// way `right - left` has the sign of `turn`, so positive turn input always
/// yaws right. Near-zero forward input pivots in place with opposed treads
/// at half speed. Results stay within `±max_tread_speed`.
pub fn target_tread_speeds(forward: f64, turn: f64, max_tread_speed: f64) -> (f64, f64) {
    let base = forward * max_tread_speed;
    let mut left = base;
    let mut right = base;

    if turn != 0.0 {
        if forward.abs() < PIVOT_INPUT_THRESHOLD {
            left = -turn * max_tread_speed * PIVOT_TREAD_FACTOR;
            right = turn * max_tread_speed * PIVOT_TREAD_FACTOR;
        } else {
            let differential = turn * max_tread_speed;
            if (turn > 0.0) == (forward > 0.0) {
                left -= differential;
            } else {
                right += differential;
            }
        }
    }

    (
        left.clamp(-max_tread_speed, max_tread_speed),
        right.clamp(-max_tread_speed, max_tread_speed),
    )
}

/// (forward force, yaw torque) produced by the treads.
pub fn tread_forces(left: f64, right: f64, tread_power: f64) -> (f64, f64) {
    let forward_force = (left + right) * 0.5 * tread_power;
    let torque = (right - left) * tread_power;
    (forward_force, torque)
}

/// Push back against forward speed above `max_speed` and clamp the yaw rate.
///
/// The speed cap is a corrective acceleration proportional to the overshoot,
/// so speed can exceed the cap briefly. The yaw cap is a hard clamp.
pub fn limit_speed(body: &mut RigidBody, forward: DVec3, tuning: &TankTuning) {
    let forward_velocity = body.velocity.project_onto(forward);
    let forward_speed = forward_velocity.length() * forward_velocity.dot(forward).signum();

    if forward_speed.abs() > tuning.max_speed {
        let over_limit = forward_speed.abs() - tuning.max_speed;
        body.add_acceleration(-forward_velocity.normalize_or_zero() * over_limit * SPEED_LIMIT_GAIN);
    }

    let angular_speed = body.angular_velocity.y.to_degrees();
    if angular_speed.abs() > tuning.max_rotation_speed {
        body.angular_velocity.y = angular_speed.signum() * tuning.max_rotation_speed.to_radians();
    }
}
