//! Rigid-body integration system.
//!
//! Semi-implicit Euler: accumulated force, torque and acceleration update the
//! velocities, damping scales them down, then velocities move the transform.

use glam::DQuat;
use hecs::World;

use tankrange_core::components::RigidBody;
use tankrange_core::constants::GRAVITY;
use tankrange_core::types::Transform;

/// Integrate every rigid body over one fixed step and clear its accumulators.
pub fn integrate(world: &mut World, dt: f64) {
    for (_entity, (transform, body)) in world.query_mut::<(&mut Transform, &mut RigidBody)>() {
        step_body(transform, body, dt);
    }
}

/// Integrate a single body.
pub fn step_body(transform: &mut Transform, body: &mut RigidBody, dt: f64) {
    let mut acceleration = body.force / body.mass + body.acceleration;
    if body.use_gravity {
        acceleration.y -= GRAVITY;
    }
    body.velocity += acceleration * dt;
    body.velocity *= 1.0 / (1.0 + dt * body.linear_damping);

    body.angular_velocity += body.torque / body.inertia * dt;
    body.angular_velocity *= 1.0 / (1.0 + dt * body.angular_damping);

    transform.position += body.velocity * dt;
    let spin = DQuat::from_scaled_axis(body.angular_velocity * dt);
    transform.rotation = (spin * transform.rotation).normalize();

    body.clear_accumulators();
}
