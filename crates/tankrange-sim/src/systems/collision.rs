//! Collision detection between projectiles and targets.
//!
//! Bullets are tested as swept spheres over the last physics step so fast
//! shots cannot skip through a target between steps. Only colliders in the
//! `Target` category produce hits; everything else is passed through.

use glam::DVec3;
use hecs::World;

use tankrange_core::components::{Collider, Projectile, RigidBody, TargetMotion};
use tankrange_core::enums::CollisionCategory;
use tankrange_core::types::Transform;

use crate::session::Hit;

/// Find bullet/target hits for the step that just ran. Each bullet hits at
/// most one target and each target is hit by at most one bullet; ties go to
/// the earliest contact along the bullet's path.
pub fn detect(world: &World, dt: f64) -> Vec<Hit> {
    let targets: Vec<(hecs::Entity, DVec3, f64, u32)> = world
        .query::<(&Transform, &Collider, &TargetMotion)>()
        .iter()
        .filter(|(_, (_, collider, _))| collider.category == CollisionCategory::Target)
        .map(|(entity, (transform, collider, motion))| {
            (entity, transform.position, collider.radius, motion.target_id)
        })
        .collect();

    let mut hits: Vec<Hit> = Vec::new();
    if targets.is_empty() {
        return hits;
    }

    let mut query = world.query::<(&Projectile, &Transform, &RigidBody, &Collider)>();
    for (bullet, (_projectile, transform, body, collider)) in query.iter() {
        let end = transform.position;
        let start = end - body.velocity * dt;

        let nearest = targets
            .iter()
            .filter(|(target, ..)| !hits.iter().any(|h| h.target == *target))
            .filter_map(|&(target, center, radius, target_id)| {
                segment_sphere_contact(start, end, center, radius + collider.radius)
                    .map(|t| (t, target, target_id))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0));

        if let Some((_, target, target_id)) = nearest {
            hits.push(Hit {
                bullet,
                target,
                target_id,
            });
        }
    }

    hits
}

/// Fraction along `start..end` at which the segment first comes within
/// `radius` of `center`, or `None` if it never does.
pub fn segment_sphere_contact(start: DVec3, end: DVec3, center: DVec3, radius: f64) -> Option<f64> {
    let path = end - start;
    let to_start = start - center;
    let c = to_start.length_squared() - radius * radius;
    if c <= 0.0 {
        return Some(0.0);
    }

    let a = path.length_squared();
    if a == 0.0 {
        return None;
    }
    let b = to_start.dot(path);
    let discriminant = b * b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let t = (-b - discriminant.sqrt()) / a;
    (0.0..=1.0).contains(&t).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_passing_through_sphere() {
        let t = segment_sphere_contact(
            DVec3::new(0.0, 0.0, -2.0),
            DVec3::new(0.0, 0.0, 2.0),
            DVec3::ZERO,
            0.5,
        )
        .unwrap();
        assert!((t - 0.375).abs() < 1e-12);
    }

    #[test]
    fn test_segment_missing_sphere() {
        assert!(segment_sphere_contact(
            DVec3::new(2.0, 0.0, -2.0),
            DVec3::new(2.0, 0.0, 2.0),
            DVec3::ZERO,
            0.5,
        )
        .is_none());
    }

    #[test]
    fn test_segment_stopping_short() {
        assert!(segment_sphere_contact(
            DVec3::new(0.0, 0.0, -3.0),
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::ZERO,
            0.5,
        )
        .is_none());
    }

    #[test]
    fn test_segment_starting_inside() {
        assert_eq!(
            segment_sphere_contact(DVec3::ZERO, DVec3::X, DVec3::ZERO, 0.5),
            Some(0.0)
        );
    }
}
