//! Hierarchy system: derives child world transforms from their parents.
//!
//! Children are resolved in depth order so a grandchild sees its parent's
//! transform from this pass, not the previous frame's.

use hecs::{Entity, World};

use tankrange_core::types::Transform;

use crate::scene::Parent;

/// Chains deeper than this are treated as cycles and left alone.
const MAX_DEPTH: usize = 8;

/// Recompute the world transform of every entity with a `Parent`.
pub fn propagate(world: &mut World) {
    let mut children: Vec<(usize, Entity, Parent)> = world
        .query::<&Parent>()
        .iter()
        .filter_map(|(entity, parent)| depth(world, entity).map(|d| (d, entity, *parent)))
        .collect();
    children.sort_by_key(|(depth, ..)| *depth);

    for (_, child, parent) in children {
        let parent_transform = match world.get::<&Transform>(parent.entity) {
            Ok(t) => *t,
            Err(_) => continue, // orphan, cleanup removes it
        };
        if let Ok(mut transform) = world.get::<&mut Transform>(child) {
            transform.position = parent_transform.transform_point(parent.local_position);
            transform.rotation = (parent_transform.rotation * parent.local_rotation).normalize();
        }
    }
}

/// Number of parent links above `entity`, or `None` for a cycle.
fn depth(world: &World, entity: Entity) -> Option<usize> {
    let mut current = entity;
    for level in 0..=MAX_DEPTH {
        match world.get::<&Parent>(current) {
            Ok(parent) => current = parent.entity,
            Err(_) => return Some(level),
        }
    }
    None
}
