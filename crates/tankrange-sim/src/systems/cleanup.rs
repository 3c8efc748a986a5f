//! Cleanup system: removes queued and orphaned entities.

use hecs::{Entity, World};

use crate::scene::Parent;

/// Despawn everything in `despawn_buffer`, plus children whose parent is gone,
/// then drop dead entries from the active-target list.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    active_targets: &mut Vec<Entity>,
) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    // Removing a parent can orphan a chain; one pass per level.
    loop {
        for (entity, parent) in world.query::<&Parent>().iter() {
            if !world.contains(parent.entity) {
                despawn_buffer.push(entity);
            }
        }
        if despawn_buffer.is_empty() {
            break;
        }
        for entity in despawn_buffer.drain(..) {
            let _ = world.despawn(entity);
        }
    }

    active_targets.retain(|&target| world.contains(target));
}
