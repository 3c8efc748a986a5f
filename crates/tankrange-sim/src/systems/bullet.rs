//! Bullet lifetime system.
//!
//! Each bullet carries an explicit countdown decremented once per frame.
//! Bullets whose countdown has run out are queued for despawn.

use hecs::{Entity, World};

use tankrange_core::components::Bullet;

/// Decrement every bullet's countdown by `frame_dt`; queue expired bullets.
pub fn run(world: &mut World, frame_dt: f64, despawn_buffer: &mut Vec<Entity>) {
    for (entity, bullet) in world.query_mut::<&mut Bullet>() {
        bullet.remaining_secs -= frame_dt;
        if bullet.remaining_secs <= 0.0 {
            tracing::debug!(?entity, "bullet expired");
            despawn_buffer.push(entity);
        }
    }
}
