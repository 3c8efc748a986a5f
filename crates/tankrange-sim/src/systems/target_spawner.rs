//! Target spawning: places the configured number of targets at uniformly
//! random positions inside the spawn box.

use glam::DVec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use tankrange_core::config::{SpawnerConfig, TargetTuning};
use tankrange_core::enums::MotionPattern;

use crate::world_setup;

/// Spawn `number_of_targets` targets. Returns them in spawn order.
pub fn spawn_targets(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    spawner: &SpawnerConfig,
    tuning: &TargetTuning,
    next_target_id: &mut u32,
) -> Vec<Entity> {
    let mut targets = Vec::with_capacity(spawner.number_of_targets as usize);

    for _ in 0..spawner.number_of_targets {
        let position = random_position(rng, spawner.spawn_area_min, spawner.spawn_area_max);
        let pattern = MotionPattern::from_index(rng.gen_range(0..MotionPattern::COUNT));

        let target_id = *next_target_id;
        *next_target_id += 1;

        let entity = world_setup::spawn_target(world, position, pattern, tuning, target_id);
        tracing::debug!(target_id, ?pattern, %position, "target spawned");
        targets.push(entity);
    }

    targets
}

/// Uniform point in the box `[min, max]`, sampled per axis.
pub fn random_position(rng: &mut ChaCha8Rng, min: DVec3, max: DVec3) -> DVec3 {
    DVec3::new(
        sample_axis(rng, min.x, max.x),
        sample_axis(rng, min.y, max.y),
        sample_axis(rng, min.z, max.z),
    )
}

fn sample_axis(rng: &mut ChaCha8Rng, min: f64, max: f64) -> f64 {
    if min >= max {
        min
    } else {
        rng.gen_range(min..=max)
    }
}
