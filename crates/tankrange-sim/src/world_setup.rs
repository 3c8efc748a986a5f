//! Entity spawn factories for setting up the range.
//!
//! Creates the tank with its camera rig, targets and bullets with
//! appropriate component bundles.

use glam::{DQuat, DVec3};
use hecs::{Entity, EntityBuilder, World};
use rand_chacha::ChaCha8Rng;

use tankrange_core::components::*;
use tankrange_core::config::{BulletTuning, RangeConfig, TargetTuning};
use tankrange_core::enums::{CollisionCategory, MotionPattern};
use tankrange_core::types::Transform;

use crate::scene::{AimLinks, BarrelPivot, Parent, TurretPivot};
use crate::systems;

/// Turret pivot position relative to the hull.
const TURRET_MOUNT: DVec3 = DVec3::new(0.0, 1.5, 0.0);

/// Barrel pivot position relative to the turret.
const BARREL_MOUNT: DVec3 = DVec3::new(0.0, 0.3, 1.0);

/// Distance ahead of the camera at which bullets appear.
const MUZZLE_DISTANCE: f64 = 1.0;

/// Entities created when a session starts.
#[derive(Debug, Clone)]
pub struct SessionEntities {
    pub tank: Entity,
    pub camera: Entity,
    /// Spawned targets, in spawn order.
    pub targets: Vec<Entity>,
}

/// Set up the range: tank, camera rig, then the configured targets.
pub fn setup_session(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &RangeConfig,
    next_target_id: &mut u32,
) -> SessionEntities {
    let (tank, camera) = spawn_tank(world, config);
    let targets = systems::target_spawner::spawn_targets(
        world,
        rng,
        &config.spawner,
        &config.target,
        next_target_id,
    );

    // Place children before the first frame so the camera is valid for Fire.
    systems::hierarchy::propagate(world);

    SessionEntities {
        tank,
        camera,
        targets,
    }
}

/// Spawn the tank hull with its camera and optional turret/barrel pivots.
/// Returns (tank, camera).
pub fn spawn_tank(world: &mut World, config: &RangeConfig) -> (Entity, Entity) {
    let aim = config.aim;
    let tank = world.reserve_entity();

    let camera = world.spawn((
        MainCamera,
        Transform::default(),
        Parent::new(tank, aim.camera_offset),
    ));

    let turret = aim
        .link_turret
        .then(|| world.spawn((TurretPivot, Transform::default(), Parent::new(tank, TURRET_MOUNT))));

    // The barrel hangs off the turret when there is one, else off the hull.
    let barrel = aim.link_barrel.then(|| {
        let mount = turret.unwrap_or(tank);
        world.spawn((BarrelPivot, Transform::default(), Parent::new(mount, BARREL_MOUNT)))
    });

    let mut body = RigidBody::new(config.tank.mass, config.tank.yaw_inertia);
    body.linear_damping = config.tank.deceleration_force;

    let mut builder = EntityBuilder::new();
    builder
        .add(Tank)
        .add(Transform::from_position(config.tank_spawn_position))
        .add(body)
        .add(Collider {
            radius: config.tank.collider_radius,
            category: CollisionCategory::Tank,
        })
        .add(TankDrive::new(config.tank))
        .add(AimRig::new(aim))
        .add(AimLinks {
            camera: Some(camera),
            turret,
            barrel,
        });
    if aim.show_readout {
        builder.add(AimReadout::default());
    }
    if config.treads.enabled {
        builder.add(TreadVisuals {
            scroll_factor: config.treads.scroll_factor,
            ..Default::default()
        });
    }
    if config.engine_audio.enabled {
        builder.add(EngineAudio::new(config.engine_audio));
    }
    world.spawn_at(tank, builder.build());

    (tank, camera)
}

/// Spawn a single target at `position` with the given pattern.
pub fn spawn_target(
    world: &mut World,
    position: DVec3,
    pattern: MotionPattern,
    tuning: &TargetTuning,
    target_id: u32,
) -> Entity {
    let motion = TargetMotion {
        target_id,
        pattern,
        tuning: *tuning,
        initial_position: position,
        elapsed_secs: 0.0,
        // The sweep starts from the spawn x, not world x = 0, so a target
        // spawned away from the origin does not jump on its first frame.
        current_x: position.x,
        horizontal_direction: 1.0,
        is_dead: false,
    };

    world.spawn((
        Target,
        Transform::from_position(position),
        Collider {
            radius: tuning.collider_radius,
            category: CollisionCategory::Target,
        },
        motion,
    ))
}

/// Spawn a bullet just ahead of `muzzle`, launched along the muzzle's forward axis.
///
/// Bullets fly along their local up axis, so the body is pitched forward by 90°.
pub fn spawn_bullet(world: &mut World, muzzle: &Transform, tuning: &BulletTuning) -> Entity {
    let rotation = muzzle.rotation * DQuat::from_rotation_x(std::f64::consts::FRAC_PI_2);
    let transform = Transform::new(
        muzzle.position + muzzle.forward() * MUZZLE_DISTANCE,
        rotation,
    );

    let mut body = RigidBody::new(1.0, 1.0);
    body.use_gravity = tuning.use_gravity;
    body.velocity = transform.up() * tuning.instant_velocity;

    world.spawn((
        Projectile,
        transform,
        body,
        Collider {
            radius: tuning.collider_radius,
            category: CollisionCategory::Projectile,
        },
        Bullet {
            instant_velocity: tuning.instant_velocity,
            remaining_secs: tuning.countdown_time,
        },
    ))
}
