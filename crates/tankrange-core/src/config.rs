//! Range configuration and per-component tuning.
//!
//! Every section is optional in a config file; omitted fields fall back to
//! the defaults below.

use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FRAME_RATE, TANK_COLLIDER_RADIUS, TARGET_COLLIDER_RADIUS};
use crate::error::ConfigError;

/// Complete configuration for one range session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    /// RNG seed for determinism. Same seed = same session.
    pub seed: u64,
    /// Seconds per frame for the variable-rate phases.
    pub frame_dt: f64,
    /// Where the tank starts, facing +z.
    pub tank_spawn_position: DVec3,
    pub tank: TankTuning,
    pub aim: AimTuning,
    pub bullet: BulletTuning,
    pub target: TargetTuning,
    pub spawner: SpawnerConfig,
    pub treads: TreadVisualTuning,
    pub engine_audio: EngineAudioTuning,
}

/// Tank locomotion tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TankTuning {
    /// Maximum forward speed (m/s).
    pub max_speed: f64,
    /// How quickly tread speeds approach their targets.
    pub acceleration_force: f64,
    /// Linear damping applied when the driver is idle.
    pub deceleration_force: f64,
    /// Maximum rotation speed (deg/s).
    pub max_rotation_speed: f64,
    /// Force per unit of tread speed.
    pub tread_power: f64,
    pub max_tread_speed: f64,
    pub mass: f64,
    /// Moment of inertia about the vertical axis.
    pub yaw_inertia: f64,
    pub collider_radius: f64,
}

/// Camera and turret aiming tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct AimTuning {
    /// Degrees of yaw per frame at full input.
    pub horizontal_velocity: f64,
    /// Degrees of pitch per frame at full input.
    pub vertical_velocity: f64,
    pub min_vertical_angle: f64,
    pub max_vertical_angle: f64,
    /// Camera position relative to the tank.
    pub camera_offset: DVec3,
    /// Spawn a turret pivot that follows the horizontal angle.
    pub link_turret: bool,
    /// Spawn a barrel pivot that follows the vertical angle.
    pub link_barrel: bool,
    /// Maintain text readouts of both angles.
    pub show_readout: bool,
}

/// Projectile tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletTuning {
    /// Launch speed along the bullet's local up axis (m/s).
    pub instant_velocity: f64,
    /// Lifetime before self-destruction (seconds).
    pub countdown_time: f64,
    pub collider_radius: f64,
    pub use_gravity: bool,
    /// Minimum time between shots. Zero disables the gate.
    pub fire_cooldown_secs: f64,
}

/// Target movement tuning, shared by every spawned target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetTuning {
    pub speed_horizontal: f64,
    pub movement_range_horizontal: f64,
    pub speed_circular: f64,
    pub movement_range_circular: f64,
    pub horizontal_range: f64,
    pub horizontal_speed: f64,
    pub vertical_frequency: f64,
    pub vertical_range: f64,
    pub collider_radius: f64,
}

/// Initial target placement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    pub number_of_targets: u32,
    pub spawn_area_min: DVec3,
    pub spawn_area_max: DVec3,
}

/// Tread texture scrolling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TreadVisualTuning {
    pub enabled: bool,
    /// Texture offset per meter of tread travel.
    pub scroll_factor: f64,
}

/// Engine sound feedback.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineAudioTuning {
    pub enabled: bool,
    pub idle_pitch: f64,
    pub max_pitch: f64,
    pub idle_volume: f64,
    pub max_volume: f64,
    /// Input magnitude that keeps the engine running.
    pub input_threshold: f64,
    /// Speed (m/s) that keeps the engine running with no input.
    pub speed_threshold: f64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            frame_dt: 1.0 / DEFAULT_FRAME_RATE as f64,
            tank_spawn_position: DVec3::new(0.0, 0.0, -25.0),
            tank: TankTuning::default(),
            aim: AimTuning::default(),
            bullet: BulletTuning::default(),
            target: TargetTuning::default(),
            spawner: SpawnerConfig::default(),
            treads: TreadVisualTuning::default(),
            engine_audio: EngineAudioTuning::default(),
        }
    }
}

impl Default for TankTuning {
    fn default() -> Self {
        Self {
            max_speed: 10.0,
            acceleration_force: 3.0,
            deceleration_force: 2.0,
            max_rotation_speed: 60.0,
            tread_power: 15.0,
            max_tread_speed: 5.0,
            mass: 10.0,
            yaw_inertia: 10.0,
            collider_radius: TANK_COLLIDER_RADIUS,
        }
    }
}

impl Default for AimTuning {
    fn default() -> Self {
        Self {
            horizontal_velocity: 2.0,
            vertical_velocity: 1.0,
            min_vertical_angle: -40.0,
            max_vertical_angle: 15.0,
            camera_offset: DVec3::new(0.0, 2.5, 0.0),
            link_turret: true,
            link_barrel: true,
            show_readout: true,
        }
    }
}

impl Default for BulletTuning {
    fn default() -> Self {
        Self {
            instant_velocity: 40.0,
            countdown_time: 10.0,
            collider_radius: 0.1,
            use_gravity: false,
            fire_cooldown_secs: 0.25,
        }
    }
}

impl Default for TargetTuning {
    fn default() -> Self {
        Self {
            speed_horizontal: 3.0,
            movement_range_horizontal: 5.0,
            speed_circular: 3.0,
            movement_range_circular: 5.0,
            horizontal_range: 5.0,
            horizontal_speed: 2.0,
            vertical_frequency: 3.0,
            vertical_range: 5.0,
            collider_radius: TARGET_COLLIDER_RADIUS,
        }
    }
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            number_of_targets: 3,
            spawn_area_min: DVec3::new(-10.0, -5.0, 0.0),
            spawn_area_max: DVec3::new(10.0, 5.0, 0.0),
        }
    }
}

impl Default for TreadVisualTuning {
    fn default() -> Self {
        Self {
            enabled: true,
            scroll_factor: 0.1,
        }
    }
}

impl Default for EngineAudioTuning {
    fn default() -> Self {
        Self {
            enabled: true,
            idle_pitch: 0.8,
            max_pitch: 1.6,
            idle_volume: 0.3,
            max_volume: 1.0,
            input_threshold: 0.1,
            speed_threshold: 0.2,
        }
    }
}

impl RangeConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: RangeConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Reject values the controllers cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("frame_dt", self.frame_dt)?;
        positive("tank.max_speed", self.tank.max_speed)?;
        positive("tank.mass", self.tank.mass)?;
        positive("tank.yaw_inertia", self.tank.yaw_inertia)?;
        non_negative("tank.max_tread_speed", self.tank.max_tread_speed)?;
        non_negative("tank.acceleration_force", self.tank.acceleration_force)?;
        non_negative("tank.max_rotation_speed", self.tank.max_rotation_speed)?;
        non_negative("tank.collider_radius", self.tank.collider_radius)?;

        let (lo, hi) = (self.aim.min_vertical_angle, self.aim.max_vertical_angle);
        if !lo.is_finite() || !hi.is_finite() || lo > hi {
            return Err(ConfigError::Invalid {
                field: "aim.min_vertical_angle",
                reason: format!("{lo} exceeds max_vertical_angle {hi}"),
            });
        }

        non_negative("bullet.countdown_time", self.bullet.countdown_time)?;
        non_negative("bullet.collider_radius", self.bullet.collider_radius)?;
        non_negative("bullet.fire_cooldown_secs", self.bullet.fire_cooldown_secs)?;
        non_negative("target.collider_radius", self.target.collider_radius)?;

        let min = self.spawner.spawn_area_min;
        let max = self.spawner.spawn_area_max;
        if !min.is_finite() || !max.is_finite() || min.cmpgt(max).any() {
            return Err(ConfigError::Invalid {
                field: "spawner.spawn_area_min",
                reason: format!("{min} is not componentwise <= spawn_area_max {max}"),
            });
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be a positive number, got {value}"),
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be zero or positive, got {value}"),
        })
    }
}
