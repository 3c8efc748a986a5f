//! Simulation constants and fixed tuning parameters.

/// Physics step rate (Hz).
pub const PHYSICS_RATE: u32 = 50;

/// Seconds per physics step.
pub const FIXED_DT: f64 = 1.0 / PHYSICS_RATE as f64;

/// Default frame rate for the variable-rate phases (Hz).
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Upper bound on physics steps run in a single frame.
/// Frames slower than this drop simulated time instead of spiralling.
pub const MAX_PHYSICS_STEPS_PER_TICK: u32 = 8;

// --- Tank drive ---

/// Forward input magnitude below which a turn becomes a pivot in place.
pub const PIVOT_INPUT_THRESHOLD: f64 = 0.1;

/// Tread speed scale applied to pivot turns.
pub const PIVOT_TREAD_FACTOR: f64 = 0.5;

/// Input magnitude below which the tank is considered idle (both axes).
pub const IDLE_INPUT_THRESHOLD: f64 = 0.1;

/// Linear damping while the driver is actively controlling the tank.
pub const DRIVING_LINEAR_DAMPING: f64 = 0.1;

/// Gain of the corrective deceleration applied above max speed.
pub const SPEED_LIMIT_GAIN: f64 = 50.0;

// --- Rigid bodies ---

/// Default angular damping for every rigid body.
pub const DEFAULT_ANGULAR_DAMPING: f64 = 0.05;

/// Gravitational acceleration along -y (m/s²).
pub const GRAVITY: f64 = 9.81;

// --- Colliders ---

/// Collision radius of a target (meters).
pub const TARGET_COLLIDER_RADIUS: f64 = 0.5;

/// Collision radius of a tank hull (meters).
pub const TANK_COLLIDER_RADIUS: f64 = 2.0;
