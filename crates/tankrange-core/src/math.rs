//! Scalar and rotation helpers shared by the controllers.

use glam::{DQuat, EulerRot};

/// Linear interpolation with `t` clamped to [0, 1].
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Clamp `value` into [min, max]. Unlike `f64::clamp` this never panics:
/// with inverted bounds the result is `max`.
pub fn clamp_between(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Wrap an angle in degrees into [0, 360).
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Rotation from euler angles in degrees, applied z first, then x, then y.
pub fn euler_degrees(pitch: f64, yaw: f64, roll: f64) -> DQuat {
    DQuat::from_euler(
        EulerRot::YXZ,
        yaw.to_radians(),
        pitch.to_radians(),
        roll.to_radians(),
    )
}

/// Rotation about the vertical axis whose forward points along (dx, dz).
/// Returns `None` for a zero direction.
pub fn yaw_towards(dx: f64, dz: f64) -> Option<DQuat> {
    if dx == 0.0 && dz == 0.0 {
        return None;
    }
    Some(DQuat::from_rotation_y(dx.atan2(dz)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_lerp_clamps_factor() {
        assert!((lerp(0.0, 10.0, 0.25) - 2.5).abs() < 1e-12);
        assert!((lerp(0.0, 10.0, 3.0) - 10.0).abs() < 1e-12);
        assert!(lerp(0.0, 10.0, -1.0).abs() < 1e-12);
    }

    #[test]
    fn test_clamp_between_tolerates_inverted_bounds() {
        assert_eq!(clamp_between(5.0, -1.0, 2.0), 2.0);
        assert_eq!(clamp_between(-5.0, -1.0, 2.0), -1.0);
        assert_eq!(clamp_between(0.5, -1.0, 2.0), 0.5);
        assert_eq!(clamp_between(0.0, 30.0, -30.0), -30.0);
    }

    #[test]
    fn test_wrap_degrees() {
        assert!((wrap_degrees(370.0) - 10.0).abs() < 1e-9);
        assert!((wrap_degrees(-10.0) - 350.0).abs() < 1e-9);
        assert_eq!(wrap_degrees(360.0), 0.0);
        let tiny = wrap_degrees(-1e-20);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_positive_pitch_looks_down() {
        let forward = euler_degrees(30.0, 0.0, 0.0) * DVec3::Z;
        assert!(forward.y < 0.0);
    }

    #[test]
    fn test_positive_yaw_turns_right() {
        let forward = euler_degrees(0.0, 90.0, 0.0) * DVec3::Z;
        assert!((forward.x - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_yaw_towards_zero_direction() {
        assert!(yaw_towards(0.0, 0.0).is_none());
        let q = yaw_towards(0.0, -1.0).unwrap();
        let forward = q * DVec3::Z;
        assert!((forward.z + 1.0).abs() < 1e-9);
    }
}
