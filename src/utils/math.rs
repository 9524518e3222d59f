use nalgebra::{Matrix3, Vector3};
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Wrap an angle into the range [-pi, pi].
#[inline]
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(2.0 * PI) - PI;
    // rem_euclid can round up to exactly 2*pi for tiny negative inputs
    wrapped.clamp(-PI, PI)
}

/// Rotation matrix from body to world (NED) frame.
///
/// Built as `R = Rz(yaw) * Ry(pitch) * Rx(roll)`, i.e. the aerospace Z-Y-X sequence.
/// The world-to-body rotation is the transpose.
pub fn body_to_world(roll: f64, pitch: f64, yaw: f64) -> Matrix3<f64> {
    let (sr, cr) = roll.sin_cos();
    let (sp, cp) = pitch.sin_cos();
    let (sy, cy) = yaw.sin_cos();

    Matrix3::new(
        cy * cp,
        cy * sp * sr - sy * cr,
        cy * sp * cr + sy * sr,
        sy * cp,
        sy * sp * sr + cy * cr,
        sy * sp * cr - cy * sr,
        -sp,
        cp * sr,
        cp * cr,
    )
}

/// Rotation matrix from world (NED) to body frame.
#[inline]
pub fn world_to_body(roll: f64, pitch: f64, yaw: f64) -> Matrix3<f64> {
    body_to_world(roll, pitch, yaw).transpose()
}

/// Speed over the ground, ignoring the vertical component of a NED vector.
#[inline]
pub fn horizontal_speed(velocity: &Vector3<f64>) -> f64 {
    velocity.xy().norm()
}

/// Normalize `v`, or return `fallback` when `v` is shorter than `min_length`.
pub fn normalize_or(v: Vector3<f64>, min_length: f64, fallback: Vector3<f64>) -> Vector3<f64> {
    let length = v.norm();
    if length < min_length {
        fallback
    } else {
        v / length
    }
}

/// Keep `value` away from zero. Anything within `min_magnitude` of zero
/// (either sign) is replaced by `+min_magnitude`.
#[inline]
pub fn floor_magnitude(value: f64, min_magnitude: f64) -> f64 {
    if value.abs() > min_magnitude {
        value
    } else {
        min_magnitude
    }
}
