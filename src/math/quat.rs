//! Quaternion exponential map.
//!
//! Orientation error and angular velocity are handled as tangent-space
//! vectors so the same spring equations used for positions apply to
//! rotations. [`quat_exp`] and [`quat_log`] map between unit quaternions and
//! half-angle tangent vectors; the `scaled_angle_axis` pair converts to the
//! full-angle representation used for angular velocities and offsets.

use glam::{Quat, Vec3};

/// Below this tangent length the maps fall back to their first-order form.
pub const QUAT_EPSILON: f32 = 1e-8;

/// Maps a half-angle tangent vector onto the unit quaternion sphere.
#[inline]
#[must_use]
pub fn quat_exp(v: Vec3) -> Quat {
    quat_exp_eps(v, QUAT_EPSILON)
}

/// [`quat_exp`] with an explicit small-angle threshold.
#[must_use]
pub fn quat_exp_eps(v: Vec3, eps: f32) -> Quat {
    let halfangle = v.length();

    if halfangle < eps {
        Quat::from_xyzw(v.x, v.y, v.z, 1.0).normalize()
    } else {
        let c = halfangle.cos();
        let s = halfangle.sin() / halfangle;
        Quat::from_xyzw(s * v.x, s * v.y, s * v.z, c).normalize()
    }
}

/// Inverse of [`quat_exp`]: half-angle tangent vector of `q`.
#[inline]
#[must_use]
pub fn quat_log(q: Quat) -> Vec3 {
    quat_log_eps(q, QUAT_EPSILON)
}

/// [`quat_log`] with an explicit small-angle threshold.
#[must_use]
pub fn quat_log_eps(q: Quat, eps: f32) -> Vec3 {
    let imaginary = Vec3::new(q.x, q.y, q.z);
    let length = imaginary.length();

    if length < eps {
        imaginary
    } else {
        // Same as acos(clamp(w, -1, 1)) on the unit sphere, but keeps
        // precision when w is close to 1.
        let halfangle = length.atan2(q.w);
        imaginary * (halfangle / length)
    }
}

/// Picks the representative of `q` with a non-negative scalar part.
///
/// `q` and `-q` encode the same rotation; canonicalizing keeps
/// interpolation on the shortest arc.
#[inline]
#[must_use]
pub fn quat_abs(q: Quat) -> Quat {
    let q = if q.w < 0.0 { -q } else { q };
    q.normalize()
}

/// Rotation described by a scaled angle-axis vector (axis * angle in radians).
#[inline]
#[must_use]
pub fn quat_from_scaled_angle_axis(v: Vec3) -> Quat {
    quat_exp(v * 0.5)
}

/// Scaled angle-axis vector of `q`.
#[inline]
#[must_use]
pub fn quat_to_scaled_angle_axis(q: Quat) -> Vec3 {
    quat_log(q) * 2.0
}

/// Finite-difference angular velocity taking `curr` to `next` over `dt`.
///
/// `dt` must be non-zero; a zero-length frame yields a non-finite result.
#[inline]
#[must_use]
pub fn quat_differentiate_angular_velocity(next: Quat, curr: Quat, dt: f32) -> Vec3 {
    quat_to_scaled_angle_axis(quat_abs(next * curr.inverse())) / dt
}
