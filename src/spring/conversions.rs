//! Spring parameterization.
//!
//! Conversions between halflife, damping, stiffness, natural frequency and
//! damping ratio. Every other spring routine goes through these.

use std::f32::consts::{E, LN_2, PI};

/// Added to halflife/damping denominators so a zero halflife yields a very
/// stiff spring instead of a division by zero.
pub const HALFLIFE_EPSILON: f32 = 1e-5;

#[inline]
fn square(x: f32) -> f32 {
    x * x
}

/// Damping coefficient of a critically damped spring with the given halflife.
#[inline]
#[must_use]
pub fn halflife_to_damping(halflife: f32) -> f32 {
    halflife_to_damping_eps(halflife, HALFLIFE_EPSILON)
}

#[inline]
#[must_use]
pub fn halflife_to_damping_eps(halflife: f32, eps: f32) -> f32 {
    (4.0 * LN_2) / (halflife + eps)
}

/// Inverse of [`halflife_to_damping`].
#[inline]
#[must_use]
pub fn damping_to_halflife(damping: f32) -> f32 {
    damping_to_halflife_eps(damping, HALFLIFE_EPSILON)
}

#[inline]
#[must_use]
pub fn damping_to_halflife_eps(damping: f32, eps: f32) -> f32 {
    (4.0 * LN_2) / (damping + eps)
}

/// Time for an offset of `initial_value` to decay below [`HALFLIFE_EPSILON`].
#[inline]
#[must_use]
pub fn halflife_to_duration(halflife: f32, initial_value: f32) -> f32 {
    halflife * ((HALFLIFE_EPSILON / initial_value).ln() / 0.5_f32.ln())
}

#[inline]
#[must_use]
pub fn frequency_to_stiffness(frequency: f32) -> f32 {
    square(2.0 * PI * frequency)
}

#[inline]
#[must_use]
pub fn stiffness_to_frequency(stiffness: f32) -> f32 {
    stiffness.sqrt() / (2.0 * PI)
}

/// Halflife at which a spring of `frequency` becomes critically damped.
#[inline]
#[must_use]
pub fn critical_halflife(frequency: f32) -> f32 {
    damping_to_halflife((frequency_to_stiffness(frequency) * 4.0).sqrt())
}

/// Frequency at which a spring with `halflife` becomes critically damped.
#[inline]
#[must_use]
pub fn critical_frequency(halflife: f32) -> f32 {
    stiffness_to_frequency(square(halflife_to_damping(halflife)) / 4.0)
}

#[inline]
#[must_use]
pub fn damping_ratio_to_stiffness(ratio: f32, damping: f32) -> f32 {
    square(damping / (ratio * 2.0))
}

#[inline]
#[must_use]
pub fn damping_ratio_to_damping(ratio: f32, stiffness: f32) -> f32 {
    ratio * 2.0 * stiffness.sqrt()
}

/// Halflife that caps the peak velocity at `v_max` when springing from `x`
/// to `x_goal`.
///
/// Degenerates as `x_goal - x` approaches zero; the spring is already there.
#[inline]
#[must_use]
pub fn maximum_spring_velocity_to_halflife(x: f32, x_goal: f32, v_max: f32) -> f32 {
    damping_to_halflife(2.0 * ((v_max / (x_goal - x)) * E))
}
