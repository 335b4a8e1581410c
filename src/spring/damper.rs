//! First-order dampers.
//!
//! Unlike the springs these carry no velocity: each call moves the value a
//! frame-rate independent fraction of the way toward its goal.

use std::f32::consts::LN_2;

use glam::{Quat, Vec3};

use super::conversions::HALFLIFE_EPSILON;

/// Cheap approximation of `e^-x` for `x >= 0`.
#[inline]
#[must_use]
pub fn fast_negexp(x: f32) -> f32 {
    1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x)
}

/// Values that can be blended toward a goal.
pub trait Lerp: Copy {
    fn lerp_to(self, goal: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp_to(self, goal: Self, t: f32) -> Self {
        self + (goal - self) * t
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp_to(self, goal: Self, t: f32) -> Self {
        self.lerp(goal, t)
    }
}

impl Lerp for Quat {
    #[inline]
    fn lerp_to(self, goal: Self, t: f32) -> Self {
        self.slerp(goal, t).normalize()
    }
}

/// Fraction of the remaining distance a damper with `halflife` covers in `dt`.
#[inline]
fn halflife_factor(halflife: f32, dt: f32) -> f32 {
    1.0 - (-(LN_2 * dt) / (halflife + HALFLIFE_EPSILON)).exp()
}

/// Moves `x` toward `goal`, halving the distance every `halflife` seconds.
#[inline]
#[must_use]
pub fn damper_exact<T: Lerp>(x: T, goal: T, halflife: f32, dt: f32) -> T {
    x.lerp_to(goal, halflife_factor(halflife, dt))
}

/// Portion of a pending positional adjustment `g` to apply this frame.
#[inline]
#[must_use]
pub fn damp_adjustment_exact(g: Vec3, halflife: f32, dt: f32) -> Vec3 {
    g * halflife_factor(halflife, dt)
}

/// Portion of a pending rotational adjustment `g` to apply this frame.
#[inline]
#[must_use]
pub fn damp_adjustment_exact_quat(g: Quat, halflife: f32, dt: f32) -> Quat {
    Quat::IDENTITY.lerp_to(g, halflife_factor(halflife, dt))
}

/// Frame-rate independent version of the per-tick damper
/// `x += (goal - x) * damping / ticks_per_second`.
///
/// The simulation tick rate is passed explicitly. When a single tick would
/// overshoot (`damping >= ticks_per_second`) the value snaps to the goal.
#[must_use]
pub fn damper_exponential<T: Lerp>(
    x: T,
    goal: T,
    damping: f32,
    dt: f32,
    ticks_per_second: f32,
) -> T {
    let retention = 1.0 - damping / ticks_per_second;
    if retention.is_nan() || retention <= 0.0 {
        log::debug!(
            "damper_exponential: damping {damping} saturates at {ticks_per_second} ticks/s, snapping to goal"
        );
        return goal;
    }

    x.lerp_to(goal, 1.0 - retention.powf(dt * ticks_per_second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_negexp_close_to_exp() {
        for x in [0.0_f32, 0.1, 0.5, 1.0] {
            assert!((fast_negexp(x) - (-x).exp()).abs() < 1e-3, "x = {x}");
        }
    }
}
