use std::ops::{Add, Mul, Sub};

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::math::quat::{quat_abs, quat_from_scaled_angle_axis, quat_to_scaled_angle_axis};

/// A vector space the spring equations can be evaluated in.
///
/// Implemented for `f32` and `Vec3`. Orientations are handled by mapping them
/// into `Vec3` through [`SpringValue`].
pub trait Tangent:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f32, Output = Self>
{
    const ZERO: Self;
}

impl Tangent for f32 {
    const ZERO: Self = 0.0;
}

impl Tangent for Vec3 {
    const ZERO: Self = Vec3::ZERO;
}

/// A value that can be driven by a spring.
///
/// The spring runs on the displacement between the value and its goal,
/// expressed in [`SpringValue::Tangent`]. For scalars and vectors that is plain
/// subtraction; for orientations it is the scaled angle-axis of the shortest
/// rotation from the goal, so direction and magnitude evolve together
/// instead of blending components independently.
pub trait SpringValue: Copy {
    type Tangent: Tangent;

    /// Resting value of a decay spring (zero / identity rotation).
    const IDENTITY: Self;

    /// Displacement of `self` away from `goal`.
    fn displacement(self, goal: Self) -> Self::Tangent;

    /// Inverse of [`displacement`](Self::displacement): `goal` moved by `offset`.
    fn displace(goal: Self, offset: Self::Tangent) -> Self;
}

impl SpringValue for f32 {
    type Tangent = f32;
    const IDENTITY: Self = 0.0;

    #[inline]
    fn displacement(self, goal: Self) -> f32 {
        self - goal
    }

    #[inline]
    fn displace(goal: Self, offset: f32) -> Self {
        goal + offset
    }
}

impl SpringValue for Vec3 {
    type Tangent = Vec3;
    const IDENTITY: Self = Vec3::ZERO;

    #[inline]
    fn displacement(self, goal: Self) -> Vec3 {
        self - goal
    }

    #[inline]
    fn displace(goal: Self, offset: Vec3) -> Self {
        goal + offset
    }
}

impl SpringValue for Quat {
    type Tangent = Vec3;
    const IDENTITY: Self = Quat::IDENTITY;

    #[inline]
    fn displacement(self, goal: Self) -> Vec3 {
        quat_to_scaled_angle_axis(quat_abs(self * goal.inverse()))
    }

    #[inline]
    fn displace(goal: Self, offset: Vec3) -> Self {
        quat_from_scaled_angle_axis(offset) * goal
    }
}

/// Value and rate of change of a spring, owned by the caller between frames.
///
/// For orientations `X = Quat` and the velocity is an angular velocity in
/// scaled angle-axis form (`V = Vec3`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpringState<X, V = X> {
    pub value: X,
    pub velocity: V,
}

pub type ScalarState = SpringState<f32>;
pub type VectorState = SpringState<Vec3>;
pub type OrientationState = SpringState<Quat, Vec3>;

impl<X, V> SpringState<X, V> {
    #[inline]
    #[must_use]
    pub const fn new(value: X, velocity: V) -> Self {
        Self { value, velocity }
    }
}

impl<X: SpringValue> SpringState<X, X::Tangent> {
    /// State holding `value` with zero velocity.
    #[inline]
    #[must_use]
    pub const fn at_rest(value: X) -> Self {
        Self {
            value,
            velocity: <X::Tangent as Tangent>::ZERO,
        }
    }
}

/// State of the timed spring: value, velocity and the linear-interpolation
/// anchor it tracks toward the goal.
///
/// The anchor cannot be recovered from the value, so it must be stored
/// alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TimedState<T> {
    pub value: T,
    pub velocity: T,
    pub anchor: T,
}

impl<T: Tangent> TimedState<T> {
    #[inline]
    #[must_use]
    pub const fn new(value: T, velocity: T, anchor: T) -> Self {
        Self {
            value,
            velocity,
            anchor,
        }
    }

    /// Resting state whose anchor starts at `value`.
    #[inline]
    #[must_use]
    pub const fn at_rest(value: T) -> Self {
        Self {
            value,
            velocity: T::ZERO,
            anchor: value,
        }
    }

    #[inline]
    #[must_use]
    pub fn spring(&self) -> SpringState<T> {
        SpringState::new(self.value, self.velocity)
    }
}
