//! Inertialization Blending
//!
//! Hides the discontinuity when the trajectory driving an entity is switched
//! (for example when the animation system jumps to a new clip). At the switch
//! the difference between the old and new trajectories is stored as an
//! offset; every following frame the offset decays to zero with a decay spring
//! and is added on top of the new trajectory.
//!
//! # Protocol
//!
//! 1. Start tracking with a zero/identity offset (`Default`), so updates are a
//!    pass-through.
//! 2. On a switch, call [`inertialize_transition`] with the outgoing (`src`)
//!    and incoming (`dst`) states. Offsets compose, so repeated switches
//!    accumulate instead of overwriting each other.
//! 3. Each frame, call [`inertialize_update`] with the incoming trajectory's
//!    state and use the returned output.
//!
//! ```rust,ignore
//! use glam::Vec3;
//! use myth_spring::inertialization::{inertialize_transition, inertialize_update};
//! use myth_spring::spring::VectorState;
//!
//! let mut offset = VectorState::default();
//! offset = inertialize_transition(offset, current_pose, new_clip_pose);
//!
//! let (next_offset, output) = inertialize_update(offset, new_clip_pose, 0.1, dt);
//! offset = next_offset;
//! ```

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::math::quat::quat_abs;
use crate::spring::{SpringState, SpringValue, decay_spring_damper_exact};

/// Values whose trajectory switches can be inertialized.
pub trait Inertialize: SpringValue {
    /// Offset that maps `dst` onto `src` composed with the existing `offset`.
    fn transition_offset(offset: Self, src: Self, dst: Self) -> Self;

    /// Applies a (decayed) offset state to an input state.
    fn apply_offset(
        offset: SpringState<Self, Self::Tangent>,
        input: SpringState<Self, Self::Tangent>,
    ) -> SpringState<Self, Self::Tangent>;
}

impl Inertialize for f32 {
    #[inline]
    fn transition_offset(offset: Self, src: Self, dst: Self) -> Self {
        (src + offset) - dst
    }

    #[inline]
    fn apply_offset(offset: SpringState<f32>, input: SpringState<f32>) -> SpringState<f32> {
        SpringState::new(input.value + offset.value, input.velocity + offset.velocity)
    }
}

impl Inertialize for Vec3 {
    #[inline]
    fn transition_offset(offset: Self, src: Self, dst: Self) -> Self {
        calculate_offset_vec3(src, dst, offset)
    }

    #[inline]
    fn apply_offset(offset: SpringState<Vec3>, input: SpringState<Vec3>) -> SpringState<Vec3> {
        SpringState::new(input.value + offset.value, input.velocity + offset.velocity)
    }
}

impl Inertialize for Quat {
    #[inline]
    fn transition_offset(offset: Self, src: Self, dst: Self) -> Self {
        calculate_offset_quat(src, dst, offset)
    }

    #[inline]
    fn apply_offset(
        offset: SpringState<Quat, Vec3>,
        input: SpringState<Quat, Vec3>,
    ) -> SpringState<Quat, Vec3> {
        // The angular velocity offset lives in the offset's frame.
        SpringState::new(
            (offset.value * input.value).normalize(),
            offset.velocity + offset.value * input.velocity,
        )
    }
}

/// Positional offset between `src` and `dst`, composed with `offset`.
#[inline]
#[must_use]
pub fn calculate_offset_vec3(src: Vec3, dst: Vec3, offset: Vec3) -> Vec3 {
    (src + offset) - dst
}

/// Rotational offset between `src` and `dst`, composed with `offset`.
#[inline]
#[must_use]
pub fn calculate_offset_quat(src: Quat, dst: Quat, offset: Quat) -> Quat {
    quat_abs((offset * src) * dst.inverse())
}

/// Records a switch from the `src` trajectory to `dst` into `offset`.
#[must_use]
pub fn inertialize_transition<X: Inertialize>(
    offset: SpringState<X, X::Tangent>,
    src: SpringState<X, X::Tangent>,
    dst: SpringState<X, X::Tangent>,
) -> SpringState<X, X::Tangent> {
    SpringState::new(
        X::transition_offset(offset.value, src.value, dst.value),
        (src.velocity + offset.velocity) - dst.velocity,
    )
}

/// Decays `offset` by `dt` and applies it to `input`.
///
/// Returns the decayed offset, to be stored for the next frame, and the
/// blended output.
#[must_use]
pub fn inertialize_update<X: Inertialize>(
    offset: SpringState<X, X::Tangent>,
    input: SpringState<X, X::Tangent>,
    halflife: f32,
    dt: f32,
) -> (SpringState<X, X::Tangent>, SpringState<X, X::Tangent>) {
    let offset = decay_spring_damper_exact(offset, halflife, dt);
    (offset, X::apply_offset(offset, input))
}

/// Position and orientation of a tracked root, with their rates of change.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RootState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub rotation: Quat,
    pub angular_velocity: Vec3,
}

impl RootState {
    #[must_use]
    pub const fn new(position: Vec3, velocity: Vec3, rotation: Quat, angular_velocity: Vec3) -> Self {
        Self {
            position,
            velocity,
            rotation,
            angular_velocity,
        }
    }

    #[inline]
    #[must_use]
    pub const fn translation(&self) -> SpringState<Vec3> {
        SpringState::new(self.position, self.velocity)
    }

    #[inline]
    #[must_use]
    pub const fn orientation(&self) -> SpringState<Quat, Vec3> {
        SpringState::new(self.rotation, self.angular_velocity)
    }

    fn from_parts(translation: SpringState<Vec3>, orientation: SpringState<Quat, Vec3>) -> Self {
        Self::new(
            translation.value,
            translation.velocity,
            orientation.value,
            orientation.velocity,
        )
    }
}

/// Accumulated position and rotation offsets of an inertialized root.
///
/// `Default` is the zero/identity offset a newly tracked entity starts with.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InertializationOffset {
    pub position_offset: Vec3,
    pub rotation_offset: Quat,
    pub velocity_offset: Vec3,
    pub angular_offset: Vec3,
}

impl InertializationOffset {
    #[inline]
    #[must_use]
    pub const fn translation(&self) -> SpringState<Vec3> {
        SpringState::new(self.position_offset, self.velocity_offset)
    }

    #[inline]
    #[must_use]
    pub const fn orientation(&self) -> SpringState<Quat, Vec3> {
        SpringState::new(self.rotation_offset, self.angular_offset)
    }

    fn from_parts(translation: SpringState<Vec3>, orientation: SpringState<Quat, Vec3>) -> Self {
        Self {
            position_offset: translation.value,
            rotation_offset: orientation.value,
            velocity_offset: translation.velocity,
            angular_offset: orientation.velocity,
        }
    }

    /// Records a switch from `src` to `dst` for both channels.
    #[must_use]
    pub fn transition(&self, src: &RootState, dst: &RootState) -> Self {
        Self::from_parts(
            inertialize_transition(self.translation(), src.translation(), dst.translation()),
            inertialize_transition(self.orientation(), src.orientation(), dst.orientation()),
        )
    }

    /// Decays both channels by `dt` and applies them to `input`.
    #[must_use]
    pub fn update(&self, input: &RootState, halflife: f32, dt: f32) -> (Self, RootState) {
        let (translation, position_out) =
            inertialize_update(self.translation(), input.translation(), halflife, dt);
        let (orientation, rotation_out) =
            inertialize_update(self.orientation(), input.orientation(), halflife, dt);

        (
            Self::from_parts(translation, orientation),
            RootState::from_parts(position_out, rotation_out),
        )
    }

    /// Whether every channel has decayed within `tolerance` of zero/identity.
    #[must_use]
    pub fn is_settled(&self, tolerance: f32) -> bool {
        self.position_offset.length() < tolerance
            && self.velocity_offset.length() < tolerance
            && self.angular_offset.length() < tolerance
            && self.rotation_offset.displacement(Quat::IDENTITY).length() < tolerance
    }
}
