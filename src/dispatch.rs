//! Shape-erased entry points.
//!
//! Scripting layers and editor bindings hand over values without static
//! types. [`Operand`] carries the concrete shape, and each entry point matches
//! the combination it received onto the typed solver. Results come back as a
//! small ordered list `(value, velocity[, anchor])`.
//!
//! Supported combinations (value, velocity, goal):
//!
//! | Shape       | value         | velocity | goal          |
//! |-------------|---------------|----------|---------------|
//! | scalar      | `Scalar`      | `Scalar` | `Scalar`      |
//! | vector      | `Vector`      | `Vector` | `Vector`      |
//! | orientation | `Orientation` | `Vector` | `Orientation` |
//!
//! Any other combination is a no-op that returns an empty output.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::errors::SpringError;
use crate::spring::{
    Lerp, SpringState, TimedState, critical_spring_damper_exact, damper_exact,
    decay_spring_damper_exact, simple_spring_damper_exact, spring_damper_exact,
    timed_spring_damper_exact,
};

/// A spring operand of one of the supported shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    Scalar(f32),
    Vector(Vec3),
    Orientation(Quat),
}

impl Operand {
    /// Human readable shape name.
    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Vector(_) => "vector",
            Self::Orientation(_) => "orientation",
        }
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec3> for Operand {
    fn from(value: Vec3) -> Self {
        Self::Vector(value)
    }
}

impl From<Quat> for Operand {
    fn from(value: Quat) -> Self {
        Self::Orientation(value)
    }
}

impl TryFrom<Operand> for f32 {
    type Error = SpringError;

    fn try_from(operand: Operand) -> Result<Self, Self::Error> {
        match operand {
            Operand::Scalar(value) => Ok(value),
            other => Err(SpringError::ShapeMismatch {
                expected: "scalar",
                found: other.shape(),
            }),
        }
    }
}

impl TryFrom<Operand> for Vec3 {
    type Error = SpringError;

    fn try_from(operand: Operand) -> Result<Self, Self::Error> {
        match operand {
            Operand::Vector(value) => Ok(value),
            other => Err(SpringError::ShapeMismatch {
                expected: "vector",
                found: other.shape(),
            }),
        }
    }
}

impl TryFrom<Operand> for Quat {
    type Error = SpringError;

    fn try_from(operand: Operand) -> Result<Self, Self::Error> {
        match operand {
            Operand::Orientation(value) => Ok(value),
            other => Err(SpringError::ShapeMismatch {
                expected: "orientation",
                found: other.shape(),
            }),
        }
    }
}

/// `(value, velocity[, anchor])`, empty when the operands did not match.
pub type SpringOutput = SmallVec<[Operand; 3]>;

fn output<X: Into<Operand>, V: Into<Operand>>(state: SpringState<X, V>) -> SpringOutput {
    smallvec![state.value.into(), state.velocity.into()]
}

fn mismatch(entry: &str, operands: &[Operand]) -> SpringOutput {
    let shapes: SmallVec<[&str; 4]> = operands.iter().map(Operand::shape).collect();
    log::debug!("{entry}: unsupported operand shapes {shapes:?}, ignoring call");
    SpringOutput::new()
}

/// Shape-erased [`simple_spring_damper_exact`].
#[must_use]
pub fn simple_spring_damper(
    x: Operand,
    v: Operand,
    x_goal: Operand,
    halflife: f32,
    dt: f32,
) -> SpringOutput {
    match (x, v, x_goal) {
        (Operand::Scalar(x), Operand::Scalar(v), Operand::Scalar(g)) => output(
            simple_spring_damper_exact(SpringState::new(x, v), g, halflife, dt),
        ),
        (Operand::Vector(x), Operand::Vector(v), Operand::Vector(g)) => output(
            simple_spring_damper_exact(SpringState::new(x, v), g, halflife, dt),
        ),
        (Operand::Orientation(x), Operand::Vector(v), Operand::Orientation(g)) => output(
            simple_spring_damper_exact(SpringState::new(x, v), g, halflife, dt),
        ),
        _ => mismatch("simple_spring_damper", &[x, v, x_goal]),
    }
}

/// Shape-erased [`decay_spring_damper_exact`].
#[must_use]
pub fn decay_spring_damper(x: Operand, v: Operand, halflife: f32, dt: f32) -> SpringOutput {
    match (x, v) {
        (Operand::Scalar(x), Operand::Scalar(v)) => {
            output(decay_spring_damper_exact(SpringState::new(x, v), halflife, dt))
        }
        (Operand::Vector(x), Operand::Vector(v)) => {
            output(decay_spring_damper_exact(SpringState::new(x, v), halflife, dt))
        }
        (Operand::Orientation(x), Operand::Vector(v)) => {
            output(decay_spring_damper_exact(SpringState::new(x, v), halflife, dt))
        }
        _ => mismatch("decay_spring_damper", &[x, v]),
    }
}

/// Shape-erased [`critical_spring_damper_exact`].
///
/// The goal velocity has the velocity's shape (`Vector` for orientations).
#[must_use]
pub fn critical_spring_damper(
    x: Operand,
    v: Operand,
    x_goal: Operand,
    v_goal: Operand,
    halflife: f32,
    dt: f32,
) -> SpringOutput {
    match (x, v, x_goal, v_goal) {
        (Operand::Scalar(x), Operand::Scalar(v), Operand::Scalar(g), Operand::Scalar(q)) => output(
            critical_spring_damper_exact(SpringState::new(x, v), g, q, halflife, dt),
        ),
        (Operand::Vector(x), Operand::Vector(v), Operand::Vector(g), Operand::Vector(q)) => output(
            critical_spring_damper_exact(SpringState::new(x, v), g, q, halflife, dt),
        ),
        (
            Operand::Orientation(x),
            Operand::Vector(v),
            Operand::Orientation(g),
            Operand::Vector(q),
        ) => output(critical_spring_damper_exact(
            SpringState::new(x, v),
            g,
            q,
            halflife,
            dt,
        )),
        _ => mismatch("critical_spring_damper", &[x, v, x_goal, v_goal]),
    }
}

/// Shape-erased [`spring_damper_exact`].
#[must_use]
pub fn spring_damper(
    x: Operand,
    v: Operand,
    x_goal: Operand,
    v_goal: Operand,
    damping_ratio: f32,
    halflife: f32,
    dt: f32,
) -> SpringOutput {
    match (x, v, x_goal, v_goal) {
        (Operand::Scalar(x), Operand::Scalar(v), Operand::Scalar(g), Operand::Scalar(q)) => {
            output(spring_damper_exact(
                SpringState::new(x, v),
                g,
                q,
                damping_ratio,
                halflife,
                dt,
            ))
        }
        (Operand::Vector(x), Operand::Vector(v), Operand::Vector(g), Operand::Vector(q)) => {
            output(spring_damper_exact(
                SpringState::new(x, v),
                g,
                q,
                damping_ratio,
                halflife,
                dt,
            ))
        }
        (
            Operand::Orientation(x),
            Operand::Vector(v),
            Operand::Orientation(g),
            Operand::Vector(q),
        ) => output(spring_damper_exact(
            SpringState::new(x, v),
            g,
            q,
            damping_ratio,
            halflife,
            dt,
        )),
        _ => mismatch("spring_damper", &[x, v, x_goal, v_goal]),
    }
}

/// Shape-erased [`timed_spring_damper_exact`] for scalars and vectors.
///
/// Returns `(value, velocity, anchor)`.
#[must_use]
pub fn timed_spring_damper(
    x: Operand,
    v: Operand,
    xi: Operand,
    x_goal: Operand,
    t_goal: f32,
    halflife: f32,
    dt: f32,
    apprehension: f32,
) -> SpringOutput {
    match (x, v, xi, x_goal) {
        (Operand::Scalar(x), Operand::Scalar(v), Operand::Scalar(xi), Operand::Scalar(g)) => {
            let state = timed_spring_damper_exact(
                TimedState::new(x, v, xi),
                g,
                t_goal,
                halflife,
                dt,
                apprehension,
            );
            smallvec![state.value.into(), state.velocity.into(), state.anchor.into()]
        }
        (Operand::Vector(x), Operand::Vector(v), Operand::Vector(xi), Operand::Vector(g)) => {
            let state = timed_spring_damper_exact(
                TimedState::new(x, v, xi),
                g,
                t_goal,
                halflife,
                dt,
                apprehension,
            );
            smallvec![state.value.into(), state.velocity.into(), state.anchor.into()]
        }
        _ => mismatch("timed_spring_damper", &[x, v, xi, x_goal]),
    }
}

/// Shape-erased [`damper_exact`]. `None` when the shapes differ.
#[must_use]
pub fn damper(x: Operand, goal: Operand, halflife: f32, dt: f32) -> Option<Operand> {
    fn step<T: Lerp + Into<Operand>>(x: T, goal: T, halflife: f32, dt: f32) -> Option<Operand> {
        Some(damper_exact(x, goal, halflife, dt).into())
    }

    match (x, goal) {
        (Operand::Scalar(x), Operand::Scalar(g)) => step(x, g, halflife, dt),
        (Operand::Vector(x), Operand::Vector(g)) => step(x, g, halflife, dt),
        (Operand::Orientation(x), Operand::Orientation(g)) => step(x, g, halflife, dt),
        _ => {
            log::debug!(
                "damper: unsupported operand shapes [{}, {}], ignoring call",
                x.shape(),
                goal.shape()
            );
            None
        }
    }
}
