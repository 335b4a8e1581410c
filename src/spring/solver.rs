//! Closed-form damped spring solver.
//!
//! Each function advances a [`SpringState`] by `dt` using the exact solution
//! of `x'' = s(g - x) + d(q - x')`, so the result does not depend on how the
//! frame time is subdivided. The spring runs on the displacement from the goal
//! (see [`SpringValue`]), which lets one implementation serve scalars,
//! vectors and orientations.

use super::conversions::{HALFLIFE_EPSILON, damping_ratio_to_stiffness, halflife_to_damping};
use super::value::{SpringState, SpringValue, Tangent};

/// Damping regime of a spring, decided by comparing stiffness to `d² / 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Single repeated root; fastest approach without overshoot.
    Critical,
    /// Complex roots; oscillates around the goal.
    UnderDamped,
    /// Two real roots; approaches the goal slowly.
    OverDamped,
}

impl Regime {
    #[inline]
    #[must_use]
    pub fn classify(stiffness: f32, damping: f32) -> Self {
        Self::classify_eps(stiffness, damping, HALFLIFE_EPSILON)
    }

    /// Springs within `eps` of critical damping take the critical path.
    #[must_use]
    pub fn classify_eps(stiffness: f32, damping: f32, eps: f32) -> Self {
        let excess = stiffness - (damping * damping) / 4.0;
        if excess.abs() < eps {
            Self::Critical
        } else if excess > 0.0 {
            Self::UnderDamped
        } else {
            Self::OverDamped
        }
    }
}

/// Critically damped step toward the fixed point `c`, with `y = d / 2`.
#[inline]
fn critical_step<T: Tangent>(x: T, v: T, c: T, y: f32, dt: f32) -> (T, T) {
    let j0 = x - c;
    let j1 = v + j0 * y;
    let eydt = (-y * dt).exp();

    (
        (j0 + j1 * dt) * eydt + c,
        (v - j1 * (y * dt)) * eydt,
    )
}

/// Exact step for any regime. `x` and `c` are displacements from the goal.
fn solve<T: Tangent>(x: T, v: T, c: T, stiffness: f32, damping: f32, dt: f32) -> (T, T) {
    let y = damping / 2.0;

    match Regime::classify(stiffness, damping) {
        Regime::Critical => critical_step(x, v, c, y, dt),
        Regime::UnderDamped => {
            // j * e^(-yt) * cos(wt + p), expanded into its cosine and sine
            // components so the phase needs no sign fix-up.
            let w = (stiffness - (damping * damping) / 4.0).sqrt();
            let j0 = x - c;
            let b = (v + j0 * y) * (1.0 / w);

            let eydt = (-y * dt).exp();
            let (sin, cos) = (w * dt).sin_cos();

            (
                (j0 * cos + b * sin) * eydt + c,
                (j0 * (-y * cos - w * sin) + b * (w * cos - y * sin)) * eydt,
            )
        }
        Regime::OverDamped => {
            let root = (damping * damping - 4.0 * stiffness).sqrt();
            let y0 = (damping + root) / 2.0;
            let y1 = (damping - root) / 2.0;
            let j1 = ((c - x) * y0 - v) * (1.0 / (y1 - y0));
            let j0 = x - j1 - c;

            let ey0dt = (-y0 * dt).exp();
            let ey1dt = (-y1 * dt).exp();

            (
                j0 * ey0dt + j1 * ey1dt + c,
                j0 * (-y0 * ey0dt) + j1 * (-y1 * ey1dt),
            )
        }
    }
}

/// Spring with an arbitrary damping ratio toward a moving goal.
///
/// `v_goal` is the goal's velocity; the spring settles on
/// `x_goal + d * v_goal / s`. A damping ratio of zero is treated as a tiny
/// positive ratio (an extremely stiff, nearly undamped spring).
#[must_use]
pub fn spring_damper_exact<X: SpringValue>(
    state: SpringState<X, X::Tangent>,
    x_goal: X,
    v_goal: X::Tangent,
    damping_ratio: f32,
    halflife: f32,
    dt: f32,
) -> SpringState<X, X::Tangent> {
    let d = halflife_to_damping(halflife);
    let s = damping_ratio_to_stiffness(damping_ratio.max(HALFLIFE_EPSILON), d);
    let c = v_goal * (d / (s + HALFLIFE_EPSILON));

    let (x, v) = solve(state.value.displacement(x_goal), state.velocity, c, s, d, dt);
    SpringState::new(X::displace(x_goal, x), v)
}

/// Critically damped spring toward a goal moving at `v_goal`.
#[must_use]
pub fn critical_spring_damper_exact<X: SpringValue>(
    state: SpringState<X, X::Tangent>,
    x_goal: X,
    v_goal: X::Tangent,
    halflife: f32,
    dt: f32,
) -> SpringState<X, X::Tangent> {
    let d = halflife_to_damping(halflife);
    let c = v_goal * (d / ((d * d) / 4.0 + HALFLIFE_EPSILON));

    let (x, v) = critical_step(state.value.displacement(x_goal), state.velocity, c, d / 2.0, dt);
    SpringState::new(X::displace(x_goal, x), v)
}

/// Critically damped spring toward a fixed goal.
#[must_use]
pub fn simple_spring_damper_exact<X: SpringValue>(
    state: SpringState<X, X::Tangent>,
    x_goal: X,
    halflife: f32,
    dt: f32,
) -> SpringState<X, X::Tangent> {
    let y = halflife_to_damping(halflife) / 2.0;

    let (x, v) = critical_step(
        state.value.displacement(x_goal),
        state.velocity,
        <X::Tangent as Tangent>::ZERO,
        y,
        dt,
    );
    SpringState::new(X::displace(x_goal, x), v)
}

/// Critically damped spring that decays the state to zero / identity.
///
/// This is the primitive inertialization uses to fade out its offsets.
#[must_use]
pub fn decay_spring_damper_exact<X: SpringValue>(
    state: SpringState<X, X::Tangent>,
    halflife: f32,
    dt: f32,
) -> SpringState<X, X::Tangent> {
    simple_spring_damper_exact(state, X::IDENTITY, halflife, dt)
}
