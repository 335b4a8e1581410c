//! Spring that reaches its goal at a requested time.
//!
//! Instead of chasing the goal directly, the spring tracks a point moving
//! linearly from the anchor to the goal, looking `apprehension` halflives
//! ahead so it does not lag behind the interpolation.

use super::conversions::HALFLIFE_EPSILON;
use super::solver::simple_spring_damper_exact;
use super::value::{SpringState, SpringValue, Tangent, TimedState};

/// Default lookahead, in halflives.
pub const DEFAULT_APPREHENSION: f32 = 2.0;

/// Advances a timed spring by `dt`.
///
/// `t_goal` is the time remaining until `x_goal` should be reached; callers
/// decrease it by `dt` every frame. The returned state carries the advanced
/// anchor. Once the deadline has passed (`t_goal <= 0`) the spring keeps
/// tracking `x_goal`, including on zero-length frames.
#[must_use]
pub fn timed_spring_damper_exact<T>(
    state: TimedState<T>,
    x_goal: T,
    t_goal: f32,
    halflife: f32,
    dt: f32,
    apprehension: f32,
) -> TimedState<T>
where
    T: Tangent + SpringValue<Tangent = T>,
{
    let min_time = t_goal.max(dt).max(HALFLIFE_EPSILON);
    let v_goal = (x_goal - state.anchor) * (1.0 / min_time);

    let t_goal_future = dt + apprehension * halflife;
    let x_goal_future = if t_goal_future < t_goal {
        state.anchor + v_goal * t_goal_future
    } else {
        x_goal
    };

    let SpringState { value, velocity } =
        simple_spring_damper_exact(state.spring(), x_goal_future, halflife, dt);

    TimedState::new(value, velocity, state.anchor + v_goal * dt)
}
