//! Spring Module
//!
//! Analytic damped springs for smoothing values toward a moving goal:
//!
//! - [`conversions`]: halflife / damping / stiffness / frequency parameterization
//! - [`solver`]: exact critically, under- and over-damped spring steps
//! - [`timed`]: spring that reaches its goal at a requested time
//! - [`damper`]: velocity-free exponential dampers
//!
//! Every step function takes the current state by value and returns the
//! advanced state. Nothing is retained between calls, so the caller owns all
//! per-entity state.
//!
//! ```rust,ignore
//! use glam::Vec3;
//! use myth_spring::spring::{SpringState, simple_spring_damper_exact};
//!
//! let mut state = SpringState::at_rest(Vec3::ZERO);
//! for _ in 0..60 {
//!     state = simple_spring_damper_exact(state, Vec3::X, 0.1, 1.0 / 60.0);
//! }
//! ```

pub mod conversions;
pub mod damper;
pub mod solver;
pub mod timed;
mod value;

pub use conversions::*;
pub use damper::{
    Lerp, damp_adjustment_exact, damp_adjustment_exact_quat, damper_exact, damper_exponential,
    fast_negexp,
};
pub use solver::{
    Regime, critical_spring_damper_exact, decay_spring_damper_exact, simple_spring_damper_exact,
    spring_damper_exact,
};
pub use timed::{DEFAULT_APPREHENSION, timed_spring_damper_exact};
pub use value::{
    OrientationState, ScalarState, SpringState, SpringValue, Tangent, TimedState, VectorState,
};
