#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

//! Myth Spring
//!
//! Closed-form damped springs for smoothing scalars, positions and
//! orientations toward moving goals in a real-time loop, plus the quaternion
//! exponential map and the inertialization blending built on top of them.
//!
//! - [`spring`]: parameter conversions, exact spring steps, timed springs, dampers
//! - [`math`]: quaternion exp/log and scaled angle-axis conversions
//! - [`inertialization`]: offset-based blending across trajectory switches
//! - [`dispatch`]: entry points for dynamically shaped operands
//! - [`settings`]: validated, serializable spring parameters
//!
//! All functions are pure: state is passed in by value and the advanced state
//! is returned, so independent entities can be stepped on any thread.

pub mod dispatch;
pub mod errors;
pub mod inertialization;
pub mod math;
pub mod settings;
pub mod spring;

pub use dispatch::{Operand, SpringOutput};
pub use errors::{Result, SpringError};
pub use inertialization::{
    InertializationOffset, Inertialize, RootState, inertialize_transition, inertialize_update,
};
pub use settings::SpringSettings;
pub use spring::{
    OrientationState, ScalarState, SpringState, SpringValue, TimedState, VectorState,
    critical_spring_damper_exact, decay_spring_damper_exact, simple_spring_damper_exact,
    spring_damper_exact, timed_spring_damper_exact,
};
