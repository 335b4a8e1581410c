//! Math Module
//!
//! Orientation helpers layered on top of `glam`:
//!
//! - [`quat`]: quaternion exponential/logarithm maps, shortest-arc
//!   canonicalization and scaled angle-axis conversions

pub mod quat;

pub use quat::{
    QUAT_EPSILON, quat_abs, quat_differentiate_angular_velocity, quat_exp, quat_exp_eps,
    quat_from_scaled_angle_axis, quat_log, quat_log_eps, quat_to_scaled_angle_axis,
};
