//! Quaternion Exponential Map Tests
//!
//! Tests for:
//! - exp/log and scaled angle-axis round trips
//! - Agreement with glam's axis-angle constructors
//! - Sign canonicalization (quat_abs)
//! - Finite-difference angular velocity

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

use myth_spring::math::quat::*;

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-5;

fn vec3_approx(a: Vec3, b: Vec3, tolerance: f32) -> bool {
    (a - b).abs().max_element() < tolerance
}

fn quat_approx(a: Quat, b: Quat, tolerance: f32) -> bool {
    (a.x - b.x).abs() < tolerance
        && (a.y - b.y).abs() < tolerance
        && (a.z - b.z).abs() < tolerance
        && (a.w - b.w).abs() < tolerance
}

fn sample_rotations() -> Vec<Quat> {
    let axes = [
        Vec3::X,
        Vec3::Y,
        Vec3::Z,
        Vec3::new(1.0, 2.0, -3.0).normalize(),
        Vec3::new(-0.5, 0.1, 0.9).normalize(),
    ];
    let angles = [1e-4_f32, 0.01, 0.5, FRAC_PI_2, 2.5, 3.1];

    axes.iter()
        .flat_map(|&axis| angles.iter().map(move |&angle| Quat::from_axis_angle(axis, angle)))
        .collect()
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn scaled_angle_axis_round_trip() {
    for q in sample_rotations() {
        let back = quat_from_scaled_angle_axis(quat_to_scaled_angle_axis(q));
        assert!(
            quat_approx(quat_abs(back), quat_abs(q), EPSILON),
            "{q:?} -> {back:?}"
        );
    }
}

#[test]
fn scaled_angle_axis_round_trip_negated() {
    // -q is the same rotation; the round trip may land on either sign.
    for q in sample_rotations() {
        let back = quat_from_scaled_angle_axis(quat_to_scaled_angle_axis(-q));
        assert!(quat_approx(quat_abs(back), quat_abs(q), EPSILON), "{q:?}");
    }
}

#[test]
fn log_inverts_exp() {
    let vectors = [
        Vec3::ZERO,
        Vec3::new(1e-6, 0.0, 0.0),
        Vec3::new(0.3, -0.2, 0.1),
        Vec3::new(0.0, 1.2, 0.0),
        Vec3::new(-0.7, 0.4, 0.9),
    ];

    for v in vectors {
        let back = quat_log(quat_exp(v));
        assert!(vec3_approx(back, v, EPSILON), "{v} -> {back}");
    }
}

#[test]
fn scaled_angle_axis_recovers_angle() {
    let axis = Vec3::new(0.0, 0.6, 0.8);
    let q = Quat::from_axis_angle(axis, 1.3);
    let v = quat_to_scaled_angle_axis(q);

    assert!((v.length() - 1.3).abs() < EPSILON);
    assert!(vec3_approx(v.normalize(), axis, EPSILON));
}

#[test]
fn from_scaled_angle_axis_matches_glam() {
    for v in [
        Vec3::new(0.2, 0.0, 0.0),
        Vec3::new(0.5, -1.0, 0.25),
        Vec3::new(0.0, 0.0, 3.0),
    ] {
        let ours = quat_from_scaled_angle_axis(v);
        let glam = Quat::from_scaled_axis(v);
        assert!(quat_approx(ours, glam, EPSILON), "{v}");
    }
}

#[test]
fn exp_output_is_unit_length() {
    for v in [Vec3::new(1e-9, 2e-9, 0.0), Vec3::new(10.0, -3.0, 4.0)] {
        assert!((quat_exp(v).length() - 1.0).abs() < EPSILON);
    }
}

#[test]
fn log_of_identity_is_zero() {
    assert_eq!(quat_log(Quat::IDENTITY), Vec3::ZERO);
    assert_eq!(quat_to_scaled_angle_axis(Quat::IDENTITY), Vec3::ZERO);
}

#[test]
fn log_tolerates_drifted_scalar_part() {
    // Slightly denormalized input must not produce NaN.
    let q = Quat::from_xyzw(1e-4, 0.0, 0.0, 1.000_001);
    let v = quat_log(q);
    assert!(v.is_finite());
}

#[test]
fn explicit_epsilon_variants_agree_with_defaults() {
    let v = Vec3::new(0.1, 0.2, -0.3);
    assert_eq!(quat_exp_eps(v, QUAT_EPSILON), quat_exp(v));

    let q = Quat::from_rotation_x(0.4);
    assert_eq!(quat_log_eps(q, QUAT_EPSILON), quat_log(q));
}

// ============================================================================
// Sign Canonicalization
// ============================================================================

#[test]
fn abs_keeps_positive_scalar() {
    let q = Quat::from_rotation_z(0.7);
    assert!(quat_approx(quat_abs(q), q, EPSILON));
}

#[test]
fn abs_flips_negative_scalar_without_changing_rotation() {
    let q = -Quat::from_rotation_z(0.7);
    let a = quat_abs(q);

    assert!(a.w >= 0.0);
    let p = Vec3::new(1.0, 2.0, 3.0);
    assert!(vec3_approx(a * p, q * p, EPSILON));
}

// ============================================================================
// Angular Velocity
// ============================================================================

#[test]
fn differentiate_angular_velocity_recovers_rate() {
    let dt = 1.0 / 60.0;
    let rate = 0.5;
    let curr = Quat::from_rotation_y(0.2);
    let next = Quat::from_rotation_y(0.2 + rate * dt);

    let w = quat_differentiate_angular_velocity(next, curr, dt);
    assert!(vec3_approx(w, Vec3::new(0.0, rate, 0.0), 1e-3), "w = {w}");
}

#[test]
fn differentiate_angular_velocity_takes_shortest_path() {
    let q = Quat::from_rotation_x(1.0);
    let w = quat_differentiate_angular_velocity(-q, q, 1.0 / 60.0);
    assert!(w.length() < 1e-3, "w = {w}");
}

#[test]
fn differentiate_then_integrate() {
    let dt = 0.1;
    let curr = Quat::from_rotation_x(0.3);
    let next = Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0).normalize(), 0.6);

    let w = quat_differentiate_angular_velocity(next, curr, dt);
    let integrated = quat_from_scaled_angle_axis(w * dt) * curr;

    assert!(quat_approx(quat_abs(integrated), quat_abs(next), 1e-4));
}

#[test]
fn differentiate_over_zero_dt_is_not_finite() {
    let curr = Quat::from_rotation_x(0.3);
    let next = Quat::from_rotation_x(0.4);

    let w = quat_differentiate_angular_velocity(next, curr, 0.0);
    assert!(!w.is_finite());
}
