//! Settings Tests
//!
//! Tests for:
//! - Defaults and builder methods
//! - JSON loading (partial documents, malformed input)
//! - Parameter validation
//! - Derived parameters and stepping helpers

use glam::{Quat, Vec3};

use myth_spring::inertialization::{InertializationOffset, RootState};
use myth_spring::settings::SpringSettings;
use myth_spring::spring::{
    SpringState, TimedState, halflife_to_damping, simple_spring_damper_exact, spring_damper_exact,
    timed_spring_damper_exact,
};
use myth_spring::SpringError;

const EPSILON: f32 = 1e-5;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ============================================================================
// Defaults & Builders
// ============================================================================

#[test]
fn defaults_are_valid() -> anyhow::Result<()> {
    let settings = SpringSettings::default();
    settings.validate()?;

    assert_eq!(settings.halflife, 0.1);
    assert_eq!(settings.damping_ratio, 1.0);
    assert_eq!(settings.apprehension, 2.0);
    assert_eq!(settings.inertialization_halflife, 0.1);
    Ok(())
}

#[test]
fn builders_override_fields() {
    let settings = SpringSettings::default()
        .with_halflife(0.3)
        .with_damping_ratio(0.5)
        .with_apprehension(1.0)
        .with_inertialization_halflife(0.05);

    assert_eq!(settings.halflife, 0.3);
    assert_eq!(settings.damping_ratio, 0.5);
    assert_eq!(settings.apprehension, 1.0);
    assert_eq!(settings.inertialization_halflife, 0.05);
}

// ============================================================================
// JSON Loading
// ============================================================================

#[test]
fn partial_json_fills_defaults() -> anyhow::Result<()> {
    let settings = SpringSettings::from_json(r#"{ "halflife": 0.25 }"#)?;

    assert_eq!(settings.halflife, 0.25);
    assert_eq!(settings.damping_ratio, 1.0);
    assert_eq!(settings.apprehension, 2.0);
    Ok(())
}

#[test]
fn json_round_trip() -> anyhow::Result<()> {
    let settings = SpringSettings::default().with_damping_ratio(0.7);
    let json = serde_json::to_string(&settings)?;
    let back = SpringSettings::from_json(&json)?;
    assert_eq!(back, settings);
    Ok(())
}

#[test]
fn malformed_json_is_config_error() {
    init_logger();

    let err = SpringSettings::from_json("{ halflife: ").unwrap_err();
    assert!(matches!(err, SpringError::Config(_)));
    assert!(err.to_string().starts_with("Config parse error"));
}

#[test]
fn negative_halflife_is_rejected() {
    init_logger();

    let err = SpringSettings::from_json(r#"{ "halflife": -0.1 }"#).unwrap_err();
    match err {
        SpringError::InvalidParameter { name, value, .. } => {
            assert_eq!(name, "halflife");
            assert_eq!(value, -0.1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_finite_parameter_is_rejected() {
    init_logger();

    let settings = SpringSettings::default().with_apprehension(f32::INFINITY);
    let err = settings.validate().unwrap_err();
    assert!(matches!(
        err,
        SpringError::InvalidParameter {
            name: "apprehension",
            reason: "must be finite",
            ..
        }
    ));
}

// ============================================================================
// Derived Parameters
// ============================================================================

#[test]
fn critical_settings_derive_quarter_damping_squared() {
    let settings = SpringSettings::default().with_halflife(0.2);
    let damping = settings.damping();

    assert!((damping - halflife_to_damping(0.2)).abs() < EPSILON);
    assert!((settings.stiffness() - damping * damping / 4.0).abs() < 1e-3 * settings.stiffness());
    assert!(settings.frequency() > 0.0);
}

// ============================================================================
// Stepping
// ============================================================================

#[test]
fn advance_uses_simple_spring_when_critical() {
    let settings = SpringSettings::default();
    let state = SpringState::new(Vec3::ZERO, Vec3::X);

    let stepped = settings.advance(state, Vec3::ONE, 1.0 / 60.0);
    let direct = simple_spring_damper_exact(state, Vec3::ONE, settings.halflife, 1.0 / 60.0);
    assert_eq!(stepped, direct);
}

#[test]
fn advance_uses_general_spring_otherwise() {
    let settings = SpringSettings::default().with_damping_ratio(0.4);
    let state = SpringState::new(0.0_f32, 0.0);

    let stepped = settings.advance(state, 1.0, 1.0 / 60.0);
    let direct = spring_damper_exact(state, 1.0, 0.0, 0.4, settings.halflife, 1.0 / 60.0);
    assert_eq!(stepped, direct);
}

#[test]
fn advance_handles_orientations() {
    let settings = SpringSettings::default();
    let mut state = SpringState::new(Quat::from_rotation_y(1.0), Vec3::ZERO);

    for _ in 0..240 {
        state = settings.advance(state, Quat::IDENTITY, 1.0 / 60.0);
    }

    assert!(state.value.angle_between(Quat::IDENTITY) < 1e-3);
}

#[test]
fn advance_timed_uses_configured_apprehension() {
    let settings = SpringSettings::default().with_apprehension(1.0);
    let state = TimedState::at_rest(0.0_f32);

    let stepped = settings.advance_timed(state, 1.0, 0.5, 1.0 / 60.0);
    let direct = timed_spring_damper_exact(state, 1.0, 0.5, settings.halflife, 1.0 / 60.0, 1.0);
    assert_eq!(stepped, direct);
}

#[test]
fn advance_inertialization_uses_offset_halflife() {
    let settings = SpringSettings::default().with_inertialization_halflife(0.05);
    let src = RootState::new(Vec3::ZERO, Vec3::ZERO, Quat::IDENTITY, Vec3::ZERO);
    let dst = RootState::new(Vec3::X, Vec3::ZERO, Quat::IDENTITY, Vec3::ZERO);
    let offset = InertializationOffset::default().transition(&src, &dst);

    let (via_settings, _) = settings.advance_inertialization(&offset, &dst, 1.0 / 60.0);
    let (direct, _) = offset.update(&dst, 0.05, 1.0 / 60.0);
    assert_eq!(via_settings, direct);
}
