//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_normal_tolerance_looser_than_epsilon() {
    assert!(NORMAL_LENGTH_TOLERANCE >= EPSILON);
}

// =============================================================================
// MESH TESTS
// =============================================================================

#[test]
fn test_segment_defaults_form_closed_rings() {
    assert!(DEFAULT_SPHERE_LATITUDE_SEGMENTS >= MIN_SEGMENTS);
    assert!(DEFAULT_SPHERE_LONGITUDE_SEGMENTS >= MIN_SEGMENTS);
    assert!(DEFAULT_CONE_SEGMENTS >= MIN_SEGMENTS);
    assert!(MIN_SPHERE_LATITUDE_SEGMENTS < MIN_SEGMENTS);
}

#[test]
fn test_default_cone_base_fits_inside_sphere() {
    // The default base circle must be embeddable without a visible gap
    assert!(DEFAULT_CONE_RADIUS < DEFAULT_SPHERE_RADIUS);
    let offset = (DEFAULT_SPHERE_RADIUS.powi(2) - DEFAULT_CONE_RADIUS.powi(2)).sqrt()
        - DEFAULT_CONE_EMBED_DEPTH;
    assert!(offset > 0.0);
}

#[test]
fn test_default_axis_is_unit() {
    let [x, y, z] = DEFAULT_CONE_AXIS;
    assert!(approx_equal((x * x + y * y + z * z).sqrt(), 1.0));
}

// =============================================================================
// MOTION TESTS
// =============================================================================

#[test]
fn test_lissajous_defaults_in_range() {
    for value in [
        DEFAULT_LISSAJOUS_AMPLITUDE_X,
        DEFAULT_LISSAJOUS_AMPLITUDE_Y,
        DEFAULT_LISSAJOUS_FREQUENCY_X,
        DEFAULT_LISSAJOUS_FREQUENCY_Y,
        DEFAULT_LISSAJOUS_PHASE,
    ] {
        assert!((0.0..=LISSAJOUS_PARAM_MAX).contains(&value));
    }
}

#[test]
fn test_facing_colors_are_opaque() {
    assert_eq!(COLOR_BEHIND[3], 1.0);
    assert_eq!(COLOR_IN_FRONT[3], 1.0);
}

// =============================================================================
// GLOBAL CONFIG TESTS
// =============================================================================

#[test]
fn test_global_config_default() {
    let cfg = GlobalConfig::default();
    assert_eq!(cfg.tolerance, EPSILON);
    assert_eq!(cfg.seam_normal_blend, DEFAULT_SEAM_NORMAL_BLEND);
}

#[test]
fn test_global_config_rejects_bad_values() {
    assert_eq!(
        GlobalConfig::new(0.0, 0.5).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        GlobalConfig::new(1e-9, 1.5).unwrap_err(),
        ConfigError::InvalidSeamBlend(1.5)
    );
    assert!(GlobalConfig::new(f64::NAN, 0.5).is_err());
    assert!(GlobalConfig::new(f64::INFINITY, 0.5).is_err());
}

#[test]
fn test_without_seam_blend() {
    let cfg = GlobalConfig::default().without_seam_blend();
    assert_eq!(cfg.seam_normal_blend, 0.0);
    assert_eq!(cfg.tolerance, EPSILON);
}

#[test]
fn test_config_error_display() {
    let msg = ConfigError::InvalidSeamBlend(2.0).to_string();
    assert!(msg.contains("seam_normal_blend"));
}

// =============================================================================
// HELPER FUNCTION TESTS
// =============================================================================

#[test]
fn test_approx_helpers() {
    assert!(approx_equal(1.0, 1.0 + 1e-11));
    assert!(!approx_equal(1.0, 1.0 + 1e-9));
    assert!(approx_zero(-1e-11));
    assert!(!approx_zero(1e-9));
}

#[test]
fn test_validate_literal_config() {
    assert!(GlobalConfig::default().validate().is_ok());
    let bad_blend = GlobalConfig {
        seam_normal_blend: f64::NAN,
        ..GlobalConfig::default()
    };
    assert!(matches!(
        bad_blend.validate(),
        Err(ConfigError::InvalidSeamBlend(_))
    ));
}
