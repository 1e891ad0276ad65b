//! Scalar Curve Tests
//!
//! Tests for:
//! - Linear interpolation values and `[0, 1]` domain enforcement
//! - Catmull-Rom basis evaluation and endpoint behavior
//! - Constant function from four identical control values

use dollycam::curve::{ScalarCurve, lerp};
use dollycam::errors::DollyError;

const EPSILON: f64 = 1e-9;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// Linear
// ============================================================================

#[test]
fn linear_midpoint() {
    let curve = ScalarCurve::Linear(0.0, 10.0);
    let val = curve.value_at(0.5).unwrap();
    assert!(approx(val, 5.0), "Expected 5.0, got {val}");
}

#[test]
fn linear_endpoints() {
    let curve = ScalarCurve::Linear(-3.0, 7.0);
    assert!(approx(curve.value_at(0.0).unwrap(), -3.0));
    assert!(approx(curve.value_at(1.0).unwrap(), 7.0));
}

#[test]
fn linear_rejects_parameter_below_domain() {
    let curve = ScalarCurve::Linear(0.0, 10.0);
    let err = curve.value_at(-0.1).unwrap_err();
    assert!(matches!(err, DollyError::Domain { .. }), "got {err:?}");
}

#[test]
fn linear_rejects_parameter_above_domain() {
    let curve = ScalarCurve::Linear(0.0, 10.0);
    let err = curve.value_at(1.1).unwrap_err();
    assert!(matches!(err, DollyError::Domain { .. }), "got {err:?}");
}

#[test]
fn lerp_is_affine() {
    assert!(approx(lerp(2.0, 4.0, 0.25).unwrap(), 2.5));
    assert!(approx(lerp(5.0, 5.0, 0.9).unwrap(), 5.0));
}

// ============================================================================
// Catmull-Rom
// ============================================================================

#[test]
fn catmull_rom_identical_controls_is_constant() {
    let curve = ScalarCurve::CatmullRom(5.0, 5.0, 5.0, 5.0);
    for i in 0..=10 {
        let t = f64::from(i) / 10.0;
        let val = curve.value_at(t).unwrap();
        assert!(approx(val, 5.0), "Expected 5.0 at t={t}, got {val}");
    }
}

#[test]
fn catmull_rom_passes_through_inner_controls() {
    let curve = ScalarCurve::CatmullRom(-2.0, 1.0, 9.0, 14.0);
    assert!(approx(curve.value_at(0.0).unwrap(), 1.0));
    assert!(approx(curve.value_at(1.0).unwrap(), 9.0));
}

#[test]
fn catmull_rom_midpoint_of_uniform_ramp() {
    // Evenly spaced controls reduce to a straight ramp between p1 and p2.
    let curve = ScalarCurve::CatmullRom(0.0, 1.0, 2.0, 3.0);
    assert!(approx(curve.value_at(0.5).unwrap(), 1.5));
}
