//! Path Construction & Sampling Tests
//!
//! Tests for:
//! - Yaw unwrapping across the 0°/360° boundary
//! - Catmull-Rom path building (keyframe count validation, frame checks)
//! - Global sampling: exact pose counts and endpoint guarantees
//! - Arc-length reparameterization (constant-speed spacing)
//! - Degenerate inputs (coincident keyframes)

use glam::DVec3;

use dollycam::errors::DollyError;
use dollycam::path::{Path, build_path, unwrap_yaws};
use dollycam::types::{FrameId, Keyframe, Pose};

const EPSILON: f64 = 1e-6;

fn kf(frame: FrameId, x: f64, y: f64, z: f64, yaw: f32, pitch: f32) -> Keyframe {
    Keyframe::new(DVec3::new(x, y, z), yaw, pitch, frame)
}

fn spacing_ratio(poses: &[Pose]) -> f64 {
    let distances: Vec<f64> = poses
        .windows(2)
        .map(|w| w[0].position.distance(w[1].position))
        .collect();
    let mean = distances.iter().sum::<f64>() / distances.len() as f64;
    let variance = distances
        .iter()
        .map(|d| (d - mean) * (d - mean))
        .sum::<f64>()
        / distances.len() as f64;
    variance.sqrt() / mean
}

// ============================================================================
// Yaw unwrapping
// ============================================================================

#[test]
fn yaw_unwrap_crosses_boundary_the_short_way() {
    let frame = FrameId::new();
    let keyframes = [
        kf(frame, 0.0, 0.0, 0.0, 350.0, 0.0),
        kf(frame, 1.0, 0.0, 0.0, 10.0, 0.0),
    ];

    let yaws = unwrap_yaws(&keyframes);
    assert_eq!(yaws, vec![350.0, 370.0]);
    assert!((yaws[1] - yaws[0]).abs() <= 180.0);
}

#[test]
fn yaw_unwrap_descending_boundary_crossing() {
    let frame = FrameId::new();
    let keyframes = [
        kf(frame, 0.0, 0.0, 0.0, 10.0, 0.0),
        kf(frame, 1.0, 0.0, 0.0, 350.0, 0.0),
    ];

    // Previous raw yaw is below 180, so the new value is pulled down.
    let yaws = unwrap_yaws(&keyframes);
    assert_eq!(yaws, vec![10.0, -10.0]);
}

#[test]
fn yaw_unwrap_leaves_nearby_values_alone() {
    let frame = FrameId::new();
    let keyframes = [
        kf(frame, 0.0, 0.0, 0.0, 10.0, 0.0),
        kf(frame, 1.0, 0.0, 0.0, 20.0, 0.0),
        kf(frame, 2.0, 0.0, 0.0, 170.0, 0.0),
    ];

    assert_eq!(unwrap_yaws(&keyframes), vec![10.0, 20.0, 170.0]);
}

#[test]
fn yaw_unwrap_reduces_values_mod_360() {
    let frame = FrameId::new();
    let keyframes = [kf(frame, 0.0, 0.0, 0.0, 725.0, 0.0)];

    assert_eq!(unwrap_yaws(&keyframes), vec![5.0]);
}

// ============================================================================
// Path building
// ============================================================================

#[test]
fn build_rejects_single_keyframe() {
    let frame = FrameId::new();
    let err = build_path(&[kf(frame, 0.0, 0.0, 0.0, 0.0, 0.0)]).unwrap_err();
    assert!(
        matches!(err, DollyError::InsufficientKeyframes { found: 1 }),
        "got {err:?}"
    );
}

#[test]
fn build_rejects_empty_input() {
    let err = build_path(&[]).unwrap_err();
    assert!(matches!(err, DollyError::InsufficientKeyframes { found: 0 }));
}

#[test]
fn build_two_keyframes_yields_one_segment() {
    let frame = FrameId::new();
    let path = build_path(&[
        kf(frame, 0.0, 0.0, 0.0, 0.0, 0.0),
        kf(frame, 10.0, 0.0, 0.0, 0.0, 0.0),
    ])
    .unwrap();

    assert_eq!(path.segment_count(), 1);
    assert!((path.total_length() - 10.0).abs() < 0.5);
}

#[test]
fn path_from_empty_segment_list_is_an_error_not_a_panic() {
    let err = Path::new(Vec::new()).unwrap_err();
    assert!(
        matches!(err, DollyError::InsufficientKeyframes { found: 0 }),
        "got {err:?}"
    );
}

#[test]
fn build_rejects_mixed_frames() {
    let err = build_path(&[
        kf(FrameId::new(), 0.0, 0.0, 0.0, 0.0, 0.0),
        kf(FrameId::new(), 1.0, 0.0, 0.0, 0.0, 0.0),
    ])
    .unwrap_err();
    assert!(matches!(err, DollyError::MixedFrame), "got {err:?}");
}

// ============================================================================
// Global sampling
// ============================================================================

#[test]
fn sample_returns_exact_count() {
    let frame = FrameId::new();
    let path = build_path(&[
        kf(frame, 0.0, 0.0, 0.0, 0.0, 0.0),
        kf(frame, 5.0, 2.0, 0.0, 45.0, 10.0),
        kf(frame, 10.0, 0.0, 3.0, 90.0, 0.0),
    ])
    .unwrap();

    for count in [1, 2, 3, 7, 20, 100] {
        for constant_speed in [false, true] {
            let poses = path.sample_points(count, constant_speed).unwrap();
            assert_eq!(
                poses.len(),
                count,
                "count={count} constant_speed={constant_speed}"
            );
        }
    }
}

#[test]
fn sample_endpoints_match_first_and_last_keyframes() {
    let frame = FrameId::new();
    let first = kf(frame, 0.0, 1.0, 2.0, 30.0, -5.0);
    let last = kf(frame, 10.0, -4.0, 8.0, 120.0, 15.0);
    let path = build_path(&[first, kf(frame, 4.0, 9.0, 3.0, 60.0, 0.0), last]).unwrap();

    for constant_speed in [false, true] {
        let poses = path.sample_points(50, constant_speed).unwrap();

        let head = &poses[0];
        assert!(head.position.distance(first.position) < EPSILON);
        assert!((f64::from(head.yaw) - f64::from(first.yaw)).abs() < EPSILON);

        let tail = poses.last().unwrap();
        assert!(tail.position.distance(last.position) < EPSILON);
        assert!((f64::from(tail.pitch) - f64::from(last.pitch)).abs() < EPSILON);
    }
}

#[test]
fn sample_single_point_is_path_start() {
    let frame = FrameId::new();
    let first = kf(frame, 3.0, 4.0, 5.0, 0.0, 0.0);
    let path = build_path(&[first, kf(frame, 9.0, 4.0, 5.0, 0.0, 0.0)]).unwrap();

    let poses = path.sample_points(1, true).unwrap();
    assert_eq!(poses.len(), 1);
    assert!(poses[0].position.distance(first.position) < EPSILON);
}

#[test]
fn sample_tags_poses_with_the_path_frame() {
    let frame = FrameId::new();
    let path = build_path(&[
        kf(frame, 0.0, 0.0, 0.0, 0.0, 0.0),
        kf(frame, 1.0, 0.0, 0.0, 0.0, 0.0),
    ])
    .unwrap();

    for pose in path.sample_points(10, false).unwrap() {
        assert_eq!(pose.frame, frame);
    }
}

#[test]
fn coincident_keyframes_sample_without_nan() {
    let frame = FrameId::new();
    let point = kf(frame, 2.0, 2.0, 2.0, 0.0, 0.0);
    let path = build_path(&[point, point, point]).unwrap();

    for pose in path.sample_points(10, true).unwrap() {
        assert!(pose.position.is_finite(), "got {:?}", pose.position);
        assert!(pose.position.distance(point.position) < EPSILON);
    }
}

// ============================================================================
// Constant-speed spacing
// ============================================================================

#[test]
fn constant_speed_evens_out_uneven_segments() {
    // One short segment (length ~1) followed by a much longer one (~100):
    // the raw spline parameter is far from arc-length-linear here.
    let frame = FrameId::new();
    let path = build_path(&[
        kf(frame, 0.0, 0.0, 0.0, 0.0, 0.0),
        kf(frame, 1.0, 0.0, 0.0, 0.0, 0.0),
        kf(frame, 101.0, 0.0, 0.0, 0.0, 0.0),
    ])
    .unwrap();

    let even = spacing_ratio(&path.sample_points(100, true).unwrap());
    let uneven = spacing_ratio(&path.sample_points(100, false).unwrap());

    assert!(even < 0.10, "constant-speed spacing ratio too high: {even}");
    assert!(uneven > 0.25, "raw spacing unexpectedly even: {uneven}");
    assert!(even < uneven / 2.0, "even={even} uneven={uneven}");
}
