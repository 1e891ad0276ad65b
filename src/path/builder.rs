//! Fitting a [`Path`] through a keyframe sequence.

use crate::curve::ScalarCurve;
use crate::errors::{DollyError, Result};
use crate::path::path::Path;
use crate::path::segment::PathSegment;
use crate::path::yaw::unwrap_yaws;
use crate::types::Keyframe;

/// Builds a Catmull-Rom path through `keyframes`.
///
/// Yaw values are unwrapped first so interpolation takes the short way around
/// the 0°/360° boundary. One segment is produced per consecutive keyframe
/// pair; the outer spline controls are clamped to the nearest available
/// keyframe at the endpoints, giving natural (non-looping) boundary behavior.
///
/// Fails with [`DollyError::InsufficientKeyframes`] below two keyframes and
/// with [`DollyError::MixedFrame`] if the keyframes span more than one
/// coordinate frame.
pub fn build_path(keyframes: &[Keyframe]) -> Result<Path> {
    if keyframes.len() < 2 {
        return Err(DollyError::InsufficientKeyframes {
            found: keyframes.len(),
        });
    }

    let frame = keyframes[0].frame;
    if keyframes.iter().any(|kf| kf.frame != frame) {
        return Err(DollyError::MixedFrame);
    }

    let yaws = unwrap_yaws(keyframes);
    let last = keyframes.len() - 1;

    let mut segments = Vec::with_capacity(last);
    for i in 1..=last {
        let c0 = i.saturating_sub(2);
        let c1 = i - 1;
        let c2 = i;
        let c3 = (i + 1).min(last);

        let spline = |field: fn(&Keyframe) -> f64| {
            ScalarCurve::CatmullRom(
                field(&keyframes[c0]),
                field(&keyframes[c1]),
                field(&keyframes[c2]),
                field(&keyframes[c3]),
            )
        };

        segments.push(PathSegment::new(
            spline(|kf| kf.position.x),
            spline(|kf| kf.position.y),
            spline(|kf| kf.position.z),
            ScalarCurve::CatmullRom(
                f64::from(yaws[c0]),
                f64::from(yaws[c1]),
                f64::from(yaws[c2]),
                f64::from(yaws[c3]),
            ),
            ScalarCurve::CatmullRom(
                f64::from(keyframes[c0].pitch),
                f64::from(keyframes[c1].pitch),
                f64::from(keyframes[c2].pitch),
                f64::from(keyframes[c3].pitch),
            ),
            keyframes[c1].frame,
        ));
    }

    Path::new(segments)
}
