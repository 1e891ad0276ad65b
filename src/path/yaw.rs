//! Yaw unwrapping for keyframe sequences.

use crate::types::Keyframe;

/// Adjusts each keyframe's yaw by a multiple of 360° so consecutive values
/// take the shortest angular arc, avoiding a long sweep when the path crosses
/// the 0°/360° boundary.
///
/// The correction is pairwise-local: each yaw is compared against the
/// *previous keyframe's raw* mod-360 value, not the previous corrected value.
/// Long sequences that cross the boundary repeatedly can therefore drift
/// relative to a cumulative scheme; this matches the behavior the playback
/// protocol was tuned against.
#[must_use]
pub fn unwrap_yaws(keyframes: &[Keyframe]) -> Vec<f32> {
    keyframes
        .iter()
        .enumerate()
        .map(|(i, kf)| {
            let mut yaw = kf.yaw % 360.0;

            if i > 0 {
                let prev = keyframes[i - 1].yaw % 360.0;
                if (yaw - prev).abs() > 180.0 {
                    if prev < 180.0 {
                        yaw -= 360.0;
                    } else {
                        yaw += 360.0;
                    }
                }
            }

            yaw
        })
        .collect()
}
