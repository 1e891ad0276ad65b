//! A single keyframe-to-keyframe interval of the camera path.

use std::sync::OnceLock;

use glam::DVec3;

use crate::curve::{ScalarCurve, lerp};
use crate::errors::Result;
use crate::types::{FrameId, Pose};

/// Number of intervals used for the arc-length approximation; the sample
/// table holds `APPROX_SAMPLES + 1` entries including both endpoints.
const APPROX_SAMPLES: usize = 10;

/// One entry of the arc-length table: curve parameter and the approximate
/// path length accumulated up to that parameter.
#[derive(Debug, Clone, Copy)]
struct ArcSample {
    t: f64,
    length: f64,
}

/// The curve spanning one consecutive pair of keyframes.
///
/// Five independent scalar curves (x, y, z, yaw, pitch) plus the coordinate
/// frame the segment lives in. The arc-length table is built lazily on first
/// use and cached; its cumulative lengths are non-decreasing, starting at 0
/// and ending at the segment's total [`length`](Self::length).
#[derive(Debug)]
pub struct PathSegment {
    x: ScalarCurve,
    y: ScalarCurve,
    z: ScalarCurve,
    yaw: ScalarCurve,
    pitch: ScalarCurve,
    frame: FrameId,
    samples: OnceLock<Vec<ArcSample>>,
}

impl PathSegment {
    #[must_use]
    pub fn new(
        x: ScalarCurve,
        y: ScalarCurve,
        z: ScalarCurve,
        yaw: ScalarCurve,
        pitch: ScalarCurve,
        frame: FrameId,
    ) -> Self {
        Self {
            x,
            y,
            z,
            yaw,
            pitch,
            frame,
            samples: OnceLock::new(),
        }
    }

    /// The coordinate frame this segment was built in.
    #[must_use]
    pub fn frame(&self) -> FrameId {
        self.frame
    }

    /// Approximate arc length, from straight-line distances between the table
    /// samples. Orientation curves do not contribute.
    pub fn length(&self) -> Result<f64> {
        let samples = self.samples()?;
        Ok(samples.last().map_or(0.0, |s| s.length))
    }

    /// Evaluates all five curves at parameter `t`, producing a pose tagged
    /// with the segment's frame.
    pub fn value_at(&self, t: f64) -> Result<Pose> {
        Ok(Pose {
            position: self.position_at(t)?,
            yaw: self.yaw.value_at(t)? as f32,
            pitch: self.pitch.value_at(t)? as f32,
            frame: self.frame,
        })
    }

    /// Maps a fractional arc length `u ∈ [0, 1]` to the curve parameter that
    /// reaches it, by linear interpolation between the bracketing table
    /// samples. `u = 1` resolves to exactly `1.0`.
    ///
    /// Traversing the curve at uniform `u` yields near-constant speed even
    /// where the raw parameter is far from arc-length-linear.
    pub fn constant_speed_param(&self, u: f64) -> Result<f64> {
        let samples = self.samples()?;
        let target = u * samples.last().map_or(0.0, |s| s.length);

        let prev_index = samples
            .iter()
            .rposition(|s| s.length <= target)
            .unwrap_or(0);

        if prev_index + 1 >= samples.len() {
            return Ok(1.0);
        }

        let prev = samples[prev_index];
        let next = samples[prev_index + 1];

        let span = next.length - prev.length;
        if span <= 0.0 {
            // Degenerate stretch (coincident samples): skip to the far side.
            return Ok(next.t);
        }

        lerp(prev.t, next.t, (target - prev.length) / span)
    }

    fn position_at(&self, t: f64) -> Result<DVec3> {
        Ok(DVec3::new(
            self.x.value_at(t)?,
            self.y.value_at(t)?,
            self.z.value_at(t)?,
        ))
    }

    fn samples(&self) -> Result<&[ArcSample]> {
        if let Some(samples) = self.samples.get() {
            return Ok(samples);
        }

        let mut samples = Vec::with_capacity(APPROX_SAMPLES + 1);
        let mut total = 0.0;
        let mut prev: Option<DVec3> = None;

        for i in 0..=APPROX_SAMPLES {
            let t = i as f64 / APPROX_SAMPLES as f64;
            let position = self.position_at(t)?;

            if let Some(prev) = prev {
                total += prev.distance(position);
            }
            prev = Some(position);

            samples.push(ArcSample { t, length: total });
        }

        Ok(self.samples.get_or_init(|| samples))
    }
}
