//! Composition of path segments into one globally addressable curve.

use crate::errors::{DollyError, Result};
use crate::path::segment::PathSegment;
use crate::types::Pose;

/// An ordered composition of [`PathSegment`]s spanning the whole keyframe
/// sequence, addressable by a single normalized position in `[0, 1]`.
///
/// Each segment owns a share of the parameter range proportional to its arc
/// length, so global positions advance through long segments more slowly than
/// through short ones.
#[derive(Debug)]
pub struct Path {
    segments: Vec<PathSegment>,
    /// Normalized position where each segment starts; monotone, first entry 0.
    starts: Vec<f64>,
    total_length: f64,
}

impl Path {
    /// Composes `segments` into a path, deriving the per-segment start table.
    ///
    /// Fails with [`DollyError::InsufficientKeyframes`] when `segments` is
    /// empty; a path spans at least one keyframe pair.
    pub fn new(segments: Vec<PathSegment>) -> Result<Self> {
        if segments.is_empty() {
            return Err(DollyError::InsufficientKeyframes { found: 0 });
        }

        let mut total_length = 0.0;
        for segment in &segments {
            total_length += segment.length()?;
        }

        let mut starts = Vec::with_capacity(segments.len());
        let mut acc = 0.0;
        for (i, segment) in segments.iter().enumerate() {
            if total_length > 0.0 {
                starts.push(acc);
                acc += segment.length()? / total_length;
            } else {
                // All keyframes coincide: fall back to uniform shares.
                starts.push(i as f64 / segments.len() as f64);
            }
        }

        Ok(Self {
            segments,
            starts,
            total_length,
        })
    }

    /// Sum of all segment arc lengths.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Number of segments (one fewer than the keyframe count).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Samples `count` poses evenly spaced in global position.
    ///
    /// With `constant_speed`, each segment's local parameter is additionally
    /// reparameterized by arc length, so consecutive poses are near
    /// equidistant along the curve. Either way the result holds exactly
    /// `count` poses, and the first and last equal the path's endpoints.
    pub fn sample_points(&self, count: usize, constant_speed: bool) -> Result<Vec<Pose>> {
        let mut poses = Vec::with_capacity(count);

        for i in 0..count {
            let pos = if count > 1 {
                i as f64 / (count - 1) as f64
            } else {
                0.0
            };

            let (index, local) = self.locate(pos);
            let segment = &self.segments[index];

            let local = if constant_speed {
                segment.constant_speed_param(local)?
            } else {
                local
            };

            poses.push(segment.value_at(local)?);
        }

        Ok(poses)
    }

    /// Resolves a global position to `(segment index, local position)`.
    ///
    /// Picks the greatest segment whose start is at or before `pos`, so
    /// `pos = 1.0` always lands inside the final segment.
    fn locate(&self, pos: f64) -> (usize, f64) {
        let index = self.starts.partition_point(|&s| s <= pos).saturating_sub(1);

        let start = self.starts[index];
        let next_start = self.starts.get(index + 1).copied().unwrap_or(1.0);

        let span = next_start - start;
        let local = if span > 0.0 {
            ((pos - start) / span).clamp(0.0, 1.0)
        } else {
            1.0
        };

        (index, local)
    }
}
