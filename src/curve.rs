//! One-dimensional interpolation curves over a normalized `[0, 1]` parameter.

use crate::errors::{DollyError, Result};

/// Linear interpolation between `a` and `b`.
///
/// Returns [`DollyError::Domain`] when `t` lies outside `[0, 1]`.
pub fn lerp(a: f64, b: f64, t: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&t) {
        return Err(DollyError::Domain { t });
    }
    Ok(a + (b - a) * t)
}

/// A one-dimensional curve evaluated at a normalized parameter `t ∈ [0, 1]`.
///
/// Stateless: a curve holds its control values and nothing else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarCurve {
    /// Straight line from the first value to the second.
    Linear(f64, f64),
    /// Uniform cubic Catmull-Rom spline through `p1..p2`, shaped by the outer
    /// control values `p0` and `p3`.
    CatmullRom(f64, f64, f64, f64),
}

impl ScalarCurve {
    /// Evaluates the curve at `t`.
    ///
    /// The Catmull-Rom variant does not restrict `t`; callers in this crate
    /// only ever evaluate inside `[0, 1]`.
    pub fn value_at(&self, t: f64) -> Result<f64> {
        match *self {
            Self::Linear(a, b) => lerp(a, b, t),
            Self::CatmullRom(p0, p1, p2, p3) => {
                let a0 = -0.5 * p0 + 1.5 * p1 - 1.5 * p2 + 0.5 * p3;
                let a1 = p0 - 2.5 * p1 + 2.0 * p2 - 0.5 * p3;
                let a2 = -0.5 * p0 + 0.5 * p2;
                let a3 = p1;

                let t2 = t * t;
                Ok(a0 * t * t2 + a1 * t2 + a2 * t + a3)
            }
        }
    }
}
