//! Path construction and sampling.
//!
//! Keyframes are fitted with one [`PathSegment`] per consecutive pair (five
//! independent Catmull-Rom curves: x, y, z, yaw, pitch), composed into a
//! [`Path`] addressable by a single normalized position, and sampled into an
//! ordered pose list — optionally reparameterized by arc length for constant
//! traversal speed.

pub mod builder;
pub mod segment;
pub mod yaw;

#[allow(clippy::module_inception)]
mod path;

pub use builder::build_path;
pub use path::Path;
pub use segment::PathSegment;
pub use yaw::unwrap_yaws;
