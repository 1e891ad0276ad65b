//! dollycam — smooth camera path construction and tick-driven playback.
//!
//! A viewer places keyframes (position + yaw/pitch, tied to a coordinate
//! frame); the crate fits a Catmull-Rom curve through them, samples it at a
//! requested point count (optionally at constant traversal speed), and plays
//! the sampled poses back by driving a proxy object through one incremental
//! update per scheduler tick.
//!
//! All side effects go through the capability traits in [`playback::traits`];
//! the crate itself performs no I/O and owns no threads.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod curve;
pub mod errors;
pub mod path;
pub mod playback;
pub mod store;
pub mod types;

pub use curve::ScalarCurve;
pub use errors::{DollyError, Result};
pub use path::{Path, PathSegment, build_path, unwrap_yaws};
pub use playback::traits::{Scheduler, Transport, ViewerModeControl};
pub use playback::{PlaybackConfig, PlaybackEngine};
pub use store::PathStore;
pub use types::{FrameId, Keyframe, Pose, ProxyId, TaskId, ViewerId, ViewerMode};
