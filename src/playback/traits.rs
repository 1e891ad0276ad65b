//! Capability traits implemented by the host environment.
//!
//! The playback core performs no I/O of its own: everything that touches the
//! wire, the viewer's interaction mode, or the host's task scheduler goes
//! through these traits. Production wires them to the real server; tests use
//! recording fakes.

use glam::DVec3;

use crate::errors::Result;
use crate::types::{Pose, ProxyId, TaskId, ViewerId, ViewerMode};

/// Delivers proxy and orientation updates to a viewer.
///
/// Positions are communicated as deltas from the previous tick, matching the
/// protocol's incremental movement model. Orientation is sent as an absolute
/// look-at target rather than raw angles.
pub trait Transport: Send + Sync {
    /// Creates the proxy object the viewer's camera rides on, at `pose`.
    fn create_proxy(&self, viewer: ViewerId, pose: &Pose) -> Result<ProxyId>;

    /// Moves the proxy by `delta` and carries the pose's absolute yaw/pitch.
    fn move_proxy(&self, proxy: ProxyId, delta: DVec3, yaw: f32, pitch: f32) -> Result<()>;

    /// Removes the proxy object.
    fn destroy_proxy(&self, proxy: ProxyId) -> Result<()>;

    /// Points the viewer's view at an absolute world position.
    fn set_viewer_look(&self, viewer: ViewerId, target: DVec3) -> Result<()>;
}

/// Reads and writes a viewer's interaction mode.
pub trait ViewerModeControl: Send + Sync {
    fn mode(&self, viewer: ViewerId) -> ViewerMode;

    fn set_mode(&self, viewer: ViewerId, mode: ViewerMode);
}

/// The host's periodic-task facility.
///
/// The callback is invoked once per tick (reference rate: 20 Hz) until
/// cancelled. The host may drive callbacks from a single cooperative thread
/// or from a thread pool; sessions guard their state accordingly.
pub trait Scheduler: Send + Sync {
    fn schedule_repeating(&self, callback: Box<dyn FnMut() + Send>) -> TaskId;

    fn cancel(&self, task: TaskId);
}
