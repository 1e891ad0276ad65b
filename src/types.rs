//! Core identity and pose types shared across the crate.

use glam::DVec3;
use uuid::Uuid;

/// Identifies the coordinate frame (world / space) a keyframe lives in.
///
/// All keyframes of one path must share a single frame; the crate never
/// converts between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(Uuid);

impl FrameId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FrameId {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifies one connected viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewerId(Uuid);

impl ViewerId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ViewerId {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a proxy object minted by the transport collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProxyId(pub u64);

/// Handle to a repeating task minted by the scheduler collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

/// The viewer's interaction mode.
///
/// Playback saves the current mode, switches the viewer to [`Passive`] so the
/// camera cannot be fought by user input, and restores the saved mode on
/// teardown.
///
/// [`Passive`]: ViewerMode::Passive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerMode {
    /// Ordinary free interaction.
    Normal,
    /// Frozen interaction during path playback.
    Passive,
}

/// A user-placed waypoint defining the camera path.
///
/// Ordering is significant: sequence order is temporal order. Yaw and pitch
/// are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub position: DVec3,
    pub yaw: f32,
    pub pitch: f32,
    pub frame: FrameId,
}

impl Keyframe {
    #[must_use]
    pub fn new(position: DVec3, yaw: f32, pitch: f32, frame: FrameId) -> Self {
        Self {
            position,
            yaw,
            pitch,
            frame,
        }
    }
}

/// A sampled position + orientation produced by evaluating a path.
///
/// Same shape as [`Keyframe`], but it is curve output rather than user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: DVec3,
    pub yaw: f32,
    pub pitch: f32,
    pub frame: FrameId,
}

impl Pose {
    /// Unit direction vector for this pose's yaw/pitch (degrees).
    ///
    /// Uses the convention of the wire protocol this crate was built against:
    /// yaw 0 looks down +Z, positive pitch looks down.
    #[must_use]
    pub fn direction(&self) -> DVec3 {
        let yaw = f64::from(self.yaw).to_radians();
        let pitch = f64::from(self.pitch).to_radians();
        let xz = pitch.cos();
        DVec3::new(-yaw.sin() * xz, -pitch.sin(), yaw.cos() * xz)
    }

    /// A point `distance` units along this pose's view direction.
    ///
    /// Used to express orientation as an absolute look-at target when the
    /// transport has no native "set orientation" primitive.
    #[must_use]
    pub fn look_target(&self, distance: f64) -> DVec3 {
        self.position + self.direction() * distance
    }
}

impl From<&Keyframe> for Pose {
    fn from(kf: &Keyframe) -> Self {
        Self {
            position: kf.position,
            yaw: kf.yaw,
            pitch: kf.pitch,
            frame: kf.frame,
        }
    }
}
