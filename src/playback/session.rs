//! One viewer's in-progress playback.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::errors::Result;
use crate::playback::traits::{Scheduler, Transport, ViewerModeControl};
use crate::types::{Pose, ProxyId, TaskId, ViewerId, ViewerMode};

/// Lifecycle of a session. Only `Running` is resident; the terminal states
/// are reached exactly once and tear down every externally held resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Running,
    Completed,
    Cancelled,
}

/// State mutated by ticks and stops, guarded by the session mutex so a
/// `stop()` racing an in-flight `tick()` observes a single atomic transition.
struct SessionInner {
    index: usize,
    state: SessionState,
    proxy: ProxyId,
    saved_mode: ViewerMode,
    task: Option<TaskId>,
}

/// Owns one viewer's playback: the precomputed pose list, the proxy handle,
/// the saved viewer mode, and the repeating-task handle.
///
/// The pose list and collaborator handles are immutable; everything the tick
/// mutates lives behind a single mutex. The session is the sole mutator of
/// its own state — the engine only ever asks it to tick or stop.
pub struct PlaybackSession {
    viewer: ViewerId,
    poses: Vec<Pose>,
    look_distance: f64,
    transport: Arc<dyn Transport>,
    modes: Arc<dyn ViewerModeControl>,
    scheduler: Arc<dyn Scheduler>,
    inner: Mutex<SessionInner>,
}

impl PlaybackSession {
    pub(crate) fn new(
        viewer: ViewerId,
        poses: Vec<Pose>,
        look_distance: f64,
        proxy: ProxyId,
        saved_mode: ViewerMode,
        transport: Arc<dyn Transport>,
        modes: Arc<dyn ViewerModeControl>,
        scheduler: Arc<dyn Scheduler>,
    ) -> Self {
        Self {
            viewer,
            poses,
            look_distance,
            transport,
            modes,
            scheduler,
            inner: Mutex::new(SessionInner {
                index: 0,
                state: SessionState::Running,
                proxy,
                saved_mode,
                task: None,
            }),
        }
    }

    #[must_use]
    pub fn viewer(&self) -> ViewerId {
        self.viewer
    }

    /// Records the repeating-task handle once the scheduler has minted it.
    pub(crate) fn set_task(&self, task: TaskId) {
        let mut inner = self.inner.lock();
        if inner.state == SessionState::Running {
            inner.task = Some(task);
        } else {
            // Session finished before the handle arrived; cancel directly.
            self.scheduler.cancel(task);
        }
    }

    /// Advances playback by one tick. Returns `true` once the session has
    /// reached a terminal state and should be dropped by its owner.
    ///
    /// The first tick after start performs no movement, letting the proxy's
    /// creation settle before the camera begins to move. Each later tick
    /// sends the delta from the previous pose plus an absolute look target,
    /// then advances. A failed transport send cancels this session only; it
    /// never propagates to the shared scheduler.
    pub(crate) fn tick(&self) -> bool {
        let mut inner = self.inner.lock();
        if inner.state != SessionState::Running {
            return true;
        }

        if inner.index == 0 {
            inner.index = 1;
            if self.poses.len() <= 1 {
                self.finish_locked(&mut inner, SessionState::Completed);
                return true;
            }
            return false;
        }

        let prev = &self.poses[inner.index - 1];
        let pose = &self.poses[inner.index];

        if let Err(e) = self.send_updates(inner.proxy, prev, pose) {
            log::warn!("playback tick failed for viewer {:?}: {e}", self.viewer);
            self.finish_locked(&mut inner, SessionState::Cancelled);
            return true;
        }

        inner.index += 1;
        if inner.index >= self.poses.len() {
            self.finish_locked(&mut inner, SessionState::Completed);
            return true;
        }

        false
    }

    /// Stops playback and releases all resources. Idempotent: returns `false`
    /// when the session already reached a terminal state.
    pub(crate) fn stop(&self) -> bool {
        let mut inner = self.inner.lock();
        if inner.state != SessionState::Running {
            return false;
        }
        self.finish_locked(&mut inner, SessionState::Cancelled);
        true
    }

    fn send_updates(&self, proxy: ProxyId, prev: &Pose, pose: &Pose) -> Result<()> {
        self.transport
            .move_proxy(proxy, pose.position - prev.position, pose.yaw, pose.pitch)?;
        self.transport
            .set_viewer_look(self.viewer, pose.look_target(self.look_distance))
    }

    /// Terminal transition: cancel the repeating task, restore the viewer's
    /// saved mode, destroy the proxy. Runs at most once per session.
    fn finish_locked(&self, inner: &mut SessionInner, state: SessionState) {
        inner.state = state;

        if let Some(task) = inner.task.take() {
            self.scheduler.cancel(task);
        }

        self.modes.set_mode(self.viewer, inner.saved_mode);

        if let Err(e) = self.transport.destroy_proxy(inner.proxy) {
            log::warn!(
                "failed to destroy playback proxy for viewer {:?}: {e}",
                self.viewer
            );
        }

        log::debug!("playback {state:?} for viewer {:?}", self.viewer);
    }
}
