//! Per-viewer playback orchestration.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::errors::Result;
use crate::path::build_path;
use crate::playback::session::PlaybackSession;
use crate::playback::traits::{Scheduler, Transport, ViewerModeControl};
use crate::types::{Keyframe, ViewerId, ViewerMode};

/// Tunables for playback. The defaults match the reference host: 20 ticks
/// per second, arc-length-reparameterized sampling, and a 10 000-unit look
/// projection distance.
#[derive(Debug, Clone, Copy)]
pub struct PlaybackConfig {
    /// Scheduler tick rate used to convert a duration into a pose count.
    pub ticks_per_second: u32,
    /// Sample the path at constant traversal speed.
    pub constant_speed: bool,
    /// Distance the look-at target is projected along the view direction.
    pub look_distance: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 20,
            constant_speed: true,
            look_distance: 10_000.0,
        }
    }
}

/// Builds paths from keyframes and drives their playback, one session per
/// viewer at most.
///
/// The session map is the only shared mutable state; each entry is mutated
/// from a single logical flow once the per-viewer exclusivity rule holds.
pub struct PlaybackEngine {
    transport: Arc<dyn Transport>,
    modes: Arc<dyn ViewerModeControl>,
    scheduler: Arc<dyn Scheduler>,
    config: PlaybackConfig,
    sessions: Arc<Mutex<FxHashMap<ViewerId, Arc<PlaybackSession>>>>,
}

impl PlaybackEngine {
    #[must_use]
    pub fn new(
        transport: Arc<dyn Transport>,
        modes: Arc<dyn ViewerModeControl>,
        scheduler: Arc<dyn Scheduler>,
        config: PlaybackConfig,
    ) -> Self {
        Self {
            transport,
            modes,
            scheduler,
            config,
            sessions: Arc::new(Mutex::new(FxHashMap::default())),
        }
    }

    /// Whether the viewer currently has a resident session.
    #[must_use]
    pub fn is_playing(&self, viewer: ViewerId) -> bool {
        self.sessions.lock().contains_key(&viewer)
    }

    /// Starts playing the viewer's path over `duration`.
    ///
    /// Any existing session for the viewer is fully stopped first, so its
    /// proxy is destroyed before the new one is created. The keyframes are
    /// fitted, sampled at `round(duration * ticks_per_second)` poses (at
    /// least 2), and handed to a new session driven by the scheduler.
    ///
    /// Fails with [`DollyError::InsufficientKeyframes`] below two keyframes;
    /// no session is created and no viewer state is touched on failure.
    ///
    /// [`DollyError::InsufficientKeyframes`]: crate::errors::DollyError::InsufficientKeyframes
    pub fn start(&self, viewer: ViewerId, keyframes: &[Keyframe], duration: Duration) -> Result<()> {
        self.stop(viewer);

        let pose_count = (duration.as_secs_f64() * f64::from(self.config.ticks_per_second))
            .round() as usize;
        let pose_count = pose_count.max(2);

        let path = build_path(keyframes)?;
        let poses = path.sample_points(pose_count, self.config.constant_speed)?;

        let proxy = self.transport.create_proxy(viewer, &poses[0])?;

        let saved_mode = self.modes.mode(viewer);
        self.modes.set_mode(viewer, ViewerMode::Passive);

        let session = Arc::new(PlaybackSession::new(
            viewer,
            poses,
            self.config.look_distance,
            proxy,
            saved_mode,
            Arc::clone(&self.transport),
            Arc::clone(&self.modes),
            Arc::clone(&self.scheduler),
        ));

        let task = self.scheduler.schedule_repeating(Box::new({
            let session = Arc::clone(&session);
            let sessions = Arc::downgrade(&self.sessions);
            move || {
                if session.tick() {
                    // Session finished on its own; drop our map entry, unless
                    // a newer session already replaced it.
                    if let Some(sessions) = sessions.upgrade() {
                        let mut sessions = sessions.lock();
                        if sessions
                            .get(&session.viewer())
                            .is_some_and(|current| Arc::ptr_eq(current, &session))
                        {
                            sessions.remove(&session.viewer());
                        }
                    }
                }
            }
        }));
        session.set_task(task);

        self.sessions.lock().insert(viewer, session);
        log::debug!("playback started for viewer {viewer:?} ({pose_count} poses)");

        Ok(())
    }

    /// Stops the viewer's playback, if any. Returns `true` iff a session was
    /// active and is now stopped; never fails.
    pub fn stop(&self, viewer: ViewerId) -> bool {
        let session = self.sessions.lock().remove(&viewer);
        session.is_some_and(|session| session.stop())
    }
}
