//! Tick-driven playback of a sampled pose sequence.
//!
//! The [`PlaybackEngine`] owns at most one [`session::PlaybackSession`] per
//! viewer. A session walks its precomputed pose list one pose per scheduler
//! tick, sending incremental proxy moves and absolute look targets through
//! the [`traits::Transport`] collaborator, and tears all of it down when the
//! poses run out or the session is stopped.

pub mod engine;
pub mod session;
pub mod traits;

pub use engine::{PlaybackConfig, PlaybackEngine};
pub use session::PlaybackSession;
