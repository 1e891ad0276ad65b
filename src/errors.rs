//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! Keyframe-list errors ([`DollyError::MixedFrame`],
//! [`DollyError::IndexOutOfRange`]) are local validation failures returned
//! synchronously to the caller; nothing is mutated when they occur.
//! [`DollyError::Domain`] indicates a curve was evaluated outside `[0, 1]` and
//! is an internal invariant violation. [`DollyError::TransportSend`] is
//! confined to the playback tick: the failing session stops itself and the
//! error never crosses the scheduler boundary.

use thiserror::Error;

/// The main error type for the dollycam crate.
#[derive(Error, Debug)]
pub enum DollyError {
    /// A path build or playback start was requested with fewer than 2 keyframes.
    #[error("at least 2 keyframes are required, got {found}")]
    InsufficientKeyframes {
        /// Number of keyframes actually supplied.
        found: usize,
    },

    /// A keyframe's coordinate frame does not match the rest of the path.
    #[error("keyframe coordinate frame does not match the existing path")]
    MixedFrame,

    /// A keyframe index referenced a nonexistent entry.
    #[error("keyframe index out of range: {index} (len: {len})")]
    IndexOutOfRange {
        /// The invalid index.
        index: usize,
        /// Length of the keyframe list at the time of the call.
        len: usize,
    },

    /// A curve was evaluated outside its `[0, 1]` parameter domain.
    #[error("curve parameter outside [0, 1]: {t}")]
    Domain {
        /// The offending parameter value.
        t: f64,
    },

    /// A transport collaborator failed to deliver an update.
    #[error("transport send failed: {0}")]
    TransportSend(String),
}

/// Convenience alias used by all fallible APIs in this crate.
pub type Result<T> = std::result::Result<T, DollyError>;
