//! Per-viewer keyframe list storage.
//!
//! Keyframe lists live independently of playback: they persist across
//! playbacks and are removed on explicit clear or viewer disconnect.

use rustc_hash::FxHashMap;

use crate::errors::{DollyError, Result};
use crate::types::{Keyframe, ViewerId};

/// Mutable ordered keyframe lists, one per viewer.
///
/// Every mutation enforces the single-frame invariant: all keyframes of one
/// viewer must share a coordinate frame. Violating adds are rejected and
/// leave the list unchanged.
#[derive(Debug, Default)]
pub struct PathStore {
    entries: FxHashMap<ViewerId, Vec<Keyframe>>,
}

impl PathStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The viewer's keyframes in sequence order; empty if none were added.
    #[must_use]
    pub fn keyframes(&self, viewer: ViewerId) -> &[Keyframe] {
        self.entries.get(&viewer).map_or(&[], Vec::as_slice)
    }

    /// Appends a keyframe, or inserts it at `index` when given.
    ///
    /// Fails with [`DollyError::MixedFrame`] if the keyframe's frame differs
    /// from the viewer's existing keyframes, and with
    /// [`DollyError::IndexOutOfRange`] if `index` is past the end.
    pub fn add(&mut self, viewer: ViewerId, keyframe: Keyframe, index: Option<usize>) -> Result<()> {
        let list = self.entries.entry(viewer).or_default();

        if list.iter().any(|kf| kf.frame != keyframe.frame) {
            return Err(DollyError::MixedFrame);
        }

        match index {
            Some(index) if index > list.len() => Err(DollyError::IndexOutOfRange {
                index,
                len: list.len(),
            }),
            Some(index) => {
                list.insert(index, keyframe);
                Ok(())
            }
            None => {
                list.push(keyframe);
                Ok(())
            }
        }
    }

    /// Removes and returns the keyframe at `index`, or the last one when
    /// `index` is `None`.
    pub fn remove(&mut self, viewer: ViewerId, index: Option<usize>) -> Result<Keyframe> {
        let list = self.entries.entry(viewer).or_default();

        match index {
            None => list.pop().ok_or(DollyError::IndexOutOfRange {
                index: 0,
                len: 0,
            }),
            Some(index) if index >= list.len() => Err(DollyError::IndexOutOfRange {
                index,
                len: list.len(),
            }),
            Some(index) => Ok(list.remove(index)),
        }
    }

    /// Empties the viewer's keyframe list (the list itself remains).
    pub fn clear(&mut self, viewer: ViewerId) {
        if let Some(list) = self.entries.get_mut(&viewer) {
            list.clear();
        }
    }

    /// Drops the viewer's entry entirely (viewer disconnect).
    pub fn remove_viewer(&mut self, viewer: ViewerId) {
        self.entries.remove(&viewer);
    }
}
