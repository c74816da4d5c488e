//! Playback session snapshot
//!
//! The immutable state record shared with every reader. The controller
//! builds a new one for each change; readers only ever see `Arc`s of it.

use crate::navigation;
use crate::types::Episode;
use serde::Serialize;
use std::sync::Arc;

/// Point-in-time view of the playback session
///
/// Serializes with camelCase keys so UI layers get the field names they
/// already bind to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSession {
    queue: Arc<[Episode]>,
    current_index: usize,
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,
}

impl PlaybackSession {
    /// Empty session with the given modifiers
    pub(crate) fn new(is_looping: bool, is_shuffling: bool) -> Self {
        Self {
            queue: Vec::<Episode>::new().into(),
            current_index: 0,
            is_playing: false,
            is_looping,
            is_shuffling,
        }
    }

    /// Episodes in play order
    pub fn queue(&self) -> &[Episode] {
        &self.queue
    }

    /// Position of the active episode (0 when the queue is empty)
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    /// Active episode, if any
    pub fn current_episode(&self) -> Option<&Episode> {
        self.queue.get(self.current_index)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Whether `play_previous` would move
    pub fn has_previous(&self) -> bool {
        navigation::has_previous(self)
    }

    /// Whether `play_next` would move (always true while shuffling)
    pub fn has_next(&self) -> bool {
        navigation::has_next(self)
    }

    // ===== Transitions (crate-internal) =====

    /// Swap in a new queue, clamping the index into range
    pub(crate) fn with_queue(&self, queue: Arc<[Episode]>, index: usize) -> Self {
        let current_index = navigation::clamp_index(index, queue.len());
        Self {
            queue,
            current_index,
            ..self.clone()
        }
    }

    /// Move to `index`; caller guarantees it is in range
    pub(crate) fn with_index(&self, index: usize) -> Self {
        debug_assert!(index == 0 || index < self.queue.len());
        Self {
            current_index: index,
            ..self.clone()
        }
    }

    pub(crate) fn with_playing(&self, is_playing: bool) -> Self {
        Self {
            is_playing,
            ..self.clone()
        }
    }

    pub(crate) fn with_looping(&self, is_looping: bool) -> Self {
        Self {
            is_looping,
            ..self.clone()
        }
    }

    pub(crate) fn with_shuffling(&self, is_shuffling: bool) -> Self {
        Self {
            is_shuffling,
            ..self.clone()
        }
    }
}
