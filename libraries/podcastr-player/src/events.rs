//! Session events
//!
//! Change log for the host application. The wiring that loads URLs into the
//! media engine drains these instead of diffing snapshots itself.
//! Events are derived from the old and new snapshot of each operation:
//! - Queue replaced or cleared
//! - Active episode changed
//! - Playing / looping / shuffling flipped

use crate::session::PlaybackSession;
use serde::Serialize;

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A new queue was loaded by `play`, `play_list`
    QueueReplaced {
        /// New queue length
        length: usize,
    },

    /// The queue was emptied by `clear_player_state`
    QueueCleared,

    /// The active episode moved
    ///
    /// Also emitted when a different queue is loaded and the index number
    /// stays the same, since the episode under it changed.
    CurrentChanged {
        /// New current index
        index: usize,
        /// Index before the change
        previous_index: usize,
    },

    /// `is_playing` flipped
    PlayingChanged { is_playing: bool },

    /// `is_looping` flipped
    LoopingChanged { is_looping: bool },

    /// `is_shuffling` flipped
    ShufflingChanged { is_shuffling: bool },
}

/// Events describing the step from `old` to `new`, in a stable order
pub(crate) fn diff(old: &PlaybackSession, new: &PlaybackSession) -> Vec<SessionEvent> {
    let mut events = Vec::new();

    let queue_changed = !same_queue(old, new);
    if queue_changed {
        if new.is_empty() {
            events.push(SessionEvent::QueueCleared);
        } else {
            events.push(SessionEvent::QueueReplaced { length: new.len() });
        }
    }

    if !new.is_empty() && (queue_changed || old.current_index() != new.current_index()) {
        events.push(SessionEvent::CurrentChanged {
            index: new.current_index(),
            previous_index: old.current_index(),
        });
    }

    if old.is_playing() != new.is_playing() {
        events.push(SessionEvent::PlayingChanged {
            is_playing: new.is_playing(),
        });
    }
    if old.is_looping() != new.is_looping() {
        events.push(SessionEvent::LoopingChanged {
            is_looping: new.is_looping(),
        });
    }
    if old.is_shuffling() != new.is_shuffling() {
        events.push(SessionEvent::ShufflingChanged {
            is_shuffling: new.is_shuffling(),
        });
    }

    events
}

/// Queue identity check; a reload of equal episodes still counts as the same
fn same_queue(old: &PlaybackSession, new: &PlaybackSession) -> bool {
    let (a, b) = (old.queue(), new.queue());
    std::ptr::eq(a, b) || a == b
}
