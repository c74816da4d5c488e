//! Session state store
//!
//! Holds the current snapshot and the subscriber list. Only the controller
//! commits to it; everyone else reads `Arc` snapshots.

use crate::session::PlaybackSession;
use std::fmt;
use std::sync::Arc;

/// Callback invoked with each new snapshot
pub type Subscriber = Box<dyn FnMut(&Arc<PlaybackSession>) + Send>;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub(crate) struct SessionStore {
    current: Arc<PlaybackSession>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl SessionStore {
    pub(crate) fn new(initial: PlaybackSession) -> Self {
        Self {
            current: Arc::new(initial),
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub(crate) fn current(&self) -> &Arc<PlaybackSession> {
        &self.current
    }

    /// Replace the snapshot and notify subscribers in registration order
    ///
    /// Returns false, without notifying, when `next` equals the current
    /// snapshot.
    pub(crate) fn commit(&mut self, next: PlaybackSession) -> bool {
        if *self.current == next {
            return false;
        }

        self.current = Arc::new(next);
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.current);
        }
        true
    }

    pub(crate) fn subscribe(&mut self, subscriber: Subscriber) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, subscriber));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub(crate) fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("current", &self.current)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
