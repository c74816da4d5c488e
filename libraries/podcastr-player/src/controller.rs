//! Playback controller - session orchestration
//!
//! Owns the session store, the shuffle picker and the pending event log.
//! Every mutation goes through here.

use crate::{
    error::{PlayerError, Result},
    events::{self, SessionEvent},
    navigation,
    session::PlaybackSession,
    shuffle::{IndexPicker, SeededPicker},
    store::{SessionStore, SubscriptionId},
    types::{ClearPolicy, Episode, SessionConfig, ShufflePolicy},
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Central playback session control
///
/// Single writer for the session:
/// - Queue loading (`play`, `play_list`, `clear_player_state`)
/// - Navigation (`play_next`, `play_previous`, `skip_to`)
/// - Modifier toggles (play, loop, shuffle)
/// - Transport sync from the media engine (`set_playing_state`)
///
/// Each operation runs to completion, commits one new snapshot, notifies
/// subscribers and records events before returning.
pub struct PlaybackController {
    store: SessionStore,
    picker: Box<dyn IndexPicker>,

    // Settings
    clear_policy: ClearPolicy,
    shuffle_policy: ShufflePolicy,

    // Event queue for host synchronization
    pending_events: Vec<SessionEvent>,
}

impl PlaybackController {
    /// Create a controller; the shuffle generator follows `config.seed`
    pub fn new(config: SessionConfig) -> Self {
        let picker = match config.seed {
            Some(seed) => SeededPicker::from_seed(seed),
            None => SeededPicker::from_entropy(),
        };
        Self::with_picker(config, Box::new(picker))
    }

    /// Create a controller with an injected shuffle picker
    pub fn with_picker(config: SessionConfig, picker: Box<dyn IndexPicker>) -> Self {
        Self {
            store: SessionStore::new(PlaybackSession::new(config.looping, config.shuffling)),
            picker,
            clear_policy: config.clear_policy,
            shuffle_policy: config.shuffle_policy,
            pending_events: Vec::new(),
        }
    }

    // ===== Queue Loading =====

    /// Replace the queue with a single episode and start playing it
    pub fn play(&mut self, episode: Episode) {
        debug!(title = %episode.title, "Playing single episode");
        let next = self
            .store
            .current()
            .with_queue(Arc::from(vec![episode]), 0)
            .with_playing(true);
        self.apply(next);
    }

    /// Replace the queue with `list` and start playing at `index`
    ///
    /// An out-of-range `index` is clamped to the last episode (or 0 for an
    /// empty list).
    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        let len = list.len();
        let clamped = navigation::clamp_index(index, len);
        if clamped != index {
            warn!(index, len, clamped, "play_list index out of range, clamping");
        }

        debug!(len, index = clamped, "Playing episode list");
        let next = self
            .store
            .current()
            .with_queue(Arc::from(list), clamped)
            .with_playing(true);
        self.apply(next);
    }

    /// Empty the queue and reset the index
    ///
    /// Whether `is_playing` is also reset depends on the configured
    /// [`ClearPolicy`].
    pub fn clear_player_state(&mut self) {
        debug!(policy = ?self.clear_policy, "Clearing player state");
        let mut next = self
            .store
            .current()
            .with_queue(Vec::<Episode>::new().into(), 0);
        if self.clear_policy == ClearPolicy::StopPlayback {
            next = next.with_playing(false);
        }
        self.apply(next);
    }

    // ===== Navigation =====

    /// Advance to the next episode
    ///
    /// Shuffling draws a random index through the picker; with the default
    /// `Uniform` policy the draw may land on the current episode again.
    /// Sequential mode stops at the end of the queue. Empty queue is a no-op.
    pub fn play_next(&mut self) {
        let current = Arc::clone(self.store.current());
        match navigation::next_index(&current, self.shuffle_policy, self.picker.as_mut()) {
            Some(index) => {
                debug!(from = current.current_index(), to = index, "Next episode");
                self.apply(current.with_index(index));
            }
            None => trace!(
                len = current.len(),
                index = current.current_index(),
                "play_next: nothing ahead"
            ),
        }
    }

    /// Step back one episode in queue order
    pub fn play_previous(&mut self) {
        let current = Arc::clone(self.store.current());
        match navigation::previous_index(&current) {
            Some(index) => {
                debug!(from = current.current_index(), to = index, "Previous episode");
                self.apply(current.with_index(index));
            }
            None => trace!("play_previous: already at start"),
        }
    }

    /// Jump to the episode at `index` and start playing it
    ///
    /// Unlike `play_list`, a bad index is rejected: it means the caller
    /// holds a stale view of the queue.
    pub fn skip_to(&mut self, index: usize) -> Result<()> {
        let current = Arc::clone(self.store.current());
        if current.is_empty() {
            return Err(PlayerError::QueueEmpty);
        }
        if index >= current.len() {
            return Err(PlayerError::IndexOutOfBounds {
                index,
                len: current.len(),
            });
        }

        debug!(from = current.current_index(), to = index, "Skipping to episode");
        self.apply(current.with_index(index).with_playing(true));
        Ok(())
    }

    // ===== Toggles =====

    /// Flip `is_playing`
    pub fn toggle_play(&mut self) {
        let next = {
            let current = self.store.current();
            current.with_playing(!current.is_playing())
        };
        debug!(is_playing = next.is_playing(), "Toggled play");
        self.apply(next);
    }

    /// Flip `is_looping`
    pub fn toggle_loop(&mut self) {
        let next = {
            let current = self.store.current();
            current.with_looping(!current.is_looping())
        };
        debug!(is_looping = next.is_looping(), "Toggled loop");
        self.apply(next);
    }

    /// Flip `is_shuffling`
    pub fn toggle_shuffle(&mut self) {
        let next = {
            let current = self.store.current();
            current.with_shuffling(!current.is_shuffling())
        };
        debug!(is_shuffling = next.is_shuffling(), "Toggled shuffle");
        self.apply(next);
    }

    /// Sync `is_playing` with the media engine's transport state
    ///
    /// Called when the engine changes state on its own (track ended, OS
    /// interruption). Applied as-is, in arrival order.
    pub fn set_playing_state(&mut self, is_playing: bool) {
        debug!(is_playing, "Transport state from media engine");
        let next = self.store.current().with_playing(is_playing);
        self.apply(next);
    }

    // ===== State Queries =====

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<PlaybackSession> {
        Arc::clone(self.store.current())
    }

    /// Currently active episode
    pub fn current_episode(&self) -> Option<&Episode> {
        self.store.current().current_episode()
    }

    pub fn current_index(&self) -> usize {
        self.store.current().current_index()
    }

    pub fn queue(&self) -> &[Episode] {
        self.store.current().queue()
    }

    pub fn queue_len(&self) -> usize {
        self.store.current().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.current().is_empty()
    }

    pub fn is_playing(&self) -> bool {
        self.store.current().is_playing()
    }

    pub fn is_looping(&self) -> bool {
        self.store.current().is_looping()
    }

    pub fn is_shuffling(&self) -> bool {
        self.store.current().is_shuffling()
    }

    /// Check if there is a previous episode
    pub fn has_previous(&self) -> bool {
        self.store.current().has_previous()
    }

    /// Check if there is a next episode
    pub fn has_next(&self) -> bool {
        self.store.current().has_next()
    }

    pub fn clear_policy(&self) -> ClearPolicy {
        self.clear_policy
    }

    pub fn shuffle_policy(&self) -> ShufflePolicy {
        self.shuffle_policy
    }

    // ===== Subscriptions =====

    /// Register a callback for every new snapshot
    ///
    /// Called synchronously, before the mutating operation returns.
    /// Operations that leave the state unchanged do not notify.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Arc<PlaybackSession>) + Send + 'static,
    {
        let id = self.store.subscribe(Box::new(callback));
        trace!(?id, "Subscriber added");
        id
    }

    /// Remove a subscriber; returns false if the id was unknown
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.store.subscriber_count()
    }

    // ===== Event Handling =====

    /// Drain all pending events
    ///
    /// Returns all events since the last drain. Call after each operation
    /// (or batch of operations) to forward changes to the media engine.
    ///
    /// The log is unbounded: it grows until drained. Hosts that only use
    /// `subscribe` should still drain it periodically and drop the result.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    /// Commit `next`, recording events for whatever changed
    fn apply(&mut self, next: PlaybackSession) {
        let previous = Arc::clone(self.store.current());
        if self.store.commit(next) {
            let changes = events::diff(&previous, self.store.current());
            self.pending_events.extend(changes);
        }
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackController")
            .field("store", &self.store)
            .field("clear_policy", &self.clear_policy)
            .field("shuffle_policy", &self.shuffle_policy)
            .field("pending_events", &self.pending_events.len())
            .finish_non_exhaustive()
    }
}
