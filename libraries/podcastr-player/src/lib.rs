//! Podcastr - Player Session
//!
//! Playback session state and queue navigation for the Podcastr client.
//!
//! This crate provides:
//! - The session state store (queue, current index, play/loop/shuffle flags)
//! - Navigation rules (`has_next`, `has_previous`, next/previous index)
//! - Queue loading and modifier toggles
//! - Snapshot subscriptions and a drainable event log
//! - Seedable shuffle pickers for deterministic tests
//!
//! # Architecture
//!
//! `podcastr-player` does no I/O and never touches audio:
//! - No media engine; the host loads `Episode::url` into its own engine
//! - No UI toolkit; consumers subscribe to immutable snapshots
//! - No persistence; every run starts from an empty session
//!
//! The media engine reports transport changes back through
//! [`PlaybackController::set_playing_state`].
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use podcastr_player::{Episode, PlaybackController};
//!
//! let episode = |n: u32| Episode {
//!     title: format!("Episode {}", n),
//!     members: "Host, Guest".to_string(),
//!     thumbnail: format!("https://cdn.example/{}.jpg", n),
//!     duration: 2400,
//!     url: format!("https://cdn.example/{}.mp3", n),
//! };
//!
//! let mut controller = PlaybackController::default();
//! controller.play_list(vec![episode(1), episode(2), episode(3)], 0);
//!
//! assert!(controller.is_playing());
//! assert!(controller.has_next());
//! assert!(!controller.has_previous());
//!
//! controller.play_next();
//! assert_eq!(controller.current_index(), 1);
//!
//! // Media engine reports the episode ended
//! controller.set_playing_state(false);
//! assert!(!controller.is_playing());
//! ```
//!
//! # Example: Subscriptions and Events
//!
//! ```rust
//! use podcastr_player::{Episode, PlaybackController, SessionEvent};
//! use std::sync::{Arc, Mutex};
//!
//! let mut controller = PlaybackController::default();
//!
//! let titles = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&titles);
//! controller.subscribe(move |session| {
//!     if let Some(episode) = session.current_episode() {
//!         sink.lock().unwrap().push(episode.title.clone());
//!     }
//! });
//!
//! controller.play(Episode {
//!     title: "Pilot".to_string(),
//!     members: "Host".to_string(),
//!     thumbnail: String::new(),
//!     duration: 600,
//!     url: "https://cdn.example/pilot.mp3".to_string(),
//! });
//!
//! assert_eq!(*titles.lock().unwrap(), vec!["Pilot".to_string()]);
//! assert!(controller
//!     .drain_events()
//!     .contains(&SessionEvent::QueueReplaced { length: 1 }));
//! ```
//!
//! # Example: Deterministic Shuffle
//!
//! ```rust
//! use podcastr_player::{PlaybackController, SequencePicker, SessionConfig};
//!
//! let picker = SequencePicker::new(vec![2, 0, 1]);
//! let mut controller =
//!     PlaybackController::with_picker(SessionConfig::default(), Box::new(picker));
//! controller.toggle_shuffle();
//! assert!(controller.is_shuffling());
//! ```

mod controller;
mod error;
mod events;
pub mod navigation;
mod session;
mod shuffle;
mod store;
pub mod types;

// Public exports
pub use controller::PlaybackController;
pub use error::{PlayerError, Result};
pub use events::SessionEvent;
pub use session::PlaybackSession;
pub use shuffle::{pick_shuffled, IndexPicker, SeededPicker, SequencePicker};
pub use store::{Subscriber, SubscriptionId};
pub use types::{ClearPolicy, Episode, SessionConfig, ShufflePolicy};
