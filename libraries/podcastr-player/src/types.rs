//! Core types for the player session

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A playable podcast episode
///
/// Plain value type. Two episodes are the same if all fields match; the
/// queue never deduplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Episode {
    /// Episode title
    pub title: String,

    /// Hosts and guests, as displayed
    pub members: String,

    /// Thumbnail image URL
    pub thumbnail: String,

    /// Length in whole seconds
    pub duration: u64,

    /// Audio file URL handed to the media engine
    pub url: String,
}

impl Episode {
    /// Episode length as a `Duration`
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration)
    }
}

/// What `clear_player_state` does with the playing flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearPolicy {
    /// Leave `is_playing` untouched; the host stops the engine itself
    #[default]
    KeepPlaying,

    /// Force `is_playing` to false along with the queue reset
    StopPlayback,
}

/// How `play_next` picks an index while shuffling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShufflePolicy {
    /// Uniform draw over the whole queue; the current index may come up again
    #[default]
    Uniform,

    /// Uniform draw over every index except the current one
    ///
    /// Falls back to the only index when the queue has a single item.
    AvoidRepeat,
}

/// Configuration for the playback controller
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Clear behaviour (default: KeepPlaying)
    pub clear_policy: ClearPolicy,

    /// Shuffle draw policy (default: Uniform)
    pub shuffle_policy: ShufflePolicy,

    /// Initial loop modifier (default: false)
    pub looping: bool,

    /// Initial shuffle modifier (default: false)
    pub shuffling: bool,

    /// Seed for the shuffle generator (default: entropy)
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}
