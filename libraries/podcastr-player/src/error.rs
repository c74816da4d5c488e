//! Error types for the player session

use thiserror::Error;

/// Player session errors
///
/// The core transport and navigation operations never fail; these cover
/// configuration loading and explicit queue selection only.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Queue is empty
    #[error("Queue is empty")]
    QueueEmpty,

    /// Index out of bounds
    #[error("Index {index} out of bounds for queue of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Configuration could not be parsed
    #[error("Invalid session config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for player session operations
pub type Result<T> = std::result::Result<T, PlayerError>;
