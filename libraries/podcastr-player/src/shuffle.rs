//! Shuffle index selection
//!
//! The random source sits behind [`IndexPicker`] so navigation can be
//! driven by a seeded generator in production and a fixed sequence in tests.

use crate::types::ShufflePolicy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of shuffle draws
pub trait IndexPicker: Send {
    /// Pick an index in `0..len`
    ///
    /// Must return 0 when `len == 0` rather than panic.
    fn pick(&mut self, len: usize) -> usize;
}

/// `StdRng`-backed picker, seedable for reproducible sessions
#[derive(Debug, Clone)]
pub struct SeededPicker {
    rng: StdRng,
}

impl SeededPicker {
    /// Picker with a fixed seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picker seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for SeededPicker {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl IndexPicker for SeededPicker {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Picker that replays a fixed list of values, wrapping around
///
/// Each value is reduced modulo `len`, so one script works for any queue.
/// An empty script, or an empty range, always picks 0.
#[derive(Debug, Clone, Default)]
pub struct SequencePicker {
    values: Vec<usize>,
    draws: usize,
}

impl SequencePicker {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, draws: 0 }
    }

    /// Number of picks made so far
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl IndexPicker for SequencePicker {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let value = if self.values.is_empty() {
            0
        } else {
            self.values[self.draws % self.values.len()]
        };
        self.draws += 1;
        value % len
    }
}

/// Draw the next shuffled index, or `None` for an empty queue
///
/// `Uniform` may return `current` again. `AvoidRepeat` draws from the
/// `len - 1` other slots and skips over `current`. The picker is never
/// consulted when `len == 0`.
pub fn pick_shuffled(
    policy: ShufflePolicy,
    picker: &mut dyn IndexPicker,
    current: usize,
    len: usize,
) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let index = match policy {
        ShufflePolicy::Uniform => picker.pick(len),
        ShufflePolicy::AvoidRepeat if len <= 1 => 0,
        ShufflePolicy::AvoidRepeat => {
            let drawn = picker.pick(len - 1);
            if drawn >= current {
                drawn + 1
            } else {
                drawn
            }
        }
    };

    tracing::trace!(?policy, current, len, index, "Shuffle draw");

    // A misbehaving picker must not break the index invariant
    Some(index.min(len - 1))
}
