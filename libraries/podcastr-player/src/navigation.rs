//! Queue navigation rules
//!
//! Pure functions over a session snapshot. The controller applies the
//! indices they return; nothing here mutates state.

use crate::session::PlaybackSession;
use crate::shuffle::{pick_shuffled, IndexPicker};
use crate::types::ShufflePolicy;

/// True when there is an episode before the current one
pub fn has_previous(session: &PlaybackSession) -> bool {
    session.current_index() > 0
}

/// True when `play_next` can move
///
/// Shuffle treats the queue as a pool, so a next pick always exists. The
/// empty queue still reports true while shuffling; `next_index` guards it.
pub fn has_next(session: &PlaybackSession) -> bool {
    session.is_shuffling() || session.current_index() + 1 < session.len()
}

/// Index `play_next` should move to, or `None` for a no-op
pub fn next_index(
    session: &PlaybackSession,
    policy: ShufflePolicy,
    picker: &mut dyn IndexPicker,
) -> Option<usize> {
    if session.is_empty() {
        return None;
    }

    if session.is_shuffling() {
        pick_shuffled(policy, picker, session.current_index(), session.len())
    } else if has_next(session) {
        Some(session.current_index() + 1)
    } else {
        None
    }
}

/// Index `play_previous` should move to, or `None` for a no-op
///
/// Always strictly backward in queue order, shuffle or not.
pub fn previous_index(session: &PlaybackSession) -> Option<usize> {
    if has_previous(session) {
        Some(session.current_index() - 1)
    } else {
        None
    }
}

/// Clamp `index` into `0..len`, or 0 for an empty queue
pub fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shuffle::SequencePicker;
    use crate::types::Episode;
    use std::sync::Arc;

    fn queue(len: usize) -> Arc<[Episode]> {
        (0..len)
            .map(|i| Episode {
                title: format!("Episode {}", i),
                members: "Host".to_string(),
                thumbnail: String::new(),
                duration: 60,
                url: format!("https://cdn.example/{}.mp3", i),
            })
            .collect()
    }

    fn session(len: usize, index: usize, shuffling: bool) -> PlaybackSession {
        PlaybackSession::new(false, shuffling).with_queue(queue(len), index)
    }

    #[test]
    fn clamp_index_bounds() {
        assert_eq!(clamp_index(0, 0), 0);
        assert_eq!(clamp_index(5, 0), 0);
        assert_eq!(clamp_index(2, 3), 2);
        assert_eq!(clamp_index(3, 3), 2);
        assert_eq!(clamp_index(usize::MAX, 3), 2);
    }

    #[test]
    fn sequential_flags() {
        let first = session(3, 0, false);
        assert!(!has_previous(&first));
        assert!(has_next(&first));

        let last = session(3, 2, false);
        assert!(has_previous(&last));
        assert!(!has_next(&last));
    }

    #[test]
    fn shuffle_always_has_next() {
        let last = session(3, 2, true);
        assert!(has_next(&last));
    }

    #[test]
    fn sequential_next_advances_then_stops() {
        let mut picker = SequencePicker::new(vec![0]);

        let s = session(3, 1, false);
        assert_eq!(next_index(&s, ShufflePolicy::Uniform, &mut picker), Some(2));

        let s = session(3, 2, false);
        assert_eq!(next_index(&s, ShufflePolicy::Uniform, &mut picker), None);
    }

    #[test]
    fn shuffled_next_uses_picker() {
        let mut picker = SequencePicker::new(vec![2, 0]);
        let s = session(3, 1, true);

        assert_eq!(next_index(&s, ShufflePolicy::Uniform, &mut picker), Some(2));
        assert_eq!(next_index(&s, ShufflePolicy::Uniform, &mut picker), Some(0));
    }

    #[test]
    fn empty_queue_never_draws() {
        let mut picker = SequencePicker::new(vec![4]);
        let s = session(0, 0, true);

        assert!(has_next(&s));
        assert_eq!(next_index(&s, ShufflePolicy::Uniform, &mut picker), None);
        assert_eq!(picker.draws(), 0);
    }

    #[test]
    fn previous_ignores_shuffle() {
        assert_eq!(previous_index(&session(3, 2, true)), Some(1));
        assert_eq!(previous_index(&session(3, 0, true)), None);
    }
}
