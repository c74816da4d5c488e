//! Property-based tests for the playback controller
//!
//! Uses proptest to check the navigation laws and the index invariant
//! across random queues and random operation sequences.

use podcastr_player::{
    ClearPolicy, Episode, PlaybackController, PlaybackSession, SessionConfig, ShufflePolicy,
};
use proptest::prelude::*;

// ===== Helpers =====

fn arbitrary_episode() -> impl Strategy<Value = Episode> {
    (
        "[A-Za-z0-9 ]{1,30}", // title
        "[A-Za-z, ]{1,20}",   // members
        1u64..7200,           // duration (seconds)
        "[a-z0-9]{1,10}",     // slug
    )
        .prop_map(|(title, members, duration, slug)| Episode {
            title,
            members,
            thumbnail: format!("https://cdn.example/{}.jpg", slug),
            duration,
            url: format!("https://cdn.example/{}.mp3", slug),
        })
}

fn arbitrary_queue() -> impl Strategy<Value = Vec<Episode>> {
    prop::collection::vec(arbitrary_episode(), 1..30)
}

#[derive(Debug, Clone)]
enum Op {
    Play(Episode),
    PlayList(Vec<Episode>, usize),
    Next,
    Previous,
    TogglePlay,
    ToggleLoop,
    ToggleShuffle,
    SetPlaying(bool),
    Clear,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arbitrary_episode().prop_map(Op::Play),
        (prop::collection::vec(arbitrary_episode(), 0..10), 0usize..20)
            .prop_map(|(list, index)| Op::PlayList(list, index)),
        Just(Op::Next),
        Just(Op::Next),
        Just(Op::Previous),
        Just(Op::TogglePlay),
        Just(Op::ToggleLoop),
        Just(Op::ToggleShuffle),
        any::<bool>().prop_map(Op::SetPlaying),
        Just(Op::Clear),
    ]
}

fn apply(controller: &mut PlaybackController, op: Op) {
    match op {
        Op::Play(episode) => controller.play(episode),
        Op::PlayList(list, index) => controller.play_list(list, index),
        Op::Next => controller.play_next(),
        Op::Previous => controller.play_previous(),
        Op::TogglePlay => controller.toggle_play(),
        Op::ToggleLoop => controller.toggle_loop(),
        Op::ToggleShuffle => controller.toggle_shuffle(),
        Op::SetPlaying(flag) => controller.set_playing_state(flag),
        Op::Clear => controller.clear_player_state(),
    }
}

fn check_invariants(session: &PlaybackSession) -> Result<(), TestCaseError> {
    if session.is_empty() {
        prop_assert_eq!(session.current_index(), 0);
    } else {
        prop_assert!(session.current_index() < session.len());
    }
    prop_assert_eq!(session.has_previous(), session.current_index() > 0);
    if session.is_shuffling() {
        prop_assert!(session.has_next());
    } else {
        prop_assert_eq!(
            session.has_next(),
            session.current_index() + 1 < session.len()
        );
    }
    Ok(())
}

// ===== Property Tests =====

proptest! {
    /// Property: play_list with an in-range index lands exactly there
    #[test]
    fn play_list_lands_on_index(
        (queue, index) in arbitrary_queue()
            .prop_flat_map(|q| { let len = q.len(); (Just(q), 0..len) })
    ) {
        let mut controller = PlaybackController::default();
        controller.play_list(queue.clone(), index);

        prop_assert_eq!(controller.current_index(), index);
        prop_assert!(controller.is_playing());
        prop_assert_eq!(controller.queue(), queue.as_slice());
    }

    /// Property: out-of-range play_list index clamps to the last episode
    #[test]
    fn play_list_clamps(queue in arbitrary_queue(), extra in 0usize..100) {
        let mut controller = PlaybackController::default();
        let len = queue.len();
        controller.play_list(queue, len + extra);

        prop_assert_eq!(controller.current_index(), len - 1);
    }

    /// Property: the index invariant and flag laws hold after every operation
    #[test]
    fn invariants_hold_for_any_sequence(
        ops in prop::collection::vec(arbitrary_op(), 1..60),
        seed in any::<u64>(),
        avoid_repeat in any::<bool>(),
        stop_on_clear in any::<bool>(),
    ) {
        let mut controller = PlaybackController::new(SessionConfig {
            seed: Some(seed),
            shuffle_policy: if avoid_repeat { ShufflePolicy::AvoidRepeat } else { ShufflePolicy::Uniform },
            clear_policy: if stop_on_clear { ClearPolicy::StopPlayback } else { ClearPolicy::KeepPlaying },
            ..Default::default()
        });

        for op in ops {
            apply(&mut controller, op);
            check_invariants(&controller.snapshot())?;
        }
    }

    /// Property: every toggle is an involution
    #[test]
    fn toggles_are_involutions(ops in prop::collection::vec(arbitrary_op(), 0..20)) {
        let mut controller = PlaybackController::new(SessionConfig {
            seed: Some(1),
            ..Default::default()
        });
        for op in ops {
            apply(&mut controller, op);
        }

        let before = controller.snapshot();

        controller.toggle_loop();
        controller.toggle_loop();
        controller.toggle_shuffle();
        controller.toggle_shuffle();
        controller.toggle_play();
        controller.toggle_play();

        prop_assert_eq!(&*controller.snapshot(), &*before);
    }

    /// Property: clear always empties the queue and zeroes the index
    #[test]
    fn clear_resets_queue(ops in prop::collection::vec(arbitrary_op(), 0..30)) {
        let mut controller = PlaybackController::new(SessionConfig {
            seed: Some(3),
            ..Default::default()
        });
        for op in ops {
            apply(&mut controller, op);
        }
        let was_playing = controller.is_playing();

        controller.clear_player_state();

        prop_assert!(controller.is_empty());
        prop_assert_eq!(controller.current_index(), 0);
        prop_assert_eq!(controller.is_playing(), was_playing);
    }

    /// Property: sequential next never skips and never passes the end
    #[test]
    fn sequential_next_steps_by_one(queue in arbitrary_queue(), steps in 1usize..40) {
        let mut controller = PlaybackController::default();
        let len = queue.len();
        controller.play_list(queue, 0);

        for step in 1..=steps {
            controller.play_next();
            prop_assert_eq!(controller.current_index(), step.min(len - 1));
        }
    }

    /// Property: AvoidRepeat never lands on the current index twice in a row
    #[test]
    fn avoid_repeat_always_moves(queue in prop::collection::vec(arbitrary_episode(), 2..20), seed in any::<u64>()) {
        let mut controller = PlaybackController::new(SessionConfig {
            seed: Some(seed),
            shuffling: true,
            shuffle_policy: ShufflePolicy::AvoidRepeat,
            ..Default::default()
        });
        controller.play_list(queue, 0);

        for _ in 0..30 {
            let before = controller.current_index();
            controller.play_next();
            prop_assert_ne!(controller.current_index(), before);
        }
    }
}
