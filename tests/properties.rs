//! Property tests over random command streams

use proptest::prelude::*;

use speed_racer::consts::*;
use speed_racer::sim::{FrameInput, GameEvent, Lane, SessionState, advance_frame, is_valid};
use speed_racer::{Tuning, sim::DifficultyRamp};

fn any_input() -> impl Strategy<Value = FrameInput> {
    (any::<bool>(), any::<bool>()).prop_map(|(shift_up, shift_down)| FrameInput {
        shift_up,
        shift_down,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn lane_stays_in_range(
        seed in any::<u64>(),
        inputs in prop::collection::vec(any_input(), 1..600),
    ) {
        let mut state = SessionState::started(seed, Tuning::default()).unwrap();
        for input in &inputs {
            let result = advance_frame(&mut state, input);
            let lane = result.snapshot.car.lane.number();
            prop_assert!(is_valid(lane));
            let y = result.snapshot.car.pos.y;
            prop_assert!(y >= Lane::TOP.y() && y <= Lane::BOTTOM.y());
            if result.ended {
                break;
            }
        }
    }

    #[test]
    fn score_counts_frames_and_dodges(
        seed in any::<u64>(),
        inputs in prop::collection::vec(any_input(), 1..800),
    ) {
        let mut state = SessionState::started(seed, Tuning::default()).unwrap();
        let mut last = 0u64;
        for input in &inputs {
            let result = advance_frame(&mut state, input);
            let cleared = result
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::ObstacleCleared { .. }))
                .count() as u64;
            prop_assert_eq!(result.snapshot.score, last + 1 + 10 * cleared);
            last = result.snapshot.score;
            if result.ended {
                break;
            }
        }
        prop_assert_eq!(state.score, state.pace() + 10 * u64::from(state.cleared));
    }

    #[test]
    fn shift_always_takes_fixed_frames(
        start in 1u8..=3,
        up in any::<bool>(),
        noise in prop::collection::vec(any_input(), LANE_SHIFT_FRAMES as usize),
    ) {
        let mut state = SessionState::started(1, Tuning::without_obstacles()).unwrap();
        state.car = speed_racer::sim::Car::new(Lane::new(start).unwrap());
        let first = if up { FrameInput::up() } else { FrameInput::down() };

        let result = advance_frame(&mut state, &first);
        let started = result
            .events
            .iter()
            .find_map(|e| match e {
                GameEvent::LaneShiftStarted { to, .. } => Some(*to),
                _ => None,
            });

        let Some(target) = started else {
            // Edge lane: the command was a no-op
            prop_assert!(!state.car.is_shifting());
            prop_assert_eq!(state.car.lane().number(), start);
            return Ok(());
        };

        // Any keys pressed mid-slide are ignored
        for input in noise.iter().take(LANE_SHIFT_FRAMES as usize - 1) {
            prop_assert!(state.car.is_shifting());
            advance_frame(&mut state, input);
            prop_assert_eq!(state.car.lane(), target);
        }
        prop_assert!(!state.car.is_shifting());
        prop_assert_eq!(state.car.pos().y, target.y());
    }

    #[test]
    fn speed_ramp_is_monotonic(frames in 1u64..3_000, interval in 1u32..700) {
        let tuning = Tuning {
            pace_interval: interval,
            ..Tuning::without_obstacles()
        };
        let mut state = SessionState::started(3, tuning.clone()).unwrap();
        let mut last = state.scroll_speed();
        for _ in 0..frames {
            advance_frame(&mut state, &FrameInput::idle());
            prop_assert!(state.scroll_speed() >= last);
            last = state.scroll_speed();
        }
        prop_assert_eq!(state.scroll_speed(), DifficultyRamp::speed_at(frames, &tuning));
    }
}
