//! Fixed-rate frame step
//!
//! Core game loop that advances a session by exactly one frame. Order within
//! a frame:
//! 1. survival point and pace
//! 2. lane command, then one transition step
//! 3. spawning
//! 4. scrolling
//! 5. collision (ends the session before anything is culled)
//! 6. culling and clearance bonus
//! 7. speed ramp (takes effect next frame)

use super::collision::first_hit;
use super::state::{FrameInput, FrameResult, GameEvent, SessionPhase, SessionState};

/// Advance the session by one frame
///
/// Outside `Running` nothing changes and the current snapshot is returned.
pub fn advance_frame(state: &mut SessionState, input: &FrameInput) -> FrameResult {
    let mut events = Vec::new();

    if state.phase != SessionPhase::Running {
        return FrameResult {
            ended: state.is_ended(),
            events,
            snapshot: state.snapshot(),
        };
    }

    state.ramp.tick();
    state.score += state.tuning.survival_points;

    // Car
    if let Some(direction) = input.command() {
        let from = state.car.lane();
        if state.car.shift_lane(direction) {
            events.push(GameEvent::LaneShiftStarted {
                from,
                to: state.car.lane(),
            });
        }
    }
    if state.car.step() {
        events.push(GameEvent::CarSettled {
            lane: state.car.lane(),
        });
    }

    // Spawn
    let batch = state.spawner.step(state.car.lane(), &state.tuning);
    if !batch.arrows.is_empty() {
        events.push(GameEvent::ArrowsSpawned);
    }
    if let Some(obstacle) = &batch.obstacle {
        events.push(GameEvent::ObstacleSpawned {
            id: obstacle.id,
            kind: obstacle.kind,
            lane: obstacle.lane,
        });
    }
    state.track.admit(batch);

    // Scroll
    state.track.advance(state.ramp.scroll_speed);

    // Collide
    if let Some(hit) = first_hit(&state.car, &state.track.obstacles) {
        let final_score = state.score;
        events.push(GameEvent::Crashed {
            obstacle_id: hit.id,
            final_score,
        });
        state.phase = SessionPhase::Ended { final_score };
        log::info!(
            "Crashed into {} #{} on frame {}: final score {}",
            hit.kind.as_str(),
            hit.id,
            state.ramp.pace,
            final_score
        );
        return FrameResult {
            ended: true,
            events,
            snapshot: state.snapshot(),
        };
    }

    // Cull and reward
    for obstacle in state.track.cull() {
        let bonus = state.tuning.clear_bonus;
        state.score += bonus;
        state.cleared += 1;
        events.push(GameEvent::ObstacleCleared {
            id: obstacle.id,
            bonus,
        });
    }

    // Ramp
    if let Some(scroll_speed) = state.ramp.ramp(&state.tuning) {
        log::info!("Speed up at frame {}: {}", state.ramp.pace, scroll_speed);
        events.push(GameEvent::SpeedUp { scroll_speed });
    }

    FrameResult {
        ended: false,
        events,
        snapshot: state.snapshot(),
    }
}
