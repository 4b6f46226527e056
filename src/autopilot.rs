//! Autopilot driver for attract mode and headless runs
//!
//! Reads a snapshot and answers with the key edges a player would press:
//! when the car's lane is about to be hit, slide into the neighbouring lane
//! with the most room.

use crate::consts::*;
use crate::sim::{FrameInput, Lane, ShiftDirection, Snapshot};

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Start dodging when an obstacle is this many frames from the bumper
    pub lookahead_frames: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            lookahead_frames: (2 * LANE_SHIFT_FRAMES + 8) as f32,
        }
    }
}

impl Autopilot {
    /// Frames until the nearest obstacle in `lane` reaches the front bumper
    ///
    /// Obstacles already level with the car count as 0; an empty lane is
    /// infinitely clear.
    pub fn clearance(snapshot: &Snapshot, lane: Lane) -> f32 {
        let bumper = CAR_LEFT + CAR_WIDTH;
        let speed = snapshot.scroll_speed.max(f32::EPSILON);
        snapshot
            .obstacles
            .iter()
            .filter(|o| o.lane == lane && o.pos.x + o.size / 2.0 > CAR_LEFT)
            .map(|o| ((o.pos.x - o.size / 2.0 - bumper) / speed).max(0.0))
            .fold(f32::INFINITY, f32::min)
    }

    /// Key edges for the next frame
    pub fn decide(&self, snapshot: &Snapshot) -> FrameInput {
        if snapshot.car.shifting {
            return FrameInput::idle();
        }

        let lane = snapshot.car.lane;
        let here = Self::clearance(snapshot, lane);
        if here > self.lookahead_frames {
            return FrameInput::idle();
        }

        let best = [
            (ShiftDirection::Up, lane.up()),
            (ShiftDirection::Down, lane.down()),
        ]
        .into_iter()
        .filter_map(|(dir, target)| target.map(|t| (dir, Self::clearance(snapshot, t))))
        .filter(|&(_, room)| room > here)
        .fold(None, |best: Option<(ShiftDirection, f32)>, candidate| match best {
            Some(b) if b.1 >= candidate.1 => Some(b),
            _ => Some(candidate),
        });

        match best {
            Some((ShiftDirection::Up, _)) => FrameInput::up(),
            Some((ShiftDirection::Down, _)) => FrameInput::down(),
            None => FrameInput::idle(),
        }
    }
}
