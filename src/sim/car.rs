//! Car controller
//!
//! The car's left edge is pinned; only its vertical position changes. A lane
//! change slides the car in fixed steps, one per frame, so it always takes
//! `LANE_SHIFT_FRAMES` frames no matter how the frames are paced.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::lane::Lane;
use crate::consts::*;

/// Direction of a lane change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftDirection {
    Up,
    Down,
}

impl ShiftDirection {
    /// Sign of the per-frame `y` delta (screen `y` grows downward)
    fn y_sign(self) -> f32 {
        match self {
            ShiftDirection::Up => -1.0,
            ShiftDirection::Down => 1.0,
        }
    }
}

/// An in-progress lane change
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneShift {
    pub direction: ShiftDirection,
    /// Frames left before the car sits on the target lane
    pub steps_left: u32,
    target_y: f32,
}

/// The player's car
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    /// Logical lane; switches as soon as a shift is accepted
    lane: Lane,
    /// Centre of the car in screen space
    pos: Vec2,
    shift: Option<LaneShift>,
}

impl Default for Car {
    fn default() -> Self {
        Self::new(Lane::MIDDLE)
    }
}

impl Car {
    /// Car parked on `lane`
    pub fn new(lane: Lane) -> Self {
        Self {
            lane,
            pos: Vec2::new(CAR_LEFT + CAR_WIDTH / 2.0, lane.y()),
            shift: None,
        }
    }

    #[inline]
    pub fn lane(&self) -> Lane {
        self.lane
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn shift(&self) -> Option<LaneShift> {
        self.shift
    }

    #[inline]
    pub fn is_shifting(&self) -> bool {
        self.shift.is_some()
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::new(CAR_WIDTH, CAR_HEIGHT))
    }

    /// Request a lane change
    ///
    /// Ignored at the edge lanes and while another change is still sliding.
    /// Returns whether the shift was accepted.
    pub fn shift_lane(&mut self, direction: ShiftDirection) -> bool {
        if self.shift.is_some() {
            return false;
        }
        let target = match direction {
            ShiftDirection::Up => self.lane.up(),
            ShiftDirection::Down => self.lane.down(),
        };
        let Some(target) = target else {
            return false;
        };

        self.lane = target;
        self.shift = Some(LaneShift {
            direction,
            steps_left: LANE_SHIFT_FRAMES,
            target_y: target.y(),
        });
        true
    }

    /// Advance an in-progress lane change by one step
    ///
    /// Returns true on the frame the car lands on its new lane.
    pub fn step(&mut self) -> bool {
        let Some(shift) = self.shift.as_mut() else {
            return false;
        };

        self.pos.y += shift.direction.y_sign() * LANE_SHIFT_STEP;
        shift.steps_left -= 1;

        if shift.steps_left == 0 {
            // Snap so repeated shifts never accumulate drift
            self.pos.y = shift.target_y;
            self.shift = None;
            return true;
        }
        false
    }
}
