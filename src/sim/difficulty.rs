//! Difficulty ramp
//!
//! Scroll speed steps up every `pace_interval` frames and never comes down.
//! The obstacle cadence tightens separately inside the spawner.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyRamp {
    /// Elapsed frames this session
    pub pace: u64,
    /// Current scroll speed (pixels/frame)
    pub scroll_speed: f32,
}

impl DifficultyRamp {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pace: 0,
            scroll_speed: tuning.base_scroll_speed,
        }
    }

    /// Count one elapsed frame
    pub fn tick(&mut self) {
        self.pace += 1;
    }

    /// Apply a speed step if the pace just crossed an interval boundary
    ///
    /// Returns the new speed when it changed.
    pub fn ramp(&mut self, tuning: &Tuning) -> Option<f32> {
        // A zero interval never ramps
        let boundary = self.pace.checked_rem(u64::from(tuning.pace_interval)) == Some(0);
        if self.pace > 0 && boundary {
            self.scroll_speed += tuning.speed_increment;
            return Some(self.scroll_speed);
        }
        None
    }

    /// Speed expected after `pace` frames (closed form of the ramp)
    pub fn speed_at(pace: u64, tuning: &Tuning) -> f32 {
        let steps = pace.checked_div(u64::from(tuning.pace_interval)).unwrap_or(0);
        tuning.base_scroll_speed + steps as f32 * tuning.speed_increment
    }
}
