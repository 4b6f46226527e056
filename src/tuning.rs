//! Data-driven game balance
//!
//! Loaded from an optional JSON file; any missing field falls back to the
//! default, so a tuning file only needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TuningError;

/// Gameplay balance numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Speed ===
    /// Scroll speed at session start (pixels/frame)
    pub base_scroll_speed: f32,
    /// Added to the scroll speed every `pace_interval` frames
    pub speed_increment: f32,
    /// Frames between speed increases
    pub pace_interval: u32,

    // === Spawning ===
    /// Frames between arrow waves
    pub arrow_interval: u32,
    /// Lower bound of the randomized obstacle interval
    pub obstacle_interval_min: u32,
    /// Initial upper bound of the obstacle interval (shrinks by one per spawn)
    pub obstacle_interval_max: u32,
    /// Probability that an obstacle is aimed at the car's lane
    pub aim_at_player_chance: f64,
    /// Disable to run the track without hazards (attract/demo screens)
    pub spawn_obstacles: bool,

    // === Scoring ===
    /// Points per surviving frame
    pub survival_points: u64,
    /// Points per obstacle that leaves the track without hitting the car
    pub clear_bonus: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_scroll_speed: 7.0,
            speed_increment: 2.0,
            pace_interval: 500,

            arrow_interval: 60,
            obstacle_interval_min: 40,
            obstacle_interval_max: 80,
            aim_at_player_chance: 0.5,
            spawn_obstacles: true,

            survival_points: 1,
            clear_bonus: 10,
        }
    }
}

impl Tuning {
    /// Tuning with obstacle spawning turned off
    pub fn without_obstacles() -> Self {
        Self {
            spawn_obstacles: false,
            ..Self::default()
        }
    }

    /// Check every value is usable by the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> TuningError {
            TuningError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        if !(self.base_scroll_speed.is_finite() && self.base_scroll_speed > 0.0) {
            return Err(invalid("base_scroll_speed", "must be a positive number"));
        }
        if !(self.speed_increment.is_finite() && self.speed_increment >= 0.0) {
            return Err(invalid("speed_increment", "must not be negative"));
        }
        if self.pace_interval == 0 {
            return Err(invalid("pace_interval", "must be at least 1"));
        }
        if self.arrow_interval == 0 {
            return Err(invalid("arrow_interval", "must be at least 1"));
        }
        if self.obstacle_interval_min == 0 {
            return Err(invalid("obstacle_interval_min", "must be at least 1"));
        }
        if self.obstacle_interval_min > self.obstacle_interval_max {
            return Err(invalid(
                "obstacle_interval_max",
                format!(
                    "must be >= obstacle_interval_min ({})",
                    self.obstacle_interval_min
                ),
            ));
        }
        if !(0.0..=1.0).contains(&self.aim_at_player_chance) {
            return Err(invalid("aim_at_player_chance", "must be within [0, 1]"));
        }
        Ok(())
    }

    /// Parse and validate tuning from JSON text
    pub fn from_json(json: &str, origin: &Path) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json).map_err(|source| TuningError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json, path)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }
}
