//! Speed Racer - A three-lane arcade racer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, car, spawning, collisions, scoring)
//! - `tuning`: Data-driven game balance
//! - `persistence`: Durable personal-best record
//! - `personal_best`: Game-over settlement of the personal best
//! - `autopilot`: Attract-mode / headless driver

pub mod autopilot;
pub mod error;
pub mod persistence;
pub mod personal_best;
pub mod sim;
pub mod tuning;

pub use error::{StoreError, TuningError};
pub use personal_best::{RunSummary, settle_run};
pub use tuning::Tuning;

/// Game configuration constants
///
/// Screen space: origin top-left, `y` grows downward.
pub mod consts {
    /// Fixed simulation rate (one `advance_frame` per tick)
    pub const FRAME_RATE: u32 = 60;
    /// Duration of one frame in seconds
    pub const FRAME_DT: f32 = 1.0 / FRAME_RATE as f32;

    /// Window height; the track is centred vertically in it
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Track geometry
    pub const TRACK_WIDTH: f32 = 900.0;
    pub const TRACK_CENTER_Y: f32 = WINDOW_HEIGHT / 2.0;
    /// Horizontal spawn position (entity centre) at the far edge of the track
    pub const SPAWN_X: f32 = TRACK_WIDTH;
    /// Entities whose left edge drops below this are culled
    pub const CULL_X: f32 = 75.0;

    /// Lanes
    pub const LANE_COUNT: u8 = 3;
    pub const LANE_SPACING: f32 = 160.0;

    /// Car - left edge pinned, only `y` moves
    pub const CAR_LEFT: f32 = 80.0;
    pub const CAR_WIDTH: f32 = 300.0;
    pub const CAR_HEIGHT: f32 = 100.0;
    /// Pixels moved per frame while changing lanes
    pub const LANE_SHIFT_STEP: f32 = 20.0;
    /// Frames needed to finish a lane change (160 / 20)
    pub const LANE_SHIFT_FRAMES: u32 = 8;

    /// Obstacle sprite sizes (square hitboxes)
    pub const ROCK_SIZE: f32 = 75.0;
    pub const BARREL_SIZE: f32 = 100.0;
    pub const OIL_SIZE: f32 = 130.0;
    /// Arrow sprite size
    pub const ARROW_SIZE: f32 = 90.0;
}

#[cfg(test)]
mod tests {
    use super::consts::*;

    #[test]
    fn test_lane_shift_constants_agree() {
        assert_eq!(LANE_SHIFT_STEP * LANE_SHIFT_FRAMES as f32, LANE_SPACING);
    }

    #[test]
    fn test_lanes_do_not_overlap_largest_obstacle() {
        // Car and the widest obstacle in the neighbouring lane must not touch
        assert!(CAR_HEIGHT / 2.0 + OIL_SIZE / 2.0 < LANE_SPACING);
    }
}
