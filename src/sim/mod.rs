//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed frame step only (one `advance_frame` per 60 Hz tick)
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or file I/O

pub mod aabb;
pub mod car;
pub mod collision;
pub mod difficulty;
pub mod entity;
pub mod lane;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod track;

pub use aabb::Aabb;
pub use car::{Car, LaneShift, ShiftDirection};
pub use collision::{car_hits_any, first_hit};
pub use difficulty::DifficultyRamp;
pub use entity::{Arrow, Obstacle, ObstacleKind};
pub use lane::{Lane, is_valid, lane_to_y};
pub use spawner::{SpawnBatch, Spawner, pick_obstacle_kind, pick_obstacle_lane};
pub use state::{
    CarView, FrameInput, FrameResult, GameEvent, ObstacleView, SessionPhase, SessionState,
    Snapshot,
};
pub use tick::advance_frame;
pub use track::Track;
