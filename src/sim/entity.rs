//! Track entities: obstacles and arrows
//!
//! Only geometry and a type tag live here. The presentation layer picks the
//! sprite for an obstacle by its [`ObstacleKind`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::lane::Lane;
use crate::consts::*;

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleKind {
    Rock,
    Barrel,
    Oil,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] =
        [ObstacleKind::Rock, ObstacleKind::Barrel, ObstacleKind::Oil];

    /// Side length of the square hitbox
    pub fn size(self) -> f32 {
        match self {
            ObstacleKind::Rock => ROCK_SIZE,
            ObstacleKind::Barrel => BARREL_SIZE,
            ObstacleKind::Oil => OIL_SIZE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ObstacleKind::Rock => "rock",
            ObstacleKind::Barrel => "barrel",
            ObstacleKind::Oil => "oil",
        }
    }
}

/// A hazard scrolling toward the car
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub lane: Lane,
    /// Centre in screen space
    pub pos: Vec2,
}

impl Obstacle {
    /// Obstacle at the far edge of the track in `lane`
    pub fn spawn(id: u32, kind: ObstacleKind, lane: Lane) -> Self {
        Self {
            id,
            kind,
            lane,
            pos: Vec2::new(SPAWN_X, lane.y()),
        }
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::splat(self.kind.size()))
    }
}

/// A cosmetic direction marker; never collides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    pub lane: Lane,
    /// Centre in screen space
    pub pos: Vec2,
}

impl Arrow {
    pub fn spawn(lane: Lane) -> Self {
        Self {
            lane,
            pos: Vec2::new(SPAWN_X, lane.y()),
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::splat(ARROW_SIZE))
    }
}
