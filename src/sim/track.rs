//! Entity tracker
//!
//! Owns the live obstacles and arrows, scrolls them toward the car and drops
//! them once they pass the cull line.

use serde::{Deserialize, Serialize};

use super::entity::{Arrow, Obstacle};
use super::spawner::SpawnBatch;
use crate::consts::CULL_X;

/// Live entities on the track (kept in spawn order)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Track {
    pub obstacles: Vec<Obstacle>,
    pub arrows: Vec<Arrow>,
}

impl Track {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add freshly spawned entities
    pub fn admit(&mut self, batch: SpawnBatch) {
        self.arrows.extend(batch.arrows);
        if let Some(obstacle) = batch.obstacle {
            self.obstacles.push(obstacle);
        }
    }

    /// Move every entity left by `speed` pixels
    pub fn advance(&mut self, speed: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.pos.x -= speed;
        }
        for arrow in &mut self.arrows {
            arrow.pos.x -= speed;
        }
    }

    /// Remove entities past the cull line
    ///
    /// Returns the obstacles that left the track; each one was dodged.
    pub fn cull(&mut self) -> Vec<Obstacle> {
        self.arrows.retain(|a| a.bounds().left() >= CULL_X);

        let (passed, live): (Vec<_>, Vec<_>) = std::mem::take(&mut self.obstacles)
            .into_iter()
            .partition(|o| o.hitbox().left() < CULL_X);
        self.obstacles = live;
        passed
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty() && self.arrows.is_empty()
    }
}
