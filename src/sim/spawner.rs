//! Obstacle and arrow spawning
//!
//! Two independent cadences:
//! - arrows: a wave of three (one per lane) every `arrow_interval` frames
//! - obstacles: a randomized interval whose ceiling shrinks after every spawn

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{Arrow, Obstacle, ObstacleKind};
use super::lane::Lane;
use crate::tuning::Tuning;

/// What appeared on the track this frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpawnBatch {
    pub arrows: Vec<Arrow>,
    pub obstacle: Option<Obstacle>,
}

/// Pick an obstacle type, uniformly
pub fn pick_obstacle_kind<R: Rng + ?Sized>(rng: &mut R) -> ObstacleKind {
    ObstacleKind::ALL[rng.random_range(0..ObstacleKind::ALL.len())]
}

/// Pick the lane for a new obstacle
///
/// With probability `aim_chance` the obstacle targets `car_lane`, otherwise
/// any of the three lanes uniformly (which may also be the car's).
pub fn pick_obstacle_lane<R: Rng + ?Sized>(rng: &mut R, car_lane: Lane, aim_chance: f64) -> Lane {
    if rng.random_bool(aim_chance) {
        car_lane
    } else {
        Lane::ALL[rng.random_range(0..Lane::ALL.len())]
    }
}

/// Spawn scheduler for one session
#[derive(Debug, Clone)]
pub struct Spawner {
    arrow_frame: u32,
    obstacle_frame: u32,
    /// Frames until the next obstacle, drawn from `[min, ceiling]`
    obstacle_threshold: u32,
    /// Current upper bound for the obstacle interval
    obstacle_ceiling: u32,
    next_id: u32,
    rng: Pcg32,
}

impl Spawner {
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let obstacle_ceiling = tuning.obstacle_interval_max.max(tuning.obstacle_interval_min);
        let obstacle_threshold =
            rng.random_range(tuning.obstacle_interval_min..=obstacle_ceiling);
        Self {
            arrow_frame: 0,
            obstacle_frame: 0,
            obstacle_threshold,
            obstacle_ceiling,
            next_id: 1,
            rng,
        }
    }

    #[inline]
    pub fn obstacle_threshold(&self) -> u32 {
        self.obstacle_threshold
    }

    #[inline]
    pub fn obstacle_ceiling(&self) -> u32 {
        self.obstacle_ceiling
    }

    /// Run both cadences for one frame
    ///
    /// `car_lane` is the car's lane at spawn time, used for aimed obstacles.
    pub fn step(&mut self, car_lane: Lane, tuning: &Tuning) -> SpawnBatch {
        let mut batch = SpawnBatch::default();

        self.arrow_frame += 1;
        if self.arrow_frame >= tuning.arrow_interval {
            self.arrow_frame = 0;
            batch.arrows = Lane::ALL.iter().map(|&lane| Arrow::spawn(lane)).collect();
        }

        if tuning.spawn_obstacles {
            self.obstacle_frame += 1;
            if self.obstacle_frame >= self.obstacle_threshold {
                self.obstacle_frame = 0;
                batch.obstacle = Some(self.spawn_obstacle(car_lane, tuning));
            }
        }

        batch
    }

    fn spawn_obstacle(&mut self, car_lane: Lane, tuning: &Tuning) -> Obstacle {
        let kind = pick_obstacle_kind(&mut self.rng);
        let lane = pick_obstacle_lane(&mut self.rng, car_lane, tuning.aim_at_player_chance);
        let id = self.next_id;
        self.next_id += 1;

        // Tighten the cadence for the next one
        self.obstacle_ceiling = self
            .obstacle_ceiling
            .saturating_sub(1)
            .max(tuning.obstacle_interval_min);
        self.obstacle_threshold = self
            .rng
            .random_range(tuning.obstacle_interval_min..=self.obstacle_ceiling);

        log::debug!(
            "Spawned {} #{} in lane {} (next in {} frames)",
            kind.as_str(),
            id,
            lane.number(),
            self.obstacle_threshold
        );
        Obstacle::spawn(id, kind, lane)
    }
}
