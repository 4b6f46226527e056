//! Collision detection between the car and obstacles
//!
//! Arrows never collide; only obstacles end a run.

use super::car::Car;
use super::entity::Obstacle;

/// First obstacle (in spawn order) whose hitbox overlaps the car
pub fn first_hit<'a>(car: &Car, obstacles: &'a [Obstacle]) -> Option<&'a Obstacle> {
    let car_box = car.hitbox();
    obstacles.iter().find(|o| o.hitbox().overlaps(&car_box))
}

/// Check whether any obstacle overlaps the car
pub fn car_hits_any(car: &Car, obstacles: &[Obstacle]) -> bool {
    first_hit(car, obstacles).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::car::ShiftDirection;
    use crate::sim::entity::ObstacleKind;
    use crate::sim::lane::Lane;

    fn obstacle_at(id: u32, kind: ObstacleKind, lane: Lane, left: f32) -> Obstacle {
        let mut o = Obstacle::spawn(id, kind, lane);
        o.pos.x = left + kind.size() / 2.0;
        o
    }

    #[test]
    fn test_same_lane_overlap_hits() {
        let car = Car::new(Lane::MIDDLE);
        let o = obstacle_at(1, ObstacleKind::Rock, Lane::MIDDLE, CAR_LEFT + CAR_WIDTH - 1.0);
        assert_eq!(first_hit(&car, &[o]).map(|o| o.id), Some(1));
    }

    #[test]
    fn test_touching_front_bumper_is_not_a_hit() {
        let car = Car::new(Lane::MIDDLE);
        let o = obstacle_at(1, ObstacleKind::Barrel, Lane::MIDDLE, CAR_LEFT + CAR_WIDTH);
        assert!(!car_hits_any(&car, &[o]));
    }

    #[test]
    fn test_neighbour_lane_never_hits() {
        for kind in ObstacleKind::ALL {
            let car = Car::new(Lane::MIDDLE);
            let above = obstacle_at(1, kind, Lane::TOP, CAR_LEFT);
            let below = obstacle_at(2, kind, Lane::BOTTOM, CAR_LEFT);
            assert!(!car_hits_any(&car, &[above, below]), "{:?}", kind);
        }
    }

    #[test]
    fn test_sliding_car_can_clip_neighbour_lane() {
        let mut car = Car::new(Lane::MIDDLE);
        car.shift_lane(ShiftDirection::Up);
        for _ in 0..4 {
            car.step();
        }
        // Halfway between lanes the car reaches into the top lane
        let o = obstacle_at(1, ObstacleKind::Oil, Lane::TOP, CAR_LEFT + 10.0);
        assert!(car_hits_any(&car, &[o]));
    }

    #[test]
    fn test_reports_first_in_spawn_order() {
        let car = Car::new(Lane::BOTTOM);
        let a = obstacle_at(4, ObstacleKind::Rock, Lane::BOTTOM, CAR_LEFT + 50.0);
        let b = obstacle_at(5, ObstacleKind::Oil, Lane::BOTTOM, CAR_LEFT + 100.0);
        assert_eq!(first_hit(&car, &[a, b]).map(|o| o.id), Some(4));
    }
}
