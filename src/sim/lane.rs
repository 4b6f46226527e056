//! Lane model
//!
//! Three parallel lanes numbered bottom to top: lane 1 is nearest the bottom
//! of the track, lane 3 nearest the top. The same mapping places the car,
//! obstacles and arrows.

use serde::{Deserialize, Serialize};

use crate::consts::{LANE_COUNT, LANE_SPACING, TRACK_CENTER_Y};

/// A valid lane number (always within 1..=3)
///
/// Raw integers must pass through [`Lane::new`]; there is no clamping, so
/// `lane_to_y` is total over every value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Lane(u8);

impl Lane {
    pub const BOTTOM: Lane = Lane(1);
    pub const MIDDLE: Lane = Lane(2);
    pub const TOP: Lane = Lane(3);
    /// All lanes, bottom to top
    pub const ALL: [Lane; LANE_COUNT as usize] = [Lane::BOTTOM, Lane::MIDDLE, Lane::TOP];

    /// Build a lane from a raw number, `None` when out of range
    pub fn new(n: u8) -> Option<Self> {
        is_valid(n).then_some(Lane(n))
    }

    #[inline]
    pub fn number(self) -> u8 {
        self.0
    }

    /// Lane above this one, if any
    pub fn up(self) -> Option<Lane> {
        Lane::new(self.0 + 1)
    }

    /// Lane below this one, if any
    pub fn down(self) -> Option<Lane> {
        self.0.checked_sub(1).and_then(Lane::new)
    }

    /// Vertical screen coordinate of the lane centre
    #[inline]
    pub fn y(self) -> f32 {
        lane_to_y(self)
    }
}

impl Default for Lane {
    fn default() -> Self {
        Lane::MIDDLE
    }
}

impl TryFrom<u8> for Lane {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Lane::new(n).ok_or_else(|| format!("lane {} outside 1..={}", n, LANE_COUNT))
    }
}

impl From<Lane> for u8 {
    fn from(lane: Lane) -> u8 {
        lane.0
    }
}

/// Whether a raw lane number names a real lane
#[inline]
pub fn is_valid(n: u8) -> bool {
    (1..=LANE_COUNT).contains(&n)
}

/// Vertical centre of a lane (screen `y` grows downward, so lane 3 is smallest)
pub fn lane_to_y(lane: Lane) -> f32 {
    TRACK_CENTER_Y + (2.0 - lane.0 as f32) * LANE_SPACING
}
