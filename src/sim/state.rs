//! Session state and frame I/O types
//!
//! Everything one play session owns lives in [`SessionState`]; a restart is a
//! fresh instance, never a reused one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::car::{Car, ShiftDirection};
use super::difficulty::DifficultyRamp;
use super::entity::{Obstacle, ObstacleKind};
use super::lane::Lane;
use super::spawner::Spawner;
use super::track::Track;
use crate::error::TuningError;
use crate::tuning::Tuning;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Created, waiting for `start`
    NotStarted,
    /// Frames are being simulated
    Running,
    /// The car crashed; terminal
    Ended { final_score: u64 },
}

/// Key-press edges for one frame
///
/// Built from key-down events, never from held keys, so one press moves at
/// most one lane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInput {
    pub shift_up: bool,
    pub shift_down: bool,
}

impl FrameInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn up() -> Self {
        Self {
            shift_up: true,
            shift_down: false,
        }
    }

    pub fn down() -> Self {
        Self {
            shift_up: false,
            shift_down: true,
        }
    }

    /// The lane command this frame; up and down together cancel out
    pub fn command(&self) -> Option<ShiftDirection> {
        match (self.shift_up, self.shift_down) {
            (true, false) => Some(ShiftDirection::Up),
            (false, true) => Some(ShiftDirection::Down),
            _ => None,
        }
    }
}

/// Something that happened during a frame (for sounds/effects)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    LaneShiftStarted { from: Lane, to: Lane },
    CarSettled { lane: Lane },
    ArrowsSpawned,
    ObstacleSpawned { id: u32, kind: ObstacleKind, lane: Lane },
    ObstacleCleared { id: u32, bonus: u64 },
    SpeedUp { scroll_speed: f32 },
    Crashed { obstacle_id: u32, final_score: u64 },
}

/// Car as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarView {
    pub lane: Lane,
    /// Centre in screen space
    pub pos: Vec2,
    pub shifting: bool,
}

/// Obstacle as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    pub kind: ObstacleKind,
    pub lane: Lane,
    /// Centre in screen space
    pub pos: Vec2,
    pub size: f32,
}

/// Render-ready copy of the session after a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub frame: u64,
    pub phase: SessionPhase,
    pub score: u64,
    pub scroll_speed: f32,
    pub car: CarView,
    pub obstacles: Vec<ObstacleView>,
    /// Arrow centres
    pub arrows: Vec<Vec2>,
}

/// Outcome of one `advance_frame` call
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    /// True once the session has ended (on the crash frame and after)
    pub ended: bool,
    pub events: Vec<GameEvent>,
    pub snapshot: Snapshot,
}

/// Complete state of one play session
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Seed for this session's spawns
    pub seed: u64,
    /// Validated on construction; read through [`SessionState::tuning`]
    pub(crate) tuning: Tuning,
    pub phase: SessionPhase,
    pub score: u64,
    /// Obstacles dodged this session
    pub cleared: u32,
    pub ramp: DifficultyRamp,
    pub car: Car,
    pub track: Track,
    pub(crate) spawner: Spawner,
}

impl SessionState {
    /// Create a session that has not started yet
    ///
    /// Fails if `tuning` does not pass [`Tuning::validate`].
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::with_valid_tuning(seed, tuning))
    }

    /// Create and immediately start a session
    pub fn started(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        let mut state = Self::new(seed, tuning)?;
        state.start();
        Ok(state)
    }

    fn with_valid_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            phase: SessionPhase::NotStarted,
            score: 0,
            cleared: 0,
            ramp: DifficultyRamp::new(&tuning),
            car: Car::default(),
            track: Track::new(),
            spawner: Spawner::new(seed, &tuning),
            tuning,
        }
    }

    /// Move from `NotStarted` to `Running`, resetting every field
    ///
    /// Returns false (and changes nothing) if the session already started.
    pub fn start(&mut self) -> bool {
        if self.phase != SessionPhase::NotStarted {
            log::warn!("start() on a session in {:?}; start a new session instead", self.phase);
            return false;
        }
        self.score = 0;
        self.cleared = 0;
        self.ramp = DifficultyRamp::new(&self.tuning);
        self.car = Car::default();
        self.track = Track::new();
        self.spawner = Spawner::new(self.seed, &self.tuning);
        self.phase = SessionPhase::Running;
        log::info!("Session started (seed {})", self.seed);
        true
    }

    /// Fresh, unstarted session with the same tuning and a derived seed
    pub fn next_session(&self) -> SessionState {
        let seed = self.seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        SessionState::with_valid_tuning(seed, self.tuning.clone())
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    #[inline]
    pub fn is_ended(&self) -> bool {
        matches!(self.phase, SessionPhase::Ended { .. })
    }

    pub fn final_score(&self) -> Option<u64> {
        match self.phase {
            SessionPhase::Ended { final_score } => Some(final_score),
            _ => None,
        }
    }

    #[inline]
    pub fn scroll_speed(&self) -> f32 {
        self.ramp.scroll_speed
    }

    #[inline]
    pub fn pace(&self) -> u64 {
        self.ramp.pace
    }

    /// Current obstacle spawn ceiling (tightens over the session)
    pub fn obstacle_ceiling(&self) -> u32 {
        self.spawner.obstacle_ceiling()
    }

    /// Place a scripted obstacle with its left edge at `left`
    ///
    /// Used for tutorials and deterministic scenarios. Returns its id.
    pub fn place_obstacle(&mut self, kind: ObstacleKind, lane: Lane, left: f32) -> u32 {
        // Scripted ids live in the upper half so they never clash with spawned ones
        let id = self
            .track
            .obstacles
            .iter()
            .map(|o| o.id)
            .max()
            .unwrap_or(0)
            .max(u32::MAX / 2)
            + 1;
        let mut obstacle = Obstacle::spawn(id, kind, lane);
        obstacle.pos.x = left + kind.size() / 2.0;
        self.track.obstacles.push(obstacle);
        id
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            frame: self.ramp.pace,
            phase: self.phase,
            score: self.score,
            scroll_speed: self.ramp.scroll_speed,
            car: CarView {
                lane: self.car.lane(),
                pos: self.car.pos(),
                shifting: self.car.is_shifting(),
            },
            obstacles: self
                .track
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    kind: o.kind,
                    lane: o.lane,
                    pos: o.pos,
                    size: o.kind.size(),
                })
                .collect(),
            arrows: self.track.arrows.iter().map(|a| a.pos).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_not_started() {
        let state = SessionState::new(1, Tuning::default()).unwrap();
        assert_eq!(state.phase, SessionPhase::NotStarted);
        assert!(!state.is_running());
        assert_eq!(state.final_score(), None);
    }

    #[test]
    fn test_invalid_tuning_is_rejected() {
        let zero_pace = Tuning {
            pace_interval: 0,
            ..Tuning::default()
        };
        assert!(matches!(
            SessionState::started(1, zero_pace),
            Err(TuningError::Invalid {
                field: "pace_interval",
                ..
            })
        ));

        let inverted = Tuning {
            obstacle_interval_min: 90,
            obstacle_interval_max: 80,
            ..Tuning::default()
        };
        assert!(SessionState::new(1, inverted).is_err());

        let wild_aim = Tuning {
            aim_at_player_chance: 1.5,
            ..Tuning::default()
        };
        assert!(SessionState::new(1, wild_aim).is_err());
    }

    #[test]
    fn test_next_session_keeps_tuning() {
        let tuning = Tuning {
            pace_interval: 250,
            ..Tuning::without_obstacles()
        };
        let state = SessionState::started(3, tuning.clone()).unwrap();
        assert_eq!(state.next_session().tuning(), &tuning);
    }

    #[test]
    fn test_start_only_once() {
        let mut state = SessionState::new(1, Tuning::default()).unwrap();
        assert!(state.start());
        assert!(state.is_running());
        assert!(!state.start());

        state.phase = SessionPhase::Ended { final_score: 12 };
        assert!(!state.start());
        assert_eq!(state.final_score(), Some(12));
    }

    #[test]
    fn test_start_resets_fields() {
        let mut state = SessionState::new(1, Tuning::default()).unwrap();
        state.score = 99;
        state.place_obstacle(ObstacleKind::Rock, Lane::TOP, 500.0);
        state.start();
        assert_eq!(state.score, 0);
        assert!(state.track.is_empty());
        assert_eq!(state.scroll_speed(), 7.0);
        assert_eq!(state.car.lane(), Lane::MIDDLE);
    }

    #[test]
    fn test_next_session_is_fresh() {
        let mut state = SessionState::started(5, Tuning::default()).unwrap();
        state.phase = SessionPhase::Ended { final_score: 3 };
        let next = state.next_session();
        assert_eq!(next.phase, SessionPhase::NotStarted);
        assert_ne!(next.seed, state.seed);
    }

    #[test]
    fn test_frame_input_command() {
        assert_eq!(FrameInput::up().command(), Some(ShiftDirection::Up));
        assert_eq!(FrameInput::down().command(), Some(ShiftDirection::Down));
        assert_eq!(FrameInput::idle().command(), None);
        let both = FrameInput {
            shift_up: true,
            shift_down: true,
        };
        assert_eq!(both.command(), None);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = SessionState::started(1, Tuning::default()).unwrap();
        state.place_obstacle(ObstacleKind::Oil, Lane::BOTTOM, 600.0);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"oil\""));
        assert!(json.contains("\"Running\""));
    }
}
