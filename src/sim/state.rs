//! Episode state and core simulation types
//!
//! Every step produces a fresh `GameState`; the previous value is never
//! touched, so drivers can keep it around for interpolation or replays.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::terrain::{Terrain, generate_terrain};
use crate::config::GameConfig;
use crate::consts::*;

/// Episode lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Craft is airborne and responding to input
    Playing,
    /// Touched down on a pad within the speed and tilt limits
    Landed,
    /// Hit terrain unsafely or left the play field
    Crashed,
    /// Reserved; running dry while airborne does not end the episode
    OutOfFuel,
}

impl GameStatus {
    /// True once the episode has ended and stepping is a no-op
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Landed => "landed",
            GameStatus::Crashed => "crashed",
            GameStatus::OutOfFuel => "out_of_fuel",
        }
    }
}

/// Control flags written by the input layer before each step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlInput {
    pub thrust: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
}

/// The craft
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LanderState {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Tilt in radians, 0 = nose up. Not wrapped.
    pub angle: f32,
    /// Radians per reference tick
    pub angular_vel: f32,
    /// Remaining fuel, never negative
    pub fuel: f32,
    pub input: ControlInput,
}

impl LanderState {
    /// Spawn a lander at the top center of a field `width` wide, with a small random drift
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, width: f32, rng: &mut R) -> Self {
        let drift = rng.random_range(-START_DRIFT..START_DRIFT);
        Self {
            pos: Vec2::new(width / 2.0, START_Y),
            vel: Vec2::new(drift, 0.0),
            angle: 0.0,
            angular_vel: 0.0,
            fuel: config.initial_fuel,
            input: ControlInput::default(),
        }
    }

    pub fn with_pos(self, pos: Vec2) -> Self {
        Self { pos, ..self }
    }

    pub fn with_vel(self, vel: Vec2) -> Self {
        Self { vel, ..self }
    }

    pub fn with_angle(self, angle: f32) -> Self {
        Self { angle, ..self }
    }

    pub fn with_fuel(self, fuel: f32) -> Self {
        Self {
            fuel: fuel.max(0.0),
            ..self
        }
    }

    pub fn with_input(self, input: ControlInput) -> Self {
        Self { input, ..self }
    }

    /// Magnitude of the velocity vector
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Y coordinate of the landing legs (larger y is lower on screen)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + LANDER_HALF_HEIGHT
    }
}

/// Complete episode state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub lander: LanderState,
    /// Fixed for the lifetime of the episode
    pub terrain: Terrain,
    pub status: GameStatus,
    /// Set by the step that touches down safely on a pad
    pub score: u32,
    /// Elapsed wall-clock time in milliseconds
    pub time_ms: f32,
}

impl GameState {
    /// Start a new episode using the thread RNG
    pub fn new(config: &GameConfig, width: f32, height: f32) -> Self {
        Self::with_rng(config, width, height, &mut rand::rng())
    }

    /// Start a new episode drawing terrain and drift from `rng`
    pub fn with_rng<R: Rng + ?Sized>(
        config: &GameConfig,
        width: f32,
        height: f32,
        rng: &mut R,
    ) -> Self {
        let terrain = generate_terrain(width, height, rng);
        Self::on_terrain(config, terrain, rng)
    }

    /// Start a new episode over an existing terrain
    pub fn on_terrain<R: Rng + ?Sized>(config: &GameConfig, terrain: Terrain, rng: &mut R) -> Self {
        Self {
            lander: LanderState::new(config, terrain.width, rng),
            terrain,
            status: GameStatus::Playing,
            score: 0,
            time_ms: 0.0,
        }
    }

    /// Discard this episode and start over on fresh terrain of the same size
    pub fn restart(&self, config: &GameConfig) -> Self {
        log::info!("Restarting episode (was {})", self.status.as_str());
        Self::new(config, self.terrain.width, self.terrain.height)
    }

    /// Copy of this state with the lander's control flags replaced
    pub fn with_input(&self, input: ControlInput) -> Self {
        Self {
            lander: self.lander.with_input(input),
            ..self.clone()
        }
    }
}
