//! Lunar Lander - deterministic 2D descent simulation
//!
//! Core modules:
//! - `sim`: Physics stepper, terrain, collision and scoring
//! - `config`: Episode-wide tuning constants and difficulty presets
//! - `highscores`: In-session landing leaderboard
//!
//! Rendering and input handling live outside this crate. A driver writes the
//! control flags on the lander, calls [`sim::step`] once per frame and hands
//! the resulting [`sim::GameState`] to whatever draws it.

pub mod config;
pub mod highscores;
pub mod sim;

pub use config::{ConfigError, Difficulty, GameConfig};
pub use highscores::HighScores;

/// Simulation constants
pub mod consts {
    /// Reference frame interval (ms) that elapsed time is normalized against (60 Hz)
    pub const REFERENCE_FRAME_MS: f32 = 16.67;

    /// Default play-field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Vertical offset from lander center to its landing legs
    pub const LANDER_HALF_HEIGHT: f32 = 15.0;

    /// Lander spawn height (distance from the top of the field)
    pub const START_Y: f32 = 50.0;
    /// Maximum initial horizontal drift (either direction)
    pub const START_DRIFT: f32 = 1.0;

    /// Terrain generation
    pub const TERRAIN_SEGMENTS: usize = 20;
    /// Segments at each edge that never host a pad
    pub const PAD_EDGE_MARGIN: usize = 2;
    pub const MIN_PADS: usize = 2;
    pub const MAX_PADS: usize = 3;
    /// Pad width in segment widths
    pub const PAD_WIDTH_SEGMENTS: f32 = 1.5;
    /// How far a pad starts before its boundary point, in segment widths
    pub const PAD_LEAD_SEGMENTS: f32 = 0.25;
    /// Largest height change between neighbouring terrain points
    pub const MAX_HEIGHT_STEP: f32 = 30.0;
    /// Starting height cursor as a fraction of field height, plus jitter
    pub const START_HEIGHT_FRACTION: f32 = 0.7;
    pub const START_HEIGHT_JITTER: f32 = 50.0;
    /// Terrain height clamp as fractions of field height
    pub const MIN_TERRAIN_FRACTION: f32 = 0.5;
    pub const MAX_TERRAIN_FRACTION: f32 = 0.9;

    /// Scoring
    pub const FUEL_SCORE_MULTIPLIER: f32 = 10.0;
    pub const MAX_TIME_BONUS: f32 = 1000.0;
    /// Elapsed milliseconds per point of time bonus lost
    pub const TIME_BONUS_DECAY_MS: f32 = 100.0;
}

/// Convert an elapsed wall-clock interval into reference ticks
#[inline]
pub fn ms_to_ticks(delta_ms: f32) -> f32 {
    delta_ms / consts::REFERENCE_FRAME_MS
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}
