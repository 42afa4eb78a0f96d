//! Deterministic simulation module
//!
//! All gameplay logic lives here. Given the same state, config and frame
//! delta, a step always produces the same result:
//! - Randomness only at episode start (terrain, initial drift), from an injectable RNG
//! - Whole-state replacement, inputs are never mutated
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod score;
pub mod state;
pub mod terrain;
pub mod tick;

pub use autopilot::autopilot;
pub use collision::{CollisionResult, check_terrain_collision, is_safe_landing};
pub use score::landing_score;
pub use state::{ControlInput, GameState, GameStatus, LanderState};
pub use terrain::{LandingPad, Terrain, generate_terrain};
pub use tick::{step, thrust_vector};
