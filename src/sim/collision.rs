//! Terrain contact and landing evaluation
//!
//! The lander is treated as a point at its center with legs a fixed distance
//! below. Contact happens when the legs reach the ground height under the
//! center; whether that contact is a landing depends on where and how fast.

use super::state::LanderState;
use super::terrain::Terrain;
use crate::config::GameConfig;

/// Result of a terrain contact check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionResult {
    /// Legs at or below the ground
    pub collided: bool,
    /// Contact qualifies as a safe landing
    pub landed: bool,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self::default()
    }
}

/// Check the lander against the terrain
///
/// A lander horizontally outside the polyline never collides here; the
/// stepper's bounds check covers that case.
pub fn check_terrain_collision(
    lander: &LanderState,
    terrain: &Terrain,
    config: &GameConfig,
) -> CollisionResult {
    let Some(ground_y) = terrain.height_at(lander.pos.x) else {
        return CollisionResult::miss();
    };

    // Larger y is lower on screen
    if lander.bottom() < ground_y {
        return CollisionResult::miss();
    }

    CollisionResult {
        collided: true,
        landed: is_safe_landing(lander, terrain, config),
    }
}

/// Touchdown criteria: over a pad, upright enough, slow enough
pub fn is_safe_landing(lander: &LanderState, terrain: &Terrain, config: &GameConfig) -> bool {
    let on_pad = terrain.pad_at(lander.pos.x).is_some();
    let angle_ok = lander.angle.abs() <= config.max_landing_angle;
    let speed_ok = lander.speed() <= config.max_landing_speed;
    on_pad && angle_ok && speed_ok
}
