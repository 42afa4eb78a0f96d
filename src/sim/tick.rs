//! Variable timestep simulation step
//!
//! Advances an episode by one frame. Elapsed wall-clock time is normalized to
//! 60 Hz reference ticks so the craft handles the same at any frame rate.

use glam::Vec2;

use super::collision::check_terrain_collision;
use super::score::landing_score;
use super::state::{GameState, GameStatus, LanderState};
use crate::config::GameConfig;
use crate::ms_to_ticks;

/// Advance the episode by `delta_ms` milliseconds
///
/// Returns a new state; `state` is left untouched. Once the episode is over
/// the input is returned unchanged.
pub fn step(state: &GameState, config: &GameConfig, delta_ms: f32) -> GameState {
    if state.status.is_terminal() {
        return state.clone();
    }

    let delta_ms = if delta_ms.is_finite() && delta_ms >= 0.0 {
        delta_ms
    } else {
        log::warn!("Ignoring invalid frame delta: {}", delta_ms);
        0.0
    };
    let dt = ms_to_ticks(delta_ms);

    let mut lander = integrate(&state.lander, config, dt);
    let mut status = GameStatus::Playing;
    let mut score = state.score;

    let collision = check_terrain_collision(&lander, &state.terrain, config);
    if collision.collided {
        if collision.landed {
            status = GameStatus::Landed;
            score = landing_score(&lander, state.time_ms);
        } else {
            status = GameStatus::Crashed;
        }
        lander.vel = Vec2::ZERO;
        lander.angular_vel = 0.0;
    }

    if out_of_bounds(&lander, state.terrain.width) {
        status = GameStatus::Crashed;
    }

    // An empty tank leaves the craft falling but still in play

    if status.is_terminal() {
        log::info!(
            "Episode {} at ({:.1}, {:.1}), score {}",
            status.as_str(),
            lander.pos.x,
            lander.pos.y,
            score
        );
    }

    GameState {
        lander,
        terrain: state.terrain.clone(),
        status,
        score,
        time_ms: state.time_ms + delta_ms,
    }
}

/// Rotation, gravity, thrust and position over `dt` reference ticks
fn integrate(lander: &LanderState, config: &GameConfig, dt: f32) -> LanderState {
    let mut next = *lander;

    // Rotation rate is set, not accumulated; left wins when both are held
    next.angular_vel = if lander.input.rotate_left {
        config.rotation_speed
    } else if lander.input.rotate_right {
        -config.rotation_speed
    } else {
        0.0
    };
    next.angle += next.angular_vel * dt;

    next.vel.y += config.gravity * dt;

    if lander.input.thrust && lander.fuel > 0.0 {
        next.vel += thrust_vector(next.angle) * config.thrust_power * dt;
        next.fuel = (lander.fuel - config.fuel_consumption_rate * dt).max(0.0);
    }

    next.pos += next.vel * dt;
    next
}

/// Unit acceleration from the engine for a craft tilted by `angle`
///
/// Angle 0 is nose up, so thrust points toward negative y.
#[inline]
pub fn thrust_vector(angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(-sin, -cos)
}

fn out_of_bounds(lander: &LanderState, width: f32) -> bool {
    lander.pos.x < 0.0 || lander.pos.x > width || lander.pos.y < 0.0
}
