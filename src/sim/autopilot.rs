//! Demo autopilot
//!
//! Produces control flags from the current state, standing in for a player.
//! Flies to the nearest pad at a cruise altitude above the terrain band,
//! then descends on a speed profile and levels out before touchdown.

use super::state::{ControlInput, GameState};
use crate::config::GameConfig;

/// Target horizontal speed per unit of distance to the pad
const HORIZONTAL_GAIN: f32 = 0.01;
/// Cap on horizontal speed while traversing
const MAX_DRIFT: f32 = 1.5;
/// Tilt (radians) per unit of horizontal speed error
const TILT_GAIN: f32 = 0.4;
const MAX_TILT: f32 = 0.35;
/// Angle error tolerated before rotating
const ROTATION_DEADBAND: f32 = 0.03;
/// Below this altitude above the pad the craft is held upright
const LEVEL_ALTITUDE: f32 = 40.0;
/// Target descent speed per unit of altitude
const DESCENT_GAIN: f32 = 0.02;
const MIN_DESCENT: f32 = 0.4;
const MAX_DESCENT: f32 = 1.5;
/// Cruise height as a fraction of field height, above any generated terrain
const CRUISE_FRACTION: f32 = 0.4;
/// Fraction of pad width around its center considered "over the pad"
const ALIGN_FRACTION: f32 = 0.3;

/// Choose control flags for the next step
pub fn autopilot(state: &GameState, config: &GameConfig) -> ControlInput {
    if state.status.is_terminal() {
        return ControlInput::default();
    }
    let lander = &state.lander;
    let Some(pad) = state.terrain.nearest_pad(lander.pos.x) else {
        return ControlInput::default();
    };

    let dx = pad.center() - lander.pos.x;
    let altitude = pad.y - lander.bottom();
    let aligned = dx.abs() < pad.width * ALIGN_FRACTION;

    // Positive angle pushes toward -x when thrusting
    let target_vx = (dx * HORIZONTAL_GAIN).clamp(-MAX_DRIFT, MAX_DRIFT);
    let target_angle = if altitude < LEVEL_ALTITUDE {
        0.0
    } else {
        (-(target_vx - lander.vel.x) * TILT_GAIN).clamp(-MAX_TILT, MAX_TILT)
    };
    let angle_error = target_angle - lander.angle;

    let target_vy = if aligned {
        (altitude * DESCENT_GAIN).clamp(MIN_DESCENT, MAX_DESCENT)
    } else {
        let cruise_y = state.terrain.height * CRUISE_FRACTION;
        ((cruise_y - lander.pos.y) * DESCENT_GAIN).clamp(-MAX_DESCENT, MAX_DESCENT)
    };

    log::trace!(
        "autopilot: dx={:.1} alt={:.1} target_vy={:.2} target_angle={:.2} fuel={:.1}",
        dx,
        altitude,
        target_vy,
        target_angle,
        lander.fuel
    );

    ControlInput {
        thrust: lander.vel.y > target_vy && lander.fuel > 0.0 && config.thrust_power > 0.0,
        rotate_left: angle_error > ROTATION_DEADBAND,
        rotate_right: angle_error < -ROTATION_DEADBAND,
    }
}
