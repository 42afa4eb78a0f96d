//! Landing score

use super::state::LanderState;
use crate::consts::*;

/// Score for a successful landing: fuel bonus plus a time bonus that decays
/// by one point per 100 ms and bottoms out at zero.
pub fn landing_score(lander: &LanderState, elapsed_ms: f32) -> u32 {
    let fuel_bonus = lander.fuel.max(0.0) * FUEL_SCORE_MULTIPLIER;
    let time_bonus = (MAX_TIME_BONUS - elapsed_ms / TIME_BONUS_DECAY_MS).max(0.0);
    (fuel_bonus + time_bonus).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ControlInput;
    use glam::Vec2;

    fn lander(fuel: f32) -> LanderState {
        LanderState {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            angle: 0.0,
            angular_vel: 0.0,
            fuel,
            input: ControlInput::default(),
        }
    }

    #[test]
    fn test_fuel_and_time_bonus() {
        assert_eq!(landing_score(&lander(50.0), 10_000.0), 1400);
    }

    #[test]
    fn test_time_bonus_floors_at_zero() {
        assert_eq!(landing_score(&lander(20.0), 500_000.0), 200);
        assert_eq!(landing_score(&lander(0.0), 100_000.0), 0);
    }

    #[test]
    fn test_rounds_to_nearest() {
        // 12.34 * 10 + (1000 - 0.5) = 1122.9
        assert_eq!(landing_score(&lander(12.34), 50.0), 1123);
    }
}
