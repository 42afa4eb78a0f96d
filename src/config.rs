//! Game configuration and difficulty presets
//!
//! A `GameConfig` is supplied once per episode and shared by every step.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("malformed config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config field `{field}` out of range: {value}")]
    OutOfRange { field: &'static str, value: f32 },
}

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "norm" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Episode-wide physics and landing constants
///
/// All rates are per reference tick (see [`crate::consts::REFERENCE_FRAME_MS`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Downward acceleration
    pub gravity: f32,
    /// Acceleration along the craft axis while thrusting
    pub thrust_power: f32,
    /// Angular velocity while a rotate flag is held (radians per tick)
    pub rotation_speed: f32,
    /// Largest touchdown speed that still counts as a landing
    pub max_landing_speed: f32,
    /// Largest touchdown tilt magnitude (radians)
    pub max_landing_angle: f32,
    /// Fuel burned per tick of thrust
    pub fuel_consumption_rate: f32,
    pub initial_fuel: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: 0.1,
            thrust_power: 0.2,
            rotation_speed: 0.05,
            max_landing_speed: 2.0,
            max_landing_angle: std::f32::consts::FRAC_PI_6,
            fuel_consumption_rate: 0.5,
            initial_fuel: 100.0,
        }
    }
}

impl GameConfig {
    /// Create a config from a difficulty preset
    pub fn from_preset(preset: Difficulty) -> Self {
        let normal = Self::default();
        match preset {
            Difficulty::Normal => normal,
            Difficulty::Easy => Self {
                gravity: 0.08,
                max_landing_speed: 3.0,
                max_landing_angle: std::f32::consts::FRAC_PI_4,
                initial_fuel: 150.0,
                ..normal
            },
            Difficulty::Hard => Self {
                gravity: 0.12,
                max_landing_speed: 1.5,
                max_landing_angle: std::f32::consts::PI / 9.0,
                initial_fuel: 75.0,
                ..normal
            },
        }
    }

    /// Check every field is finite and non-negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("gravity", self.gravity),
            ("thrustPower", self.thrust_power),
            ("rotationSpeed", self.rotation_speed),
            ("maxLandingSpeed", self.max_landing_speed),
            ("maxLandingAngle", self.max_landing_angle),
            ("fuelConsumptionRate", self.fuel_consumption_rate),
            ("initialFuel", self.initial_fuel),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                log::warn!("Rejecting config: {} = {}", field, value);
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        if self.max_landing_speed == 0.0 {
            log::warn!("Rejecting config: maxLandingSpeed must be positive");
            return Err(ConfigError::OutOfRange {
                field: "maxLandingSpeed",
                value: self.max_landing_speed,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}
