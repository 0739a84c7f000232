//! Game configuration and balance tuning
//!
//! The frontend owns window size and frame rate; everything here is handed to
//! the simulation once at startup. Files are JSON and every field is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Why a config file was rejected
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Not valid JSON, or a field has the wrong type
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Parsed, but a value would break the simulation
    #[error("Invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Window and frame pacing owned by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    /// Target frames per second for the driver loop
    pub frame_rate: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            frame_rate: FRAME_RATE,
        }
    }
}

/// Ship handling, heat and durability
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub max_hp: i32,
    pub collision_damage: i32,
    /// Degrees turned per rotate call
    pub rotation_speed: f32,
    /// Velocity change per accelerate/decelerate call
    pub acceleration: f32,
    pub min_velocity: f32,
    pub max_velocity: f32,
    /// Velocity divisor when the heading changes
    pub inertia: f32,
    /// Heat per unit of speed on each successful thrust
    pub heat_factor: f32,
    pub max_temperature: f32,
    /// Heat shed every tick
    pub cooldown: f32,
    /// Heat added by each shot
    pub shot_heat: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            max_hp: PLAYER_MAX_HP,
            collision_damage: PLAYER_COLLISION_DAMAGE,
            rotation_speed: ROTATION_SPEED,
            acceleration: ACCELERATION,
            min_velocity: MIN_VELOCITY,
            max_velocity: MAX_VELOCITY,
            inertia: INERTIA,
            heat_factor: HEAT_FACTOR,
            max_temperature: MAX_TEMPERATURE,
            cooldown: COOLDOWN,
            shot_heat: SHOT_HEAT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletTuning {
    pub speed: f32,
    pub size: f32,
    pub hp: i32,
    pub damage: i32,
}

impl Default for BulletTuning {
    fn default() -> Self {
        Self {
            speed: BULLET_SPEED,
            size: BULLET_SIZE,
            hp: BULLET_HP,
            damage: BULLET_DAMAGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidTuning {
    pub speed: f32,
    pub hp: i32,
    pub damage: i32,
    /// Seconds between spawns
    pub spawn_interval: f32,
}

impl Default for AsteroidTuning {
    fn default() -> Self {
        Self {
            speed: ASTEROID_SPEED,
            hp: ASTEROID_HP,
            damage: ASTEROID_DAMAGE,
            spawn_interval: SPAWN_INTERVAL,
        }
    }
}

/// Complete startup configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Run seed for reproducible spawns
    pub seed: u64,
    pub window: WindowConfig,
    pub player: PlayerTuning,
    pub bullet: BulletTuning,
    pub asteroid: AsteroidTuning,
}

impl GameConfig {
    /// Parse and validate a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            (self.window.width > 0.0, "window.width", "must be positive"),
            (self.window.height > 0.0, "window.height", "must be positive"),
            (self.bullet.size > 0.0, "bullet.size", "must be positive"),
            (self.player.inertia > 0.0, "player.inertia", "must be positive"),
            (
                self.player.min_velocity < self.player.max_velocity,
                "player.min_velocity",
                "must be below player.max_velocity",
            ),
        ];
        match checks.into_iter().find(|(ok, _, _)| !ok) {
            Some((_, field, reason)) => Err(ConfigError::Invalid { field, reason }),
            None => Ok(()),
        }
    }

    /// Load a config file, falling back to defaults if it can't be read, parsed
    /// or validated
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Invalid config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
