//! Game balance tuning
//!
//! Loaded from JSON when the host provides a file, otherwise the built-in
//! defaults apply. Layout thresholds are not tunable; they live in
//! [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(&'static str),
}

/// Data-driven gameplay balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Ball ===
    /// Velocity given to the ball on launch
    pub launch_velocity: Vec2,
    /// Per-component change from ball speed powerups
    pub ball_speed_step: f32,

    // === Bar ===
    /// Initial paddle speed
    pub bar_speed: f32,
    /// Speed added by a FasterBar powerup
    pub bar_speed_up: f32,
    /// Speed removed by a SlowerBar powerup
    pub bar_slow_down: f32,
    /// SlowerBar never takes the paddle below this speed
    pub bar_min_speed: f32,

    // === Chunks ===
    pub chunk_count: u32,
    pub chunk_columns: u32,

    // === Powerups ===
    pub powerup_fall_speed: f32,
    /// A destroyed chunk spawns a powerup once in this many times
    pub powerup_spawn_one_in: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            launch_velocity: BALL_LAUNCH_VELOCITY,
            ball_speed_step: BALL_SPEED_STEP,

            bar_speed: BAR_SPEED,
            bar_speed_up: BAR_SPEED_UP,
            bar_slow_down: BAR_SLOW_DOWN,
            bar_min_speed: BAR_MIN_SPEED,

            chunk_count: CHUNK_COUNT,
            chunk_columns: CHUNK_COLUMNS,

            powerup_fall_speed: POWERUP_FALL_SPEED,
            powerup_spawn_one_in: POWERUP_SPAWN_ONE_IN,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Load tuning from a file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Using default tuning ({}): {}", path.as_ref().display(), e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        if self.chunk_columns == 0 {
            return Err(TuningError::Invalid("chunk_columns must be at least 1"));
        }
        if self.chunk_count > MAX_CHUNK_COUNT {
            return Err(TuningError::Invalid("chunk_count is above the grid limit"));
        }
        if self.powerup_spawn_one_in == 0 {
            return Err(TuningError::Invalid("powerup_spawn_one_in must be at least 1"));
        }
        if self.bar_speed <= 0.0 || self.bar_min_speed <= 0.0 {
            return Err(TuningError::Invalid("bar speeds must be positive"));
        }
        if self.bar_min_speed > self.bar_speed {
            return Err(TuningError::Invalid("bar_min_speed cannot exceed bar_speed"));
        }
        if self.bar_speed_up < 0.0 || self.bar_slow_down < 0.0 || self.ball_speed_step < 0.0 {
            return Err(TuningError::Invalid("speed steps cannot be negative"));
        }
        if self.powerup_fall_speed <= 0.0 {
            return Err(TuningError::Invalid("powerup_fall_speed must be positive"));
        }
        Ok(())
    }
}
