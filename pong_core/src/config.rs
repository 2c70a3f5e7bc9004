use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::Side;
use crate::error::ConfigError;
use crate::params::Params;

/// Game configuration
///
/// Loaded once at process start and passed by reference into constructors.
/// Missing TOML keys fall back to [`Params`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_size: f32,
    pub bounce_multiplier: f32,
    pub start_serve: Vec2,
    pub rally_serve_speed: f32,
    pub serve_angle_min_deg: i32,
    pub serve_angle_max_deg: i32,
    pub ai_max_step: f32,
    pub win_score: u8,
    pub tick_rate_hz: u32,
    /// Fixed seed for reproducible serves; `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            ball_size: Params::BALL_SIZE,
            bounce_multiplier: Params::BOUNCE_MULTIPLIER,
            start_serve: Params::START_SERVE,
            rally_serve_speed: Params::RALLY_SERVE_SPEED,
            serve_angle_min_deg: Params::SERVE_ANGLE_MIN_DEG,
            serve_angle_max_deg: Params::SERVE_ANGLE_MAX_DEG,
            ai_max_step: Params::AI_MAX_STEP,
            win_score: Params::WIN_SCORE,
            tick_rate_hz: Params::TICK_RATE_HZ,
            rng_seed: None,
        }
    }
}

fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document and validate it
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let src = std::fs::read_to_string(path)?;
        Self::from_toml_str(&src)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.field_width) || !positive(self.field_height) {
            return Err(ConfigError::InvalidField {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if !positive(self.paddle_width) || !positive(self.paddle_height) {
            return Err(ConfigError::InvalidPaddle {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if !positive(self.ball_size) {
            return Err(ConfigError::InvalidBall(self.ball_size));
        }
        if self.win_score == 0 {
            return Err(ConfigError::InvalidWinScore);
        }
        if !positive(self.bounce_multiplier) {
            return Err(ConfigError::InvalidBounceMultiplier(self.bounce_multiplier));
        }
        if !(self.ai_max_step.is_finite() && self.ai_max_step >= 0.0) {
            return Err(ConfigError::InvalidAiStep(self.ai_max_step));
        }
        if self.serve_angle_min_deg > self.serve_angle_max_deg {
            return Err(ConfigError::InvalidServeAngles {
                min: self.serve_angle_min_deg,
                max: self.serve_angle_max_deg,
            });
        }
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::InvalidTickRate);
        }
        Ok(())
    }

    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Get X position of a paddle's center. Paddles sit flush with the field edges.
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_width / 2.0,
            Side::Right => self.field_width - self.paddle_width / 2.0,
        }
    }

    /// Serve base for a re-serve after `conceded` let the ball through
    pub fn rally_serve(&self, conceded: Side) -> Vec2 {
        match conceded {
            Side::Left => Vec2::new(self.rally_serve_speed, 0.0),
            Side::Right => Vec2::new(-self.rally_serve_speed, 0.0),
        }
    }
}
