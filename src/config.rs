//! Session configuration
//!
//! Fixed at session start. Loaded from JSON with every field optional;
//! missing fields fall back to the defaults in [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::input::ReleasePolicy;

/// Tuning and geometry for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Units per second at full deflection
    pub paddle_speed: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_speed: f32,
    /// Initial direction; also the one-step lookahead used for collisions
    pub ball_direction: Vec2,

    // === Bricks ===
    pub brick_rows: u32,
    pub brick_columns: u32,
    pub brick_height: f32,
    pub brick_gap: f32,
    pub brick_top_margin: f32,
    /// Points awarded per destroyed brick
    pub brick_reward: u32,

    // === Session ===
    /// Nominal tick cadence used by simulated clocks
    pub tick_interval_ms: f64,
    /// Hold the simulation until the first directional key event
    pub start_on_input: bool,
    /// What releasing a direction key does
    pub release_policy: ReleasePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            ball_direction: Vec2::from_array(BALL_DIRECTION),

            brick_rows: BRICK_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_height: BRICK_HEIGHT,
            brick_gap: BRICK_GAP,
            brick_top_margin: BRICK_TOP_MARGIN,
            brick_reward: BRICK_REWARD,

            tick_interval_ms: TICK_INTERVAL_MS,
            start_on_input: false,
            release_policy: ReleasePolicy::default(),
        }
    }
}

impl Config {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject non-finite or non-positive dimensions and grids that cannot fit the playfield
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("ball_direction.x", self.ball_direction.x),
            ("ball_direction.y", self.ball_direction.y),
            ("brick_height", self.brick_height),
            ("brick_gap", self.brick_gap),
            ("brick_top_margin", self.brick_top_margin),
            ("tick_interval_ms", self.tick_interval_ms as f32),
        ];
        for (field, value) in finite {
            // NaN is left to the sign checks below
            if value.is_infinite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if !self.ball_direction.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "ball_direction",
                value: f32::NAN,
            });
        }

        let positive = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("brick_height", self.brick_height),
            ("tick_interval_ms", self.tick_interval_ms as f32),
        ];
        for (field, value) in positive {
            // Written so NaN fails too
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let non_negative = [
            ("brick_gap", self.brick_gap),
            ("brick_top_margin", self.brick_top_margin),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.paddle_width > self.playfield_width {
            return Err(ConfigError::PaddleTooWide {
                paddle: self.paddle_width,
                playfield: self.playfield_width,
            });
        }

        if self.brick_count() > MAX_BRICKS {
            return Err(ConfigError::TooManyBricks {
                rows: self.brick_rows,
                columns: self.brick_columns,
                max: MAX_BRICKS,
            });
        }

        if self.brick_columns > 0 && !(self.brick_width() > 0.0) {
            return Err(ConfigError::GridTooWide {
                columns: self.brick_columns,
                gap: self.brick_gap,
                width: self.playfield_width,
            });
        }

        Ok(())
    }

    /// Bricks in the configured grid
    pub fn brick_count(&self) -> usize {
        (self.brick_rows as usize).saturating_mul(self.brick_columns as usize)
    }

    /// Width of a single brick; the grid spans the playfield with a gap on both sides
    pub fn brick_width(&self) -> f32 {
        if self.brick_columns == 0 {
            return 0.0;
        }
        let columns = self.brick_columns as f32;
        (self.playfield_width - self.brick_gap - self.brick_gap * columns) / columns
    }

    /// Smallest legal paddle center
    #[inline]
    pub fn paddle_min(&self) -> f32 {
        self.paddle_width / 2.0
    }

    /// Largest legal paddle center
    #[inline]
    pub fn paddle_max(&self) -> f32 {
        self.playfield_width - self.paddle_width / 2.0
    }
}
