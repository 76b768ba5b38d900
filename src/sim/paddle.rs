//! Paddle motion
//!
//! The paddle only moves horizontally along the bottom edge. Its y is
//! implicit; only the center x is tracked.

use crate::config::Config;

use super::input::Direction;

/// Integrates paddle position from direction and elapsed time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleController {
    /// Units per second
    pub speed: f32,
    /// Smallest legal center (half paddle width)
    pub min: f32,
    /// Largest legal center
    pub max: f32,
}

impl PaddleController {
    pub fn new(config: &Config) -> Self {
        Self {
            speed: config.paddle_speed,
            min: config.paddle_min(),
            max: config.paddle_max(),
        }
    }

    /// Starting position: centered in the playfield
    #[inline]
    pub fn center(&self) -> f32 {
        (self.min + self.max) / 2.0
    }

    /// Position after moving `direction` for `dt` seconds, clamped to the playfield
    pub fn next_position(&self, current: f32, direction: Direction, dt: f32) -> f32 {
        let next = current + direction.value() * self.speed * dt;
        next.clamp(self.min, self.max)
    }
}
