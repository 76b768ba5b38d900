//! Ball integration and collision resolution
//!
//! One call to [`BallSimulator::step`] advances the ball by one tick:
//!
//! 1. Integrate `position += direction * speed * dt`
//! 2. Destroy every brick containing the lookahead point
//! 3. Test the paddle against the lookahead point
//! 4. Flip x on a side wall
//! 5. Test the ceiling
//! 6. Flip y once if a brick, the paddle or the ceiling was hit
//!
//! The floor never bounces; falling out is the loss condition.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::Config;

use super::bricks::{Brick, BrickField};
use super::collision::{CollisionFlags, brick_hit, ceiling_hit, paddle_hit, wall_hit};

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec2,
    /// Velocity scaled by the ball speed; its signs give the travel direction
    pub direction: Vec2,
}

impl Ball {
    pub fn new(position: Vec2, direction: Vec2) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Where the ball will be one raw direction step from now
    #[inline]
    pub fn lookahead(&self) -> Vec2 {
        self.position + self.direction
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.direction.is_finite()
    }
}

/// Result of one ball step
#[derive(Debug, Clone, PartialEq)]
pub struct BallStep {
    pub ball: Ball,
    /// Bricks still standing after this tick
    pub bricks: BrickField,
    /// Bricks destroyed this tick
    pub destroyed: Vec<Brick>,
    pub collisions: CollisionFlags,
    pub score: u32,
}

/// Ball physics constants for a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallSimulator {
    pub speed: f32,
    pub radius: f32,
    pub playfield_width: f32,
    pub paddle_width: f32,
    /// y of the paddle's top face
    pub paddle_top: f32,
    pub reward: u32,
}

impl BallSimulator {
    pub fn new(config: &Config) -> Self {
        Self {
            speed: config.ball_speed,
            radius: config.ball_radius,
            playfield_width: config.playfield_width,
            paddle_width: config.paddle_width,
            paddle_top: config.playfield_height - config.paddle_height,
            reward: config.brick_reward,
        }
    }

    /// Ball at the start of a session: playfield center, configured direction
    pub fn spawn(config: &Config) -> Ball {
        Ball::new(
            Vec2::new(config.playfield_width / 2.0, config.playfield_height / 2.0),
            config.ball_direction,
        )
    }

    /// Advance the ball by `dt` seconds against the paddle at `paddle_x`
    pub fn step(
        &self,
        ball: &Ball,
        bricks: &BrickField,
        score: u32,
        paddle_x: f32,
        dt: f32,
    ) -> BallStep {
        let mut direction = ball.direction;
        let position = ball.position + direction * self.speed * dt;
        let lookahead = position + direction;

        let (bricks, destroyed) = bricks.partition(|brick| brick_hit(brick, lookahead));
        let reward = self.reward.saturating_mul(destroyed.len() as u32);

        let mut collisions = CollisionFlags {
            brick: !destroyed.is_empty(),
            paddle: paddle_hit(
                lookahead,
                paddle_x,
                self.paddle_width,
                self.paddle_top,
                self.radius,
            ),
            ..Default::default()
        };

        if wall_hit(position.x, self.radius, self.playfield_width) {
            direction.x = -direction.x;
            collisions.wall = true;
        }

        collisions.ceiling = ceiling_hit(position.y, self.radius);

        if collisions.flips_vertical() {
            direction.y = -direction.y;
        }

        for brick in &destroyed {
            log::debug!("Brick at ({:.1}, {:.1}) destroyed", brick.x, brick.y);
        }

        BallStep {
            ball: Ball::new(position, direction),
            bricks,
            destroyed,
            collisions,
            score: score.saturating_add(reward),
        }
    }
}
