//! Game state and core simulation types
//!
//! A [`GameState`] is a value: each tick produces a new one from the old.

use serde::{Deserialize, Serialize};

use super::ball::{Ball, BallSimulator};
use super::bricks::BrickField;
use super::clock::Tick;
use super::collision::CollisionFlags;
use super::input::Direction;
use super::paddle::PaddleController;
use crate::config::Config;
use crate::error::InvariantViolation;

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Every brick destroyed
    Won,
    /// Ball fell below the paddle
    Lost,
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first key event
    Ready,
    /// Active gameplay
    Playing,
    /// Terminal; no further ticks are simulated
    Over(Outcome),
}

impl GamePhase {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Over(_))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GamePhase::Over(outcome) => Some(*outcome),
            _ => None,
        }
    }
}

/// Complete per-tick snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Ticks simulated so far
    pub tick_count: u64,
    /// Tick that produced this state
    pub tick: Tick,
    /// Direction the paddle moved with
    pub direction: Direction,
    /// Paddle center x
    pub paddle: f32,
    pub ball: Ball,
    pub bricks: BrickField,
    /// What the ball struck on the tick that produced this state
    pub collisions: CollisionFlags,
    pub score: u32,
    /// Bricks destroyed since the session started
    pub destroyed: u32,
    pub phase: GamePhase,
}

impl GameState {
    /// Initial state with the configured brick grid
    pub fn new(config: &Config) -> Self {
        Self::with_bricks(config, BrickField::generate(config))
    }

    /// Initial state with an explicit brick layout
    pub fn with_bricks(config: &Config, bricks: BrickField) -> Self {
        Self {
            tick_count: 0,
            tick: Tick::default(),
            direction: Direction::None,
            paddle: PaddleController::new(config).center(),
            ball: BallSimulator::spawn(config),
            bricks,
            collisions: CollisionFlags::default(),
            score: 0,
            destroyed: 0,
            phase: if config.start_on_input {
                GamePhase::Ready
            } else {
                GamePhase::Playing
            },
        }
    }

    /// Check this state against the one it was derived from
    pub fn check_invariants(
        &self,
        previous: &GameState,
        config: &Config,
    ) -> Result<(), InvariantViolation> {
        let (min, max) = (config.paddle_min(), config.paddle_max());
        if !(self.paddle >= min && self.paddle <= max) {
            return Err(InvariantViolation::PaddleOutOfBounds {
                position: self.paddle,
                min,
                max,
            });
        }

        if self.bricks.len() > previous.bricks.len() {
            return Err(InvariantViolation::BrickCountIncreased {
                before: previous.bricks.len(),
                after: self.bricks.len(),
            });
        }

        if self.score != config.brick_reward.saturating_mul(self.destroyed) {
            return Err(InvariantViolation::ScoreMismatch {
                score: self.score,
                destroyed: self.destroyed,
                reward: config.brick_reward,
            });
        }

        if !self.ball.is_finite() {
            return Err(InvariantViolation::NonFiniteBall);
        }

        Ok(())
    }
}
