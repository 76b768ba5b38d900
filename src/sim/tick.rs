//! Per-tick simulation step
//!
//! `(state, tick, input) -> state'`. The paddle moves first and the ball
//! collides against the paddle position from the same tick.

use super::ball::BallSimulator;
use super::bricks::Brick;
use super::clock::Tick;
use super::collision::{CollisionFlags, fell_out};
use super::input::Direction;
use super::paddle::PaddleController;
use super::state::{GamePhase, GameState, Outcome};
use crate::config::Config;

/// Input sampled for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Latest direction from the input tracker
    pub direction: Direction,
}

/// New state plus what happened during the tick
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    pub state: GameState,
    /// Bricks destroyed this tick
    pub destroyed: Vec<Brick>,
}

/// Session-constant simulation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simulation {
    pub paddle: PaddleController,
    pub ball: BallSimulator,
    pub playfield_height: f32,
}

impl Simulation {
    pub fn new(config: &Config) -> Self {
        Self {
            paddle: PaddleController::new(config),
            ball: BallSimulator::new(config),
            playfield_height: config.playfield_height,
        }
    }

    /// Advance `state` by one tick
    ///
    /// Terminal states are returned unchanged. A `Ready` state only records
    /// the tick.
    pub fn step(&self, state: &GameState, tick: Tick, input: &TickInput) -> StepResult {
        match state.phase {
            GamePhase::Over(_) => {
                return StepResult {
                    state: state.clone(),
                    destroyed: Vec::new(),
                };
            }
            GamePhase::Ready => {
                return StepResult {
                    state: GameState {
                        tick,
                        collisions: CollisionFlags::default(),
                        ..state.clone()
                    },
                    destroyed: Vec::new(),
                };
            }
            GamePhase::Playing => {}
        }

        let paddle = self
            .paddle
            .next_position(state.paddle, input.direction, tick.delta);

        let step = self
            .ball
            .step(&state.ball, &state.bricks, state.score, paddle, tick.delta);

        let phase = if step.bricks.is_empty() {
            GamePhase::Over(Outcome::Won)
        } else if fell_out(step.ball.position.y, self.ball.radius, self.playfield_height) {
            GamePhase::Over(Outcome::Lost)
        } else {
            GamePhase::Playing
        };

        let next = GameState {
            tick_count: state.tick_count + 1,
            tick,
            direction: input.direction,
            paddle,
            ball: step.ball,
            bricks: step.bricks,
            collisions: step.collisions,
            score: step.score,
            destroyed: state.destroyed + step.destroyed.len() as u32,
            phase,
        };

        log::trace!(
            "tick {} dt={:.4} paddle={:.1} ball=({:.1}, {:.1}) bricks={} score={}",
            next.tick_count,
            tick.delta,
            next.paddle,
            next.ball.position.x,
            next.ball.position.y,
            next.bricks.len(),
            next.score
        );

        StepResult {
            state: next,
            destroyed: step.destroyed,
        }
    }
}

/// Advance the game state by one tick
pub fn tick(state: &GameState, tick: Tick, input: &TickInput, config: &Config) -> StepResult {
    Simulation::new(config).step(state, tick, input)
}
