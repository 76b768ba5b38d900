//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Every tick is computed exactly once from the previous state
//! - Paddle moves before the ball collides against it
//! - Stable iteration order (bricks in creation order)
//! - No rendering or platform dependencies

pub mod ball;
pub mod bricks;
pub mod clock;
pub mod collision;
pub mod input;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::{Ball, BallSimulator, BallStep};
pub use bricks::{Brick, BrickField};
pub use clock::{Clock, FixedCadence, Tick, WallClock};
pub use collision::CollisionFlags;
pub use input::{Direction, InputTracker, Key, KeyEvent, ReleasePolicy};
pub use paddle::PaddleController;
pub use state::{GamePhase, GameState, Outcome};
pub use tick::{Simulation, StepResult, TickInput, tick};
