//! Breakout - a paddle, a ball and a wall of bricks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (clock, input, paddle, ball, bricks, collisions)
//! - `session`: Per-tick composition, termination and the event pump
//! - `config`: Session configuration with validation
//! - `render` / `audio`: Collaborator sinks fed by the session
//! - `autopilot`: Seeded demo player for the headless runner

pub mod audio;
pub mod autopilot;
pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod sim;

pub use config::Config;
pub use error::{ConfigError, InvariantViolation, SessionError};
pub use session::{GameSession, SessionEvent};

/// Default configuration constants
pub mod consts {
    /// Nominal tick interval (display refresh aligned)
    pub const TICK_INTERVAL_MS: f64 = 17.0;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 480.0;
    pub const PLAYFIELD_HEIGHT: f32 = 320.0;

    /// Paddle defaults - paddle sits on the bottom edge
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Paddle speed (units per second)
    pub const PADDLE_SPEED: f32 = 240.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Scalar applied to the ball direction (units per second per direction unit)
    pub const BALL_SPEED: f32 = 60.0;
    /// Initial ball direction, heading down and to the right
    pub const BALL_DIRECTION: [f32; 2] = [2.0, 2.0];

    /// Brick grid defaults
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLUMNS: u32 = 7;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_GAP: f32 = 3.0;
    /// Space above the grid reserved for the score line
    pub const BRICK_TOP_MARGIN: f32 = 20.0;

    /// Points per destroyed brick
    pub const BRICK_REWARD: u32 = 10;
    /// Largest grid a config may ask for
    pub const MAX_BRICKS: usize = 1 << 16;
}
