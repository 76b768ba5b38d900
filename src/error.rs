//! Error types
//!
//! Configuration errors surface at session construction. Invariant
//! violations are internal defects: the session stops on the first one.

use thiserror::Error;

/// Invalid session configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be finite (got {value})")]
    NonFinite { field: &'static str, value: f32 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error("paddle width {paddle} exceeds playfield width {playfield}")]
    PaddleTooWide { paddle: f32, playfield: f32 },

    #[error("{columns} brick columns with gap {gap} do not fit in width {width}")]
    GridTooWide { columns: u32, gap: f32, width: f32 },

    #[error("{rows}x{columns} brick grid exceeds {max} bricks")]
    TooManyBricks { rows: u32, columns: u32, max: usize },

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A broken simulation invariant, detected after a tick
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("paddle at {position} outside [{min}, {max}]")]
    PaddleOutOfBounds { position: f32, min: f32, max: f32 },

    #[error("score {score} does not match {destroyed} destroyed bricks at {reward} each")]
    ScoreMismatch {
        score: u32,
        destroyed: u32,
        reward: u32,
    },

    #[error("live brick count grew from {before} to {after}")]
    BrickCountIncreased { before: usize, after: usize },

    #[error("ball state is not finite")]
    NonFiniteBall,
}

/// Errors returned while driving a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("simulation invariant violated at tick {tick}: {violation}")]
    Invariant {
        tick: u64,
        violation: InvariantViolation,
    },

    #[error("session halted after an invariant violation")]
    Halted,
}
