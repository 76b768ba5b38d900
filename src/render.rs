//! Renderer sink
//!
//! The session pushes one [`Frame`] per non-terminal tick and one outcome
//! when the game ends. Drawing is entirely the renderer's business.

use serde::Serialize;

use crate::sim::{Ball, Brick, CollisionFlags, GameState, Outcome};

/// What a renderer needs to draw one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame<'a> {
    pub tick: u64,
    /// Paddle center x
    pub paddle: f32,
    pub ball: &'a Ball,
    pub bricks: &'a [Brick],
    pub score: u32,
    pub collisions: CollisionFlags,
}

impl<'a> Frame<'a> {
    pub fn of(state: &'a GameState) -> Self {
        Self {
            tick: state.tick_count,
            paddle: state.paddle,
            ball: &state.ball,
            bricks: state.bricks.live(),
            score: state.score,
            collisions: state.collisions,
        }
    }
}

/// Receives frames and the final outcome from the session
pub trait Renderer {
    fn draw(&mut self, frame: &Frame<'_>);
    fn finish(&mut self, outcome: Outcome);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn draw(&mut self, frame: &Frame<'_>) {
        (**self).draw(frame);
    }

    fn finish(&mut self, outcome: Outcome) {
        (**self).finish(outcome);
    }
}

/// Owned copy of a frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedFrame {
    pub tick: u64,
    pub paddle: f32,
    pub ball: Ball,
    pub bricks: Vec<Brick>,
    pub score: u32,
    pub collisions: CollisionFlags,
}

/// Keeps every frame and the outcome; used for headless replays and tests
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    pub frames: Vec<RecordedFrame>,
    pub outcome: Option<Outcome>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }
}

impl Renderer for FrameRecorder {
    fn draw(&mut self, frame: &Frame<'_>) {
        self.frames.push(RecordedFrame {
            tick: frame.tick,
            paddle: frame.paddle,
            ball: *frame.ball,
            bricks: frame.bricks.to_vec(),
            score: frame.score,
            collisions: frame.collisions,
        });
    }

    fn finish(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
    }
}

/// Logs score changes, collisions and the outcome
#[derive(Debug, Clone, Default)]
pub struct LogRenderer {
    last_score: u32,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, frame: &Frame<'_>) {
        if frame.collisions.any() {
            log::trace!("tick {}: {:?}", frame.tick, frame.collisions);
        }
        if frame.score != self.last_score {
            log::info!(
                "Score {} ({} bricks left) at tick {}",
                frame.score,
                frame.bricks.len(),
                frame.tick
            );
            self.last_score = frame.score;
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won => log::info!("YOU WIN - final score {}", self.last_score),
            Outcome::Lost => log::info!("GAME OVER - final score {}", self.last_score),
        }
    }
}
