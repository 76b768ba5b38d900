//! Audio cues
//!
//! The session emits discrete [`Cue`]s; how (or whether) they are sonified
//! is up to the [`AudioSink`]. Pitches are piano key numbers, A4 = key 49.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::sim::{Brick, CollisionFlags};

/// Paddle hit pitch
pub const PADDLE_KEY: i32 = 40;
/// Wall or ceiling pitch
pub const WALL_KEY: i32 = 45;
/// Bottom-row brick pitch; each row higher adds two semitones
pub const BRICK_BASE_KEY: i32 = 47;
/// End of game
pub const GAME_OVER_KEY: i32 = 28;

/// A sound to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    /// Ball hits paddle
    Paddle,
    /// Ball hits a side wall or the ceiling
    Wall,
    /// Brick destroyed, pitched by its row
    Brick { key: i32 },
    /// Session finished
    GameOver,
}

impl Cue {
    /// Piano key number for this cue
    pub fn key(&self) -> i32 {
        match self {
            Cue::Paddle => PADDLE_KEY,
            Cue::Wall => WALL_KEY,
            Cue::Brick { key } => *key,
            Cue::GameOver => GAME_OVER_KEY,
        }
    }

    /// Tone frequency in Hz
    pub fn frequency(&self) -> f32 {
        frequency(self.key())
    }
}

/// Frequency of a piano key (equal temperament, key 49 = 440 Hz)
pub fn frequency(key: i32) -> f32 {
    2f32.powf((key - 49) as f32 / 12.0) * 440.0
}

/// Key for a destroyed brick: higher rows sound higher
pub fn brick_key(brick: &Brick, config: &Config) -> i32 {
    if config.brick_rows == 0 {
        return BRICK_BASE_KEY;
    }
    let pitch = config.brick_height + config.brick_gap;
    let first_center = config.brick_top_margin + config.brick_gap + config.brick_height / 2.0;
    let last_row = config.brick_rows as i32 - 1;
    let row = (((brick.y - first_center) / pitch).round() as i32).clamp(0, last_row);
    BRICK_BASE_KEY + 2 * (last_row - row)
}

/// Cues for one tick: at most one per collision category
pub fn cues_for(collisions: &CollisionFlags, destroyed: &[Brick], config: &Config) -> Vec<Cue> {
    let mut cues = Vec::new();
    if collisions.paddle {
        cues.push(Cue::Paddle);
    }
    if collisions.wall || collisions.ceiling {
        cues.push(Cue::Wall);
    }
    if collisions.brick {
        let key = destroyed
            .iter()
            .map(|brick| brick_key(brick, config))
            .max()
            .unwrap_or(BRICK_BASE_KEY);
        cues.push(Cue::Brick { key });
    }
    cues
}

/// Receives cues from the session
pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

impl<A: AudioSink + ?Sized> AudioSink for &mut A {
    fn play(&mut self, cue: Cue) {
        (**self).play(cue);
    }
}

/// Collects cues in order
impl AudioSink for Vec<Cue> {
    fn play(&mut self, cue: Cue) {
        self.push(cue);
    }
}

/// Logs each audible cue with its tone
#[derive(Debug, Clone)]
pub struct LogAudio {
    volume: f32,
    muted: bool,
    /// Cues that were loud enough to log
    heard: u64,
}

impl LogAudio {
    /// `volume` is clamped to 0.0 - 1.0
    pub fn new(volume: f32, muted: bool) -> Self {
        Self {
            volume: volume.clamp(0.0, 1.0),
            muted,
            heard: 0,
        }
    }

    pub fn heard(&self) -> u64 {
        self.heard
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, cue: Cue) {
        // NaN volume counts as silent
        if self.muted || !(self.volume > 0.0) {
            return;
        }
        self.heard += 1;
        log::debug!(
            "Cue {:?}: {:.1} Hz at volume {:.2}",
            cue,
            cue.frequency(),
            self.volume
        );
    }
}
