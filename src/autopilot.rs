//! Demo player
//!
//! Chases the ball with the paddle by emitting key events, aiming at a
//! seeded random offset from the ball so runs vary per seed but replay
//! exactly. The offset is re-rolled after every paddle hit.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::Config;
use crate::sim::{GamePhase, GameState, Key, KeyEvent};

/// Seeded key-event source that tracks the ball
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    /// Key currently held down
    held: Option<Key>,
    /// Current aim offset from the ball center
    offset: f32,
    /// Largest aim offset either side
    spread: f32,
    /// No movement while the target is this close
    deadzone: f32,
    started: bool,
}

impl Autopilot {
    pub fn new(seed: u64, config: &Config) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let spread = config.paddle_width * 0.4;
        let offset = roll(&mut rng, spread);
        Self {
            rng,
            held: None,
            offset,
            spread,
            deadzone: config.paddle_width * 0.1,
            started: false,
        }
    }

    pub fn held(&self) -> Option<Key> {
        self.held
    }

    /// Key events to send before the next tick
    pub fn observe(&mut self, state: &GameState) -> Vec<KeyEvent> {
        if state.phase.is_terminal() {
            return self.release();
        }
        if state.collisions.paddle {
            self.offset = roll(&mut self.rng, self.spread);
        }

        let target = state.ball.position.x + self.offset;
        let wanted = if target < state.paddle - self.deadzone {
            Some(Key::Left)
        } else if target > state.paddle + self.deadzone {
            Some(Key::Right)
        } else {
            None
        };

        // A Ready session needs a key to start
        let wanted = match (wanted, state.phase, self.started) {
            (None, GamePhase::Ready, false) => Some(Key::Right),
            _ => wanted,
        };

        if wanted == self.held {
            return Vec::new();
        }
        let mut events = self.release();
        if let Some(key) = wanted {
            events.push(KeyEvent::Pressed(key));
            self.held = Some(key);
            self.started = true;
        }
        events
    }

    fn release(&mut self) -> Vec<KeyEvent> {
        self.held
            .take()
            .map(KeyEvent::Released)
            .into_iter()
            .collect()
    }
}

fn roll(rng: &mut Pcg32, spread: f32) -> f32 {
    if spread > 0.0 {
        rng.random_range(-spread..=spread)
    } else {
        0.0
    }
}
