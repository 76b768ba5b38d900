//! Game session
//!
//! Owns the clock, input tracker and current [`GameState`], and feeds the
//! renderer and audio collaborators. Events are processed strictly in
//! arrival order. Each tick reads the latest direction, moves the paddle,
//! steps the ball against that paddle, checks termination and then emits.
//! Once the game is won or lost nothing further is simulated or emitted.

use std::sync::mpsc::Receiver;

use serde::{Deserialize, Serialize};

use crate::audio::{AudioSink, Cue, cues_for};
use crate::config::Config;
use crate::error::{ConfigError, SessionError};
use crate::render::{Frame, Renderer};
use crate::sim::{
    BrickField, Clock, Direction, GamePhase, GameState, InputTracker, KeyEvent, Simulation,
    TickInput,
};

/// Something the host delivered to the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Display refresh at host time (seconds)
    Tick(f64),
    /// Directional key pressed or released
    Key(KeyEvent),
}

/// A single-player session from the first tick to a terminal outcome
pub struct GameSession<R: Renderer, A: AudioSink> {
    config: Config,
    sim: Simulation,
    clock: Clock,
    input: InputTracker,
    state: GameState,
    renderer: R,
    audio: A,
    /// Frames pushed to the renderer
    frames: u64,
    /// Set after an invariant violation
    halted: bool,
}

impl<R: Renderer, A: AudioSink> GameSession<R, A> {
    /// Session with the configured brick grid
    pub fn new(config: Config, renderer: R, audio: A) -> Result<Self, ConfigError> {
        config.validate()?;
        let bricks = BrickField::generate(&config);
        Ok(Self::build(config, bricks, renderer, audio))
    }

    /// Session with an explicit brick layout
    pub fn with_bricks(
        config: Config,
        bricks: BrickField,
        renderer: R,
        audio: A,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, bricks, renderer, audio))
    }

    fn build(config: Config, bricks: BrickField, renderer: R, audio: A) -> Self {
        let state = GameState::with_bricks(&config, bricks);
        log::info!(
            "Session started: {}x{} playfield, {} bricks, phase {:?}",
            config.playfield_width,
            config.playfield_height,
            state.bricks.len(),
            state.phase
        );
        Self {
            sim: Simulation::new(&config),
            clock: Clock::new(),
            input: InputTracker::new(config.release_policy),
            state,
            renderer,
            audio,
            frames: 0,
            halted: false,
            config,
        }
    }

    /// Latest snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn direction(&self) -> Direction {
        self.input.direction()
    }

    /// Frames pushed to the renderer so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Apply a key event; the first one opens a `Ready` session
    pub fn handle_key(&mut self, event: KeyEvent) {
        if self.halted || self.state.phase.is_terminal() {
            return;
        }
        self.input.apply(event);
        if self.state.phase == GamePhase::Ready {
            log::info!("First input received, starting play");
            self.state.phase = GamePhase::Playing;
        }
    }

    /// Process a tick at host time `now` (seconds)
    pub fn advance(&mut self, now: f64) -> Result<GamePhase, SessionError> {
        if self.halted {
            return Err(SessionError::Halted);
        }
        if self.state.phase.is_terminal() {
            return Ok(self.state.phase);
        }

        let tick = self.clock.tick(now);
        let input = TickInput {
            direction: self.input.direction(),
        };
        let result = self.sim.step(&self.state, tick, &input);

        if let Err(violation) = result.state.check_invariants(&self.state, &self.config) {
            log::error!(
                "Invariant violated at tick {}: {}",
                result.state.tick_count,
                violation
            );
            self.halted = true;
            return Err(SessionError::Invariant {
                tick: result.state.tick_count,
                violation,
            });
        }
        self.state = result.state;

        match self.state.phase {
            GamePhase::Over(outcome) => {
                log::info!(
                    "Session over: {:?} after {} ticks, score {}",
                    outcome,
                    self.state.tick_count,
                    self.state.score
                );
                self.renderer.finish(outcome);
                self.audio.play(Cue::GameOver);
            }
            GamePhase::Ready | GamePhase::Playing => {
                self.renderer.draw(&Frame::of(&self.state));
                self.frames += 1;
                for cue in cues_for(&self.state.collisions, &result.destroyed, &self.config) {
                    self.audio.play(cue);
                }
            }
        }

        Ok(self.state.phase)
    }

    /// Process one host event
    pub fn handle(&mut self, event: SessionEvent) -> Result<GamePhase, SessionError> {
        match event {
            SessionEvent::Tick(now) => self.advance(now),
            SessionEvent::Key(key) => {
                self.handle_key(key);
                Ok(self.state.phase)
            }
        }
    }

    /// Drive the session from an ordered event sequence until it ends
    ///
    /// Returns the phase reached when the game ends or the events run out.
    pub fn run<I>(&mut self, events: I) -> Result<GamePhase, SessionError>
    where
        I: IntoIterator<Item = SessionEvent>,
    {
        for event in events {
            if self.handle(event)?.is_terminal() {
                break;
            }
        }
        Ok(self.state.phase)
    }

    /// Pump events from a channel until the game ends or every sender hangs up
    pub fn run_channel(
        &mut self,
        events: &Receiver<SessionEvent>,
    ) -> Result<GamePhase, SessionError> {
        for event in events.iter() {
            if self.handle(event)?.is_terminal() {
                return Ok(self.state.phase);
            }
        }
        log::info!("Event source closed; session stalled in {:?}", self.state.phase);
        Ok(self.state.phase)
    }
}
