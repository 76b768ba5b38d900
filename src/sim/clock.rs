//! Tick production
//!
//! A [`Clock`] turns host timestamps into [`Tick`]s. The first tick of a
//! session has no predecessor and carries a zero delta. Deltas are never
//! clamped from above: a stalled host yields one large catch-up step.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// One simulation step
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Tick {
    /// Host time of this tick (seconds)
    pub elapsed: f64,
    /// Seconds since the previous tick, always >= 0
    pub delta: f32,
}

/// Converts a stream of host timestamps into ticks
#[derive(Debug, Clone, Default)]
pub struct Clock {
    previous: Option<f64>,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the tick for host time `now` (seconds)
    ///
    /// Timestamps that go backwards yield a zero delta and do not rewind
    /// the clock.
    pub fn tick(&mut self, now: f64) -> Tick {
        let tick = match self.previous {
            None => Tick {
                elapsed: now,
                delta: 0.0,
            },
            Some(previous) if now >= previous => Tick {
                elapsed: now,
                delta: (now - previous) as f32,
            },
            Some(previous) => Tick {
                elapsed: previous,
                delta: 0.0,
            },
        };
        self.previous = Some(tick.elapsed);
        tick
    }
}

/// Lazy, infinite host timestamps at a fixed simulated cadence
///
/// Yields `0, interval, 2 * interval, ...` seconds.
#[derive(Debug, Clone)]
pub struct FixedCadence {
    interval: f64,
    index: u64,
}

impl FixedCadence {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval: interval_ms / 1000.0,
            index: 0,
        }
    }
}

impl Iterator for FixedCadence {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let now = self.index as f64 * self.interval;
        self.index += 1;
        Some(now)
    }
}

/// Real elapsed time since construction
#[derive(Debug, Clone)]
pub struct WallClock {
    start: Instant,
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Seconds since construction
    pub fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}
