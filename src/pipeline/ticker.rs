//! Game clock
//!
//! The platform calls the ticker every `TICKER_INTERVAL_MS`; each call reads
//! the wall clock and yields a `Tick` carrying the real elapsed time.

use crate::consts::TICKER_INTERVAL_MS;
use crate::sim::Tick;

/// Source of wall-clock time in milliseconds
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Clock advanced by hand; drives headless runs and tests
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now_ms: f64,
}

impl ManualClock {
    pub fn new(now_ms: f64) -> Self {
        Self { now_ms }
    }

    pub fn advance(&mut self, ms: f64) {
        self.now_ms += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }
}

/// Turns raw clock samples into ticks.
///
/// The first sample has no predecessor and is swallowed, so every emitted
/// tick has a meaningful delta.
#[derive(Debug, Clone, Default)]
pub struct Ticker {
    previous: Option<f64>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nominal sampling period (ms)
    pub const fn period_ms() -> u32 {
        TICKER_INTERVAL_MS
    }

    /// Feed one raw sample
    pub fn sample(&mut self, now_ms: f64) -> Option<Tick> {
        let previous = self.previous.replace(now_ms)?;
        Some(Tick::new(now_ms, ((now_ms - previous) / 1000.0) as f32))
    }

    /// Sample the given clock
    pub fn next(&mut self, clock: &impl Clock) -> Option<Tick> {
        self.sample(clock.now_ms())
    }
}
