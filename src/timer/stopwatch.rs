//! Pause-aware stopwatch

use super::clock::{Clock, SystemClock};
use std::time::{Duration, Instant};

/// Stopwatch that banks time across start/stop cycles
///
/// The stopwatch is running exactly when `run_origin` is set.
#[derive(Debug, Clone)]
pub struct Stopwatch<C: Clock = SystemClock> {
    clock: C,
    /// Time banked by completed running intervals
    accumulated: Duration,
    /// Start of the in-flight running interval
    run_origin: Option<Instant>,
}

impl Stopwatch<SystemClock> {
    /// Create a stopped, zeroed stopwatch on the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Stopwatch<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Stopwatch<C> {
    /// Create a stopped, zeroed stopwatch reading from `clock`
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            accumulated: Duration::ZERO,
            run_origin: None,
        }
    }

    /// Whether an interval is currently being timed
    pub fn is_running(&self) -> bool {
        self.run_origin.is_some()
    }

    /// Begin timing. No effect if already running.
    pub fn start(&mut self) {
        if self.run_origin.is_none() {
            self.run_origin = Some(self.clock.now());
        }
    }

    /// Bank the in-flight interval and stop. No effect if stopped.
    pub fn stop(&mut self) {
        if let Some(origin) = self.run_origin.take() {
            let interval = self.clock.now().saturating_duration_since(origin);
            self.accumulated = self.accumulated.saturating_add(interval);
        }
    }

    /// Stop if running, start otherwise
    pub fn toggle(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Return to zero and stopped.
    ///
    /// An in-flight interval is discarded, not banked.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.run_origin = None;
    }

    /// Total elapsed time, including the in-flight interval
    pub fn elapsed_duration(&self) -> Duration {
        match self.run_origin {
            Some(origin) => self
                .accumulated
                .saturating_add(self.clock.now().saturating_duration_since(origin)),
            None => self.accumulated,
        }
    }

    /// Total elapsed time in whole milliseconds
    pub fn elapsed(&self) -> u64 {
        u64::try_from(self.elapsed_duration().as_millis()).unwrap_or(u64::MAX)
    }
}
