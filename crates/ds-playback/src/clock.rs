//! Time sources.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// A monotonic clock reporting milliseconds.
///
/// The controller only ever compares readings against each other, so the
/// epoch is arbitrary.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall-clock time since construction.
#[derive(Clone, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1_000.0
    }
}

/// A hand-advanced clock for tests and headless runs.
///
/// Clones share the same reading: keep one clone to advance time and hand the
/// other to the controller.
#[derive(Clone, Debug, Default)]
pub struct ManualClock(Rc<Cell<f64>>);

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        ManualClock(Rc::new(Cell::new(start_ms)))
    }

    pub fn set(&self, ms: f64) {
        self.0.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.0.set(self.0.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.0.get()
    }
}
