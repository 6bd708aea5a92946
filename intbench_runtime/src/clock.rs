//! Monotonic clock seam for the driver.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A monotonic time source. `now` is an offset from an arbitrary origin
/// and never goes backwards.
pub trait Clock {
    fn now(&self) -> Duration;

    fn elapsed_since(&self, start: Duration) -> Duration {
        self.now().saturating_sub(start)
    }
}

/// Wall-clock time backed by `Instant`.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that advances by a fixed step on every read. Used in tests to
/// make elapsed time (and so every throughput figure) exact.
#[derive(Debug)]
pub struct SteppingClock {
    current: Cell<Duration>,
    step: Duration,
}

impl SteppingClock {
    pub fn new(step: Duration) -> Self {
        Self { current: Cell::new(Duration::ZERO), step }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Duration {
        let t = self.current.get();
        self.current.set(t + self.step);
        t
    }
}
