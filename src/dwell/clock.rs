//! Elapsed-time sources for dwell timer ticks.

use std::time::Instant;

/// Supplies the time delta between consecutive engine ticks.
///
/// Implementations are stateful: each call to [`Clock::delta`] returns the
/// seconds elapsed since the previous call. The engine calls `delta` exactly
/// once per tick. A clock must never report a negative delta.
pub trait Clock {
    /// Seconds elapsed since the previous call.
    fn delta(&mut self) -> f64;
}

/// Wall-clock deltas from a monotonic timer.
///
/// Suitable for live feeds where the frame rate jitters and dwell times
/// should reflect real elapsed seconds. The first call returns 0.0, so
/// identities observed on the very first tick start at zero dwell.
#[derive(Debug, Clone, Default)]
pub struct MonotonicClock {
    last: Option<Instant>,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for MonotonicClock {
    fn delta(&mut self) -> f64 {
        let now = Instant::now();
        let delta = match self.last {
            Some(previous) => now.duration_since(previous).as_secs_f64(),
            None => 0.0,
        };
        self.last = Some(now);
        delta
    }
}

/// Fixed frame-interval deltas for offline video processing.
///
/// Every call, including the first, returns exactly `1 / fps`, so dwell
/// accounting is deterministic regardless of how fast frames are actually
/// processed.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    interval: f64,
}

impl FrameClock {
    /// Create a clock advancing `1 / fps` seconds per tick.
    ///
    /// `fps` must be a positive, finite frame rate.
    pub fn new(fps: f64) -> Self {
        Self {
            interval: 1.0 / fps,
        }
    }

    /// The configured frame interval in seconds.
    #[inline]
    pub fn interval(&self) -> f64 {
        self.interval
    }
}

impl Clock for FrameClock {
    fn delta(&mut self) -> f64 {
        self.interval
    }
}
