//! Throughput monitor reporting frames per second over a sliding window.

use std::collections::VecDeque;
use std::time::Instant;

/// Number of recent frames the monitor averages over by default.
pub const DEFAULT_SAMPLE_SIZE: usize = 30;

/// Sliding-window frame rate monitor.
///
/// Call [`tick`](FpsMonitor::tick) once per processed frame and read the
/// current rate with [`fps`](FpsMonitor::fps). The rate is averaged over the
/// most recent `sample_size` ticks.
#[derive(Debug, Clone)]
pub struct FpsMonitor {
    timestamps: VecDeque<Instant>,
    sample_size: usize,
}

impl FpsMonitor {
    /// Create a monitor with the default window of [`DEFAULT_SAMPLE_SIZE`]
    /// frames.
    pub fn new() -> Self {
        Self::with_sample_size(DEFAULT_SAMPLE_SIZE)
    }

    /// Create a monitor averaging over the given number of frames.
    pub fn with_sample_size(sample_size: usize) -> Self {
        Self {
            timestamps: VecDeque::with_capacity(sample_size),
            sample_size: sample_size.max(1),
        }
    }

    /// Record that a frame was processed now.
    pub fn tick(&mut self) {
        if self.timestamps.len() == self.sample_size {
            self.timestamps.pop_front();
        }
        self.timestamps.push_back(Instant::now());
    }

    /// Current frame rate averaged over the window.
    ///
    /// Returns `0.0` until at least two ticks have been recorded.
    pub fn fps(&self) -> f64 {
        let (Some(first), Some(last)) = (self.timestamps.front(), self.timestamps.back()) else {
            return 0.0;
        };
        let span = last.duration_since(*first).as_secs_f64();
        if span > 0.0 {
            self.timestamps.len() as f64 / span
        } else {
            0.0
        }
    }
}

impl Default for FpsMonitor {
    fn default() -> Self {
        Self::new()
    }
}
