//! The dwell-time core: a per-zone stopwatch registry and the clocks that
//! drive it.

mod clock;
mod timer;

pub use clock::{Clock, FrameClock, MonotonicClock};
pub use timer::DwellTimer;
