//! Per-zone dwell-time accounting.

use std::collections::HashMap;

use crate::dwell::clock::{Clock, FrameClock, MonotonicClock};
use crate::zone::TrackId;

/// Per-zone stopwatch registry mapping tracked identities to accumulated
/// dwell seconds.
///
/// One timer exists per zone. On every frame the pipeline calls
/// [`DwellTimer::tick`] with the identities currently inside the zone; the
/// timer credits each with the clock delta since the previous tick, creates
/// records for identities seen for the first time, and evicts identities
/// that are no longer present. An identity that leaves the zone for even one
/// frame and re-enters starts over from zero; there is no grace period.
///
/// Timers share no state: an identity inside two zones at once accumulates
/// independently in each. Calls take `&mut self` and must be serialized by
/// the caller if the surrounding pipeline is ever threaded.
pub struct DwellTimer<C: Clock> {
    clock: C,
    registry: HashMap<TrackId, f64>,
}

impl<C: Clock> DwellTimer<C> {
    /// Create a timer driven by the given clock.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            registry: HashMap::new(),
        }
    }

    /// Advance the timer with the identities currently inside the zone and
    /// return their accumulated dwell seconds, in `present` order.
    ///
    /// A newly observed identity is credited with the current tick's delta,
    /// so its first reported time equals that delta: 0.0 on a
    /// [`MonotonicClock`]'s first tick, `1 / fps` on a [`FrameClock`]. After
    /// the call the registry holds exactly the identities in `present`.
    ///
    /// `present` must not contain duplicates and the clock must not report
    /// negative deltas; neither is checked here.
    pub fn tick(&mut self, present: &[TrackId]) -> Vec<f64> {
        let elapsed = self.clock.delta();
        self.registry.retain(|id, _| present.contains(id));
        present
            .iter()
            .map(|&id| {
                let total = self.registry.entry(id).or_insert(0.0);
                *total += elapsed;
                *total
            })
            .collect()
    }

    /// Accumulated dwell seconds for an identity, if it was present on the
    /// last tick.
    pub fn seconds(&self, id: TrackId) -> Option<f64> {
        self.registry.get(&id).copied()
    }

    /// Number of identities currently inside the zone.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// True when no identity is currently inside the zone.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl DwellTimer<MonotonicClock> {
    /// Timer measuring real elapsed seconds; for live feeds.
    pub fn wall_clock() -> Self {
        Self::new(MonotonicClock::new())
    }
}

impl DwellTimer<FrameClock> {
    /// Deterministic timer advancing `1 / fps` per tick; for offline video.
    pub fn frame_based(fps: f64) -> Self {
        Self::new(FrameClock::new(fps))
    }
}
