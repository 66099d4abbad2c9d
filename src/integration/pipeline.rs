//! ZonePipeline for combining tracking with per-zone dwell accounting.

use tracing::debug;

use crate::dwell::{Clock, DwellTimer};
use crate::render::{DwellEntry, FrameReport, ZoneReport};
use crate::zone::Zone;

use super::{FpsMonitor, PipelineConfig, TrackSource};

/// A combined pipeline that bundles tracked detection with zone dwell timers.
///
/// This struct provides a convenient way to run end-to-end dwell accounting
/// by combining any `TrackSource` with one [`DwellTimer`] per zone. Each
/// timer gets its own clone of the prototype clock, so zones accumulate time
/// independently.
pub struct ZonePipeline<S: TrackSource, C: Clock> {
    source: S,
    zones: Vec<Zone>,
    timers: Vec<DwellTimer<C>>,
    monitor: FpsMonitor,
    config: PipelineConfig,
}

impl<S: TrackSource, C: Clock + Clone> ZonePipeline<S, C> {
    /// Create a new dwell pipeline with the given source, zones, prototype
    /// clock, and configuration.
    pub fn new(source: S, zones: Vec<Zone>, clock: C, config: PipelineConfig) -> Self {
        debug!("zone pipeline over {} zones", zones.len());
        let timers = zones
            .iter()
            .map(|_| DwellTimer::new(clock.clone()))
            .collect();
        Self {
            source,
            zones,
            timers,
            monitor: FpsMonitor::new(),
            config,
        }
    }

    /// Create a new dwell pipeline with default configuration.
    pub fn with_default_config(source: S, zones: Vec<Zone>, clock: C) -> Self {
        Self::new(source, zones, clock, PipelineConfig::default())
    }

    /// Process a single frame and return the per-zone dwell report.
    ///
    /// This method pulls tracked detections from the source, drops detections
    /// outside the class allow-list, and advances every zone's dwell timer
    /// with the identities whose anchor point falls inside that zone.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    ///
    /// # Returns
    /// A [`FrameReport`] with one entry per zone, or a source error.
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<FrameReport, S::Error> {
        self.monitor.tick();

        let mut detections = self.source.track(input, width, height)?;
        detections.retain(|det| self.config.class_allowed(det.class_id));

        let mut zones = Vec::with_capacity(self.zones.len());
        for (zone, timer) in self.zones.iter().zip(self.timers.iter_mut()) {
            let mask = zone.trigger(&detections);
            let in_zone: Vec<_> = detections
                .iter()
                .zip(mask.iter())
                .filter_map(|(det, &inside)| inside.then(|| det.clone()))
                .collect();
            let ids: Vec<_> = in_zone.iter().map(|det| det.track_id).collect();
            let times = timer.tick(&ids);
            let entries = in_zone
                .into_iter()
                .zip(times)
                .map(|(detection, seconds)| DwellEntry { detection, seconds })
                .collect();
            zones.push(ZoneReport {
                zone_index: zone.index(),
                entries,
            });
        }

        Ok(FrameReport {
            zones,
            fps: self.monitor.fps(),
        })
    }

    /// Get a reference to the underlying track source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the underlying track source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Get the zones the pipeline accounts for.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Get the per-zone dwell timers, in zone order.
    pub fn timers(&self) -> &[DwellTimer<C>] {
        &self.timers
    }

    /// Get the pipeline configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }
}
