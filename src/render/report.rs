//! Per-frame output handed to the external renderer.

use crate::zone::{TrackId, TrackedDetection};

/// One tracked detection inside a zone, with its accumulated dwell time.
#[derive(Debug, Clone)]
pub struct DwellEntry {
    /// The in-zone detection.
    pub detection: TrackedDetection,
    /// Seconds this identity has dwelt in the zone since entering.
    pub seconds: f64,
}

impl DwellEntry {
    /// Label text for this entry, in the demo's `#id MM:SS` style.
    pub fn label(&self) -> String {
        dwell_label(self.detection.track_id, self.seconds)
    }
}

/// Dwell state of one zone on one frame.
#[derive(Debug, Clone)]
pub struct ZoneReport {
    /// Index of the zone this report covers.
    pub zone_index: usize,
    /// In-zone detections with dwell times, in detection order.
    pub entries: Vec<DwellEntry>,
}

/// Everything an external renderer needs to annotate one frame: per-zone
/// dwell entries plus the pipeline throughput.
#[derive(Debug, Clone)]
pub struct FrameReport {
    /// Per-zone dwell reports, in zone order.
    pub zones: Vec<ZoneReport>,
    /// Frames per second over the monitor window.
    pub fps: f64,
}

/// Format a dwell-time label: `#<id> MM:SS` with zero-padded minutes and
/// seconds.
pub fn dwell_label(track_id: TrackId, seconds: f64) -> String {
    let total = seconds as u64;
    format!("#{} {:02}:{:02}", track_id, total / 60, total % 60)
}
