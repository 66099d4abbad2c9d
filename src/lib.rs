//! Zone dwell-time accounting for video analytics pipelines.
//!
//! Detect-and-track backends report which objects are on screen each frame;
//! this crate measures how long each tracked object dwells inside
//! user-defined polygonal zones. The core is [`DwellTimer`], a per-zone
//! stopwatch registry driven by a pluggable [`Clock`]: wall-clock deltas for
//! live feeds, a fixed frame interval for reproducible offline runs. Around
//! it sit the zone geometry and its JSON configuration, an interactive
//! polygon-drawing session, the [`TrackSource`] seam for plugging in any
//! detector+tracker stack, the frame pipeline, and the report types an
//! external renderer consumes. Model inference, identity association, and
//! video encode/decode all stay outside the crate.

pub mod dwell;
pub mod fetch;
pub mod integration;
pub mod render;
pub mod zone;

pub use dwell::{Clock, DwellTimer, FrameClock, MonotonicClock};
pub use fetch::{FetchError, download_video};
pub use integration::{
    FpsMonitor, PipelineConfig, TrackSource, TrackedDetectionBuilder, ZonePipeline,
};
pub use render::{Color, ColorParseError, DwellEntry, FrameReport, Palette, ZoneReport, dwell_label};
pub use zone::{
    Anchor, DrawEvent, DrawState, DrawingSession, Point, Rect, Segment, TrackId, TrackedDetection,
    Zone, ZoneConfigError, load_polygons, load_zones, save_polygons,
};
