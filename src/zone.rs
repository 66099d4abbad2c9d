//! Polygonal zones: geometry, membership tests, persistence, and the
//! interactive drawing session.

mod config;
mod detection;
mod drawing;
mod geometry;
mod polygon;

pub use config::{ZoneConfigError, load_polygons, load_zones, save_polygons};
pub use detection::{TrackId, TrackedDetection};
pub use drawing::{DrawEvent, DrawState, DrawingSession, Segment};
pub use geometry::{Anchor, Point, Rect};
pub use polygon::Zone;
