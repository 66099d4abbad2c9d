//! Render-boundary data: colors, labels, and per-frame reports.
//!
//! Drawing itself happens outside the crate; these types carry everything an
//! annotator needs.

mod color;
mod report;

pub use color::{Color, ColorParseError, Palette};
pub use report::{DwellEntry, FrameReport, ZoneReport, dwell_label};
