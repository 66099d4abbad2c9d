//! Builder for creating TrackedDetection objects from various input formats.

use crate::zone::{Rect, TrackId, TrackedDetection};

/// Builder for creating [`TrackedDetection`] objects from various bounding
/// box formats.
#[derive(Debug, Clone, Default)]
pub struct TrackedDetectionBuilder {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    class_id: u32,
    score: f32,
    track_id: TrackId,
}

impl TrackedDetectionBuilder {
    /// Create a new detection builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bounding box in TLBR format (x1, y1, x2, y2).
    pub fn tlbr(mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.x1 = x1;
        self.y1 = y1;
        self.x2 = x2;
        self.y2 = y2;
        self
    }

    /// Set bounding box in XYWH format (center_x, center_y, width, height).
    pub fn xywh(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.x1 = cx - w / 2.0;
        self.y1 = cy - h / 2.0;
        self.x2 = cx + w / 2.0;
        self.y2 = cy + h / 2.0;
        self
    }

    /// Set bounding box in TLWH format (top, left, width, height).
    pub fn tlwh(mut self, t: f32, l: f32, w: f32, h: f32) -> Self {
        self.x1 = l;
        self.y1 = t;
        self.x2 = l + w;
        self.y2 = t + h;
        self
    }

    /// Set the class id.
    pub fn class_id(mut self, class_id: u32) -> Self {
        self.class_id = class_id;
        self
    }

    /// Set the confidence score.
    pub fn score(mut self, score: f32) -> Self {
        self.score = score;
        self
    }

    /// Set the track identity.
    pub fn track_id(mut self, track_id: TrackId) -> Self {
        self.track_id = track_id;
        self
    }

    /// Build the final [`TrackedDetection`].
    pub fn build(self) -> TrackedDetection {
        TrackedDetection::new(
            Rect::from_tlbr(self.x1, self.y1, self.x2, self.y2),
            self.class_id,
            self.score,
            self.track_id,
        )
    }
}
