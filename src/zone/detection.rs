//! Tracked detection records delivered by the upstream tracker.

use crate::zone::geometry::Rect;

/// Identity assigned by the upstream tracker to one physical object.
///
/// Dwell accounting assumes an id is never reused for two different physical
/// objects within a session. A tracker that recycles ids will silently merge
/// the dwell histories of unrelated objects; this crate does not defend
/// against it.
pub type TrackId = u64;

/// One tracked object on one frame, as delivered by a
/// [`TrackSource`](crate::integration::TrackSource).
#[derive(Debug, Clone)]
pub struct TrackedDetection {
    /// Bounding box in TLWH format.
    pub rect: Rect,
    /// Class id assigned by the detector (COCO ids in the traffic demo).
    pub class_id: u32,
    /// Detection confidence score.
    pub score: f32,
    /// Stable track identity.
    pub track_id: TrackId,
}

impl TrackedDetection {
    pub fn new(rect: Rect, class_id: u32, score: f32, track_id: TrackId) -> Self {
        Self {
            rect,
            class_id,
            score,
            track_id,
        }
    }
}
