//! Polygonal zones and membership tests.

use ndarray::Array1;

use crate::zone::detection::TrackedDetection;
use crate::zone::geometry::{Anchor, Point};

/// A closed polygonal region of interest in image coordinates.
///
/// Zones are immutable after construction. The pipeline owns them and keys
/// per-zone state (dwell timers, palette colors) off [`Zone::index`]; the
/// dwell core itself never touches geometry.
#[derive(Debug, Clone)]
pub struct Zone {
    index: usize,
    polygon: Vec<Point>,
    anchor: Anchor,
}

impl Zone {
    /// Create a zone from its index and polygon vertices, anchored on box
    /// centers.
    pub fn new(index: usize, polygon: Vec<Point>) -> Self {
        Self {
            index,
            polygon,
            anchor: Anchor::default(),
        }
    }

    /// Use a different anchor for membership tests.
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Zone identifier: its position in the zone configuration file.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Polygon vertices.
    pub fn polygon(&self) -> &[Point] {
        &self.polygon
    }

    /// Anchor used for membership tests.
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Point-in-polygon test by ray casting.
    ///
    /// Polygons with fewer than three vertices contain nothing.
    pub fn contains(&self, point: Point) -> bool {
        let vertices = &self.polygon;
        if vertices.len() < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = vertices.len() - 1;
        for i in 0..vertices.len() {
            let (xi, yi) = (vertices[i].x, vertices[i].y);
            let (xj, yj) = (vertices[j].x, vertices[j].y);
            if (yi > point.y) != (yj > point.y)
                && point.x < (xj - xi) * (point.y - yi) / (yj - yi) + xi
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Membership mask for a frame's detections: `mask[i]` is true when the
    /// anchor point of `detections[i]` falls inside the polygon.
    pub fn trigger(&self, detections: &[TrackedDetection]) -> Array1<bool> {
        detections
            .iter()
            .map(|det| self.contains(det.rect.anchor(self.anchor)))
            .collect()
    }
}
