//! Interactive zone drawing as an explicit event-driven state machine.
//!
//! The windowing and mouse event loop stay outside the crate: a UI feeds
//! [`DrawEvent`]s into a [`DrawingSession`] and strokes the segments returned
//! by [`DrawingSession::overlay`] over the reference frame.

use crate::zone::geometry::Point;

/// Discrete input events driving a drawing session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawEvent {
    /// The pointer moved over the reference frame.
    CursorMoved(Point),
    /// A vertex was added to the polygon being drawn.
    AddVertex(Point),
    /// The polygon being drawn was closed and committed.
    ClosePolygon,
    /// The polygon being drawn was discarded.
    DiscardCurrent,
}

/// Whether a session currently has a polygon under construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawState {
    Idle,
    Drawing,
}

/// One line segment of the drawing overlay.
///
/// `palette_idx` selects the committed polygon's color; `None` marks the
/// in-progress polyline and rubber-band segment, which UIs conventionally
/// stroke white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub palette_idx: Option<usize>,
}

/// Interactive polygon-drawing session.
///
/// Replaces the usual pile of window-global mutable state (polygon list,
/// cursor position) with an explicit value, so several sessions can exist
/// side by side.
#[derive(Debug, Clone, Default)]
pub struct DrawingSession {
    committed: Vec<Vec<Point>>,
    current: Vec<Point>,
    cursor: Option<Point>,
}

impl DrawingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a session over previously drawn polygons.
    pub fn with_polygons(polygons: Vec<Vec<Point>>) -> Self {
        Self {
            committed: polygons,
            current: Vec::new(),
            cursor: None,
        }
    }

    /// Apply one input event.
    ///
    /// Closing an empty polygon is a no-op; discarding drops the in-progress
    /// vertices but keeps committed polygons.
    pub fn apply(&mut self, event: DrawEvent) {
        match event {
            DrawEvent::CursorMoved(point) => self.cursor = Some(point),
            DrawEvent::AddVertex(point) => self.current.push(point),
            DrawEvent::ClosePolygon => {
                if !self.current.is_empty() {
                    self.committed.push(std::mem::take(&mut self.current));
                }
            }
            DrawEvent::DiscardCurrent => self.current.clear(),
        }
    }

    pub fn state(&self) -> DrawState {
        if self.current.is_empty() {
            DrawState::Idle
        } else {
            DrawState::Drawing
        }
    }

    /// Committed polygons, in drawing order.
    pub fn polygons(&self) -> &[Vec<Point>] {
        &self.committed
    }

    /// Line segments a UI should stroke for the current session state.
    ///
    /// Committed polygons are closed; the in-progress polyline is left open,
    /// with a rubber-band segment from its last vertex to the cursor.
    pub fn overlay(&self) -> Vec<Segment> {
        let mut segments = Vec::new();
        for (idx, polygon) in self.committed.iter().enumerate() {
            for pair in polygon.windows(2) {
                segments.push(Segment {
                    start: pair[0],
                    end: pair[1],
                    palette_idx: Some(idx),
                });
            }
            if polygon.len() > 1 {
                segments.push(Segment {
                    start: polygon[polygon.len() - 1],
                    end: polygon[0],
                    palette_idx: Some(idx),
                });
            }
        }
        for pair in self.current.windows(2) {
            segments.push(Segment {
                start: pair[0],
                end: pair[1],
                palette_idx: None,
            });
        }
        if let (Some(cursor), Some(&last)) = (self.cursor, self.current.last()) {
            segments.push(Segment {
                start: last,
                end: cursor,
                palette_idx: None,
            });
        }
        segments
    }

    /// Finish the session, yielding every polygon worth saving.
    ///
    /// An in-progress polygon with vertices is kept, matching the drawing
    /// tool's save-on-keystroke behavior; an empty one is dropped.
    pub fn finish(mut self) -> Vec<Vec<Point>> {
        if !self.current.is_empty() {
            self.committed.push(std::mem::take(&mut self.current));
        }
        self.committed
    }
}
