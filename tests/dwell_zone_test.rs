use zone_dwell_rs::{
    Anchor, DrawEvent, DrawingSession, FrameClock, Point, TrackSource, TrackedDetection,
    TrackedDetectionBuilder, Zone, ZonePipeline, dwell_label, load_polygons, load_zones,
    save_polygons,
};

/// Replays a fixed per-frame script of tracked detections, then empty frames.
struct ScriptedTracker {
    frames: Vec<Vec<TrackedDetection>>,
    cursor: usize,
}

impl ScriptedTracker {
    fn new(frames: Vec<Vec<TrackedDetection>>) -> Self {
        Self { frames, cursor: 0 }
    }
}

impl TrackSource for ScriptedTracker {
    type Error = std::convert::Infallible;

    fn track(
        &mut self,
        _input: &[u8],
        _width: u32,
        _height: u32,
    ) -> Result<Vec<TrackedDetection>, Self::Error> {
        let frame = self.frames.get(self.cursor).cloned().unwrap_or_default();
        self.cursor += 1;
        Ok(frame)
    }
}

fn vehicle(track_id: u64, cx: f32, cy: f32) -> TrackedDetection {
    TrackedDetectionBuilder::new()
        .xywh(cx, cy, 20.0, 10.0)
        .class_id(2)
        .score(0.9)
        .track_id(track_id)
        .build()
}

fn square(left: f32) -> Vec<Point> {
    vec![
        Point::new(left, 0.0),
        Point::new(left + 100.0, 0.0),
        Point::new(left + 100.0, 100.0),
        Point::new(left, 100.0),
    ]
}

#[test]
fn test_dwell_accounting_through_zone_transitions() {
    // Two adjacent zones: west covers x in [0, 100), east covers [100, 200).
    // The frame clock runs at 2 fps, so every frame adds 0.5 seconds.
    let frames = vec![
        // Frame 1: vehicle 7 enters the west zone.
        vec![vehicle(7, 50.0, 50.0)],
        // Frame 2: 7 stays; vehicle 9 enters the east zone.
        vec![vehicle(7, 55.0, 50.0), vehicle(9, 150.0, 50.0)],
        // Frame 3: 7 crosses into the east zone next to 9.
        vec![vehicle(7, 130.0, 50.0), vehicle(9, 150.0, 50.0)],
        // Frame 4: both leave the picture.
        vec![],
        // Frame 5: 7 comes back into the west zone.
        vec![vehicle(7, 50.0, 50.0)],
    ];

    let zones = vec![Zone::new(0, square(0.0)), Zone::new(1, square(100.0))];
    let mut pipeline = ZonePipeline::with_default_config(
        ScriptedTracker::new(frames),
        zones,
        FrameClock::new(2.0),
    );

    // Frame 1: west credits 7 with its first half second.
    let report = pipeline.process_frame(&[], 640, 480).unwrap();
    assert_eq!(report.zones[0].entries.len(), 1);
    assert_eq!(report.zones[0].entries[0].detection.track_id, 7);
    assert!((report.zones[0].entries[0].seconds - 0.5).abs() < 1e-9);
    assert!(report.zones[1].entries.is_empty());

    // Frame 2: 7 keeps accumulating in west while 9 starts in east.
    let report = pipeline.process_frame(&[], 640, 480).unwrap();
    assert!((report.zones[0].entries[0].seconds - 1.0).abs() < 1e-9);
    assert_eq!(report.zones[1].entries[0].detection.track_id, 9);
    assert!((report.zones[1].entries[0].seconds - 0.5).abs() < 1e-9);

    // Frame 3: crossing into east starts 7 over; its west time is gone.
    let report = pipeline.process_frame(&[], 640, 480).unwrap();
    assert!(report.zones[0].entries.is_empty());
    assert_eq!(report.zones[1].entries.len(), 2);
    assert_eq!(report.zones[1].entries[0].detection.track_id, 7);
    assert!((report.zones[1].entries[0].seconds - 0.5).abs() < 1e-9);
    assert!((report.zones[1].entries[1].seconds - 1.0).abs() < 1e-9);

    // Frame 4: nobody anywhere.
    let report = pipeline.process_frame(&[], 640, 480).unwrap();
    assert!(report.zones[0].entries.is_empty());
    assert!(report.zones[1].entries.is_empty());

    // Frame 5: re-entering west starts from zero again, not from 1.0.
    let report = pipeline.process_frame(&[], 640, 480).unwrap();
    assert_eq!(report.zones[0].entries[0].detection.track_id, 7);
    assert!((report.zones[0].entries[0].seconds - 0.5).abs() < 1e-9);
}

#[test]
fn test_zone_file_drives_pipeline_and_labels() {
    let path = std::env::temp_dir().join(format!(
        "zone-dwell-{}-pipeline-zones.json",
        std::process::id()
    ));
    save_polygons(&[square(0.0)], &path).unwrap();
    let zones = load_zones(&path, Anchor::Center).unwrap();
    let _ = std::fs::remove_file(&path);

    let frames = vec![vec![vehicle(3, 50.0, 50.0)]];
    let mut pipeline = ZonePipeline::with_default_config(
        ScriptedTracker::new(frames),
        zones,
        FrameClock::new(2.0),
    );

    let report = pipeline.process_frame(&[], 640, 480).unwrap();
    let entry = &report.zones[0].entries[0];
    assert!((entry.seconds - 0.5).abs() < 1e-9);
    assert_eq!(dwell_label(entry.detection.track_id, entry.seconds), "#3 00:00");
    assert_eq!(entry.label(), "#3 00:00");
}

#[test]
fn test_drawn_zones_survive_save_and_load() {
    let mut session = DrawingSession::new();
    for point in square(0.0) {
        session.apply(DrawEvent::AddVertex(point));
    }
    session.apply(DrawEvent::ClosePolygon);
    for point in square(100.0) {
        session.apply(DrawEvent::AddVertex(point));
    }
    session.apply(DrawEvent::ClosePolygon);

    let path = std::env::temp_dir().join(format!(
        "zone-dwell-{}-drawn-zones.json",
        std::process::id()
    ));
    let polygons = session.finish();
    save_polygons(&polygons, &path).unwrap();
    let loaded = load_polygons(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, polygons);
}
