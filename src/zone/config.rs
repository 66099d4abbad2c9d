//! Zone configuration files: a JSON list of polygons, each a list of
//! `[x, y]` integer pixel coordinates.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::zone::geometry::{Anchor, Point};
use crate::zone::polygon::Zone;

/// Errors reading or writing a zone configuration file.
///
/// All of these are fatal for a pipeline run and should be reported to the
/// operator before any video processing starts.
#[derive(Debug, Error)]
pub enum ZoneConfigError {
    /// The file could not be read or written.
    #[error("failed to access zone file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid zone JSON.
    #[error("malformed zone file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A polygon has too few vertices to enclose any area.
    #[error("polygon {index} has {vertices} vertices, a zone needs at least 3")]
    DegeneratePolygon { index: usize, vertices: usize },
}

/// Load zone polygons from a JSON file.
pub fn load_polygons(path: impl AsRef<Path>) -> Result<Vec<Vec<Point>>, ZoneConfigError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| ZoneConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: Vec<Vec<[i32; 2]>> =
        serde_json::from_str(&data).map_err(|source| ZoneConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    let mut polygons = Vec::with_capacity(raw.len());
    for (index, vertices) in raw.iter().enumerate() {
        if vertices.len() < 3 {
            return Err(ZoneConfigError::DegeneratePolygon {
                index,
                vertices: vertices.len(),
            });
        }
        polygons.push(
            vertices
                .iter()
                .map(|&[x, y]| Point::new(x as f32, y as f32))
                .collect(),
        );
    }
    debug!("loaded {} zone polygons from {}", polygons.len(), path.display());
    Ok(polygons)
}

/// Write zone polygons to a JSON file in the format [`load_polygons`] reads.
///
/// Coordinates are rounded to integer pixels.
pub fn save_polygons(
    polygons: &[Vec<Point>],
    path: impl AsRef<Path>,
) -> Result<(), ZoneConfigError> {
    let path = path.as_ref();
    let raw: Vec<Vec<[i32; 2]>> = polygons
        .iter()
        .map(|polygon| {
            polygon
                .iter()
                .map(|p| [p.x.round() as i32, p.y.round() as i32])
                .collect()
        })
        .collect();
    let json = serde_json::to_string(&raw).map_err(|source| ZoneConfigError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| ZoneConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a zone file and enumerate its polygons into [`Zone`]s sharing one
/// anchor.
pub fn load_zones(path: impl AsRef<Path>, anchor: Anchor) -> Result<Vec<Zone>, ZoneConfigError> {
    let polygons = load_polygons(path)?;
    Ok(polygons
        .into_iter()
        .enumerate()
        .map(|(index, polygon)| Zone::new(index, polygon).with_anchor(anchor))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("zone-dwell-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_polygon_round_trip() {
        let path = temp_path("round-trip.json");
        let polygons = vec![
            vec![
                Point::new(10.0, 10.0),
                Point::new(200.0, 10.0),
                Point::new(100.0, 150.0),
            ],
            vec![
                Point::new(0.0, 0.0),
                Point::new(50.0, 0.0),
                Point::new(50.0, 50.0),
                Point::new(0.0, 50.0),
            ],
        ];

        save_polygons(&polygons, &path).unwrap();
        let loaded = load_polygons(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, polygons);
    }

    #[test]
    fn test_load_zones_enumerates_indices() {
        let path = temp_path("zones.json");
        fs::write(&path, "[[[0,0],[10,0],[10,10]],[[20,20],[30,20],[30,30]]]").unwrap();
        let zones = load_zones(&path, Anchor::BottomCenter).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].index(), 0);
        assert_eq!(zones[1].index(), 1);
        assert_eq!(zones[1].anchor(), Anchor::BottomCenter);
    }

    #[test]
    fn test_degenerate_polygon_rejected() {
        let path = temp_path("degenerate.json");
        fs::write(&path, "[[[0,0],[10,0],[10,10]],[[1,1],[2,2]]]").unwrap();
        let err = load_polygons(&path).unwrap_err();
        let _ = fs::remove_file(&path);

        match err {
            ZoneConfigError::DegeneratePolygon { index, vertices } => {
                assert_eq!(index, 1);
                assert_eq!(vertices, 2);
            }
            other => panic!("expected DegeneratePolygon, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_rejected() {
        let path = temp_path("malformed.json");
        fs::write(&path, "{\"not\": \"a polygon list\"}").unwrap();
        let err = load_polygons(&path).unwrap_err();
        let _ = fs::remove_file(&path);

        assert!(matches!(err, ZoneConfigError::Malformed { .. }));
    }

    #[test]
    fn test_missing_file_reported() {
        let err = load_polygons(temp_path("does-not-exist.json")).unwrap_err();
        assert!(matches!(err, ZoneConfigError::Io { .. }));
    }
}
