//! Pipeline configuration with serde support for JSON config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a [`ZonePipeline`](super::ZonePipeline) run.
///
/// Every field has a default so a partial JSON document (or an empty `{}`)
/// deserializes into a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Path to the detector weights handed to the tracking backend.
    #[serde(default = "default_weights")]
    pub weights: PathBuf,

    /// Compute device identifier for the tracking backend.
    #[serde(default = "default_device")]
    pub device: String,

    /// Minimum confidence for a detection to enter zone accounting.
    #[serde(default = "default_confidence")]
    pub confidence: f32,

    /// IoU threshold for non-maximum suppression in the backend.
    #[serde(default = "default_iou")]
    pub iou: f32,

    /// Class ids admitted into zone accounting. Empty means all classes.
    #[serde(default = "default_classes")]
    pub classes: Vec<u32>,

    /// Input video path.
    #[serde(default)]
    pub source_video: PathBuf,

    /// Output video path.
    #[serde(default = "default_target_video")]
    pub target_video: PathBuf,
}

impl PipelineConfig {
    /// Check whether a class id passes the allow list.
    #[inline]
    pub fn class_allowed(&self, class_id: u32) -> bool {
        self.classes.is_empty() || self.classes.contains(&class_id)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            weights: default_weights(),
            device: default_device(),
            confidence: default_confidence(),
            iou: default_iou(),
            classes: default_classes(),
            source_video: PathBuf::new(),
            target_video: default_target_video(),
        }
    }
}

// Default value functions
fn default_weights() -> PathBuf {
    PathBuf::from("yolov8m.pt")
}

fn default_device() -> String {
    "cuda".to_string()
}

fn default_confidence() -> f32 {
    0.5
}

fn default_iou() -> f32 {
    0.7
}

fn default_classes() -> Vec<u32> {
    // COCO vehicle classes: car, bus, train, truck
    vec![2, 5, 6, 7]
}

fn default_target_video() -> PathBuf {
    PathBuf::from("output.mp4")
}
