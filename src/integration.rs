//! Integration module for connecting detection and tracking backends with
//! zone dwell accounting.
//!
//! This module provides traits and utilities for feeding tracked detections
//! from various inference backends (ONNX Runtime, remote services, etc.) into
//! the per-zone dwell timers.

mod builder;
mod config;
mod monitor;
mod pipeline;
mod source;

pub use builder::TrackedDetectionBuilder;
pub use config::PipelineConfig;
pub use monitor::{DEFAULT_SAMPLE_SIZE, FpsMonitor};
pub use pipeline::ZonePipeline;
pub use source::TrackSource;
