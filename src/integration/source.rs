//! Trait for tracked-detection sources.

use crate::zone::TrackedDetection;

/// Trait for upstream detection + tracking backends.
///
/// Implement this trait to connect any detector/tracker stack to the zone
/// pipeline. The backend owns model inference, non-max suppression, and
/// identity association; the pipeline only consumes its per-frame output.
///
/// # Example
///
/// ```ignore
/// use zone_dwell_rs::{TrackSource, TrackedDetection};
///
/// struct MyTracker {
///     // Your model and tracker here
/// }
///
/// impl TrackSource for MyTracker {
///     type Error = std::io::Error;
///
///     fn track(&mut self, input: &[u8], width: u32, height: u32) -> Result<Vec<TrackedDetection>, Self::Error> {
///         // Run inference, associate identities, return tracked detections
///         Ok(vec![])
///     }
/// }
/// ```
pub trait TrackSource {
    /// Error type for backend failures.
    type Error;

    /// Run detection and tracking on raw image data.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    ///
    /// # Returns
    /// The frame's tracked detections, each carrying a stable track id, or
    /// an error. An empty vector is not an error; it simply means no object
    /// is on screen.
    fn track(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<TrackedDetection>, Self::Error>;
}
