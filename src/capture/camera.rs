//! Camera and position collaborator traits
//!
//! The hardware camera driver and the spacecraft-position lookup service
//! are opaque collaborators; the crate depends only on these seams.

use crate::constants::capture;
use crate::error::Result;
use crate::geotag::{GeoFix, GpsTags};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Camera driver settings applied before the capture loop starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSettings {
    /// Sensor resolution (width, height) in pixels
    pub resolution: (u32, u32),
    /// Framerate in frames per second
    pub framerate: u32,
    /// Exposure mode name understood by the driver
    pub exposure_mode: String,
    /// Auto white balance mode name understood by the driver
    pub awb_mode: String,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            resolution: capture::RESOLUTION,
            framerate: capture::FRAMERATE,
            exposure_mode: capture::EXPOSURE_MODE.to_string(),
            awb_mode: capture::AWB_MODE.to_string(),
        }
    }
}

/// The camera hardware collaborator
pub trait Camera {
    /// Apply driver settings once, before the first capture
    fn configure(&mut self, settings: &CameraSettings) -> Result<()>;

    /// Capture one frame to `destination`
    ///
    /// Implementations embed the given GPS tags plus the
    /// original-capture timestamp (`DateTimeOriginal`) in the stored
    /// image's metadata.
    fn capture(&mut self, destination: &Path, tags: &GpsTags) -> Result<()>;
}

/// The spacecraft-position lookup collaborator
pub trait PositionSource {
    /// Current sub-satellite position
    fn current_position(&mut self) -> Result<GeoFix>;
}
