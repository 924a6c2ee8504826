//! Mission constants for capture and speed estimation
//!
//! This module contains compile-time constants for the ISS mission profile:
//! the effective orbit sphere, capture-loop budgets, and the metadata and
//! output formats shared with external collaborators.

/// Effective orbit geometry
///
/// Distances are computed on a sphere whose radius is the Earth's mean
/// radius plus the orbital altitude, so a great-circle arc directly yields
/// ground-track distance at orbital altitude.
pub mod orbit {
    /// Earth mean radius in kilometers
    pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0;

    /// ISS orbital altitude in kilometers
    pub const ORBIT_ALTITUDE_KM: f64 = 408.0;

    /// Radius of the effective orbit sphere in kilometers
    pub const EFFECTIVE_ORBIT_RADIUS_KM: f64 = 6779.0;
}

/// Re-export the effective radius at top level for convenience
pub const EFFECTIVE_ORBIT_RADIUS_KM: f64 = orbit::EFFECTIVE_ORBIT_RADIUS_KM;

/// Capture-loop budgets and camera defaults
pub mod capture {
    /// Camera resolution (width, height) in pixels
    pub const RESOLUTION: (u32, u32) = (1280, 720);

    /// Camera framerate in frames per second
    pub const FRAMERATE: u32 = 15;

    /// Camera exposure mode
    pub const EXPOSURE_MODE: &str = "auto";

    /// Camera auto white balance mode
    pub const AWB_MODE: &str = "auto";

    /// Delay between consecutive captures in seconds
    pub const INTERVAL_SECS: u64 = 5;

    /// Maximum number of images captured and retained
    pub const MAX_IMAGES: usize = 42;

    /// Storage budget for captured images in megabytes
    pub const MAX_STORAGE_MB: f64 = 250.0;

    /// Wall-clock budget for the capture loop in seconds
    pub const MAX_DURATION_SECS: u64 = 480;

    /// Capture filename timestamp format (`image_<stamp>.jpg`)
    pub const FILENAME_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
}

/// Metadata formats shared with the capture collaborator
pub mod metadata {
    /// EXIF `DateTimeOriginal` format, zero-padded, 24-hour, no timezone
    pub const TIMESTAMP_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

    /// Denominator retaining one decimal digit in the seconds rational
    pub const SECONDS_DENOMINATOR: u32 = 10;

    /// Image container extensions accepted by the EXIF parser
    pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "tif", "tiff"];
}

/// Output artifact format
pub mod output {
    /// Fractional digits in the rendered average speed
    pub const SPEED_DECIMALS: usize = 4;

    /// Unit suffix appended to the rendered value
    pub const UNIT_SUFFIX: &str = " km/s";

    /// Default result artifact filename
    pub const RESULT_FILENAME: &str = "result.txt";
}
