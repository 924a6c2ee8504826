//! # Groundtrack
//!
//! A Rust crate for estimating a spacecraft's ground-track speed from
//! geotagged photographs.
//!
//! The capture loop periodically photographs the Earth with location
//! metadata embedded at shutter time; analysis then:
//! - Extracts a geotagged fix (position + capture time) from each image
//! - Computes great-circle distance between consecutive fixes on the
//!   effective orbit sphere
//! - Converts per-pair distance and elapsed time into speed
//! - Averages the surviving samples, silently skipping degenerate pairs
//!
//! ## Example
//!
//! ```rust,no_run
//! use groundtrack::{estimate_average_speed, collect_images};
//! use std::path::Path;
//!
//! let images = collect_images(Path::new("captures"))?;
//! let estimate = estimate_average_speed(&images);
//! println!("{:.4} km/s over {} pairs", estimate.average_kmps, estimate.pairs_used);
//! # Ok::<(), groundtrack::SpeedError>(())
//! ```

use std::path::Path;

pub mod capture;
pub mod config;
pub mod constants;
pub mod error;
pub mod geotag;
pub mod report;
pub mod track;

pub use capture::{collect_images, Camera, CameraSettings, ImageRecord, PositionSource};
pub use config::MissionConfig;
pub use error::{Result, SpeedError};
pub use geotag::{extract_fix, GeoFix};
pub use track::{average_ground_speed, GreatCircle, SpeedEstimate};

/// Estimate the average ground-track speed over a sequence of captures
///
/// This is the main analysis entry point. Images are processed in the
/// given order, which must be capture order; the ISS effective orbit
/// radius is used for distances. Use
/// [`track::average_ground_speed`] directly to supply a different orbit
/// sphere.
///
/// # Arguments
///
/// * `images` - Image paths in capture order
///
/// # Returns
///
/// A [`SpeedEstimate`]; sequences with fewer than two usable images yield
/// the defined fallback average of `0.0`.
pub fn estimate_average_speed<P: AsRef<Path>>(images: &[P]) -> SpeedEstimate {
    average_ground_speed(images, &GreatCircle::iss())
}
