//! Geotag extraction and encoding
//!
//! This module handles the geolocation metadata embedded in captured
//! photographs: decoding stored EXIF GPS blocks into geographic fixes,
//! and encoding fixes into the rational tag representation the capture
//! collaborator embeds at shutter time.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub mod dms;
pub mod extractor;

pub use dms::{DmsAngle, GpsTags};
pub use extractor::{decode_fix, extract_fix};

/// A single geographic position and time sample derived from one image
///
/// Latitude and longitude are decimal degrees; the timestamp is the
/// original capture time, assumed to share one clock (UTC) across all
/// captures. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoFix {
    /// Latitude in decimal degrees, [-90, 90], south negative
    pub latitude: f64,
    /// Longitude in decimal degrees, [-180, 180], west negative
    pub longitude: f64,
    /// Original capture time
    pub timestamp: NaiveDateTime,
}

impl GeoFix {
    /// Create a fix from decimal-degree coordinates and a capture time
    pub fn new(latitude: f64, longitude: f64, timestamp: NaiveDateTime) -> Self {
        Self {
            latitude,
            longitude,
            timestamp,
        }
    }
}
