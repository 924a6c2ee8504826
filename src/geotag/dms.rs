//! Degrees/minutes/seconds angle representation
//!
//! Converts between decimal degrees and the DMS rational form used by the
//! EXIF GPS block. Degrees and minutes are emitted as `<int>/1` rationals;
//! seconds keep one decimal digit through a x10 numerator over a
//! denominator of 10, e.g. 98° 34' 58.7" becomes `98/1,34/1,587/10`.

use crate::constants::metadata::SECONDS_DENOMINATOR;
use crate::geotag::GeoFix;
use exif::Rational;

/// An unsigned DMS magnitude with an explicit hemisphere sign
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DmsAngle {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
    /// True for southern latitudes and western longitudes
    pub negative: bool,
}

impl DmsAngle {
    /// Decompose a decimal-degree angle into sign and DMS magnitude
    pub fn from_degrees(angle: f64) -> Self {
        let negative = angle < 0.0;
        let magnitude = angle.abs();
        let degrees = magnitude.trunc() as u32;
        let minutes_full = (magnitude - degrees as f64) * 60.0;
        let minutes = minutes_full.trunc() as u32;
        let seconds = (minutes_full - minutes as f64) * 60.0;
        Self {
            degrees,
            minutes,
            seconds,
            negative,
        }
    }

    /// Recompose the signed decimal-degree value
    pub fn to_degrees(&self) -> f64 {
        let magnitude =
            self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Render the magnitude as the EXIF rational tag string
    pub fn to_exif_string(&self) -> String {
        format!(
            "{}/1,{}/1,{:.0}/{}",
            self.degrees,
            self.minutes,
            self.seconds * SECONDS_DENOMINATOR as f64,
            SECONDS_DENOMINATOR
        )
    }

    /// Render the magnitude as an EXIF rational triple
    pub fn to_rationals(&self) -> [Rational; 3] {
        [
            Rational::from((self.degrees, 1)),
            Rational::from((self.minutes, 1)),
            Rational::from((
                (self.seconds * SECONDS_DENOMINATOR as f64).round() as u32,
                SECONDS_DENOMINATOR,
            )),
        ]
    }
}

/// Convert a DMS magnitude to unsigned decimal degrees
pub fn dms_to_degrees(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / 3600.0
}

/// The four GPS entries embedded by the capture collaborator
///
/// Coordinates are rendered as rational tag strings in the form the
/// camera driver consumes directly.
#[derive(Debug, Clone, PartialEq)]
pub struct GpsTags {
    pub latitude: String,
    pub latitude_ref: char,
    pub longitude: String,
    pub longitude_ref: char,
}

impl GpsTags {
    /// Encode a fix's coordinates into capture-side GPS tags
    pub fn from_fix(fix: &GeoFix) -> Self {
        let latitude = DmsAngle::from_degrees(fix.latitude);
        let longitude = DmsAngle::from_degrees(fix.longitude);
        Self {
            latitude: latitude.to_exif_string(),
            latitude_ref: if latitude.negative { 'S' } else { 'N' },
            longitude: longitude.to_exif_string(),
            longitude_ref: if longitude.negative { 'W' } else { 'E' },
        }
    }
}
