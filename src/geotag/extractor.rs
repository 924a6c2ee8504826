//! EXIF geotag extraction
//!
//! Reads the GPS block and original-capture timestamp embedded in a stored
//! image and decodes them into a [`GeoFix`]. Extraction is a pure read of
//! the image's metadata; the pixel data is never touched.
//!
//! Any decode failure (missing tags, zero-denominator rationals, malformed
//! text, unparseable timestamps) collapses into
//! [`SpeedError::MissingMetadata`], which callers treat as "skip this
//! image" rather than as fatal.

use crate::constants::metadata::TIMESTAMP_FORMAT;
use crate::error::{Result, SpeedError};
use crate::geotag::{dms, GeoFix};
use chrono::NaiveDateTime;
use exif::{Exif, In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Extract a geotagged fix from a stored image
///
/// # Arguments
///
/// * `path` - Path to an image container holding EXIF metadata
///
/// # Returns
///
/// The decoded [`GeoFix`]
///
/// # Errors
///
/// Returns [`SpeedError::MissingMetadata`] if the file cannot be opened,
/// holds no EXIF segment, or lacks any of the required entries: latitude
/// and longitude triples with hemisphere references, and
/// `DateTimeOriginal`.
pub fn extract_fix(path: &Path) -> Result<GeoFix> {
    let file = File::open(path)
        .map_err(|e| SpeedError::missing_metadata(path, format!("cannot open image: {}", e)))?;
    let mut reader = BufReader::new(file);
    let exif = Reader::new()
        .read_from_container(&mut reader)
        .map_err(|e| SpeedError::missing_metadata(path, format!("no EXIF metadata: {}", e)))?;
    decode_fix(&exif, path)
}

/// Decode a parsed EXIF block into a fix
///
/// Exposed separately from [`extract_fix`] so the decode path can be
/// exercised on in-memory EXIF buffers.
pub fn decode_fix(exif: &Exif, source: &Path) -> Result<GeoFix> {
    let latitude = signed_coordinate(exif, Tag::GPSLatitude, Tag::GPSLatitudeRef, b'S')
        .ok_or_else(|| SpeedError::missing_metadata(source, "no GPS latitude"))?;
    let longitude = signed_coordinate(exif, Tag::GPSLongitude, Tag::GPSLongitudeRef, b'W')
        .ok_or_else(|| SpeedError::missing_metadata(source, "no GPS longitude"))?;
    let timestamp = capture_timestamp(exif)
        .ok_or_else(|| SpeedError::missing_metadata(source, "no original capture timestamp"))?;

    Ok(GeoFix::new(latitude, longitude, timestamp))
}

/// Decode one coordinate, negated when its reference matches the given hemisphere
fn signed_coordinate(
    exif: &Exif,
    value_tag: Tag,
    ref_tag: Tag,
    negative_hemisphere: u8,
) -> Option<f64> {
    let magnitude = coordinate_degrees(exif, value_tag)?;
    let hemisphere = ascii_byte(exif, ref_tag)?;
    if hemisphere == negative_hemisphere {
        Some(-magnitude)
    } else {
        Some(magnitude)
    }
}

/// Decode a DMS rational triple into unsigned decimal degrees
fn coordinate_degrees(exif: &Exif, tag: Tag) -> Option<f64> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match field.value {
        Value::Rational(ref triple) if triple.len() >= 3 => {
            // A zero denominator means the tag is corrupt, not zero-valued
            if triple[..3].iter().any(|r| r.denom == 0) {
                return None;
            }
            Some(dms::dms_to_degrees(
                triple[0].to_f64(),
                triple[1].to_f64(),
                triple[2].to_f64(),
            ))
        }
        _ => None,
    }
}

/// First byte of an ASCII tag (hemisphere references are single letters)
fn ascii_byte(exif: &Exif, tag: Tag) -> Option<u8> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match field.value {
        Value::Ascii(ref vecs) => vecs.first().and_then(|v| v.first()).copied(),
        _ => None,
    }
}

/// Decode `DateTimeOriginal` using the fixed capture-timestamp format
fn capture_timestamp(exif: &Exif) -> Option<NaiveDateTime> {
    let field = exif.get_field(Tag::DateTimeOriginal, In::PRIMARY)?;
    let raw = match field.value {
        Value::Ascii(ref vecs) => vecs.first()?,
        _ => return None,
    };
    let text = std::str::from_utf8(raw).ok()?;
    NaiveDateTime::parse_from_str(text.trim_end_matches('\0'), TIMESTAMP_FORMAT).ok()
}
