//! Integration tests for the capture-and-analyze pipeline
//!
//! These tests exercise the end-to-end workflow against real files:
//! EXIF blocks are written with the same library that extraction parses,
//! stored in a temporary directory, discovered, aggregated, and rendered
//! into the grader artifact.

use chrono::NaiveDateTime;
use exif::experimental::Writer;
use exif::{Field, In, Tag, Value};
use groundtrack::capture::{run_capture, Camera, CameraSettings, PositionSource};
use groundtrack::config::CaptureConfig;
use groundtrack::geotag::{DmsAngle, GeoFix, GpsTags};
use groundtrack::{
    collect_images, estimate_average_speed, report, Result, SpeedError, SpeedEstimate,
};
use std::fs;
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Serialize a fix into an EXIF block inside a TIFF container
fn exif_bytes(fix: &GeoFix) -> Vec<u8> {
    let latitude = DmsAngle::from_degrees(fix.latitude);
    let longitude = DmsAngle::from_degrees(fix.longitude);
    let stamp = fix.timestamp.format(TIMESTAMP_FORMAT).to_string();

    let fields = vec![
        Field {
            tag: Tag::GPSLatitude,
            ifd_num: In::PRIMARY,
            value: Value::Rational(latitude.to_rationals().to_vec()),
        },
        Field {
            tag: Tag::GPSLatitudeRef,
            ifd_num: In::PRIMARY,
            value: Value::Ascii(vec![vec![if latitude.negative { b'S' } else { b'N' }]]),
        },
        Field {
            tag: Tag::GPSLongitude,
            ifd_num: In::PRIMARY,
            value: Value::Rational(longitude.to_rationals().to_vec()),
        },
        Field {
            tag: Tag::GPSLongitudeRef,
            ifd_num: In::PRIMARY,
            value: Value::Ascii(vec![vec![if longitude.negative { b'W' } else { b'E' }]]),
        },
        Field {
            tag: Tag::DateTimeOriginal,
            ifd_num: In::PRIMARY,
            value: Value::Ascii(vec![stamp.into_bytes()]),
        },
    ];

    let mut writer = Writer::new();
    for field in &fields {
        writer.push_field(field);
    }
    let mut cursor = std::io::Cursor::new(Vec::new());
    writer.write(&mut cursor, false).unwrap();
    cursor.into_inner()
}

fn write_capture(dir: &Path, name: &str, fix: &GeoFix) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, exif_bytes(fix)).unwrap();
    path
}

fn fix(latitude: f64, longitude: f64, stamp: &str) -> GeoFix {
    GeoFix::new(
        latitude,
        longitude,
        NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).unwrap(),
    )
}

/// Arc length of one degree on the effective orbit sphere, in km
fn one_degree_km() -> f64 {
    6779.0 * std::f64::consts::PI / 180.0
}

// ============================================================================
// Known-Value Pipeline Tests
// ============================================================================

#[test]
fn test_two_fixes_one_degree_one_second() {
    let dir = tempfile::tempdir().unwrap();
    let images = vec![
        write_capture(
            dir.path(),
            "image_001.tif",
            &fix(0.0, 0.0, "2024:02:15 10:30:00"),
        ),
        write_capture(
            dir.path(),
            "image_002.tif",
            &fix(0.0, 1.0, "2024:02:15 10:30:01"),
        ),
    ];

    let estimate = estimate_average_speed(&images);

    assert_eq!(estimate.pairs_used, 1);
    assert_eq!(estimate.pairs_skipped, 0);
    assert!((estimate.average_kmps - one_degree_km()).abs() < 1e-6);
}

#[test]
fn test_constant_speed_sequence_averages_to_itself() {
    let dir = tempfile::tempdir().unwrap();
    // Five captures drifting east at one degree every five seconds
    let mut images = Vec::new();
    for i in 0..5u32 {
        images.push(write_capture(
            dir.path(),
            &format!("image_{:03}.tif", i),
            &fix(
                0.0,
                i as f64,
                &format!("2024:02:15 10:30:{:02}", i * 5),
            ),
        ));
    }

    let estimate = estimate_average_speed(&images);

    assert_eq!(estimate.pairs_used, 4);
    let expected = one_degree_km() / 5.0;
    assert!((estimate.average_kmps - expected).abs() < 1e-6);
}

#[test]
fn test_southern_western_hemisphere_fixes() {
    let dir = tempfile::tempdir().unwrap();
    // One degree of latitude straddling the equator southward
    let images = vec![
        write_capture(
            dir.path(),
            "image_001.tif",
            &fix(0.5, -30.0, "2024:02:15 10:30:00"),
        ),
        write_capture(
            dir.path(),
            "image_002.tif",
            &fix(-0.5, -30.0, "2024:02:15 10:30:10"),
        ),
    ];

    let estimate = estimate_average_speed(&images);

    assert_eq!(estimate.pairs_used, 1);
    let expected = one_degree_km() / 10.0;
    // DMS encoding quantizes to a tenth of an arc-second
    assert!((estimate.average_kmps - expected).abs() < 1e-3);
}

// ============================================================================
// Skip-Policy Tests
// ============================================================================

#[test]
fn test_image_without_metadata_drops_both_pairs() {
    let dir = tempfile::tempdir().unwrap();
    let bare = dir.path().join("image_002.tif");
    fs::write(&bare, b"no exif here").unwrap();

    let images = vec![
        write_capture(
            dir.path(),
            "image_001.tif",
            &fix(0.0, 0.0, "2024:02:15 10:30:00"),
        ),
        bare,
        write_capture(
            dir.path(),
            "image_003.tif",
            &fix(0.0, 2.0, "2024:02:15 10:30:10"),
        ),
    ];

    let estimate = estimate_average_speed(&images);

    assert_eq!(estimate.pairs_used, 0);
    assert_eq!(estimate.pairs_skipped, 2);
    assert_eq!(estimate.average_kmps, 0.0);
}

#[test]
fn test_identical_reference_pair_excluded() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_capture(
        dir.path(),
        "image_001.tif",
        &fix(0.0, 0.0, "2024:02:15 10:30:00"),
    );
    let second = write_capture(
        dir.path(),
        "image_002.tif",
        &fix(0.0, 1.0, "2024:02:15 10:30:01"),
    );

    // The retried reference contributes nothing; the real pair still counts
    let images = vec![first.clone(), first, second];
    let estimate = estimate_average_speed(&images);

    assert_eq!(estimate.pairs_used, 1);
    assert_eq!(estimate.pairs_skipped, 1);
    assert!((estimate.average_kmps - one_degree_km()).abs() < 1e-6);
}

#[test]
fn test_zero_elapsed_pair_excluded() {
    let dir = tempfile::tempdir().unwrap();
    // Clock resolution collapse: distinct positions, same second
    let images = vec![
        write_capture(
            dir.path(),
            "image_001.tif",
            &fix(0.0, 0.0, "2024:02:15 10:30:00"),
        ),
        write_capture(
            dir.path(),
            "image_002.tif",
            &fix(0.0, 1.0, "2024:02:15 10:30:00"),
        ),
    ];

    let estimate = estimate_average_speed(&images);

    assert_eq!(estimate.pairs_used, 0);
    assert_eq!(estimate.pairs_skipped, 1);
    assert_eq!(estimate.average_kmps, 0.0);
}

#[test]
fn test_stationary_fix_pair_excluded() {
    let dir = tempfile::tempdir().unwrap();
    let images = vec![
        write_capture(
            dir.path(),
            "image_001.tif",
            &fix(10.0, 20.0, "2024:02:15 10:30:00"),
        ),
        write_capture(
            dir.path(),
            "image_002.tif",
            &fix(10.0, 20.0, "2024:02:15 10:30:05"),
        ),
    ];

    let estimate = estimate_average_speed(&images);

    assert_eq!(estimate.pairs_used, 0);
    assert_eq!(estimate.pairs_skipped, 1);
}

#[test]
fn test_degenerate_pairs_do_not_drag_average() {
    let dir = tempfile::tempdir().unwrap();
    let moving_a = write_capture(
        dir.path(),
        "image_001.tif",
        &fix(0.0, 0.0, "2024:02:15 10:30:00"),
    );
    let moving_b = write_capture(
        dir.path(),
        "image_002.tif",
        &fix(0.0, 1.0, "2024:02:15 10:30:01"),
    );
    // A stalled fix follows: same position, later clock
    let stalled = write_capture(
        dir.path(),
        "image_003.tif",
        &fix(0.0, 1.0, "2024:02:15 10:30:06"),
    );

    let images = vec![moving_a, moving_b, stalled];
    let estimate = estimate_average_speed(&images);

    // The stalled pair is excluded rather than averaged in as zero
    assert_eq!(estimate.pairs_used, 1);
    assert_eq!(estimate.pairs_skipped, 1);
    assert!((estimate.average_kmps - one_degree_km()).abs() < 1e-6);
}

// ============================================================================
// Discovery and Artifact Tests
// ============================================================================

#[test]
fn test_discovery_analysis_and_artifact() {
    let dir = tempfile::tempdir().unwrap();
    write_capture(
        dir.path(),
        "image_20240215_103000.tif",
        &fix(0.0, 0.0, "2024:02:15 10:30:00"),
    );
    write_capture(
        dir.path(),
        "image_20240215_103005.tif",
        &fix(0.0, 0.5, "2024:02:15 10:30:05"),
    );
    fs::write(dir.path().join("mission.json"), "{}").unwrap();

    let images = collect_images(dir.path()).unwrap();
    assert_eq!(images.len(), 2);

    let estimate = estimate_average_speed(&images);
    assert_eq!(estimate.pairs_used, 1);

    let result_path = dir.path().join("result.txt");
    report::write_result(&result_path, &estimate).unwrap();

    let written = fs::read_to_string(&result_path).unwrap();
    let expected_speed = one_degree_km() * 0.5 / 5.0;
    assert_eq!(written, format!("{:.4} km/s\n", expected_speed));
    assert!(written.ends_with(" km/s\n"));
}

#[test]
fn test_empty_directory_yields_zero_artifact() {
    let dir = tempfile::tempdir().unwrap();

    let images = collect_images(dir.path()).unwrap();
    let estimate = estimate_average_speed(&images);
    let result_path = dir.path().join("result.txt");
    report::write_result(&result_path, &estimate).unwrap();

    assert_eq!(fs::read_to_string(&result_path).unwrap(), "0.0000 km/s\n");
}

// ============================================================================
// Capture Loop Round Trip
// ============================================================================

/// Camera stub that embeds real EXIF blocks from a scripted track
struct GeotagCamera {
    script: Vec<GeoFix>,
    shot: usize,
}

impl Camera for GeotagCamera {
    fn configure(&mut self, _settings: &CameraSettings) -> Result<()> {
        Ok(())
    }

    fn capture(&mut self, destination: &Path, _tags: &GpsTags) -> Result<()> {
        let fix = self.script[self.shot];
        self.shot += 1;
        fs::write(destination, exif_bytes(&fix))
            .map_err(|e| SpeedError::io("scripted capture", e))?;
        Ok(())
    }
}

struct ScriptedPosition {
    script: Vec<GeoFix>,
    index: usize,
}

impl PositionSource for ScriptedPosition {
    fn current_position(&mut self) -> Result<GeoFix> {
        let fix = self.script[self.index];
        self.index += 1;
        Ok(fix)
    }
}

#[test]
fn test_capture_then_analyze_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let script = vec![
        fix(0.0, 0.0, "2024:02:15 10:30:00"),
        fix(0.0, 1.0, "2024:02:15 10:30:05"),
        fix(0.0, 2.0, "2024:02:15 10:30:10"),
    ];

    let mut camera = GeotagCamera {
        script: script.clone(),
        shot: 0,
    };
    let mut position = ScriptedPosition { script, index: 0 };
    let config = CaptureConfig {
        camera: CameraSettings::default(),
        // Distinct wall-clock seconds keep the timestamped filenames unique
        interval_secs: 1,
        max_images: 3,
        max_storage_mb: 250.0,
        max_duration_secs: 480,
    };

    let records = run_capture(&mut camera, &mut position, &config, dir.path()).unwrap();
    assert_eq!(records.len(), 3);

    let images = collect_images(dir.path()).unwrap();
    assert_eq!(images.len(), 3);

    let estimate = estimate_average_speed(&images);
    assert_eq!(estimate.pairs_used, 2);
    let expected = one_degree_km() / 5.0;
    assert!((estimate.average_kmps - expected).abs() < 1e-6);
}

// ============================================================================
// Serialization Tests
// ============================================================================

#[test]
fn test_estimate_json_serialization() {
    let estimate = SpeedEstimate {
        average_kmps: 7.6621,
        pairs_used: 12,
        pairs_skipped: 1,
    };

    let json = serde_json::to_string(&estimate).unwrap();
    assert!(json.contains("\"average_kmps\""));
    assert!(json.contains("\"pairs_used\""));

    let deserialized: SpeedEstimate = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, estimate);
}
