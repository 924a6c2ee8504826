//! Capture loop and stored-image discovery
//!
//! Thin plumbing around the camera collaborator: periodic geotagged
//! captures under storage, count, and duration budgets, plus discovery of
//! previously stored captures for analysis.

use crate::config::CaptureConfig;
use crate::constants::{capture as limits, metadata};
use crate::error::{Result, SpeedError};
use crate::geotag::GpsTags;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

pub mod camera;

pub use camera::{Camera, CameraSettings, PositionSource};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// One stored capture, ordered by capture time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Stable path usable for repeated reads
    pub path: PathBuf,
    /// Wall-clock time the capture was requested
    pub captured_at: NaiveDateTime,
}

/// Run the periodic capture loop
///
/// Captures geotagged images into `image_dir` until the storage budget,
/// the image-count cap, or the wall-clock duration budget is reached,
/// sleeping the configured interval between frames. Filenames carry the
/// capture timestamp (`image_<stamp>.jpg`), so lexicographic order equals
/// capture order.
///
/// # Errors
///
/// Collaborator failures abort the capture phase; unlike analysis-time
/// metadata problems they are not skippable, since every later frame
/// would fail the same way.
pub fn run_capture<C, S>(
    camera: &mut C,
    position: &mut S,
    config: &CaptureConfig,
    image_dir: &Path,
) -> Result<Vec<ImageRecord>>
where
    C: Camera,
    S: PositionSource,
{
    camera.configure(&config.camera)?;

    let mut records = Vec::new();
    let mut storage_mb = 0.0f64;
    let started_at = Utc::now().naive_utc();

    while storage_mb < config.max_storage_mb && records.len() < config.max_images {
        let captured_at = Utc::now().naive_utc();
        let filename = format!(
            "image_{}.jpg",
            captured_at.format(limits::FILENAME_STAMP_FORMAT)
        );
        let path = image_dir.join(filename);

        let fix = position.current_position()?;
        let tags = GpsTags::from_fix(&fix);
        camera.capture(&path, &tags)?;

        let size = fs::metadata(&path)
            .map_err(|e| SpeedError::io(format!("cannot stat {}", path.display()), e))?
            .len();
        storage_mb += size as f64 / BYTES_PER_MB;

        info!(image = %path.display(), storage_mb, "image captured");
        records.push(ImageRecord { path, captured_at });

        if (captured_at - started_at).num_seconds() >= config.max_duration_secs as i64 {
            break;
        }
        thread::sleep(Duration::from_secs(config.interval_secs));
    }

    Ok(records)
}

/// Delete the oldest stored captures beyond the retention cap
pub fn enforce_retention(records: &mut Vec<ImageRecord>, max_images: usize) -> Result<()> {
    while records.len() > max_images {
        let oldest = records.remove(0);
        fs::remove_file(&oldest.path)
            .map_err(|e| SpeedError::io(format!("cannot remove {}", oldest.path.display()), e))?;
        warn!(image = %oldest.path.display(), "removed capture beyond retention cap");
    }
    Ok(())
}

/// Discover stored captures in a directory, in capture order
///
/// Accepts the container extensions the EXIF parser understands and sorts
/// by file name, which equals capture order under the timestamped naming
/// scheme.
pub fn collect_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .map_err(|e| SpeedError::io(format!("cannot read image directory {}", dir.display()), e))?;

    let mut images = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|e| SpeedError::io(format!("cannot list {}", dir.display()), e))?;
        let path = entry.path();
        let supported = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| is_supported_extension(ext))
            .unwrap_or(false);
        if supported {
            images.push(path);
        }
    }
    images.sort();
    Ok(images)
}

/// Check if a file extension names a supported image container
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    metadata::IMAGE_EXTENSIONS.contains(&ext_lower.as_str())
}
