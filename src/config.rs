//! Mission configuration
//!
//! All tunable parameters for a capture-and-analyze run, grouped into
//! capture-loop budgets and orbit geometry. Configuration can be loaded
//! from JSON files or constructed from the ISS mission defaults:
//!
//! ```no_run
//! use groundtrack::MissionConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = MissionConfig::from_json_file(Path::new("mission.json"))?;
//!
//! // Or use the mission defaults
//! let config = MissionConfig::default_iss();
//! # Ok::<(), groundtrack::SpeedError>(())
//! ```

use crate::capture::CameraSettings;
use crate::constants::{capture, orbit, output};
use crate::error::{Result, SpeedError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete configuration for one capture-and-analyze run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionConfig {
    /// Directory holding captured images
    pub image_dir: PathBuf,

    /// Path of the persisted result artifact
    pub result_path: PathBuf,

    /// Capture-loop configuration
    pub capture: CaptureConfig,

    /// Orbit geometry configuration
    pub orbit: OrbitConfig,
}

/// Capture-loop budgets and camera settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Camera driver settings
    pub camera: CameraSettings,

    /// Delay between consecutive captures in seconds
    pub interval_secs: u64,

    /// Maximum number of images captured and retained
    pub max_images: usize,

    /// Storage budget for captured images in megabytes
    pub max_storage_mb: f64,

    /// Wall-clock budget for the capture loop in seconds
    pub max_duration_secs: u64,
}

/// Orbit geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitConfig {
    /// Radius of the effective orbit sphere in kilometers
    pub effective_radius_km: f64,
}

impl MissionConfig {
    /// Create the ISS mission-profile configuration
    pub fn default_iss() -> Self {
        Self {
            image_dir: PathBuf::from("."),
            result_path: PathBuf::from(output::RESULT_FILENAME),
            capture: CaptureConfig {
                camera: CameraSettings::default(),
                interval_secs: capture::INTERVAL_SECS,
                max_images: capture::MAX_IMAGES,
                max_storage_mb: capture::MAX_STORAGE_MB,
                max_duration_secs: capture::MAX_DURATION_SECS,
            },
            orbit: OrbitConfig {
                effective_radius_km: orbit::EFFECTIVE_ORBIT_RADIUS_KM,
            },
        }
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SpeedError::config(format!("cannot read {}", path.display()), e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| SpeedError::config(format!("cannot parse {}", path.display()), e))?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SpeedError::config("cannot serialize configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| SpeedError::config(format!("cannot write {}", path.display()), e))?;
        Ok(())
    }
}
