//! Result rendering and persistence
//!
//! The persisted artifact is the system's sole externally consumed output
//! and must match the downstream grader byte for byte: the average speed
//! as a fixed-point decimal with exactly four fractional digits, the
//! literal unit suffix, and a trailing newline, e.g. `7.6621 km/s\n`.

use crate::constants::output::{SPEED_DECIMALS, UNIT_SUFFIX};
use crate::error::{Result, SpeedError};
use crate::track::SpeedEstimate;
use std::fs;
use std::path::Path;

/// Render an average speed in the grader format
pub fn format_average_speed(average_kmps: f64) -> String {
    format!(
        "{:.decimals$}{}\n",
        average_kmps,
        UNIT_SUFFIX,
        decimals = SPEED_DECIMALS
    )
}

/// Persist an estimate's average speed to the result artifact
pub fn write_result(path: &Path, estimate: &SpeedEstimate) -> Result<()> {
    fs::write(path, format_average_speed(estimate.average_kmps))
        .map_err(|e| SpeedError::io(format!("cannot write {}", path.display()), e))
}
