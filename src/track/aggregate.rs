//! Sequence aggregation into an average ground-track speed
//!
//! Walks consecutive image pairs in capture order, extracting a fix from
//! each side, filtering degenerate pairs, and averaging the surviving
//! per-pair speeds. No extraction or estimation error propagates out of
//! the aggregator; a bad pair is dropped and the run continues.

use crate::geotag::{extract_fix, GeoFix};
use crate::track::distance::GreatCircle;
use crate::track::speed::{ground_speed_kmps, SpeedSample};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Result of one aggregation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedEstimate {
    /// Arithmetic mean of the surviving per-pair speeds, 0.0 if none survive
    pub average_kmps: f64,
    /// Number of pairs that contributed a sample
    pub pairs_used: usize,
    /// Number of adjacent pairs dropped by the skip policy
    pub pairs_skipped: usize,
}

/// Aggregate an ordered sequence of captured images into an average speed
///
/// For each adjacent pair the geotag extractor runs on both images; the
/// pair is dropped without contribution when either side lacks usable
/// metadata, when the two references are the same image, or when the
/// computed distance or elapsed time is exactly zero. Zero-speed samples
/// from such degenerate pairs would only drag the average down (a camera
/// retrying the same fix, or two captures landing on the same second).
///
/// # Arguments
///
/// * `images` - Image paths in capture order
/// * `sphere` - Great-circle estimator for the effective orbit radius
///
/// # Returns
///
/// A [`SpeedEstimate`]; zero or one input image yields the defined
/// fallback average of `0.0` rather than an error.
pub fn average_ground_speed<P: AsRef<Path>>(images: &[P], sphere: &GreatCircle) -> SpeedEstimate {
    let mut samples: Vec<SpeedSample> = Vec::new();
    let mut skipped = 0usize;

    for pair in images.windows(2) {
        let first_path = pair[0].as_ref();
        let second_path = pair[1].as_ref();

        let (first, second) = match (extract_fix(first_path), extract_fix(second_path)) {
            (Ok(first), Ok(second)) => (first, second),
            (Err(e), _) | (_, Err(e)) => {
                debug!(error = %e, "skipping pair: metadata unavailable");
                skipped += 1;
                continue;
            }
        };

        match pair_sample(&first, &second, first_path == second_path, sphere) {
            Some(sample) => {
                debug!(
                    distance_km = sample.distance_km,
                    elapsed_secs = sample.elapsed_secs,
                    speed_kmps = sample.speed_kmps,
                    "pair sample"
                );
                samples.push(sample);
            }
            None => {
                debug!(
                    first = %first_path.display(),
                    second = %second_path.display(),
                    "skipping degenerate pair"
                );
                skipped += 1;
            }
        }
    }

    SpeedEstimate {
        average_kmps: mean_speed(&samples),
        pairs_used: samples.len(),
        pairs_skipped: skipped,
    }
}

/// Build one pair's sample, or None for a degenerate pair
fn pair_sample(
    first: &GeoFix,
    second: &GeoFix,
    identical_source: bool,
    sphere: &GreatCircle,
) -> Option<SpeedSample> {
    if identical_source {
        return None;
    }
    let distance_km = sphere.distance_km(first, second);
    if distance_km == 0.0 {
        return None;
    }
    let elapsed_secs = (second.timestamp - first.timestamp).num_seconds() as f64;
    if elapsed_secs == 0.0 {
        return None;
    }
    // The zero-elapsed filter above makes this infallible in practice
    let speed_kmps = ground_speed_kmps(distance_km, elapsed_secs).ok()?;
    Some(SpeedSample {
        distance_km,
        elapsed_secs: elapsed_secs.abs(),
        speed_kmps,
    })
}

/// Unweighted mean of sample speeds, 0.0 for an empty set
fn mean_speed(samples: &[SpeedSample]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().map(|s| s.speed_kmps).sum::<f64>() / samples.len() as f64
}
