//! Great-circle distance on the effective orbit sphere

use crate::constants::orbit::EFFECTIVE_ORBIT_RADIUS_KM;
use crate::geotag::GeoFix;

/// Great-circle distance estimator over a sphere of fixed radius
///
/// [`GreatCircle::new`] takes an arbitrary radius for other altitudes or
/// bodies; [`GreatCircle::iss`] uses the mission profile, where the sphere
/// is the Earth's mean radius plus the orbital altitude and an arc
/// therefore measures ground-track distance at orbital altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreatCircle {
    radius_km: f64,
}

impl GreatCircle {
    /// Create an estimator for a sphere of the given radius in kilometers
    pub const fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }

    /// Estimator for the ISS effective orbit sphere (6779 km)
    pub const fn iss() -> Self {
        Self::new(EFFECTIVE_ORBIT_RADIUS_KM)
    }

    /// Sphere radius in kilometers
    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Haversine distance between two fixes in kilometers
    ///
    /// Deterministic and pure; the haversine term is in [0, 1] by
    /// construction, so no input produces a domain error.
    pub fn distance_km(&self, a: &GeoFix, b: &GeoFix) -> f64 {
        let lat1 = a.latitude.to_radians();
        let lat2 = b.latitude.to_radians();
        let dlat = (b.latitude - a.latitude).to_radians();
        let dlon = (b.longitude - a.longitude).to_radians();

        let h = (dlat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
        self.radius_km * c
    }
}

impl Default for GreatCircle {
    fn default() -> Self {
        Self::iss()
    }
}
