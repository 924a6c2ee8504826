//! Ground-track speed estimation pipeline
//!
//! Walks an ordered sequence of captured images, extracts consecutive
//! geotagged fixes, computes per-pair great-circle distance and speed, and
//! reduces to a single robust average.

pub mod aggregate;
pub mod distance;
pub mod speed;

pub use aggregate::{average_ground_speed, SpeedEstimate};
pub use distance::GreatCircle;
pub use speed::{ground_speed_kmps, SpeedSample};
