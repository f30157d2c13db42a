//! Geographic primitives shared across the ranker.

use serde::{Deserialize, Serialize};

/// A WGS-84 coordinate pair in decimal degrees.
///
/// Latitude is conventionally within [-90, 90] and longitude within
/// [-180, 180], but no range validation happens here; out-of-range values
/// flow through the distance math unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}
