//! Haversine distance provider.
//!
//! Great-circle distance over a spherical Earth. Ignores roads, which is
//! acceptable at the city scale this ranker operates on.

use crate::geo::GeoPoint;
use crate::traits::DistanceProvider;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine-based distance provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl Haversine {
    /// Great-circle distance between two points in kilometers.
    pub fn distance_km(from: GeoPoint, to: GeoPoint) -> f64 {
        let delta_lat = (to.lat - from.lat).to_radians();
        let delta_lng = (to.lng - from.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    /// Total length of a path in kilometers, summing consecutive legs.
    ///
    /// Zero for paths of fewer than two points.
    pub fn path_km(points: &[GeoPoint]) -> f64 {
        points
            .windows(2)
            .map(|leg| Self::distance_km(leg[0], leg[1]))
            .sum()
    }
}

impl DistanceProvider for Haversine {
    fn distance_km(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        Haversine::distance_km(from, to)
    }
}
