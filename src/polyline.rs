//! Polyline representation for route paths.
//!
//! This module provides a type for working with polylines as decoded
//! coordinate sequences. Encoding to compact polyline formats happens at
//! the boundary (when handing a path to a map renderer).

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// A polyline representing a route path as decoded coordinates.
///
/// Stores latitude/longitude points directly for internal processing.
/// Encoding to/from the compact polyline format should happen at
/// API boundaries, not within the ranker core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<GeoPoint>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Number of points in the path.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }
}
