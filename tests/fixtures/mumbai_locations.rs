//! Real Mumbai locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Ward offices work as worker
//! start positions; the other groups are typical complaint sites.

use route_ranker::geo::GeoPoint;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

// ============================================================================
// Municipal Ward Offices (good for worker start positions)
// ============================================================================

pub const WARD_OFFICES: &[Location] = &[
    Location::new("BMC Head Office", 18.9387, 72.8353),
    Location::new("G-North Ward Office Dadar", 19.0178, 72.8478),
    Location::new("H-West Ward Office Bandra", 19.0544, 72.8402),
    Location::new("K-East Ward Office Andheri", 19.1197, 72.8464),
];

// ============================================================================
// South Mumbai Sites
// ============================================================================

pub const SOUTH_SITES: &[Location] = &[
    Location::new("Gateway of India", 18.9220, 72.8347),
    Location::new("Chhatrapati Shivaji Terminus", 18.9398, 72.8355),
    Location::new("Crawford Market", 18.9477, 72.8340),
    Location::new("Girgaon Chowpatty", 18.9543, 72.8133),
    Location::new("Byculla Vegetable Market", 18.9790, 72.8320),
];

// ============================================================================
// Western Suburb Sites
// ============================================================================

pub const WESTERN_SITES: &[Location] = &[
    Location::new("Dadar Flower Market", 19.0186, 72.8440),
    Location::new("Bandra Station West", 19.0547, 72.8408),
    Location::new("Juhu Chowpatty", 19.0883, 72.8262),
    Location::new("Juhu Beach North", 19.0968, 72.8265),
    Location::new("Versova Beach", 19.1317, 72.8121),
    Location::new("Powai Lake Promenade", 19.1273, 72.9046),
];

/// Look up a location by name across all groups.
pub fn by_name(name: &str) -> Location {
    WARD_OFFICES
        .iter()
        .chain(SOUTH_SITES)
        .chain(WESTERN_SITES)
        .find(|location| location.name == name)
        .cloned()
        .unwrap_or_else(|| panic!("unknown fixture location: {}", name))
}
