//! Core domain traits for the route ranker.
//!
//! These are intentionally minimal and domain-agnostic. Concrete apps should
//! implement them for their own data models.

use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Unique identifier for ranker entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// Completion state of a field task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Assigned,
    InProgress,
    Completed,
}

/// A task is a single field assignment a worker may visit.
pub trait Task {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Coordinates of the task site. A task without coordinates cannot be
    /// distance-ranked and is skipped entirely.
    fn location(&self) -> Option<GeoPoint>;

    /// Current completion state. Completed tasks do not route.
    fn status(&self) -> TaskStatus;
}

/// Point-to-point distance in kilometers.
pub trait DistanceProvider {
    fn distance_km(&self, from: GeoPoint, to: GeoPoint) -> f64;
}

/// Supplies the device position used as a route origin.
///
/// Implementations may read GPS hardware, call a geolocation service, or
/// return a cached fix. `None` means the position is unavailable or
/// permission was denied; ranking degrades to input order in that case.
pub trait PositionProvider {
    fn current_position(&self) -> Option<GeoPoint>;
}
