//! Route ranker (nearest-first ordering of field tasks).
//!
//! Given a worker's position and their open tasks, produces a visiting
//! order sorted by great-circle distance from that position, together with
//! the path polyline to draw. This is a greedy nearest-first ranking, not
//! an optimal tour.

use std::cmp::Ordering;

use tracing::debug;

use crate::geo::GeoPoint;
use crate::polyline::Polyline;
use crate::traits::{DistanceProvider, Task, TaskStatus};

/// One routable task together with its distance from the route origin.
///
/// `distance_km` is `None` when the route was computed without an origin.
#[derive(Debug, Clone)]
pub struct RankedTask<'a, T: Task> {
    pub task: &'a T,
    pub distance_km: Option<f64>,
}

/// A computed visiting order plus the path connecting it.
///
/// Derived on demand from the current origin and task set; never persisted.
#[derive(Debug, Clone)]
pub struct Route<'a, T: Task> {
    /// Routable tasks, nearest first (input order when no origin was given).
    pub ordered_tasks: Vec<RankedTask<'a, T>>,
    /// Origin (when present) followed by each task location in visiting order.
    pub polyline: Polyline,
}

impl<'a, T: Task> Route<'a, T> {
    /// Task ids in visiting order.
    pub fn ordered_ids(&self) -> Vec<&T::Id> {
        self.ordered_tasks.iter().map(|ranked| ranked.task.id()).collect()
    }
}

/// Rank open tasks by distance from `origin`, nearest first.
///
/// Completed tasks and tasks without coordinates are dropped before ranking
/// and never appear in the output. Without an origin the remaining tasks
/// keep their input order and no distances are computed. Ties keep input
/// order (stable sort).
///
/// Pure: no I/O and no mutation of `tasks`; safe to call on every update.
pub fn compute_route<'a, T, D>(
    origin: Option<GeoPoint>,
    tasks: &'a [T],
    distance: &D,
) -> Route<'a, T>
where
    T: Task,
    D: DistanceProvider,
{
    let mut ordered_tasks: Vec<RankedTask<'a, T>> = tasks
        .iter()
        .filter(|task| task.status() != TaskStatus::Completed)
        .filter_map(|task| {
            let location = task.location()?;
            let distance_km = origin.map(|from| distance.distance_km(from, location));
            Some(RankedTask { task, distance_km })
        })
        .collect();

    if origin.is_some() {
        ordered_tasks.sort_by(|a, b| match (a.distance_km, b.distance_km) {
            (Some(left), Some(right)) => left.total_cmp(&right),
            _ => Ordering::Equal,
        });
    }

    let mut points = Vec::with_capacity(ordered_tasks.len() + 1);
    if let Some(from) = origin {
        points.push(from);
    }
    points.extend(ordered_tasks.iter().filter_map(|ranked| ranked.task.location()));

    debug!(
        total = tasks.len(),
        routable = ordered_tasks.len(),
        with_origin = origin.is_some(),
        "computed route"
    );

    Route {
        ordered_tasks,
        polyline: Polyline::new(points),
    }
}
