//! Nearest-neighbor route construction.
//!
//! A trick-or-treat run is a small traveling-salesman instance: a handful
//! of houses, a start point, and no road network data. The greedy
//! nearest-neighbor heuristic is a good fit at that scale — it is O(n²)
//! over great-circle distances and produces a reasonable order in
//! microseconds for the tens of stops a route realistically holds.

use candyfinder_geo::{haversine_miles, Coordinate, GeoError};
use tracing::{debug, trace};

use crate::{Destination, Result, RouteResult};

/// Computes a visiting order over `destinations` starting from `start`.
///
/// Repeatedly walks to the nearest unvisited destination, accumulating
/// the great-circle distance of each leg in statute miles. When two
/// candidates are exactly equidistant, the one appearing earlier in the
/// input wins; the scan uses a strict `<` comparison, so output order is
/// reproducible for identical input. Callers that pass duplicate ids get
/// them back as distinct waypoints — no deduplication happens here.
///
/// An empty destination list yields an empty order and zero distance.
///
/// # Errors
/// Returns [`RouteError::Geo`](crate::RouteError::Geo) if the start or
/// any destination coordinate is out of range. Validation happens before
/// any leg is computed, so a failed call never returns a partial route.
///
/// # Example
/// ```
/// use candyfinder_geo::Coordinate;
/// use candyfinder_route::{optimize_route, Destination};
///
/// let start = Coordinate::new(0.0, 0.0);
/// let stops = vec![
///     Destination::new("far".to_string(), 0.0, 5.0),
///     Destination::new("near".to_string(), 0.0, 1.0),
/// ];
///
/// let route = optimize_route(&start, &stops).unwrap();
/// assert_eq!(route.order, vec!["near".to_string(), "far".to_string()]);
/// ```
pub fn optimize_route<Id: Clone>(
    start: &Coordinate,
    destinations: &[Destination<Id>],
) -> Result<RouteResult<Id>> {
    start.validate()?;
    for (idx, dest) in destinations.iter().enumerate() {
        dest.coordinate.validate().map_err(|err| match err {
            GeoError::InvalidCoordinate(detail) => {
                GeoError::InvalidCoordinate(format!("destination {idx}: {detail}"))
            }
            other => other,
        })?;
    }

    let mut visited = vec![false; destinations.len()];
    let mut order = Vec::with_capacity(destinations.len());
    let mut total_distance = 0.0;
    let mut position = *start;

    for _ in 0..destinations.len() {
        let mut nearest: Option<usize> = None;
        let mut shortest = f64::INFINITY;

        for (idx, dest) in destinations.iter().enumerate() {
            if visited[idx] {
                continue;
            }

            let distance = haversine_miles(&position, &dest.coordinate);
            // Strict `<` keeps the earliest-seen candidate on exact ties.
            if distance < shortest {
                shortest = distance;
                nearest = Some(idx);
            }
        }

        // Valid coordinates always give a finite distance, so some
        // unvisited candidate beats the INFINITY sentinel.
        let Some(idx) = nearest else { break };

        visited[idx] = true;
        order.push(destinations[idx].id.clone());
        total_distance += shortest;
        position = destinations[idx].coordinate;
        trace!(stop = idx, leg_miles = shortest, "selected next stop");
    }

    debug!(
        stops = order.len(),
        total_miles = total_distance,
        "route constructed"
    );

    Ok(RouteResult {
        order,
        total_distance,
    })
}
