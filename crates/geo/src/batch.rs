//! Batch distance queries with optional parallelism.
//!
//! The CandyFinder sidebar and map both need distances from the user to
//! every listed house at once. These helpers compute that in one pass,
//! in parallel when the `parallel` feature (default) is enabled.

use crate::{haversine_miles, Coordinate, GeoError, Result};
use serde::{Deserialize, Serialize};

/// An identified point, shaped like a stored house row (id + plain
/// latitude/longitude columns).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocatedItem {
    /// Item ID
    pub id: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl LocatedItem {
    /// The item's position as a [`Coordinate`].
    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Distance from the query origin to a single item, in statute miles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceEntry {
    /// The item ID
    pub id: String,
    /// Distance from the origin in statute miles
    pub distance_miles: f64,
}

/// Calculates distances from an origin to every item.
///
/// Output order matches input order. The origin and every item coordinate
/// are range-checked; any violation fails the whole call rather than
/// producing a placeholder distance.
///
/// # Errors
/// Returns [`GeoError::InvalidCoordinate`] naming the offending item.
///
/// # Example
/// ```
/// use candyfinder_geo::{distances_from, Coordinate, LocatedItem};
///
/// let user = Coordinate::new(40.7128, -74.0060);
/// let houses = vec![
///     LocatedItem { id: "a".into(), latitude: 40.7138, longitude: -74.0060 },
///     LocatedItem { id: "b".into(), latitude: 40.7228, longitude: -74.0060 },
/// ];
///
/// let distances = distances_from(&user, &houses).unwrap();
/// assert_eq!(distances.len(), 2);
/// assert!(distances[0].distance_miles < distances[1].distance_miles);
/// ```
pub fn distances_from(origin: &Coordinate, items: &[LocatedItem]) -> Result<Vec<DistanceEntry>> {
    origin.validate()?;

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items
            .par_iter()
            .map(|item| single_entry(origin, item))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items
            .iter()
            .map(|item| single_entry(origin, item))
            .collect()
    }
}

/// Calculates distances and returns entries sorted nearest-first.
///
/// # Arguments
/// * `origin` - Query origin
/// * `items` - Slice of identified points
/// * `max_results` - Maximum number of entries to return (None for all)
///
/// # Errors
/// Returns [`GeoError::InvalidCoordinate`] if any input coordinate is
/// out of range.
pub fn distances_sorted(
    origin: &Coordinate,
    items: &[LocatedItem],
    max_results: Option<usize>,
) -> Result<Vec<DistanceEntry>> {
    let mut entries = distances_from(origin, items)?;

    entries.sort_by(|a, b| {
        a.distance_miles
            .partial_cmp(&b.distance_miles)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if let Some(max) = max_results {
        entries.truncate(max);
    }

    Ok(entries)
}

/// Keeps only the items within `range_miles` of the origin, nearest-first.
///
/// An item exactly at the range boundary is included.
///
/// # Errors
/// Returns [`GeoError::InvalidCoordinate`] if any input coordinate is
/// out of range.
pub fn within_range(
    origin: &Coordinate,
    items: &[LocatedItem],
    range_miles: f64,
) -> Result<Vec<DistanceEntry>> {
    let mut entries = distances_sorted(origin, items, None)?;
    entries.retain(|entry| entry.distance_miles <= range_miles);
    Ok(entries)
}

/// Calculates the distance entry for a single item.
#[inline]
fn single_entry(origin: &Coordinate, item: &LocatedItem) -> Result<DistanceEntry> {
    let coord = item.coordinate();
    coord.validate().map_err(|err| match err {
        GeoError::InvalidCoordinate(detail) => {
            GeoError::InvalidCoordinate(format!("item {}: {}", item.id, detail))
        }
        other => other,
    })?;

    Ok(DistanceEntry {
        id: item.id.clone(),
        distance_miles: haversine_miles(origin, &coord),
    })
}
