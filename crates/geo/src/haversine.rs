//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two
//! points on a sphere given their longitudes and latitudes. CandyFinder
//! reports distances to users in statute miles, so miles are the primary
//! unit here.

use crate::{Coordinate, Result};

/// Earth's mean radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculates the great-circle distance between two coordinates in statute miles.
///
/// Both coordinates are range-checked before any math happens; an
/// out-of-range latitude or longitude never silently produces a number.
///
/// # Errors
/// Returns [`GeoError::InvalidCoordinate`](crate::GeoError::InvalidCoordinate)
/// if either coordinate violates the latitude/longitude range invariant.
///
/// # Example
/// ```
/// use candyfinder_geo::{distance_miles, Coordinate};
///
/// let salem = Coordinate::new(42.5195, -70.8967);
/// let sleepy_hollow = Coordinate::new(41.0862, -73.8587);
///
/// let distance = distance_miles(&salem, &sleepy_hollow).unwrap();
/// assert!((distance - 180.0).abs() < 10.0);
/// ```
pub fn distance_miles(from: &Coordinate, to: &Coordinate) -> Result<f64> {
    from.validate()?;
    to.validate()?;
    Ok(haversine_with_radius(from, to, EARTH_RADIUS_MILES))
}

/// Calculates the great-circle distance between two coordinates in kilometers.
///
/// Same contract as [`distance_miles`], metric unit.
///
/// # Errors
/// Returns [`GeoError::InvalidCoordinate`](crate::GeoError::InvalidCoordinate)
/// if either coordinate violates the latitude/longitude range invariant.
pub fn distance_km(from: &Coordinate, to: &Coordinate) -> Result<f64> {
    from.validate()?;
    to.validate()?;
    Ok(haversine_with_radius(from, to, EARTH_RADIUS_KM))
}

/// Unchecked Haversine distance in statute miles.
///
/// Skips range validation; callers must pass coordinates that are already
/// known valid. Used by the batch and route-planning hot loops, which
/// validate their whole input up front.
#[inline]
pub fn haversine_miles(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_with_radius(from, to, EARTH_RADIUS_MILES)
}

/// Internal function that calculates distance with a custom radius.
#[inline]
fn haversine_with_radius(from: &Coordinate, to: &Coordinate, radius: f64) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push `a` past 1 for near-antipodal pairs; clamp so the
    // square root stays real.
    let c = 2.0 * a.sqrt().atan2((1.0 - a).max(0.0).sqrt());

    radius * c
}
