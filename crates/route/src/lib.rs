//! Greedy nearest-neighbor route planning for CandyFinder.
//!
//! This crate provides:
//! - A validated `Destination` type (opaque id + coordinate)
//! - Nearest-neighbor visiting-order construction over great-circle
//!   distances in statute miles
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use candyfinder_geo::Coordinate;
//! use candyfinder_route::{optimize_route, Destination};
//!
//! let start = Coordinate::new(40.7128, -74.0060);
//! let houses = vec![
//!     Destination::new("elm-st".to_string(), 40.7500, -74.0060),
//!     Destination::new("maple-st".to_string(), 40.7150, -74.0060),
//! ];
//!
//! let route = optimize_route(&start, &houses).unwrap();
//! assert_eq!(route.order, vec!["maple-st".to_string(), "elm-st".to_string()]);
//! ```

mod optimizer;
mod error;

#[cfg(feature = "wasm")]
mod wasm;

pub use optimizer::optimize_route;
pub use error::{Result, RouteError, RouteErrorCode};

use candyfinder_geo::Coordinate;
use serde::{Deserialize, Serialize};

/// A candidate stop: a coordinate tagged with an opaque identifier.
///
/// The identifier is only cloned into the resulting visiting order; the
/// planner never inspects it. House ids in the app are UUID strings, so
/// `Id` defaults to [`String`], but any cloneable key works.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination<Id = String> {
    /// Opaque identifier reported back in the visiting order
    pub id: Id,
    /// Position of the stop
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

impl<Id> Destination<Id> {
    /// Creates a new destination.
    #[inline]
    pub fn new(id: Id, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            coordinate: Coordinate::new(latitude, longitude),
        }
    }

    /// Creates a destination, failing if the coordinate is out of range.
    ///
    /// # Errors
    /// Returns [`RouteError::Geo`] if the latitude is outside [-90, 90]
    /// or the longitude is outside [-180, 180].
    pub fn try_new(id: Id, latitude: f64, longitude: f64) -> Result<Self> {
        Ok(Self {
            id,
            coordinate: Coordinate::try_new(latitude, longitude)?,
        })
    }
}

/// The computed visiting order and cumulative travel distance.
///
/// `order` excludes the start point and lists destination ids in visiting
/// sequence; `total_distance` is the sum of consecutive great-circle legs
/// in statute miles, start point included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult<Id = String> {
    /// Destination ids in visiting order
    pub order: Vec<Id>,
    /// Cumulative travel distance in statute miles
    pub total_distance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_construction() {
        let dest = Destination::new("haunted-manor".to_string(), 40.7128, -74.0060);
        assert_eq!(dest.id, "haunted-manor");
        assert_eq!(dest.coordinate.latitude, 40.7128);
    }

    #[test]
    fn test_try_new_rejects_bad_coordinate() {
        let err = Destination::try_new("x".to_string(), 91.0, 0.0).unwrap_err();
        assert_eq!(err.code(), RouteErrorCode::InvalidCoordinate);
        assert!(Destination::try_new("x".to_string(), 41.0, 0.0).is_ok());
    }

    #[test]
    fn test_destination_deserializes_flat_house_row() {
        // The app's house rows carry id + plain latitude/longitude columns.
        let dest: Destination = serde_json::from_str(
            r#"{"id": "abc-123", "latitude": 40.7128, "longitude": -74.006}"#,
        )
        .unwrap();
        assert_eq!(dest.id, "abc-123");
        assert_eq!(dest.coordinate.longitude, -74.006);
    }

    #[test]
    fn test_integer_ids_are_supported() {
        let dest = Destination::new(7u32, 40.7128, -74.0060);
        assert_eq!(dest.id, 7);
    }
}
