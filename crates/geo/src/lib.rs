//! Geospatial utilities for CandyFinder.
//!
//! This crate provides:
//! - Validated coordinate handling
//! - Haversine great-circle distances (statute miles first, kilometers too)
//! - Batch distance queries and radius filtering with optional parallelism
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use candyfinder_geo::{distance_miles, Coordinate};
//!
//! let city_hall = Coordinate::new(40.7128, -74.0060); // New York
//! let east_village = Coordinate::new(40.7265, -73.9815);
//!
//! let miles = distance_miles(&city_hall, &east_village).unwrap();
//! assert!(miles > 1.0 && miles < 2.0);
//! ```

mod haversine;
pub mod batch;
mod error;

#[cfg(feature = "wasm")]
mod wasm;

pub use haversine::{distance_km, distance_miles, haversine_miles, EARTH_RADIUS_KM, EARTH_RADIUS_MILES};
pub use batch::{distances_from, distances_sorted, within_range, DistanceEntry, LocatedItem};
pub use error::{GeoError, GeoErrorCode, Result};

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Creates a coordinate, failing if either value is out of range.
    ///
    /// # Errors
    /// Returns [`GeoError::InvalidCoordinate`] if the latitude is outside
    /// [-90, 90] or the longitude is outside [-180, 180].
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        let coord = Self { latitude, longitude };
        coord.validate()?;
        Ok(coord)
    }

    /// Returns true if the coordinate has valid values.
    ///
    /// NaN latitudes and longitudes compare false against every bound, so
    /// they are rejected here as well.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Checks the latitude/longitude range invariant.
    ///
    /// # Errors
    /// Returns [`GeoError::InvalidCoordinate`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if !(self.latitude >= -90.0 && self.latitude <= 90.0) {
            return Err(GeoError::InvalidCoordinate(format!(
                "latitude {} out of range [-90, 90]",
                self.latitude
            )));
        }
        if !(self.longitude >= -180.0 && self.longitude <= 180.0) {
            return Err(GeoError::InvalidCoordinate(format!(
                "longitude {} out of range [-180, 180]",
                self.longitude
            )));
        }
        Ok(())
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_creation() {
        let coord = Coordinate::new(40.7128, -74.0060);
        assert_eq!(coord.latitude, 40.7128);
        assert_eq!(coord.longitude, -74.0060);
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(Coordinate::new(0.0, 0.0).is_valid());
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, 181.0).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::NAN).is_valid());
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert!(Coordinate::try_new(40.7128, -74.0060).is_ok());

        let err = Coordinate::try_new(-90.5, 0.0).unwrap_err();
        assert!(matches!(err, GeoError::InvalidCoordinate(_)));
        assert!(err.to_string().contains("latitude"));

        let err = Coordinate::try_new(0.0, 200.0).unwrap_err();
        assert!(err.to_string().contains("longitude"));
    }

    #[test]
    fn test_validate_names_offending_field() {
        let err = Coordinate::new(100.0, 0.0).validate().unwrap_err();
        assert_eq!(err.code(), GeoErrorCode::InvalidCoordinate);
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_coordinate_from_tuple() {
        let coord: Coordinate = (40.7128, -74.0060).into();
        assert_eq!(coord.latitude, 40.7128);
    }
}
