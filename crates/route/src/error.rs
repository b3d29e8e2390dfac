//! Error types for the route crate.

use candyfinder_geo::GeoError;
use thiserror::Error;

/// Result type alias for route operations.
pub type Result<T> = std::result::Result<T, RouteError>;

/// Errors that can occur during route planning.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Invalid start or destination coordinate
    #[error(transparent)]
    Geo(#[from] GeoError),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Error code for integration with the CandyFinder app's error reporting.
/// Range: 11xxx for route errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteErrorCode {
    /// Invalid coordinate values
    InvalidCoordinate = 11001,
    /// JSON parsing error
    JsonParsing = 11002,
}

impl RouteError {
    /// Returns the error code for this error.
    pub fn code(&self) -> RouteErrorCode {
        match self {
            RouteError::Geo(GeoError::InvalidCoordinate(_)) => RouteErrorCode::InvalidCoordinate,
            RouteError::Geo(GeoError::JsonError(_)) | RouteError::JsonError(_) => {
                RouteErrorCode::JsonParsing
            }
        }
    }
}
