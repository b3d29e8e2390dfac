//! WASM bindings for the route crate.
//!
//! The CandyFinder front-end hands over the user's position and the
//! selected houses as JSON and renders the returned visiting order on
//! the map.

use candyfinder_geo::Coordinate;
use wasm_bindgen::prelude::*;

use crate::Destination;

/// Compute a visiting order over the selected houses.
///
/// # Arguments
/// * `start_lat` - User's latitude
/// * `start_lng` - User's longitude
/// * `houses_json` - JSON string of houses with id, latitude, longitude fields
///
/// # Returns
/// JSON string of `{"order": [...], "total_distance": ...}` with the
/// distance in statute miles
#[wasm_bindgen]
pub fn optimize_route(
    start_lat: f64,
    start_lng: f64,
    houses_json: &str,
) -> Result<String, JsValue> {
    let destinations: Vec<Destination> = serde_json::from_str(houses_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    let start = Coordinate::new(start_lat, start_lng);
    let route = crate::optimize_route(&start, &destinations)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&route)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}
