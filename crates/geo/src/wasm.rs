//! WASM bindings for the geo crate.
//!
//! These bindings let the CandyFinder front-end call the distance and
//! radius helpers directly from JavaScript/TypeScript instead of keeping
//! a hand-written Haversine in the browser bundle.

use crate::{batch, distance_miles, Coordinate, LocatedItem};
use wasm_bindgen::prelude::*;

/// Calculate the distance between two coordinates in statute miles.
///
/// # Arguments
/// * `lat1` - Latitude of first point
/// * `lng1` - Longitude of first point
/// * `lat2` - Latitude of second point
/// * `lng2` - Longitude of second point
///
/// # Returns
/// Distance in statute miles, or an error for out-of-range input
#[wasm_bindgen]
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> Result<f64, JsValue> {
    let from = Coordinate::new(lat1, lng1);
    let to = Coordinate::new(lat2, lng2);
    distance_miles(&from, &to).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Calculate distances from the user's location to multiple houses.
///
/// # Arguments
/// * `user_lat` - User's latitude
/// * `user_lng` - User's longitude
/// * `houses_json` - JSON string of houses with id, latitude, longitude fields
///
/// # Returns
/// JSON string of `{id, distance_miles}` entries in input order
#[wasm_bindgen]
pub fn house_distances(user_lat: f64, user_lng: f64, houses_json: &str) -> Result<String, JsValue> {
    let items: Vec<LocatedItem> = serde_json::from_str(houses_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    let origin = Coordinate::new(user_lat, user_lng);
    let entries = batch::distances_from(&origin, &items)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&entries)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Filter houses to those within a radius of the user, nearest-first.
///
/// # Arguments
/// * `user_lat` - User's latitude
/// * `user_lng` - User's longitude
/// * `houses_json` - JSON string of houses with id, latitude, longitude fields
/// * `range_miles` - Maximum distance in statute miles
///
/// # Returns
/// JSON string of filtered and sorted `{id, distance_miles}` entries
#[wasm_bindgen]
pub fn houses_within_range(
    user_lat: f64,
    user_lng: f64,
    houses_json: &str,
    range_miles: f64,
) -> Result<String, JsValue> {
    let items: Vec<LocatedItem> = serde_json::from_str(houses_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    let origin = Coordinate::new(user_lat, user_lng);
    let entries = batch::within_range(&origin, &items, range_miles)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&entries)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}
