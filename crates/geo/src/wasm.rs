//! WASM bindings for the geo crate.
//!
//! These bindings let the directory frontend call the engine directly
//! instead of re-implementing the distance helpers in JavaScript.

use crate::{
    batch::businesses_within_radius_json, estimate_time as estimate, format_distance as format_km,
    is_within_tampico_area, Coordinate, TravelMode,
};
use wasm_bindgen::prelude::*;

/// Distance in kilometers between two points, rounded to two decimals.
#[wasm_bindgen]
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let from = Coordinate::new(lat1, lng1);
    let to = Coordinate::new(lat2, lng2);
    crate::distance(&from, &to)
}

/// `"500m"` / `"2.3km"` display string.
#[wasm_bindgen(js_name = formatDistance)]
pub fn format_distance(distance: f64) -> String {
    format_km(distance)
}

/// Travel time estimate; unknown modes are treated as driving.
#[wasm_bindgen(js_name = estimateTime)]
pub fn estimate_time(distance: f64, mode: &str) -> String {
    estimate(distance, TravelMode::from(mode))
}

#[wasm_bindgen(js_name = isWithinTampicoArea)]
pub fn within_tampico_area(lat: f64, lng: f64) -> bool {
    is_within_tampico_area(lat, lng)
}

/// Filter businesses within a radius.
///
/// # Arguments
/// * `user_lat` - User's latitude
/// * `user_lng` - User's longitude
/// * `businesses_json` - JSON array of businesses
/// * `radius_km` - Maximum distance in kilometers
///
/// # Returns
/// JSON array of matching businesses with a `distance` field, closest first
#[wasm_bindgen(js_name = businessesWithinRadius)]
pub fn businesses_within_radius(
    user_lat: f64,
    user_lng: f64,
    businesses_json: &str,
    radius_km: f64,
) -> Result<String, JsValue> {
    let origin = Coordinate::new(user_lat, user_lng);
    businesses_within_radius_json(&origin, businesses_json, radius_km)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
