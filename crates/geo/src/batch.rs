//! Batch distance calculations with optional parallelism.
//!
//! The directory fetches every listing and filters on the client, so the
//! per-record distance pass is the hot loop. With the `parallel` feature it
//! runs on the rayon pool; output order always matches input order.

use crate::{distance, proximity::search_within_radius, Coordinate, GeoError, Located, ProximityResult, Result};
use serde_json::Value;

/// Distance from `origin` to each entity, `None` where no coordinate resolves.
pub fn resolve_distances<T>(origin: &Coordinate, entities: &[T]) -> Vec<Option<f64>>
where
    T: Located + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        entities
            .par_iter()
            .map(|entity| single_distance(origin, entity))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        entities
            .iter()
            .map(|entity| single_distance(origin, entity))
            .collect()
    }
}

#[inline]
fn single_distance<T: Located>(origin: &Coordinate, entity: &T) -> Option<f64> {
    entity.coordinate().map(|coord| distance(origin, &coord))
}

/// The `max_results` closest entities regardless of radius.
///
/// Entities without a coordinate are skipped.
pub fn nearest<T>(origin: &Coordinate, entities: &[T], max_results: usize) -> Vec<ProximityResult<T>>
where
    T: Located + Clone + Sync,
{
    let mut search = search_within_radius(origin, entities, f64::INFINITY);
    search.truncate(max_results);
    search.results
}

/// Copies the record and sets its `distance` field.
///
/// Non-object records are wrapped as `{"value": .., "distance": ..}`.
pub fn annotate(result: ProximityResult<Value>) -> Value {
    let ProximityResult { entity, distance } = result;
    match entity {
        Value::Object(mut map) => {
            map.insert("distance".to_string(), Value::from(distance));
            Value::Object(map)
        }
        other => serde_json::json!({ "value": other, "distance": distance }),
    }
}

/// JSON-in/JSON-out radius search over a backend business listing.
///
/// # Arguments
/// * `origin` - Reference point, usually the user's position
/// * `businesses_json` - JSON array of business objects
/// * `radius_km` - Maximum distance in kilometers
///
/// # Returns
/// JSON array of the matching businesses, each with a `distance` field,
/// closest first.
///
/// # Example
/// ```
/// use asteria_geo::{batch::businesses_within_radius_json, Coordinate};
///
/// let input = r#"[
///     {"name": "Café Madero", "address": {"coordinates": {"lat": 22.2486, "lng": -97.8642}}},
///     {"name": "Lejos", "lat": 25.6866, "lng": -100.3161}
/// ]"#;
///
/// let output = businesses_within_radius_json(&Coordinate::new(22.2354, -97.8606), input, 10.0).unwrap();
/// let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
/// assert_eq!(parsed.as_array().unwrap().len(), 1);
/// ```
pub fn businesses_within_radius_json(origin: &Coordinate, businesses_json: &str, radius_km: f64) -> Result<String> {
    let value: Value = serde_json::from_str(businesses_json)?;
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(GeoError::InvalidBusinessData(format!(
                "expected a JSON array of businesses, got {}",
                json_kind(&other)
            )))
        }
    };

    let annotated: Vec<Value> = search_within_radius(origin, &items, radius_km)
        .results
        .into_iter()
        .map(annotate)
        .collect();

    Ok(serde_json::to_string(&annotated)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
