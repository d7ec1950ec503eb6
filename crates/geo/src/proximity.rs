//! Radius search over located records.
//!
//! Records expose their position through [`Located`]. A record may carry a
//! nested address coordinate, flat `lat`/`lng` fields, or both; the address
//! wins when it holds a real location.

use crate::{batch::resolve_distances, Coordinate};
use serde::Serialize;
use serde_json::Value;

/// Anything the engine can measure a distance to.
pub trait Located {
    /// Resolved position, or `None` when the record has no usable location.
    fn coordinate(&self) -> Option<Coordinate>;

    /// Human-readable name used in log output.
    fn label(&self) -> Option<&str> {
        None
    }
}

impl Located for Coordinate {
    fn coordinate(&self) -> Option<Coordinate> {
        Some(*self)
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn coordinate(&self) -> Option<Coordinate> {
        (**self).coordinate()
    }

    fn label(&self) -> Option<&str> {
        (**self).label()
    }
}

/// Raw JSON records as returned by the directory backend.
///
/// Reads `address.coordinates.{lat,lng}` first and top-level `lat`/`lng`
/// second.
impl Located for Value {
    fn coordinate(&self) -> Option<Coordinate> {
        let nested = self
            .get("address")
            .and_then(|a| a.get("coordinates"))
            .and_then(lat_lng);
        resolve_coordinate(nested, lat_lng(self))
    }

    fn label(&self) -> Option<&str> {
        self.get("name")
            .or_else(|| self.get("id"))
            .or_else(|| self.get("_id"))
            .and_then(Value::as_str)
    }
}

fn lat_lng(value: &Value) -> Option<Coordinate> {
    let lat = value.get("lat")?.as_f64()?;
    let lng = value.get("lng")?.as_f64()?;
    Some(Coordinate::new(lat, lng))
}

/// Picks the address coordinate unless it is missing or the `(0, 0)`
/// placeholder, otherwise the flat one.
///
/// The fallback is all-or-nothing: an address with a zero latitude but a
/// real longitude is used as-is, never mixed with the flat `lat`.
pub(crate) fn resolve_coordinate(
    nested: Option<Coordinate>,
    flat: Option<Coordinate>,
) -> Option<Coordinate> {
    nested.filter(|c| !c.is_unset()).or(flat)
}

/// A record annotated with its distance from the search origin.
///
/// Serializes as the record's own fields plus `distance`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProximityResult<T> {
    #[serde(flatten)]
    pub entity: T,
    /// Kilometers, rounded to two decimals
    pub distance: f64,
}

/// Outcome of a radius search.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusSearch<T> {
    /// Matches, closest first
    pub results: Vec<ProximityResult<T>>,
    /// Records skipped because no coordinate could be resolved
    pub excluded: usize,
}

impl<T> RadiusSearch<T> {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Keeps at most `max` of the closest results.
    pub fn truncate(&mut self, max: usize) {
        self.results.truncate(max);
    }
}

/// Returns copies of the entities within `radius_km` of `origin`, closest first.
///
/// Ties keep their input order. Entities with no resolvable coordinate are
/// left out; use [`search_within_radius`] to learn how many.
///
/// # Example
/// ```
/// use asteria_geo::{within_radius, Coordinate};
/// use serde_json::json;
///
/// let businesses = vec![
///     json!({"name": "Café Madero", "address": {"coordinates": {"lat": 22.2486, "lng": -97.8642}}}),
///     json!({"name": "Mariscos La Playa", "lat": 22.2298, "lng": -97.8734}),
///     json!({"name": "Sin ubicación"}),
/// ];
///
/// let origin = Coordinate::new(22.2354, -97.8606);
/// let nearby = within_radius(&origin, &businesses, 5.0);
///
/// assert_eq!(nearby.len(), 2);
/// assert_eq!(nearby[0].entity["name"], "Mariscos La Playa");
/// ```
pub fn within_radius<T>(origin: &Coordinate, entities: &[T], radius_km: f64) -> Vec<ProximityResult<T>>
where
    T: Located + Clone + Sync,
{
    search_within_radius(origin, entities, radius_km).results
}

/// Radius search that also reports how many entities had no coordinate.
pub fn search_within_radius<T>(origin: &Coordinate, entities: &[T], radius_km: f64) -> RadiusSearch<T>
where
    T: Located + Clone + Sync,
{
    let distances = resolve_distances(origin, entities);

    let mut excluded = 0;
    let mut results = Vec::new();

    for (entity, distance) in entities.iter().zip(distances) {
        match distance {
            Some(distance) if distance <= radius_km => results.push(ProximityResult {
                entity: entity.clone(),
                distance,
            }),
            Some(_) => {}
            None => {
                excluded += 1;
                tracing::debug!(
                    entity = entity.label().unwrap_or("<unnamed>"),
                    "Skipping entity without coordinates"
                );
            }
        }
    }

    // Stable, so equal distances keep input order
    results.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    if excluded > 0 {
        tracing::warn!(
            excluded,
            total = entities.len(),
            "Entities without coordinates left out of radius search"
        );
    }

    tracing::debug!(
        origin = %origin,
        radius_km,
        matched = results.len(),
        "Radius search complete"
    );

    RadiusSearch { results, excluded }
}
