//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two points
//! on a sphere given their longitudes and latitudes.

use crate::Coordinate;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers, rounded to two decimal places.
///
/// This is the value the directory shows next to each business and the one
/// radius searches compare against. NaN in either coordinate yields NaN.
///
/// # Example
/// ```
/// use asteria_geo::{distance, Coordinate};
///
/// let a = Coordinate::new(22.2354, -97.8606);
/// let b = Coordinate::new(22.2486, -97.8642);
///
/// let km = distance(&a, &b);
/// assert_eq!(km, (km * 100.0).round() / 100.0);
/// assert_eq!(distance(&a, &b), distance(&b, &a));
/// ```
#[inline]
pub fn distance(a: &Coordinate, b: &Coordinate) -> f64 {
    round_centi(haversine_distance(a, b))
}

/// Calculates the great-circle distance between two coordinates in kilometers.
///
/// Unrounded; prefer [`distance`] for anything user-facing.
///
/// # Arguments
/// * `from` - Starting coordinate
/// * `to` - Ending coordinate
#[inline]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[inline]
fn round_centi(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}
