//! Display formatting for distances and coordinates.

/// Formats a distance in kilometers for display.
///
/// Below one kilometer the value is shown in whole meters. From one
/// kilometer up the value is printed as given, so callers should pass the
/// already-rounded output of [`crate::distance`].
///
/// # Example
/// ```
/// use asteria_geo::format_distance;
///
/// assert_eq!(format_distance(0.5), "500m");
/// assert_eq!(format_distance(2.3), "2.3km");
/// ```
pub fn format_distance(distance: f64) -> String {
    if distance < 1.0 {
        format!("{}m", (distance * 1000.0).round() as i64)
    } else {
        format!("{}km", distance)
    }
}

/// Formats a coordinate pair with six decimals, e.g. `"22.235400, -97.860600"`.
pub fn format_coordinates(lat: f64, lng: f64) -> String {
    format!("{:.6}, {:.6}", lat, lng)
}
