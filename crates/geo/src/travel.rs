//! Rough travel-time estimates from average city speeds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the user intends to get there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Transit,
}

impl TravelMode {
    /// Average speed in km/h used for estimates.
    pub const fn speed_kmh(self) -> f64 {
        match self {
            TravelMode::Driving => 40.0,
            TravelMode::Walking => 5.0,
            TravelMode::Transit => 25.0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Transit => "transit",
        }
    }
}

/// Unknown names fall back to [`TravelMode::Driving`].
impl From<&str> for TravelMode {
    fn from(mode: &str) -> Self {
        match mode.trim().to_ascii_lowercase().as_str() {
            "walking" => TravelMode::Walking,
            "transit" => TravelMode::Transit,
            _ => TravelMode::Driving,
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minutes needed to cover `distance` km at the mode's average speed,
/// rounded to the nearest whole minute. NaN stays NaN.
pub fn travel_minutes(distance: f64, mode: TravelMode) -> f64 {
    // Adding zero turns -0 into 0
    (distance / mode.speed_kmh() * 60.0).round() + 0.0
}

/// Estimates travel time as `"N min"`, `"Hh Mmin"` or `"Hh"`.
///
/// Non-finite input is not an error: NaN renders as `"NaN min"`.
///
/// # Example
/// ```
/// use asteria_geo::{estimate_time, TravelMode};
///
/// assert_eq!(estimate_time(5.0, TravelMode::Driving), "8 min");
/// assert_eq!(estimate_time(40.0, TravelMode::Driving), "1h");
/// assert_eq!(estimate_time(12.0, "walking".into()), "2h 24min");
/// ```
pub fn estimate_time(distance: f64, mode: TravelMode) -> String {
    let minutes = travel_minutes(distance, mode);

    if !minutes.is_finite() || minutes < 60.0 {
        return format!("{} min", minutes);
    }

    let hours = (minutes / 60.0).floor();
    let rest = minutes % 60.0;
    if rest > 0.0 {
        format!("{}h {}min", hours, rest)
    } else {
        format!("{}h", hours)
    }
}
