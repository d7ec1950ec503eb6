//! Proximity engine for Asteria Local.
//!
//! This crate provides:
//! - Haversine distance calculations rounded for display
//! - Radius search over businesses and other located records
//! - Distance, coordinate and travel-time formatting
//! - Metropolitan area bounds for Tampico, Ciudad Madero and Altamira
//! - Outbound map links and share text
//! - Map pin aggregation
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use asteria_geo::{distance, format_distance, within_radius, Coordinate};
//!
//! let centro = Coordinate::new(22.2354, -97.8606);
//! let zona_dorada = Coordinate::new(22.2486, -97.8642);
//!
//! let km = distance(&centro, &zona_dorada);
//! assert!((km - 1.49).abs() < 0.05);
//! assert_eq!(format_distance(0.5), "500m");
//!
//! let nearby = within_radius(&centro, &[zona_dorada], 2.0);
//! assert_eq!(nearby.len(), 1);
//! ```

mod haversine;
mod format;
mod error;
pub mod batch;
pub mod bounds;
pub mod business;
pub mod links;
pub mod pins;
pub mod position;
pub mod proximity;
pub mod travel;

#[cfg(feature = "wasm")]
mod wasm;

pub use haversine::{distance, haversine_distance, EARTH_RADIUS_KM};
pub use format::{format_coordinates, format_distance};
pub use bounds::{bounds_contains, is_within_tampico_area, BoundingBox, City, MetroArea, TAMPICO_AREA};
pub use business::Business;
pub use position::{resolve_position, PositionError, PositionSource, ResolvedPosition, DEFAULT_COORDINATES};
pub use proximity::{search_within_radius, within_radius, Located, ProximityResult, RadiusSearch};
pub use travel::{estimate_time, TravelMode};
pub use error::{GeoError, GeoErrorCode, Result};

use std::fmt;
use std::str::FromStr;

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    #[serde(alias = "lat")]
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    #[serde(alias = "lng")]
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// No range check is made; use [`Coordinate::is_valid`] on untrusted input.
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if the coordinate has valid values.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Returns true for `(0, 0)`, the value the directory backend stores
    /// when an address was saved without a location.
    #[inline]
    pub fn is_unset(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Parses `"lat,lng"`, with optional whitespace around either number.
impl FromStr for Coordinate {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| GeoError::InvalidCoordinate(format!("expected 'lat,lng', got '{}'", s)))?;

        let latitude: f64 = lat
            .trim()
            .parse()
            .map_err(|_| GeoError::InvalidCoordinate(format!("Invalid latitude: {}", lat.trim())))?;
        let longitude: f64 = lng
            .trim()
            .parse()
            .map_err(|_| GeoError::InvalidCoordinate(format!("Invalid longitude: {}", lng.trim())))?;

        let coord = Coordinate::new(latitude, longitude);
        if !coord.is_valid() {
            return Err(GeoError::InvalidCoordinate(format!("{} is out of range", coord)));
        }
        Ok(coord)
    }
}
