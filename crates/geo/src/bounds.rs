//! Rectangular area classification.
//!
//! The bounding boxes here are coarse axis-aligned rectangles. They are good
//! enough to tell whether a point is "in town" but are not geofences.

use crate::{Coordinate, GeoError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Axis-aligned latitude/longitude rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    pub const fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self { north, south, east, west }
    }

    /// Inclusive on all four edges.
    #[inline]
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.south && lat <= self.north && lng >= self.west && lng <= self.east
    }

    #[inline]
    pub fn contains_coordinate(&self, coord: &Coordinate) -> bool {
        self.contains(coord.latitude, coord.longitude)
    }

    /// Midpoint of the rectangle.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.north + self.south) / 2.0,
            (self.east + self.west) / 2.0,
        )
    }
}

/// Returns true when `(lat, lng)` lies inside `bounds`, edges included.
#[inline]
pub fn bounds_contains(lat: f64, lng: f64, bounds: &BoundingBox) -> bool {
    bounds.contains(lat, lng)
}

/// A named metropolitan area with its bounds and map centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetroArea {
    pub name: &'static str,
    pub bounds: BoundingBox,
    pub center: Coordinate,
}

/// Tampico metropolitan area (Tampico, Ciudad Madero and Altamira).
pub const TAMPICO_AREA: MetroArea = MetroArea {
    name: "Tampico",
    bounds: BoundingBox::new(22.35, 22.15, -97.75, -97.95),
    center: Coordinate::new(22.25, -97.85),
};

impl MetroArea {
    #[inline]
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        self.bounds.contains(lat, lng)
    }
}

/// Check if coordinates are within the Tampico metropolitan area.
#[inline]
pub fn is_within_tampico_area(lat: f64, lng: f64) -> bool {
    TAMPICO_AREA.contains(lat, lng)
}

/// Cities covered by the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Tampico,
    #[serde(rename = "Ciudad Madero", alias = "Madero")]
    CiudadMadero,
    Altamira,
}

impl City {
    pub const ALL: [City; 3] = [City::Tampico, City::CiudadMadero, City::Altamira];

    /// Name as stored in business addresses.
    pub const fn name(self) -> &'static str {
        match self {
            City::Tampico => "Tampico",
            City::CiudadMadero => "Ciudad Madero",
            City::Altamira => "Altamira",
        }
    }

    /// All three cities share one metropolitan area.
    pub const fn metro_area(self) -> &'static MetroArea {
        &TAMPICO_AREA
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "tampico" => Ok(City::Tampico),
            "ciudad madero" | "cd. madero" | "cd madero" | "madero" => Ok(City::CiudadMadero),
            "altamira" => Ok(City::Altamira),
            _ => Err(GeoError::UnknownCity(s.trim().to_string())),
        }
    }
}
