//! Typed view of a directory business as returned by the backend.
//!
//! Only the fields the engine reads are typed; everything else is kept in
//! [`Business::extra`] so records round-trip without loss.

use crate::{proximity::resolve_coordinate, City, Coordinate, Located, Result};
use serde::{Deserialize, Serialize};

/// `{"lat": .., "lng": ..}` as stored under `address.coordinates`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<LatLng> for Coordinate {
    fn from(value: LatLng) -> Self {
        Coordinate::new(value.lat, value.lng)
    }
}

impl From<Coordinate> for LatLng {
    fn from(value: Coordinate) -> Self {
        Self { lat: value.latitude, lng: value.longitude }
    }
}

/// Street address of a business.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub neighborhood: String,
    #[serde(default)]
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<LatLng>,
}

/// A directory listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Flat coordinates, used by records that carry no address location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(default)]
    pub rating_average: f64,
    #[serde(default)]
    pub total_reviews: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn default_true() -> bool {
    true
}

impl Business {
    /// City of the address, if it names one of the served cities.
    pub fn city(&self) -> Option<City> {
        self.address.as_ref()?.city.parse().ok()
    }

    pub fn neighborhood(&self) -> Option<&str> {
        self.address
            .as_ref()
            .map(|a| a.neighborhood.as_str())
            .filter(|n| !n.is_empty())
    }

    fn address_coordinate(&self) -> Option<Coordinate> {
        self.address.as_ref()?.coordinates.map(Coordinate::from)
    }

    fn flat_coordinate(&self) -> Option<Coordinate> {
        Some(Coordinate::new(self.lat?, self.lng?))
    }
}

impl Located for Business {
    fn coordinate(&self) -> Option<Coordinate> {
        resolve_coordinate(self.address_coordinate(), self.flat_coordinate())
    }

    fn label(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Parses a JSON array of businesses.
pub fn parse_businesses(json: &str) -> Result<Vec<Business>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn huasteco() -> serde_json::Value {
        json!({
            "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
            "name": "Restaurante El Huasteco",
            "category": "Restaurantes",
            "subcategory": "Comida Mexicana",
            "phone": "+52 833 123 4567",
            "address": {
                "street": "Av. Universidad #234",
                "neighborhood": "Centro",
                "city": "Tampico",
                "coordinates": {"lat": 22.2354, "lng": -97.8606}
            },
            "price_range": "$$$",
            "rating_average": 4.8,
            "total_reviews": 324,
            "is_active": true
        })
    }

    #[test]
    fn test_deserialize_backend_record() {
        let business: Business = serde_json::from_value(huasteco()).unwrap();
        assert_eq!(business.id.as_deref(), Some("65a1f0c2e4b0a1b2c3d4e5f6"));
        assert_eq!(business.city(), Some(City::Tampico));
        assert_eq!(business.neighborhood(), Some("Centro"));
        assert_eq!(business.coordinate(), Some(Coordinate::new(22.2354, -97.8606)));
        assert_eq!(business.extra.get("price_range"), Some(&json!("$$$")));
    }

    #[test]
    fn test_unknown_fields_round_trip() {
        let business: Business = serde_json::from_value(huasteco()).unwrap();
        let back = serde_json::to_value(&business).unwrap();
        assert_eq!(back["phone"], json!("+52 833 123 4567"));
        assert_eq!(back["address"]["coordinates"]["lng"], json!(-97.8606));
    }

    #[test]
    fn test_flat_coordinates_used_without_address() {
        let business: Business = serde_json::from_value(json!({
            "name": "Puesto de tacos",
            "lat": 22.2412,
            "lng": -97.8567
        }))
        .unwrap();
        assert_eq!(business.coordinate(), Some(Coordinate::new(22.2412, -97.8567)));
        assert!(business.is_active);
    }

    #[test]
    fn test_address_takes_precedence_over_flat() {
        let mut value = huasteco();
        value["lat"] = json!(25.0);
        value["lng"] = json!(-100.0);
        let business: Business = serde_json::from_value(value).unwrap();
        assert_eq!(business.coordinate(), Some(Coordinate::new(22.2354, -97.8606)));
    }

    #[test]
    fn test_missing_coordinates() {
        let business: Business = serde_json::from_value(json!({
            "name": "Sin ubicación",
            "address": {"street": "Calle 1", "neighborhood": "Centro", "city": "Altamira"}
        }))
        .unwrap();
        assert!(business.coordinate().is_none());
    }

    #[test]
    fn test_parse_businesses_requires_array() {
        assert!(parse_businesses("[]").unwrap().is_empty());
        assert!(parse_businesses("{\"name\": \"x\"}").is_err());
    }
}
