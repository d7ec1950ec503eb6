//! Configuration schema definitions

use crate::error::{Error, Result};
use asteria_geo::{Coordinate, TravelMode};
use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigSchema {
    #[serde(default)]
    pub search: SearchConfig,

    /// Fixed search origin; when absent the device position is used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Coordinate>,

    #[serde(default)]
    pub travel: TravelConfig,

    #[serde(default)]
    pub telemetry: TelemetrySection,
}

impl ConfigSchema {
    /// Check values that parse fine but make no sense
    pub fn validate(&self) -> Result<()> {
        let radius = self.search.radius_km;
        if !radius.is_finite() || radius < 0.0 {
            return Err(Error::config_validation(format!(
                "[search] radius_km must be zero or more kilometers, got {}",
                radius
            ))
            .with_suggestion("Use a radius such as 5 or 10"));
        }

        if self.search.max_results == Some(0) {
            return Err(Error::config_validation("[search] max_results must be at least 1"));
        }

        if let Some(origin) = &self.origin {
            if !origin.is_valid() {
                return Err(Error::config_validation(format!(
                    "[origin] {} is not a valid coordinate",
                    origin
                ))
                .with_suggestion("Latitude must be within -90..90 and longitude within -180..180"));
            }
        }

        Ok(())
    }
}

/// Radius search defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Search radius in kilometers
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,

    /// Cap on the number of results shown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            radius_km: default_radius_km(),
            max_results: None,
        }
    }
}

fn default_radius_km() -> f64 {
    10.0
}

/// Travel estimate defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TravelConfig {
    #[serde(default)]
    pub mode: TravelMode,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TelemetrySection {
    /// Default filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TelemetrySection {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let schema = ConfigSchema::default();
        assert_eq!(schema.search.radius_km, 10.0);
        assert!(schema.origin.is_none());
        assert_eq!(schema.travel.mode, TravelMode::Driving);
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let schema: ConfigSchema = toml::from_str(
            r#"
            [search]
            max_results = 5

            [origin]
            lat = 22.2486
            lng = -97.8642
            "#,
        )
        .unwrap();

        assert_eq!(schema.search.radius_km, 10.0);
        assert_eq!(schema.search.max_results, Some(5));
        assert_eq!(schema.origin, Some(Coordinate::new(22.2486, -97.8642)));
        assert_eq!(schema.telemetry.log_level, "warn");
    }

    #[test]
    fn test_travel_mode_from_toml() {
        let schema: ConfigSchema = toml::from_str("[travel]\nmode = \"walking\"\n").unwrap();
        assert_eq!(schema.travel.mode, TravelMode::Walking);
    }

    #[test]
    fn test_rejects_negative_radius() {
        let mut schema = ConfigSchema::default();
        schema.search.radius_km = -1.0;
        let err = schema.validate().unwrap_err();
        assert_eq!(err.code, crate::ErrorCode::ConfigValidationError);
        assert!(err.suggestion.is_some());

        schema.search.radius_km = f64::NAN;
        assert!(schema.validate().is_err());
    }

    #[test]
    fn test_zero_radius_allowed() {
        let mut schema = ConfigSchema::default();
        schema.search.radius_km = 0.0;
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_rejects_invalid_origin() {
        let schema = ConfigSchema {
            origin: Some(Coordinate::new(22.2, -197.0)),
            ..Default::default()
        };
        assert_eq!(
            schema.validate().unwrap_err().code,
            crate::ErrorCode::ConfigValidationError
        );
    }
}
