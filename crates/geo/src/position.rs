//! Reference position acquisition with a fallback.
//!
//! Reading the device position is platform work done behind
//! [`PositionSource`]. Whatever the source reports, [`resolve_position`]
//! always yields a usable coordinate: on failure it falls back to
//! [`DEFAULT_COORDINATES`] and hands the failure back for display.

use crate::Coordinate;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Downtown Tampico, used when the position cannot be read.
pub const DEFAULT_COORDINATES: Coordinate = Coordinate::new(22.2354, -97.8606);

/// Why a position could not be read. Messages are shown to users as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionError {
    #[error("Geolocalización no soportada en este navegador")]
    Unsupported,
    #[error("Permiso de ubicación denegado")]
    PermissionDenied,
    #[error("Ubicación no disponible")]
    PositionUnavailable,
    #[error("Tiempo de espera agotado")]
    Timeout,
    #[error("Error obteniendo ubicación")]
    Other,
}

/// Request parameters passed to the position sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    pub timeout: Duration,
    /// Oldest cached fix the sensor may return
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::from_secs(5 * 60),
        }
    }
}

/// A position fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub coordinate: Coordinate,
    /// Radius of uncertainty in meters, when the sensor reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_m: Option<f64>,
}

impl From<Coordinate> for Position {
    fn from(coordinate: Coordinate) -> Self {
        Self { coordinate, accuracy_m: None }
    }
}

/// Supplies the user's current position.
pub trait PositionSource {
    fn current_position(&self, options: &PositionOptions) -> Result<Position, PositionError>;
}

/// A source that always answers the same way.
///
/// Used for positions given on the command line or in configuration, and
/// to stand in for a missing sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticPosition(Result<Position, PositionError>);

impl StaticPosition {
    pub fn at(coordinate: Coordinate) -> Self {
        Self(Ok(coordinate.into()))
    }

    pub fn failing(error: PositionError) -> Self {
        Self(Err(error))
    }
}

impl PositionSource for StaticPosition {
    fn current_position(&self, _options: &PositionOptions) -> Result<Position, PositionError> {
        self.0
    }
}

/// Position to search from, and the reason if it is the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedPosition {
    pub coordinate: Coordinate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<PositionError>,
}

impl ResolvedPosition {
    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Reads the position from `source`, falling back to [`DEFAULT_COORDINATES`].
///
/// An out-of-range fix is treated as [`PositionError::PositionUnavailable`].
pub fn resolve_position<S>(source: &S, options: &PositionOptions) -> ResolvedPosition
where
    S: PositionSource + ?Sized,
{
    let outcome = source.current_position(options).and_then(|position| {
        if position.coordinate.is_valid() {
            Ok(position)
        } else {
            Err(PositionError::PositionUnavailable)
        }
    });

    match outcome {
        Ok(position) => ResolvedPosition {
            coordinate: position.coordinate,
            accuracy_m: position.accuracy_m,
            fallback: None,
        },
        Err(error) => {
            tracing::warn!(%error, fallback = %DEFAULT_COORDINATES, "Using default position");
            ResolvedPosition {
                coordinate: DEFAULT_COORDINATES,
                accuracy_m: None,
                fallback: Some(error),
            }
        }
    }
}
