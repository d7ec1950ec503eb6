//! Error types for the geo crate.
//!
//! The distance and formatting operations are infallible; these errors only
//! come from parsing user or wire input into the engine's types.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur while parsing geo input.
#[derive(Debug, Error)]
pub enum GeoError {
    /// A coordinate could not be parsed or is out of range
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Business payload did not have the expected shape
    #[error("Invalid business data: {0}")]
    InvalidBusinessData(String),

    /// City name is not one of the served cities
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Error code for integration with asteria-core error handling.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Invalid coordinate values
    InvalidCoordinate = 10001,
    /// Malformed business payload
    InvalidBusinessData = 10002,
    /// Unknown city
    UnknownCity = 10003,
    /// JSON parsing error
    JsonParsing = 10004,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::InvalidCoordinate(_) => GeoErrorCode::InvalidCoordinate,
            GeoError::InvalidBusinessData(_) => GeoErrorCode::InvalidBusinessData,
            GeoError::UnknownCity(_) => GeoErrorCode::UnknownCity,
            GeoError::JsonError(_) => GeoErrorCode::JsonParsing,
        }
    }
}
