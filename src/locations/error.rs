use crate::api::types::StationId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("OpenAQ API key is not configured (set OPENAQ_API_TOKEN)")]
    MissingApiKey,

    #[error("OpenAQ API key contains characters not allowed in an HTTP header")]
    InvalidApiKey,

    #[error("Empty location name")]
    EmptyQuery,

    #[error("Invalid coordinate format: '{location}' (expected 'lat,lon')")]
    InvalidCoordinates { location: String },

    #[error("No OpenAQ station found near coordinates '{location}'")]
    NoStationNearby { location: String },

    #[error("No OpenAQ station matches '{location}' (iso={country})")]
    NoStationMatch { location: String, country: String },

    #[error("Station {station} not found in OpenAQ")]
    StationNotFound { station: StationId },

    #[error("No PM2.5 sensor found for station {station}")]
    NoPm25Sensor { station: StationId },
}
