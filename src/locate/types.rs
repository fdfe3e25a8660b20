//! Locator types shared by the geocoder and place-search clients.

use finder::Coord;
use serde::Serialize;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by the HTTP locator clients.
#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (DNS, connect, timeout).
    #[error("request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("service responded with status {status}")]
    Status { status: u16, body: String },

    /// The response body was not the JSON shape we expect.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The place query could not be built from the given search area.
    #[error("invalid place query: {0}")]
    Query(#[from] finder::FinderError),
}

impl crate::error::ErrorCode for LocateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::Request(_) => "E_LOCATE_REQUEST",
            Self::Status { .. } => "E_LOCATE_STATUS",
            Self::Parse(_) => "E_LOCATE_PARSE",
            Self::Query(_) => "E_LOCATE_QUERY",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Status { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// GEOCODE
// =============================================================================

/// Best match for a place name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodeHit {
    pub coord: Coord,
    /// Human-readable name the geocoder resolved to.
    pub label: String,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
