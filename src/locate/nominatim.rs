//! Nominatim geocoder client.
//!
//! Thin HTTP wrapper for `/search?format=json`. Pure parsing in
//! `parse_response` for testability.

use finder::Coord;
use serde::Deserialize;

use super::types::{GeocodeHit, LocateError};

// =============================================================================
// CLIENT
// =============================================================================

pub struct NominatimClient {
    http: reqwest::Client,
    url: String,
}

impl NominatimClient {
    #[must_use]
    pub fn new(http: reqwest::Client, url: String) -> Self {
        Self { http, url }
    }

    /// Best match for `query`, or `None` when the geocoder knows nothing.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError`] on transport failure, a non-2xx status, or
    /// a body that is not a Nominatim result array.
    pub async fn geocode(&self, query: &str) -> Result<Option<GeocodeHit>, LocateError> {
        let response = self
            .http
            .get(&self.url)
            .query(&[("format", "json"), ("q", query), ("limit", "1")])
            .send()
            .await
            .map_err(|e| LocateError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LocateError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(LocateError::Status { status: status.as_u16(), body: text });
        }

        parse_response(&text, query)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
struct ApiHit {
    lat: Number,
    lon: Number,
    #[serde(default)]
    display_name: Option<String>,
}

/// Nominatim sends coordinates as strings; some compatible servers send
/// numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum Number {
    Float(f64),
    Text(String),
}

impl Number {
    fn value(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// First hit of a Nominatim JSON array. An empty array is `Ok(None)`. The
/// label falls back to `query` when the hit has no display name.
pub(crate) fn parse_response(json: &str, query: &str) -> Result<Option<GeocodeHit>, LocateError> {
    let hits: Vec<ApiHit> = serde_json::from_str(json).map_err(|e| LocateError::Parse(e.to_string()))?;
    let Some(hit) = hits.into_iter().next() else {
        return Ok(None);
    };

    let (Some(lat), Some(lon)) = (hit.lat.value(), hit.lon.value()) else {
        return Err(LocateError::Parse("geocoder returned a non-numeric coordinate".into()));
    };
    let coord = Coord::new(lat, lon).map_err(|e| LocateError::Parse(e.to_string()))?;
    let label = hit
        .display_name
        .map(|n| n.trim().to_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| query.trim().to_owned());

    Ok(Some(GeocodeHit { coord, label }))
}

#[cfg(test)]
#[path = "nominatim_test.rs"]
mod tests;
