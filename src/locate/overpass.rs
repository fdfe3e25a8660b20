//! Overpass API client for nearby places of worship.
//!
//! The query is posted as a form field `data=<QL>`. Pure parsing in
//! `parse_response` for testability.

use finder::{Coord, Element, Place, query};
use serde::Deserialize;

use super::types::LocateError;

// =============================================================================
// CLIENT
// =============================================================================

pub struct OverpassClient {
    http: reqwest::Client,
    url: String,
    limit: usize,
}

impl OverpassClient {
    #[must_use]
    pub fn new(http: reqwest::Client, url: String, limit: usize) -> Self {
        Self { http, url, limit }
    }

    /// Places of worship within `radius_meters` of `center`, in server order.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::Query`] for a non-positive radius before any
    /// request is sent, otherwise [`LocateError`] on transport failure, a
    /// non-2xx status, or an unreadable body.
    pub async fn places_near(&self, center: Coord, radius_meters: f64) -> Result<Vec<Place>, LocateError> {
        let ql = query::places_of_worship(center, radius_meters, self.limit)?;

        let response = self
            .http
            .post(&self.url)
            .form(&[("data", ql.as_str())])
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

        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    elements: Vec<Element>,
    /// Set when the server aborted the query (timeout, out of memory).
    #[serde(default)]
    remark: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

/// Shape every element into a [`Place`]. Elements without usable
/// coordinates are kept; ranking drops them later.
pub(crate) fn parse_response(json: &str) -> Result<Vec<Place>, LocateError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LocateError::Parse(e.to_string()))?;

    if api.elements.is_empty() {
        if let Some(remark) = api.remark.filter(|r| r.contains("error")) {
            return Err(LocateError::Parse(remark));
        }
    }

    Ok(api.elements.into_iter().map(Place::from_element).collect())
}

#[cfg(test)]
#[path = "overpass_test.rs"]
mod tests;
