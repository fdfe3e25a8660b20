//! Locate: geocoding and nearby place search over public HTTP services.
//!
//! DESIGN
//! ======
//! [`Locator`] is the seam between the search service and the network.
//! [`HttpLocator`] talks to a Nominatim-compatible geocoder and an Overpass
//! interpreter through one shared `reqwest` client; tests substitute mock
//! locators. Requests are made once; a failure is reported, never retried.

pub mod config;
pub mod nominatim;
pub mod overpass;
pub mod types;

use std::time::Duration;

use finder::{Coord, Place};

use config::LocateConfig;
pub use types::{GeocodeHit, LocateError};

/// Geocoding and place search as consumed by the finder service.
#[async_trait::async_trait]
pub trait Locator: Send + Sync {
    /// Best match for a place name; `None` when nothing matched.
    async fn geocode(&self, query: &str) -> Result<Option<GeocodeHit>, LocateError>;

    /// Places of worship within `radius_meters` of `center`.
    async fn places_near(&self, center: Coord, radius_meters: f64) -> Result<Vec<Place>, LocateError>;
}

// =============================================================================
// HTTP LOCATOR
// =============================================================================

pub struct HttpLocator {
    geocoder: nominatim::NominatimClient,
    overpass: overpass::OverpassClient,
}

impl HttpLocator {
    /// Build both clients from config.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::HttpClientBuild`] if the HTTP client fails to
    /// build.
    pub fn from_config(config: &LocateConfig) -> Result<Self, LocateError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| LocateError::HttpClientBuild(e.to_string()))?;

        Ok(Self {
            geocoder: nominatim::NominatimClient::new(http.clone(), config.geocoder_url.clone()),
            overpass: overpass::OverpassClient::new(http, config.overpass_url.clone(), config.result_limit),
        })
    }
}

#[async_trait::async_trait]
impl Locator for HttpLocator {
    async fn geocode(&self, query: &str) -> Result<Option<GeocodeHit>, LocateError> {
        self.geocoder.geocode(query).await
    }

    async fn places_near(&self, center: Coord, radius_meters: f64) -> Result<Vec<Place>, LocateError> {
        self.overpass.places_near(center, radius_meters).await
    }
}
