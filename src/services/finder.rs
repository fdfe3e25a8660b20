//! Church finder service: drives a [`SearchSession`] through a [`Locator`].
//!
//! DESIGN
//! ======
//! The session lives behind a `tokio::sync::Mutex` that is taken only to
//! begin a search and to apply its outcome, never across a network await.
//! Overlapping searches are therefore allowed; the generation ticket from
//! `begin` decides which response wins. A superseded search returns `None`
//! and leaves the state alone.

use std::sync::Arc;

use finder::{Coord, FinderError, MapMarker, Outcome, RadiusMiles, SearchSession, SearchState, Stage, Ticket, Trigger};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::locate::Locator;

pub const GEOCODE_FAILED: &str = "Geocoding failed. Please try again.";
pub const PLACES_FAILED: &str = "No results. Please try again.";
/// Origin label for coordinate searches.
pub const MY_LOCATION: &str = "your location";

pub struct ChurchFinder {
    locator: Arc<dyn Locator>,
    session: Mutex<SearchSession>,
}

impl ChurchFinder {
    #[must_use]
    pub fn new(locator: Arc<dyn Locator>, radius: RadiusMiles) -> Self {
        Self { locator, session: Mutex::new(SearchSession::new(radius)) }
    }

    /// Copy of the current state.
    pub async fn snapshot(&self) -> SearchState {
        self.session.lock().await.state().clone()
    }

    pub async fn radius(&self) -> RadiusMiles {
        self.session.lock().await.radius()
    }

    /// Search around a known position.
    pub async fn search_near(&self, coord: Coord) -> Option<SearchState> {
        let ticket = self.session.lock().await.begin(Trigger::UseMyLocation { coord });
        info!(%coord, radius = %ticket.radius(), "searching near position");
        self.search_places(ticket, coord, MY_LOCATION.to_owned()).await
    }

    /// Geocode `query`, then search around the match.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::EmptyQuery`] for blank input; no request is
    /// made.
    pub async fn search_city(&self, query: &str) -> Result<Option<SearchState>, FinderError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(FinderError::EmptyQuery);
        }

        let ticket = self.session.lock().await.begin(Trigger::City { query: query.to_owned() });
        info!(%query, radius = %ticket.radius(), "geocoding");

        let hit = match self.locator.geocode(query).await {
            Ok(Some(hit)) => hit,
            Ok(None) => {
                info!(%query, "no geocoder match");
                return Ok(self.finish(ticket, Outcome::NotFound { query: query.to_owned() }).await);
            }
            Err(e) => {
                warn!(error = %e, %query, "geocode failed");
                let outcome = Outcome::Failed { stage: Stage::Geocode, message: GEOCODE_FAILED.to_owned() };
                return Ok(self.finish(ticket, outcome).await);
            }
        };

        if !self.session.lock().await.is_current(ticket) {
            debug!(%query, generation = ticket.generation(), "search superseded after geocode");
            return Ok(None);
        }
        Ok(self.search_places(ticket, hit.coord, hit.label).await)
    }

    /// Change the radius. Re-runs the last search from its origin when
    /// there is one; otherwise only records the radius.
    pub async fn set_radius(&self, radius: RadiusMiles) -> Option<SearchState> {
        let (ticket, origin) = {
            let mut session = self.session.lock().await;
            let last = session.last_origin().map(|(coord, label)| (coord, label.to_owned()));
            match last {
                Some(origin) => (session.begin(Trigger::RadiusChange { radius }), origin),
                None => {
                    session.set_radius(radius);
                    return Some(session.state().clone());
                }
            }
        };
        info!(%radius, origin = %origin.1, "re-searching with new radius");
        self.search_places(ticket, origin.0, origin.1).await
    }

    /// Select result `index` and return its marker.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::NoSuchResult`] when there is no such result.
    pub async fn focus(&self, index: usize) -> Result<MapMarker, FinderError> {
        self.session.lock().await.focus(index).cloned()
    }

    /// Back to idle; any in-flight search is dropped when it returns.
    pub async fn clear(&self) {
        self.session.lock().await.clear();
    }

    async fn search_places(&self, ticket: Ticket, origin: Coord, origin_label: String) -> Option<SearchState> {
        let outcome = match self.locator.places_near(origin, ticket.radius().meters()).await {
            Ok(places) => {
                info!(count = places.len(), origin = %origin_label, "places found");
                Outcome::Found { origin, origin_label, places }
            }
            Err(e) => {
                warn!(error = %e, %origin, "place search failed");
                Outcome::Failed { stage: Stage::Places, message: PLACES_FAILED.to_owned() }
            }
        };
        self.finish(ticket, outcome).await
    }

    async fn finish(&self, ticket: Ticket, outcome: Outcome) -> Option<SearchState> {
        let mut session = self.session.lock().await;
        if session.complete(ticket, outcome) {
            Some(session.state().clone())
        } else {
            debug!(generation = ticket.generation(), current = session.generation(), "dropping stale search response");
            None
        }
    }
}

#[cfg(test)]
#[path = "finder_test.rs"]
mod tests;
