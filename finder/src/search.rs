//! Search state machine with generation tokens.
//!
//! DESIGN
//! ======
//! `idle -> searching -> (results | empty | not found | error)`. Every new
//! trigger re-enters `searching` and bumps the generation. A response is
//! applied only if it carries the current generation, so a slow request
//! that finishes after a newer one can never overwrite newer state.
//! `clear` also bumps the generation, which drops anything in flight.

use serde::{Deserialize, Serialize};

use crate::FinderError;
use crate::geo::{Coord, RadiusMiles};
use crate::place::Place;
use crate::view::{self, MapMarker, MapView, ResultsView};

/// What started a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Trigger {
    /// Search around a device/user-supplied position.
    UseMyLocation { coord: Coord },
    /// Geocode a place name, then search around it.
    City { query: String },
    /// Repeat the last search with a new radius.
    RadiusChange { radius: RadiusMiles },
}

/// Which external call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Geocode,
    Places,
}

/// Proof of which search a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    radius: RadiusMiles,
}

impl Ticket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn radius(self) -> RadiusMiles {
        self.radius
    }
}

/// Result of a finished search, before it is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Found { origin: Coord, origin_label: String, places: Vec<Place> },
    NotFound { query: String },
    Failed { stage: Stage, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchState {
    Idle,
    Searching { generation: u64, trigger: Trigger },
    Results { view: ResultsView },
    /// The search ran and nothing mappable was nearby.
    Empty { origin_label: String, radius_miles: u32 },
    /// The geocoder had no match for the query.
    NotFound { query: String },
    Error { stage: Stage, message: String },
}

impl SearchState {
    /// Short status line for the UI.
    #[must_use]
    pub fn status_line(&self) -> String {
        match self {
            Self::Idle => "Enter a city or use your location to find nearby churches.".to_owned(),
            Self::Searching { .. } => "Searching…".to_owned(),
            Self::Results { view } => {
                format!("{} result(s) within {} mi of {}", view.rows.len(), view.radius_miles, view.origin_label)
            }
            Self::Empty { origin_label, radius_miles } => {
                format!("No places of worship found within {radius_miles} mi of {origin_label}.")
            }
            Self::NotFound { query } => format!("Location \"{query}\" not found."),
            Self::Error { message, .. } => message.clone(),
        }
    }
}

/// Search state owned by a single finder widget.
#[derive(Debug, Clone)]
pub struct SearchSession {
    generation: u64,
    state: SearchState,
    radius: RadiusMiles,
    last_origin: Option<(Coord, String)>,
    map: MapView,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(RadiusMiles::default())
    }
}

impl SearchSession {
    #[must_use]
    pub fn new(radius: RadiusMiles) -> Self {
        Self { generation: 0, state: SearchState::Idle, radius, last_origin: None, map: MapView::default() }
    }

    #[must_use]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    #[must_use]
    pub fn radius(&self) -> RadiusMiles {
        self.radius
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Origin and label of the last search that reached the place step.
    #[must_use]
    pub fn last_origin(&self) -> Option<(Coord, &str)> {
        self.last_origin.as_ref().map(|(c, l)| (*c, l.as_str()))
    }

    /// Current map view: the results map when present, else the idle map.
    #[must_use]
    pub fn map(&self) -> &MapView {
        match &self.state {
            SearchState::Results { view } => &view.map,
            _ => &self.map,
        }
    }

    pub fn set_radius(&mut self, radius: RadiusMiles) {
        self.radius = radius;
    }

    /// Enter `searching` for `trigger`, superseding any in-flight search.
    pub fn begin(&mut self, trigger: Trigger) -> Ticket {
        if let Trigger::RadiusChange { radius } = trigger {
            self.radius = radius;
        }
        self.generation += 1;
        self.state = SearchState::Searching { generation: self.generation, trigger };
        Ticket { generation: self.generation, radius: self.radius }
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.generation == self.generation && matches!(self.state, SearchState::Searching { .. })
    }

    /// Apply `outcome` if `ticket` is still current. Returns `false` when the
    /// response was stale and discarded.
    pub fn complete(&mut self, ticket: Ticket, outcome: Outcome) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state = match outcome {
            Outcome::Found { origin, origin_label, places } => {
                let view = view::build(origin, &origin_label, ticket.radius, places);
                self.last_origin = Some((origin, origin_label.clone()));
                if view.rows.is_empty() {
                    SearchState::Empty { origin_label, radius_miles: ticket.radius.miles() }
                } else {
                    SearchState::Results { view }
                }
            }
            Outcome::NotFound { query } => SearchState::NotFound { query },
            Outcome::Failed { stage, message } => SearchState::Error { stage, message },
        };
        true
    }

    /// Select a result: re-centre the map and open its popup.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::NoSuchResult`] when there are no results or
    /// `index` is past the end.
    pub fn focus(&mut self, index: usize) -> Result<&MapMarker, FinderError> {
        match &mut self.state {
            SearchState::Results { view } => view.select(index),
            _ => Err(FinderError::NoSuchResult(index)),
        }
    }

    /// Back to `idle` with the default map. In-flight responses are dropped.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.state = SearchState::Idle;
        self.last_origin = None;
        self.map = MapView::default();
    }
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
