//! Church-finder core: distance math, Overpass query building, place
//! shaping, and the search state machine used by the `biblebelt` CLI.
//!
//! Nothing in this crate touches the network. The HTTP clients live in the
//! binary and hand raw Overpass elements to [`place::Place::from_element`],
//! which keeps everything here testable without a live endpoint.

pub mod geo;
pub mod place;
pub mod query;
pub mod search;
pub mod view;

pub use geo::{Coord, RadiusMiles, haversine_miles, miles_to_meters};
pub use place::{Address, Element, Place};
pub use search::{Outcome, SearchSession, SearchState, Stage, Ticket, Trigger};
pub use view::{MapMarker, MapView, RankedPlace, ResultRow, ResultsView};

/// Validation errors raised by finder inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FinderError {
    /// Radius is not one of the selectable choices, or is not positive.
    #[error("invalid search radius: {0}")]
    InvalidRadius(f64),
    /// Latitude/longitude out of range or not finite.
    #[error("invalid coordinate: {lat}, {lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },
    /// A place-name search was started with blank text.
    #[error("place name must not be empty")]
    EmptyQuery,
    /// A list entry was selected that has no matching marker.
    #[error("no result at position {0}")]
    NoSuchResult(usize),
}
