//! View models for the result list and map.
//!
//! DESIGN
//! ======
//! Rendering is split from state: [`build`] turns an origin and raw places
//! into rows and markers, and the CLI decides how to print them. A place
//! without a coordinate is dropped here, before it can reach either the
//! list or the map.

use serde::{Deserialize, Serialize};

use crate::FinderError;
use crate::geo::{Coord, RadiusMiles, haversine_miles};
use crate::place::Place;

/// Default map view: East Tennessee.
pub const DEFAULT_CENTER: Coord = Coord { lat: 36.0, lon: -84.0 };
pub const DEFAULT_ZOOM: u8 = 8;
/// Zoom used when a single result is selected.
pub const FOCUS_ZOOM: u8 = 15;

// =============================================================================
// RANKING
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct RankedPlace {
    pub place: Place,
    pub coord: Coord,
    pub distance_miles: f64,
}

/// Drop places without coordinates and sort the rest by distance from
/// `origin`. The sort is stable, so equal distances keep server order.
#[must_use]
pub fn rank(origin: Coord, places: Vec<Place>) -> Vec<RankedPlace> {
    let mut ranked: Vec<RankedPlace> = places
        .into_iter()
        .filter_map(|place| {
            let coord = place.coord?;
            Some(RankedPlace { distance_miles: haversine_miles(origin, coord), coord, place })
        })
        .collect();
    ranked.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
    ranked
}

#[must_use]
pub fn format_miles(miles: f64) -> String {
    format!("{miles:.1}")
}

// =============================================================================
// VIEW MODELS
// =============================================================================

/// One entry in the result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub place_id: String,
    pub name: String,
    pub label: String,
    pub address: String,
    /// Rounded to one decimal.
    pub distance_miles: String,
    pub directions_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub place_id: String,
    pub coord: Coord,
    pub popup: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: Coord,
    pub zoom: u8,
    pub open_popup: Option<String>,
}

impl Default for MapView {
    fn default() -> Self {
        Self { center: DEFAULT_CENTER, zoom: DEFAULT_ZOOM, open_popup: None }
    }
}

impl MapView {
    /// Frame a search circle around `origin`.
    #[must_use]
    pub fn around(origin: Coord, radius: RadiusMiles) -> Self {
        let zoom = match radius.miles() {
            0..=5 => 12,
            6..=10 => 11,
            11..=25 => 10,
            _ => 9,
        };
        Self { center: origin, zoom, open_popup: None }
    }

    /// Re-centre on a marker and open its popup.
    pub fn focus(&mut self, marker: &MapMarker) {
        self.center = marker.coord;
        self.zoom = FOCUS_ZOOM;
        self.open_popup = Some(marker.place_id.clone());
    }
}

/// Everything a front end needs to draw a completed search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsView {
    pub origin: Coord,
    pub origin_label: String,
    pub radius_miles: u32,
    pub rows: Vec<ResultRow>,
    pub markers: Vec<MapMarker>,
    pub map: MapView,
}

impl ResultsView {
    /// Select the `index`th list entry.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::NoSuchResult`] when `index` is past the end.
    pub fn select(&mut self, index: usize) -> Result<&MapMarker, FinderError> {
        let marker = self.markers.get(index).ok_or(FinderError::NoSuchResult(index))?;
        self.map.focus(marker);
        Ok(marker)
    }
}

/// Rank `places` around `origin` and build list rows and map markers.
#[must_use]
pub fn build(origin: Coord, origin_label: &str, radius: RadiusMiles, places: Vec<Place>) -> ResultsView {
    let ranked = rank(origin, places);
    let mut rows = Vec::with_capacity(ranked.len());
    let mut markers = Vec::with_capacity(ranked.len());

    for item in &ranked {
        let label = item.place.label();
        let address = item.place.address.line();
        let popup = [item.place.name.as_str(), label.as_str(), address.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        rows.push(ResultRow {
            place_id: item.place.id.clone(),
            name: item.place.name.clone(),
            label,
            address,
            distance_miles: format_miles(item.distance_miles),
            directions_url: crate::place::directions_url(item.coord),
        });
        markers.push(MapMarker { place_id: item.place.id.clone(), coord: item.coord, popup });
    }

    ResultsView {
        origin,
        origin_label: origin_label.to_owned(),
        radius_miles: radius.miles(),
        rows,
        markers,
        map: MapView::around(origin, radius),
    }
}

/// Plain-text rendering of the result list.
#[must_use]
pub fn render_text(view: &ResultsView) -> String {
    let mut out = format!(
        "{} result(s) within {} mi of {}\n",
        view.rows.len(),
        view.radius_miles,
        view.origin_label
    );
    for (i, row) in view.rows.iter().enumerate() {
        out.push_str(&format!("\n{:>3}. {} ({} mi)\n", i + 1, row.name, row.distance_miles));
        if !row.label.is_empty() {
            out.push_str(&format!("     {}\n", row.label));
        }
        if !row.address.is_empty() {
            out.push_str(&format!("     {}\n", row.address));
        }
        out.push_str(&format!("     Directions: {}\n", row.directions_url));
    }
    out
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
