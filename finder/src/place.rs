//! Overpass elements shaped into displayable places.
//!
//! Elements are decoded leniently: a node with a garbled coordinate still
//! becomes a [`Place`], just one with `coord: None`, so one bad element
//! never sinks the rest of a response.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::geo::Coord;

pub const UNNAMED: &str = "Unnamed";

/// Raw element from an Overpass JSON `elements` array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Element {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub lat: Option<Value>,
    #[serde(default)]
    pub lon: Option<Value>,
    #[serde(default)]
    pub center: Option<Value>,
    #[serde(default)]
    pub tags: BTreeMap<String, Value>,
}

/// Postal address assembled from `addr:*` tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub housenumber: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
}

impl Address {
    #[must_use]
    pub fn from_tags(tags: &BTreeMap<String, Value>) -> Self {
        Self {
            housenumber: tag(tags, "addr:housenumber"),
            street: tag(tags, "addr:street"),
            city: tag(tags, "addr:city"),
            state: tag(tags, "addr:state"),
            postcode: tag(tags, "addr:postcode"),
        }
    }

    /// One-line address. Missing parts are omitted along with their
    /// separators: `"12 Main St, Knoxville, TN 37902"`, `"Knoxville, TN"`.
    #[must_use]
    pub fn line(&self) -> String {
        let street = join_present(&[self.housenumber.as_deref(), self.street.as_deref()], " ");
        let region = join_present(&[self.state.as_deref(), self.postcode.as_deref()], " ");
        join_present(&[Some(street.as_str()), self.city.as_deref(), Some(region.as_str())], ", ")
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line().is_empty()
    }
}

/// A place of worship ready for ranking and display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// `"<type>/<id>"`, e.g. `"way/123"`.
    pub id: String,
    /// OSM element type: `node`, `way`, or `relation`.
    pub kind: String,
    pub name: String,
    pub coord: Option<Coord>,
    pub denomination: Option<String>,
    pub religion: Option<String>,
    pub address: Address,
    pub website: Option<String>,
    /// Every string or numeric tag, trimmed, blanks dropped.
    pub tags: BTreeMap<String, String>,
}

impl Place {
    #[must_use]
    pub fn from_element(element: Element) -> Self {
        let coord = direct_coord(&element).or_else(|| center_coord(&element));
        let tags = &element.tags;
        let kind = if element.kind.is_empty() { "node".to_owned() } else { element.kind.clone() };
        Self {
            id: format!("{kind}/{}", element.id),
            kind,
            name: tag(tags, "name").unwrap_or_else(|| UNNAMED.to_owned()),
            coord,
            denomination: tag(tags, "denomination"),
            religion: tag(tags, "religion"),
            address: Address::from_tags(tags),
            website: tag(tags, "website").or_else(|| tag(tags, "contact:website")),
            tags: tags.keys().filter_map(|key| Some((key.clone(), tag(tags, key)?))).collect(),
        }
    }

    /// Denomination if tagged, else religion, else empty.
    #[must_use]
    pub fn label(&self) -> String {
        self.denomination
            .as_deref()
            .or(self.religion.as_deref())
            .map(humanize_tag)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn directions_url(&self) -> Option<String> {
        self.coord.map(directions_url)
    }
}

/// Maps search URL that opens turn-by-turn directions to `coord`.
#[must_use]
pub fn directions_url(coord: Coord) -> String {
    format!("https://www.google.com/maps/search/?api=1&query={},{}", coord.lat, coord.lon)
}

/// `"southern_baptist"` -> `"Southern Baptist"`.
#[must_use]
pub fn humanize_tag(raw: &str) -> String {
    raw.split(['_', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn tag(tags: &BTreeMap<String, Value>, key: &str) -> Option<String> {
    let value = match tags.get(key)? {
        Value::String(s) => s.trim().to_owned(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!value.is_empty()).then_some(value)
}

fn number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn direct_coord(element: &Element) -> Option<Coord> {
    let lat = number(element.lat.as_ref())?;
    let lon = number(element.lon.as_ref())?;
    Coord::new(lat, lon).ok()
}

fn center_coord(element: &Element) -> Option<Coord> {
    let center = element.center.as_ref()?;
    let lat = number(center.get("lat"))?;
    let lon = number(center.get("lon"))?;
    Coord::new(lat, lon).ok()
}

fn join_present(parts: &[Option<&str>], sep: &str) -> String {
    parts
        .iter()
        .filter_map(|p| p.map(str::trim))
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
#[path = "place_test.rs"]
mod tests;
