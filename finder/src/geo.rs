//! Coordinates, great-circle distance, and search radius choices.

use serde::{Deserialize, Serialize};

use crate::FinderError;

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;
/// Exact international mile.
pub const METERS_PER_MILE: f64 = 1609.344;
/// Radius selector choices, in miles.
pub const RADIUS_CHOICES: [u32; 4] = [5, 10, 25, 50];
pub const DEFAULT_RADIUS_MILES: u32 = 10;

/// A WGS84 latitude/longitude pair in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl Coord {
    /// Build a coordinate, rejecting non-finite or out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::InvalidCoordinate`] when latitude is outside
    /// `[-90, 90]` or longitude outside `[-180, 180]`.
    pub fn new(lat: f64, lon: f64) -> Result<Self, FinderError> {
        let valid = lat.is_finite() && lon.is_finite() && (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon);
        if !valid {
            return Err(FinderError::InvalidCoordinate { lat, lon });
        }
        Ok(Self { lat, lon })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lon)
    }
}

/// Great-circle distance between two points, in miles.
#[must_use]
pub fn haversine_miles(a: Coord, b: Coord) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_MILES * h.sqrt().min(1.0).asin()
}

#[must_use]
pub fn miles_to_meters(miles: f64) -> f64 {
    miles * METERS_PER_MILE
}

/// A search radius restricted to the selector choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct RadiusMiles(u32);

impl RadiusMiles {
    /// # Errors
    ///
    /// Returns [`FinderError::InvalidRadius`] unless `miles` is one of
    /// [`RADIUS_CHOICES`].
    pub fn new(miles: u32) -> Result<Self, FinderError> {
        if RADIUS_CHOICES.contains(&miles) {
            Ok(Self(miles))
        } else {
            Err(FinderError::InvalidRadius(f64::from(miles)))
        }
    }

    #[must_use]
    pub fn miles(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn meters(self) -> f64 {
        miles_to_meters(f64::from(self.0))
    }
}

impl Default for RadiusMiles {
    fn default() -> Self {
        Self(DEFAULT_RADIUS_MILES)
    }
}

impl TryFrom<u32> for RadiusMiles {
    type Error = FinderError;

    fn try_from(miles: u32) -> Result<Self, Self::Error> {
        Self::new(miles)
    }
}

impl From<RadiusMiles> for u32 {
    fn from(radius: RadiusMiles) -> Self {
        radius.0
    }
}

impl std::fmt::Display for RadiusMiles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} mi", self.0)
    }
}

#[cfg(test)]
#[path = "geo_test.rs"]
mod tests;
