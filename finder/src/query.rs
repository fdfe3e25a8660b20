//! Overpass QL query construction for places of worship.

use crate::FinderError;
use crate::geo::Coord;

/// Server-side evaluation budget sent with every query.
pub const QUERY_TIMEOUT_SECS: u32 = 25;
pub const DEFAULT_RESULT_LIMIT: usize = 200;

const WORSHIP_FILTER: &str = r#"["amenity"="place_of_worship"]"#;

/// Build the query for nodes, ways, and relations tagged as places of
/// worship within `radius_meters` of `center`, asking for way/relation
/// centers and tags, capped at `limit` elements.
///
/// # Errors
///
/// Returns [`FinderError::InvalidRadius`] when the radius is not a
/// positive finite number.
pub fn places_of_worship(center: Coord, radius_meters: f64, limit: usize) -> Result<String, FinderError> {
    if !radius_meters.is_finite() || radius_meters <= 0.0 {
        return Err(FinderError::InvalidRadius(radius_meters));
    }
    let around = format!("(around:{radius_meters:.0},{:.6},{:.6})", center.lat, center.lon);
    let limit = limit.max(1);
    Ok(format!(
        "[out:json][timeout:{QUERY_TIMEOUT_SECS}];(node{WORSHIP_FILTER}{around};way{WORSHIP_FILTER}{around};relation{WORSHIP_FILTER}{around};);out center tags {limit};"
    ))
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
