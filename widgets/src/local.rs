//! Local community location used to personalise the community tab and as
//! the default church-finder query.

use crate::store::StorageKey;

fn default_city() -> String {
    "LaFollette".to_owned()
}

fn default_region() -> String {
    "TN".to_owned()
}

pub const CITY: StorageKey<String> = StorageKey::new("local.city", default_city);
pub const REGION: StorageKey<String> = StorageKey::new("local.region", default_region);

/// `"City, Region"`, skipping whichever half is blank.
#[must_use]
pub fn place_query(city: &str, region: &str) -> String {
    [city.trim(), region.trim()].into_iter().filter(|s| !s.is_empty()).collect::<Vec<_>>().join(", ")
}
