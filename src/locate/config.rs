//! Locator configuration parsed from environment variables.

use super::types::LocateError;

pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 25;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocateTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocateConfig {
    pub geocoder_url: String,
    pub overpass_url: String,
    pub user_agent: String,
    pub result_limit: usize,
    pub timeouts: LocateTimeouts,
}

impl Default for LocateConfig {
    fn default() -> Self {
        Self {
            geocoder_url: DEFAULT_GEOCODER_URL.to_owned(),
            overpass_url: DEFAULT_OVERPASS_URL.to_owned(),
            user_agent: default_user_agent(),
            result_limit: finder::query::DEFAULT_RESULT_LIMIT,
            timeouts: LocateTimeouts {
                request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            },
        }
    }
}

impl LocateConfig {
    /// Build typed locator config from environment variables.
    ///
    /// Optional:
    /// - `BIBLEBELT_GEOCODER_URL`: Nominatim-compatible search endpoint
    /// - `BIBLEBELT_OVERPASS_URL`: Overpass interpreter endpoint
    /// - `BIBLEBELT_USER_AGENT`: sent on every request
    /// - `BIBLEBELT_RESULT_LIMIT`: default 200
    /// - `BIBLEBELT_REQUEST_TIMEOUT_SECS`: default 25
    /// - `BIBLEBELT_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::ConfigParse`] when a URL is set but blank.
    pub fn from_env() -> Result<Self, LocateError> {
        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    /// Same as [`LocateConfig::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::ConfigParse`] when a URL is set but blank.
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, LocateError> {
        let defaults = Self::default();
        let geocoder_url = url_var(lookup, "BIBLEBELT_GEOCODER_URL", &defaults.geocoder_url)?;
        let overpass_url = url_var(lookup, "BIBLEBELT_OVERPASS_URL", &defaults.overpass_url)?;
        let user_agent = lookup("BIBLEBELT_USER_AGENT")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.user_agent);
        let result_limit = parse_u64(lookup, "BIBLEBELT_RESULT_LIMIT")
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(defaults.result_limit)
            .max(1);
        let timeouts = LocateTimeouts {
            request_secs: parse_u64(lookup, "BIBLEBELT_REQUEST_TIMEOUT_SECS").unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(lookup, "BIBLEBELT_CONNECT_TIMEOUT_SECS").unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { geocoder_url, overpass_url, user_agent, result_limit, timeouts })
    }
}

#[must_use]
pub fn default_user_agent() -> String {
    format!("biblebelt/{} (church-finder)", env!("CARGO_PKG_VERSION"))
}

/// Numeric variable, or `None` when unset or unparseable.
pub(crate) fn parse_u64(lookup: &dyn Fn(&str) -> Option<String>, key: &str) -> Option<u64> {
    lookup(key).and_then(|v| v.trim().parse::<u64>().ok())
}

fn url_var(lookup: &dyn Fn(&str) -> Option<String>, key: &str, default: &str) -> Result<String, LocateError> {
    match lookup(key) {
        Some(raw) if raw.trim().is_empty() => Err(LocateError::ConfigParse(format!("{key} is set but empty"))),
        Some(raw) => Ok(raw.trim().trim_end_matches('/').to_owned()),
        None => Ok(default.to_owned()),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
