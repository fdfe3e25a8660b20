//! Application configuration parsed from environment variables.
//!
//! `main` loads a `.env` file first when one exists, so every variable
//! here can also live there. CLI flags override the result.

use std::path::PathBuf;

use finder::RadiusMiles;

use crate::error::ErrorCode;
use crate::locate::LocateError;
use crate::locate::config::{LocateConfig, parse_u64};

pub const DATA_DIR_NAME: &str = "biblebelt";
pub const FALLBACK_DATA_DIR: &str = ".biblebelt";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("BIBLEBELT_DEFAULT_RADIUS_MILES: {0}")]
    InvalidRadius(String),
    #[error(transparent)]
    Locate(#[from] LocateError),
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRadius(_) => "E_CONFIG_RADIUS",
            Self::Locate(e) => e.error_code(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding one JSON file per storage key.
    pub data_dir: PathBuf,
    pub default_radius: RadiusMiles,
    pub locate: LocateConfig,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `BIBLEBELT_DATA_DIR`: platform data dir + `/biblebelt` when absent
    /// - `BIBLEBELT_DEFAULT_RADIUS_MILES`: one of 5, 10, 25, 50 (default 10)
    /// - everything [`LocateConfig::from_env`] reads
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a radius outside the choices or a blank
    /// service URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a radius outside the choices or a blank
    /// service URL.
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = lookup("BIBLEBELT_DATA_DIR")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .map_or_else(default_data_dir, PathBuf::from);

        let default_radius = match lookup("BIBLEBELT_DEFAULT_RADIUS_MILES") {
            None => RadiusMiles::default(),
            Some(raw) => {
                let miles = parse_u64(lookup, "BIBLEBELT_DEFAULT_RADIUS_MILES")
                    .and_then(|n| u32::try_from(n).ok())
                    .ok_or_else(|| ConfigError::InvalidRadius(format!("`{}` is not a whole number of miles", raw.trim())))?;
                RadiusMiles::new(miles).map_err(|e| ConfigError::InvalidRadius(e.to_string()))?
            }
        };

        let locate = LocateConfig::from_lookup(lookup)?;
        Ok(Self { data_dir, default_radius, locate })
    }
}

/// `<platform data dir>/biblebelt`, or `.biblebelt` in the working
/// directory when the platform has none.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(FALLBACK_DATA_DIR), |dir| dir.join(DATA_DIR_NAME))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
