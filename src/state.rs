//! Shared application state for one CLI invocation.
//!
//! DESIGN
//! ======
//! `AppState` owns the resolved config and the file-backed storage. The
//! clock lives here too so every command stamps records the same way:
//! epoch milliseconds for ids and sorting, local wall time for display.

use time::OffsetDateTime;
use widgets::{JsonFileStore, Storage};

use crate::config::AppConfig;
use crate::error::CliError;

pub struct AppState {
    pub config: AppConfig,
    pub storage: Storage<JsonFileStore>,
}

impl AppState {
    /// Open storage under `config.data_dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Store`] if the data directory cannot be created.
    pub fn open(config: AppConfig) -> Result<Self, CliError> {
        let store = JsonFileStore::open(&config.data_dir)?;
        tracing::debug!(data_dir = %config.data_dir.display(), "storage opened");
        Ok(Self { config, storage: Storage::new(store) })
    }
}

/// Current local time, or UTC when the local offset cannot be determined.
#[must_use]
pub fn now_local() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> i64 {
    i64::try_from(OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000).unwrap_or(i64::MAX)
}

/// `YYYY-MM-DD HH:MM` local time for display stamps.
#[must_use]
pub fn display_now() -> String {
    widgets::journal::display_time(now_local())
}
