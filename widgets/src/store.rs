//! Typed key-value storage.
//!
//! DESIGN
//! ======
//! Each widget owns one key and stores its whole value as a single JSON
//! document, rewritten on every change. A [`StorageKey`] pairs the key name
//! with the value type and its default, so a missing key yields the default
//! while a present-but-malformed value is an error naming the key. Writes
//! are last-write-wins; two processes editing the same key can clobber
//! each other.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("stored value for `{key}` is malformed: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize `{key}`: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage I/O failed for `{key}`: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown storage key: {0}")]
    UnknownKey(String),
}

impl StoreError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Malformed { .. } => "E_STORE_MALFORMED",
            Self::Serialize { .. } => "E_STORE_SERIALIZE",
            Self::Io { .. } => "E_STORE_IO",
            Self::UnknownKey(_) => "E_STORE_UNKNOWN_KEY",
        }
    }
}

// =============================================================================
// KEYS
// =============================================================================

/// A storage key with a declared value type and default.
pub struct StorageKey<T> {
    name: &'static str,
    default: fn() -> T,
    _marker: PhantomData<fn() -> T>,
}

impl<T> StorageKey<T> {
    #[must_use]
    pub const fn new(name: &'static str, default: fn() -> T) -> Self {
        Self { name, default, _marker: PhantomData }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn default_value(&self) -> T {
        (self.default)()
    }
}

/// Every key the widgets write. Used to validate `reset`.
pub const KNOWN_KEYS: &[&str] = &[
    "theme",
    "starterKits",
    "local.city",
    "local.region",
    "contacts",
    "threads",
    "devotional",
    "goals",
    "ministry",
    "journal",
    "notes",
    "studyBookmarks",
    "prayerRequests",
    "recoverySignups",
    "recoveryPlan",
    "raised",
    "goal",
    "pay.method",
    "pay.handles",
];

// =============================================================================
// BACKENDS
// =============================================================================

/// Raw string storage, one JSON document per key.
pub trait KeyValueStore: Send + Sync {
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backend cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io { key: dir.display().to_string(), source })?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { key: key.to_owned(), source }),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        // Write-then-rename so a crash never leaves half a document behind.
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        let io = |source| StoreError::Io { key: key.to_owned(), source };
        fs::write(&tmp, value).map_err(io)?;
        fs::rename(&tmp, self.path(key)).map_err(io)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io { key: key.to_owned(), source }),
        }
    }
}

/// In-process store for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.lock().remove(key);
        Ok(())
    }
}

// =============================================================================
// TYPED ACCESS
// =============================================================================

/// Typed facade over a [`KeyValueStore`].
pub struct Storage<S> {
    backend: S,
}

impl<S: KeyValueStore> Storage<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load `key`, or its default when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Malformed`] when the stored JSON does not match
    /// the key's type, or an I/O error from the backend.
    pub fn load<T: DeserializeOwned>(&self, key: &StorageKey<T>) -> Result<T, StoreError> {
        match self.backend.read(key.name())? {
            None => Ok(key.default_value()),
            Some(raw) if raw.trim().is_empty() => Ok(key.default_value()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|source| StoreError::Malformed { key: key.name().to_owned(), source }),
        }
    }

    /// Replace the whole value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a serialization or backend error.
    pub fn save<T: Serialize>(&self, key: &StorageKey<T>, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)
            .map_err(|source| StoreError::Serialize { key: key.name().to_owned(), source })?;
        self.backend.write(key.name(), &raw)?;
        tracing::debug!(key = key.name(), bytes = raw.len(), "saved");
        Ok(())
    }

    /// Load, mutate, and save in one step. The closure's return value is
    /// passed through.
    ///
    /// # Errors
    ///
    /// Returns any load/save error, or the closure's own error.
    pub fn update<T, R, E>(&self, key: &StorageKey<T>, f: impl FnOnce(&mut T) -> Result<R, E>) -> Result<R, E>
    where
        T: Serialize + DeserializeOwned,
        E: From<StoreError>,
    {
        let mut value = self.load(key)?;
        let out = f(&mut value)?;
        self.save(key, &value)?;
        Ok(out)
    }

    /// Forget a key by name so the next load returns its default.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownKey`] for names not in [`KNOWN_KEYS`].
    pub fn reset(&self, name: &str) -> Result<(), StoreError> {
        if !KNOWN_KEYS.contains(&name) {
            return Err(StoreError::UnknownKey(name.to_owned()));
        }
        self.backend.remove(name)
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
