//! Ministry widgets: record models, their operations, and the typed
//! storage they persist through.
//!
//! DESIGN
//! ======
//! Every widget is a small data model plus free functions that mutate it.
//! Functions take the current time as an argument rather than reading a
//! clock, so the CLI decides what "now" is and tests stay deterministic.
//! Persistence is the caller's job: load through a [`store::StorageKey`],
//! mutate, save.

pub mod bookmarks;
pub mod chat;
pub mod checklist;
pub mod contacts;
pub mod devotional;
pub mod giving;
pub mod journal;
pub mod kits;
pub mod local;
pub mod notes;
pub mod prayer;
pub mod recovery;
pub mod schedule;
pub mod store;
pub mod tabs;
pub mod theme;

pub use store::{JsonFileStore, KeyValueStore, MemoryStore, Storage, StorageKey, StoreError};

/// Validation and lookup errors shared by all widgets.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("no {kind} matching `{id}`")]
    NotFound { kind: &'static str, id: String },
    #[error("`{id}` matches more than one {kind}; use more characters")]
    Ambiguous { kind: &'static str, id: String },
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl WidgetError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Empty { .. } => "E_EMPTY_FIELD",
            Self::NotFound { .. } => "E_NOT_FOUND",
            Self::Ambiguous { .. } => "E_AMBIGUOUS_ID",
            Self::Invalid { .. } => "E_INVALID_FIELD",
            Self::Store(e) => e.error_code(),
        }
    }
}

/// Fresh record id.
#[must_use]
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Trimmed copy of `value`, or an error naming `field` when blank.
pub(crate) fn required(value: &str, field: &'static str) -> Result<String, WidgetError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(WidgetError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

/// Position of the record whose id equals `id`, or uniquely starts with it.
pub(crate) fn position_by_id<T>(
    items: &[T],
    id: &str,
    kind: &'static str,
    id_of: impl Fn(&T) -> &str,
) -> Result<usize, WidgetError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(WidgetError::Empty { field: "id" });
    }
    if let Some(pos) = items.iter().position(|item| id_of(item) == id) {
        return Ok(pos);
    }
    let mut matches = items.iter().enumerate().filter(|(_, item)| id_of(item).starts_with(id));
    match (matches.next(), matches.next()) {
        (Some((pos, _)), None) => Ok(pos),
        (Some(_), Some(_)) => Err(WidgetError::Ambiguous { kind, id: id.to_owned() }),
        (None, _) => Err(WidgetError::NotFound { kind, id: id.to_owned() }),
    }
}

/// Percent-encode a URL query component. Unreserved characters pass
/// through; everything else is `%XX` per UTF-8 byte.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(char::from(byte)),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
