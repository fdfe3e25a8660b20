//! Journal entries.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::macros::format_description;

use crate::store::StorageKey;
use crate::{WidgetError, new_id, position_by_id, required};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub text: String,
    /// Human-readable time the entry was saved.
    pub date: String,
}

pub const JOURNAL: StorageKey<Vec<JournalEntry>> = StorageKey::new("journal", Vec::new);

/// `2025-03-09 18:05`.
#[must_use]
pub fn display_time(at: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]");
    at.format(&format).unwrap_or_else(|_| at.unix_timestamp().to_string())
}

/// Save an entry at the top of the journal. Interior whitespace and line
/// breaks are kept.
///
/// # Errors
///
/// Returns [`WidgetError::Empty`] when `text` is blank.
pub fn add<'a>(entries: &'a mut Vec<JournalEntry>, text: &str, at: OffsetDateTime) -> Result<&'a JournalEntry, WidgetError> {
    let text = required(text, "entry")?;
    entries.insert(0, JournalEntry { id: new_id(), text, date: display_time(at) });
    Ok(&entries[0])
}

/// # Errors
///
/// Returns [`WidgetError::NotFound`] when no entry matches `id`.
pub fn remove(entries: &mut Vec<JournalEntry>, id: &str) -> Result<JournalEntry, WidgetError> {
    let pos = position_by_id(entries, id, "journal entry", |e| e.id.as_str())?;
    Ok(entries.remove(pos))
}
