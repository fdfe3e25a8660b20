//! Dated Bible-study notes.

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::store::StorageKey;
use crate::{WidgetError, new_id, position_by_id, required};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedNote {
    pub id: String,
    /// Local date-time, `YYYY-MM-DDTHH:MM`.
    pub at: String,
    pub text: String,
}

pub const NOTES: StorageKey<Vec<DatedNote>> = StorageKey::new("notes", Vec::new);

/// `YYYY-MM-DDTHH:MM` for `now`, the default note date.
#[must_use]
pub fn local_stamp(now: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    now.format(&format).unwrap_or_default()
}

/// Parse a `YYYY-MM-DDTHH:MM` local date-time.
///
/// # Errors
///
/// Returns [`WidgetError::Invalid`] for anything else.
pub fn parse_stamp(raw: &str) -> Result<PrimitiveDateTime, WidgetError> {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    PrimitiveDateTime::parse(raw.trim(), &format)
        .map_err(|e| WidgetError::Invalid { field: "date", reason: format!("expected YYYY-MM-DDTHH:MM ({e})") })
}

/// Add a note dated `at`, or `now` when `at` is absent.
///
/// # Errors
///
/// Returns [`WidgetError::Empty`] for blank text and
/// [`WidgetError::Invalid`] for an unparseable date.
pub fn add<'a>(notes: &'a mut Vec<DatedNote>, text: &str, at: Option<&str>, now: OffsetDateTime) -> Result<&'a DatedNote, WidgetError> {
    let text = required(text, "note")?;
    let at = match at {
        Some(raw) => {
            parse_stamp(raw)?;
            raw.trim().to_owned()
        }
        None => local_stamp(now),
    };
    notes.insert(0, DatedNote { id: new_id(), at, text });
    Ok(&notes[0])
}

/// # Errors
///
/// Returns [`WidgetError::NotFound`] when no note matches `id`.
pub fn remove(notes: &mut Vec<DatedNote>, id: &str) -> Result<DatedNote, WidgetError> {
    let pos = position_by_id(notes, id, "note", |n| n.id.as_str())?;
    Ok(notes.remove(pos))
}
