//! Study bookmarks: a titled reading with a schedule and notes.

use serde::{Deserialize, Serialize};

use crate::store::StorageKey;
use crate::{WidgetError, new_id, position_by_id, required};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyBookmark {
    pub id: String,
    pub title: String,
    /// Free text, e.g. `"Daily 6:30 AM"` or `"Wednesdays @ 7pm"`.
    pub schedule: String,
    #[serde(default)]
    pub notes: String,
    /// Epoch milliseconds.
    pub created_at: i64,
    /// Epoch milliseconds.
    pub updated_at: i64,
}

/// Add/edit form. `None` fields are left unchanged on edit.
#[derive(Debug, Clone, Default)]
pub struct BookmarkForm {
    pub title: Option<String>,
    pub schedule: Option<String>,
    pub notes: Option<String>,
}

pub const STUDY_BOOKMARKS: StorageKey<Vec<StudyBookmark>> = StorageKey::new("studyBookmarks", Vec::new);

/// # Errors
///
/// Returns [`WidgetError::Empty`] when title or schedule is missing.
pub fn add<'a>(bookmarks: &'a mut Vec<StudyBookmark>, form: BookmarkForm, now_ms: i64) -> Result<&'a StudyBookmark, WidgetError> {
    let title = required(form.title.as_deref().unwrap_or_default(), "title")?;
    let schedule = required(form.schedule.as_deref().unwrap_or_default(), "schedule")?;
    let notes = form.notes.as_deref().unwrap_or_default().trim().to_owned();
    bookmarks.insert(0, StudyBookmark { id: new_id(), title, schedule, notes, created_at: now_ms, updated_at: now_ms });
    Ok(&bookmarks[0])
}

/// Apply the present form fields to a bookmark and bump `updated_at`.
///
/// # Errors
///
/// Returns [`WidgetError::NotFound`] for an unknown id and
/// [`WidgetError::Empty`] when title or schedule would become blank.
pub fn edit<'a>(bookmarks: &'a mut [StudyBookmark], id: &str, form: BookmarkForm, now_ms: i64) -> Result<&'a StudyBookmark, WidgetError> {
    let pos = position_by_id(bookmarks, id, "bookmark", |b| b.id.as_str())?;
    let title = form.title.as_deref().map(|t| required(t, "title")).transpose()?;
    let schedule = form.schedule.as_deref().map(|s| required(s, "schedule")).transpose()?;

    let bookmark = &mut bookmarks[pos];
    if let Some(title) = title {
        bookmark.title = title;
    }
    if let Some(schedule) = schedule {
        bookmark.schedule = schedule;
    }
    if let Some(notes) = form.notes {
        bookmark.notes = notes.trim().to_owned();
    }
    bookmark.updated_at = now_ms;
    Ok(bookmark)
}

/// # Errors
///
/// Returns [`WidgetError::NotFound`] for an unknown id.
pub fn delete(bookmarks: &mut Vec<StudyBookmark>, id: &str) -> Result<StudyBookmark, WidgetError> {
    let pos = position_by_id(bookmarks, id, "bookmark", |b| b.id.as_str())?;
    Ok(bookmarks.remove(pos))
}

/// Bookmarks whose title, schedule, or notes contain `query`
/// (case-insensitive), most recently updated first. A blank query matches
/// everything.
#[must_use]
pub fn search<'a>(bookmarks: &'a [StudyBookmark], query: &str) -> Vec<&'a StudyBookmark> {
    let q = query.trim().to_lowercase();
    let mut hits: Vec<&StudyBookmark> = bookmarks
        .iter()
        .filter(|b| {
            q.is_empty()
                || b.title.to_lowercase().contains(&q)
                || b.schedule.to_lowercase().contains(&q)
                || b.notes.to_lowercase().contains(&q)
        })
        .collect();
    hits.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    hits
}

#[cfg(test)]
#[path = "bookmarks_test.rs"]
mod tests;
