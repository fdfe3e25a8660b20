//! Toggleable lists: personal goals and ministry acts.

use serde::{Deserialize, Serialize};

use crate::store::StorageKey;
use crate::{WidgetError, new_id, position_by_id, required};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

pub const GOALS: StorageKey<Vec<ChecklistItem>> = StorageKey::new("goals", Vec::new);
pub const MINISTRY: StorageKey<Vec<ChecklistItem>> = StorageKey::new("ministry", Vec::new);

/// # Errors
///
/// Returns [`WidgetError::Empty`] when `text` is blank.
pub fn add<'a>(items: &'a mut Vec<ChecklistItem>, text: &str) -> Result<&'a ChecklistItem, WidgetError> {
    let text = required(text, "text")?;
    items.insert(0, ChecklistItem { id: new_id(), text, done: false });
    Ok(&items[0])
}

/// Flip `done` and return the new value.
///
/// # Errors
///
/// Returns [`WidgetError::NotFound`] when no item matches `id`.
pub fn toggle(items: &mut [ChecklistItem], id: &str) -> Result<bool, WidgetError> {
    let pos = position_by_id(items, id, "item", |i| i.id.as_str())?;
    items[pos].done = !items[pos].done;
    Ok(items[pos].done)
}

/// # Errors
///
/// Returns [`WidgetError::NotFound`] when no item matches `id`.
pub fn remove(items: &mut Vec<ChecklistItem>, id: &str) -> Result<ChecklistItem, WidgetError> {
    let pos = position_by_id(items, id, "item", |i| i.id.as_str())?;
    Ok(items.remove(pos))
}

/// `(done, total)`.
#[must_use]
pub fn progress(items: &[ChecklistItem]) -> (usize, usize) {
    (items.iter().filter(|i| i.done).count(), items.len())
}

#[cfg(test)]
#[path = "checklist_test.rs"]
mod tests;
