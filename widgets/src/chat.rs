//! Chat threads keyed by contact name.
//!
//! Messages are local only: sending appends to the thread on this device
//! and nothing is transmitted. Threads store newest message first.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::store::StorageKey;
use crate::{WidgetError, new_id, required};

pub const SENDER_SELF: &str = "me";
pub const EMPTY_PREVIEW: &str = "Start the conversation";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub from: String,
    pub text: String,
    /// Display timestamp captured when the message was sent.
    pub ts: String,
}

pub type Threads = BTreeMap<String, Vec<ChatMessage>>;

pub const THREADS: StorageKey<Threads> = StorageKey::new("threads", Threads::new);

/// Make sure a thread exists for `contact` and return its name.
///
/// # Errors
///
/// Returns [`WidgetError::Empty`] when `contact` is blank.
pub fn open(threads: &mut Threads, contact: &str) -> Result<String, WidgetError> {
    let contact = required(contact, "contact")?;
    threads.entry(contact.clone()).or_default();
    Ok(contact)
}

/// Append a message from this user to `contact`'s thread, opening it if
/// needed.
///
/// # Errors
///
/// Returns [`WidgetError::Empty`] when `contact` or `text` is blank.
pub fn send<'a>(threads: &'a mut Threads, contact: &str, text: &str, ts: &str) -> Result<&'a ChatMessage, WidgetError> {
    let text = required(text, "message")?;
    let contact = open(threads, contact)?;
    let thread = threads.entry(contact).or_default();
    thread.insert(0, ChatMessage { id: new_id(), from: SENDER_SELF.to_owned(), text, ts: ts.to_owned() });
    Ok(&thread[0])
}

/// Empty a thread but keep it in the list.
///
/// # Errors
///
/// Returns [`WidgetError::NotFound`] when there is no thread for `contact`.
pub fn clear(threads: &mut Threads, contact: &str) -> Result<(), WidgetError> {
    let thread = threads
        .get_mut(contact.trim())
        .ok_or_else(|| WidgetError::NotFound { kind: "chat", id: contact.trim().to_owned() })?;
    thread.clear();
    Ok(())
}

/// `(contact, preview)` for every thread, preview being the newest text.
#[must_use]
pub fn previews(threads: &Threads) -> Vec<(&str, &str)> {
    threads
        .iter()
        .map(|(name, messages)| (name.as_str(), messages.first().map_or(EMPTY_PREVIEW, |m| m.text.as_str())))
        .collect()
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
