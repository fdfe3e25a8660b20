//! Contact list feeding the chat threads.

use serde::{Deserialize, Serialize};

use crate::store::StorageKey;
use crate::{WidgetError, new_id, position_by_id, required};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
}

pub const CONTACTS: StorageKey<Vec<Contact>> = StorageKey::new("contacts", Vec::new);

/// # Errors
///
/// Returns [`WidgetError::Empty`] when `name` is blank.
pub fn add<'a>(contacts: &'a mut Vec<Contact>, name: &str) -> Result<&'a Contact, WidgetError> {
    let name = required(name, "name")?;
    contacts.insert(0, Contact { id: new_id(), name });
    Ok(&contacts[0])
}

/// Remove by id, or by exact name when no id matches.
///
/// # Errors
///
/// Returns [`WidgetError::NotFound`] when nothing matches.
pub fn remove(contacts: &mut Vec<Contact>, id_or_name: &str) -> Result<Contact, WidgetError> {
    let pos = match contacts.iter().position(|c| c.name == id_or_name.trim()) {
        Some(pos) => pos,
        None => position_by_id(contacts, id_or_name, "contact", |c| c.id.as_str())?,
    };
    Ok(contacts.remove(pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_trims_and_prepends() {
        let mut contacts = Vec::new();
        add(&mut contacts, " Ruth ").unwrap();
        add(&mut contacts, "Naomi").unwrap();
        let names: Vec<_> = contacts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Naomi", "Ruth"]);
    }

    #[test]
    fn add_rejects_blank_name() {
        assert!(add(&mut Vec::new(), "  ").is_err());
    }

    #[test]
    fn remove_by_name_or_id() {
        let mut contacts = Vec::new();
        let boaz_id = add(&mut contacts, "Boaz").unwrap().id.clone();
        add(&mut contacts, "Ruth").unwrap();
        assert_eq!(remove(&mut contacts, "Ruth").unwrap().name, "Ruth");
        assert_eq!(remove(&mut contacts, &boaz_id).unwrap().name, "Boaz");
        assert!(contacts.is_empty());
        assert!(matches!(remove(&mut contacts, "Orpah"), Err(WidgetError::NotFound { .. })));
    }
}
