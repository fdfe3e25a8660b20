//! Daily devotional verses.

use serde::{Deserialize, Serialize};

use crate::store::StorageKey;
use crate::{WidgetError, required};

pub const CUSTOM_REF: &str = "Custom";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    #[serde(rename = "ref")]
    pub reference: String,
    pub text: String,
}

pub const DEVOTIONAL: StorageKey<Vec<Verse>> = StorageKey::new("devotional", seed_verses);

#[must_use]
pub fn seed_verses() -> Vec<Verse> {
    [
        ("Psalm 119:105", "Your word is a lamp to my feet and a light to my path."),
        ("John 14:27", "Peace I leave with you; my peace I give to you…"),
        ("Isaiah 40:31", "Those who hope in the Lord will renew their strength…"),
        ("Philippians 4:6-7", "Do not be anxious about anything… the peace of God…"),
        ("Matthew 11:28", "Come to me, all who labor and are heavy laden, and I will give you rest."),
    ]
    .into_iter()
    .map(|(reference, text)| Verse { reference: reference.to_owned(), text: text.to_owned() })
    .collect()
}

/// Verse for a given day of the month (1..=31), cycling through the list.
#[must_use]
pub fn for_day(verses: &[Verse], day_of_month: u8) -> Option<&Verse> {
    if verses.is_empty() {
        return None;
    }
    verses.get(usize::from(day_of_month) % verses.len())
}

/// Put a custom devotional at the top of the list.
///
/// # Errors
///
/// Returns [`WidgetError::Empty`] when `text` is blank.
pub fn add_custom<'a>(verses: &'a mut Vec<Verse>, text: &str) -> Result<&'a Verse, WidgetError> {
    let text = required(text, "devotional text")?;
    verses.insert(0, Verse { reference: CUSTOM_REF.to_owned(), text });
    Ok(&verses[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_cycles_through_verses() {
        let verses = seed_verses();
        assert_eq!(for_day(&verses, 1).unwrap().reference, "John 14:27");
        assert_eq!(for_day(&verses, 5).unwrap().reference, "Psalm 119:105");
        assert_eq!(for_day(&verses, 31).unwrap().reference, "John 14:27");
    }

    #[test]
    fn empty_list_has_no_verse() {
        assert!(for_day(&[], 3).is_none());
    }

    #[test]
    fn custom_verse_goes_first() {
        let mut verses = seed_verses();
        add_custom(&mut verses, " Be still. ").unwrap();
        assert_eq!(verses[0], Verse { reference: CUSTOM_REF.into(), text: "Be still.".into() });
        assert!(add_custom(&mut verses, "").is_err());
    }

    #[test]
    fn serialized_with_ref_field() {
        let json = serde_json::to_value(&seed_verses()[0]).unwrap();
        assert_eq!(json["ref"], "Psalm 119:105");
    }
}
