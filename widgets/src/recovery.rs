//! Recovery ministry: program signups and the personal recovery plan.
//!
//! DESIGN
//! ======
//! The plan is a fixed form: sections of labelled fields, each a free-text
//! answer, a checkbox, or a choice among options. The shape is seeded once
//! and only values change afterwards, so a field is addressed by section
//! title and label. Labels ending in `*` mark required answers on screen;
//! the marker is dropped when printing.

use serde::{Deserialize, Serialize};

use crate::store::StorageKey;
use crate::{WidgetError, new_id, position_by_id, required};

/// Placeholder printed for an unset or unchecked field.
pub const BLANK: &str = "—";

// =============================================================================
// SIGNUPS
// =============================================================================

pub const PROGRAMS: [&str; 4] = ["Celebrate Recovery", "12-Step Group", "Men's Group", "Women's Group"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signup {
    pub id: String,
    pub name: String,
    /// Phone or email.
    pub contact: String,
    #[serde(default)]
    pub program: String,
    #[serde(default)]
    pub preferred_time: String,
    #[serde(default)]
    pub notes: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub contact: String,
    pub program: Option<String>,
    pub preferred_time: Option<String>,
    pub notes: Option<String>,
}

pub const RECOVERY_SIGNUPS: StorageKey<Vec<Signup>> = StorageKey::new("recoverySignups", Vec::new);

/// Record a signup, newest first.
///
/// # Errors
///
/// Returns [`WidgetError::Empty`] when name or contact is blank.
pub fn sign_up(signups: &mut Vec<Signup>, form: SignupForm, now_ms: i64) -> Result<&Signup, WidgetError> {
    let name = required(&form.name, "name")?;
    let contact = required(&form.contact, "contact")?;
    let trimmed = |v: Option<String>| v.map(|s| s.trim().to_owned()).unwrap_or_default();
    signups.insert(
        0,
        Signup {
            id: new_id(),
            name,
            contact,
            program: trimmed(form.program),
            preferred_time: trimmed(form.preferred_time),
            notes: trimmed(form.notes),
            created_at: now_ms,
        },
    );
    Ok(&signups[0])
}

/// # Errors
///
/// Returns [`WidgetError::NotFound`] for an unknown id.
pub fn remove_signup(signups: &mut Vec<Signup>, id: &str) -> Result<Signup, WidgetError> {
    let pos = position_by_id(signups, id, "signup", |s| s.id.as_str())?;
    Ok(signups.remove(pos))
}

// =============================================================================
// PLAN
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldValue {
    Text {
        #[serde(default)]
        value: String,
    },
    Checkbox {
        #[serde(default)]
        checked: bool,
    },
    Choice {
        options: Vec<String>,
        #[serde(default)]
        selected: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanField {
    pub label: String,
    #[serde(flatten)]
    pub value: FieldValue,
}

impl PlanField {
    fn text(label: &str) -> Self {
        Self { label: label.to_owned(), value: FieldValue::Text { value: String::new() } }
    }

    fn checkbox(label: &str) -> Self {
        Self { label: label.to_owned(), value: FieldValue::Checkbox { checked: false } }
    }

    fn choice(label: &str, options: &[&str]) -> Self {
        Self {
            label: label.to_owned(),
            value: FieldValue::Choice { options: options.iter().map(|&o| o.to_owned()).collect(), selected: None },
        }
    }

    /// Label without the trailing required marker.
    #[must_use]
    pub fn printable_label(&self) -> &str {
        self.label.trim_end().trim_end_matches('*').trim_end()
    }

    /// Value as shown on paper: checkboxes read "Yes" or [`BLANK`], and
    /// anything empty reads [`BLANK`].
    #[must_use]
    pub fn printable_value(&self) -> &str {
        let shown = match &self.value {
            FieldValue::Text { value } => value.trim(),
            FieldValue::Checkbox { checked: true } => "Yes",
            FieldValue::Checkbox { checked: false } => "",
            FieldValue::Choice { selected, .. } => selected.as_deref().unwrap_or_default(),
        };
        if shown.is_empty() { BLANK } else { shown }
    }

    fn matches(&self, label: &str) -> bool {
        self.printable_label().eq_ignore_ascii_case(label.trim().trim_end_matches('*').trim_end())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSection {
    pub title: String,
    pub fields: Vec<PlanField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryPlan {
    pub sections: Vec<PlanSection>,
}

impl Default for RecoveryPlan {
    fn default() -> Self {
        let section = |title: &str, fields: Vec<PlanField>| PlanSection { title: title.to_owned(), fields };
        Self {
            sections: vec![
                section(
                    "About Me",
                    vec![
                        PlanField::text("Name *"),
                        PlanField::text("Start date"),
                        PlanField::choice("Program", &PROGRAMS),
                    ],
                ),
                section(
                    "Triggers & Warning Signs",
                    vec![
                        PlanField::text("People, places, or situations *"),
                        PlanField::text("Early warning signs"),
                        PlanField::text("What I will do instead"),
                    ],
                ),
                section(
                    "Support Network",
                    vec![
                        PlanField::text("Sponsor or mentor"),
                        PlanField::text("Phone"),
                        PlanField::text("Home group or meeting"),
                        PlanField::checkbox("I have shared this plan with someone I trust"),
                    ],
                ),
                section(
                    "Daily Commitments",
                    vec![
                        PlanField::checkbox("Morning prayer"),
                        PlanField::checkbox("Scripture reading"),
                        PlanField::checkbox("Call or text a support person"),
                        PlanField::checkbox("Evening reflection"),
                    ],
                ),
                section(
                    "Scripture & Encouragement",
                    vec![PlanField::text("Verse to hold onto"), PlanField::text("Notes")],
                ),
            ],
        }
    }
}

pub const RECOVERY_PLAN: StorageKey<RecoveryPlan> = StorageKey::new("recoveryPlan", RecoveryPlan::default);

/// Set the field `label` in section `section` from command-line text.
///
/// Text fields take `raw` verbatim (trimmed). Checkboxes accept
/// yes/no, true/false, on/off, 1/0. Choices accept one of their options,
/// case-insensitively, or an empty string to clear.
///
/// # Errors
///
/// Returns [`WidgetError::NotFound`] for an unknown section or label and
/// [`WidgetError::Invalid`] when `raw` does not fit the field.
pub fn set_field<'a>(plan: &'a mut RecoveryPlan, section: &str, label: &str, raw: &str) -> Result<&'a PlanField, WidgetError> {
    let section_title = section.trim();
    let sec = plan
        .sections
        .iter_mut()
        .find(|s| s.title.eq_ignore_ascii_case(section_title))
        .ok_or_else(|| WidgetError::NotFound { kind: "plan section", id: section_title.to_owned() })?;
    let field = sec
        .fields
        .iter_mut()
        .find(|f| f.matches(label))
        .ok_or_else(|| WidgetError::NotFound { kind: "plan field", id: label.trim().to_owned() })?;

    let raw = raw.trim();
    match &mut field.value {
        FieldValue::Text { value } => raw.clone_into(value),
        FieldValue::Checkbox { checked } => *checked = parse_checkbox(raw)?,
        FieldValue::Choice { options, selected } => {
            if raw.is_empty() {
                *selected = None;
            } else {
                let option = options
                    .iter()
                    .find(|o| o.eq_ignore_ascii_case(raw))
                    .ok_or_else(|| WidgetError::Invalid { field: "choice", reason: format!("expected one of: {}", options.join(", ")) })?;
                *selected = Some(option.clone());
            }
        }
    }
    Ok(field)
}

fn parse_checkbox(raw: &str) -> Result<bool, WidgetError> {
    match raw.to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "on" | "1" | "x" => Ok(true),
        "no" | "n" | "false" | "off" | "0" | "" => Ok(false),
        other => Err(WidgetError::Invalid { field: "checkbox", reason: format!("`{other}` is not yes or no") }),
    }
}

#[cfg(test)]
#[path = "recovery_test.rs"]
mod tests;
