//! Prayer requests.

use serde::{Deserialize, Serialize};

use crate::store::StorageKey;
use crate::{WidgetError, new_id, position_by_id, required};

pub const ANONYMOUS: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerRequest {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub request: String,
    pub created_at: i64,
    #[serde(default)]
    pub answered: bool,
}

impl PrayerRequest {
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(ANONYMOUS)
    }
}

pub const PRAYER_REQUESTS: StorageKey<Vec<PrayerRequest>> = StorageKey::new("prayerRequests", Vec::new);

/// # Errors
///
/// Returns [`WidgetError::Empty`] when `request` is blank.
pub fn add<'a>(requests: &'a mut Vec<PrayerRequest>, name: Option<&str>, request: &str, now_ms: i64) -> Result<&'a PrayerRequest, WidgetError> {
    let request = required(request, "request")?;
    let name = name.map(str::trim).filter(|n| !n.is_empty()).map(str::to_owned);
    requests.insert(0, PrayerRequest { id: new_id(), name, request, created_at: now_ms, answered: false });
    Ok(&requests[0])
}

/// # Errors
///
/// Returns [`WidgetError::NotFound`] for an unknown id.
pub fn mark_answered(requests: &mut [PrayerRequest], id: &str) -> Result<(), WidgetError> {
    let pos = position_by_id(requests, id, "prayer request", |r| r.id.as_str())?;
    requests[pos].answered = true;
    Ok(())
}

/// # Errors
///
/// Returns [`WidgetError::NotFound`] for an unknown id.
pub fn remove(requests: &mut Vec<PrayerRequest>, id: &str) -> Result<PrayerRequest, WidgetError> {
    let pos = position_by_id(requests, id, "prayer request", |r| r.id.as_str())?;
    Ok(requests.remove(pos))
}

/// Open requests first, then answered; newest first within each group.
#[must_use]
pub fn ordered(requests: &[PrayerRequest]) -> Vec<&PrayerRequest> {
    let mut out: Vec<&PrayerRequest> = requests.iter().collect();
    out.sort_by(|a, b| a.answered.cmp(&b.answered).then(b.created_at.cmp(&a.created_at)));
    out
}
