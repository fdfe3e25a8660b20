//! Meeting links: a Google Calendar event template and a fresh Meet room.

use time::macros::format_description;
use time::{Duration, PrimitiveDateTime, UtcOffset};

use crate::{WidgetError, encode_component, notes};

pub const MEET_URL: &str = "https://meet.google.com/new";
pub const CALENDAR_BASE: &str = "https://calendar.google.com/calendar/render";
pub const DEFAULT_TITLE: &str = "Bible Study";
pub const DEFAULT_MINUTES: u32 = 60;
const DETAILS: &str = "mybiblebelt.org study";

/// `YYYYMMDDTHHMMSSZ/YYYYMMDDTHHMMSSZ` for an event starting at local
/// `start` (in `offset`) and lasting `minutes`; zero means an hour.
#[must_use]
pub fn date_range(start: PrimitiveDateTime, minutes: u32, offset: UtcOffset) -> String {
    let minutes = if minutes == 0 { DEFAULT_MINUTES } else { minutes };
    let start = start.assume_offset(offset).to_offset(UtcOffset::UTC);
    let end = start + Duration::minutes(i64::from(minutes));
    let format = format_description!("[year][month][day]T[hour][minute][second]Z");
    let stamp = |at: time::OffsetDateTime| at.format(&format).unwrap_or_default();
    format!("{}/{}", stamp(start), stamp(end))
}

/// Google Calendar "create event" URL.
#[must_use]
pub fn calendar_url(title: &str, start: PrimitiveDateTime, minutes: u32, offset: UtcOffset) -> String {
    let title = match title.trim() {
        "" => DEFAULT_TITLE,
        t => t,
    };
    format!(
        "{CALENDAR_BASE}?action=TEMPLATE&text={}&details={}&dates={}",
        form_encode(title),
        form_encode(DETAILS),
        date_range(start, minutes, offset)
    )
}

/// [`calendar_url`] from a `YYYY-MM-DDTHH:MM` local start.
///
/// # Errors
///
/// Returns [`WidgetError::Invalid`] when `start` does not parse.
pub fn calendar_url_from_stamp(title: &str, start: &str, minutes: u32, offset: UtcOffset) -> Result<String, WidgetError> {
    let start = notes::parse_stamp(start)?;
    Ok(calendar_url(title, start, minutes, offset))
}

// Query strings encode spaces as `+`.
fn form_encode(raw: &str) -> String {
    encode_component(raw).replace("%20", "+")
}
