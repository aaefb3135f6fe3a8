//! Calendar-date parsing and locale display for notice text.
//!
//! Case records carry dates as strings written by the records service. Notices
//! show them in day-month-year order in both languages.
//!
//! # Display conventions
//!
//! - English (`en-GB`): zero-padded `15/01/2023`
//! - Hindi (`hi-IN`): unpadded `15/1/2023`
//! - The draft's own date line always uses the English form.

use chrono::{DateTime, Local, NaiveDate};
use tracing::warn;

use crate::model::Language;

/// Parse a stored calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (`2023-01-15T00:00:00.000Z`),
/// and anything whose first ten characters are `YYYY-MM-DD`.
pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.date_naive());
    }
    s.get(..10)
        .and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok())
}

/// Render a date in the display convention of `language`.
pub fn format_date(date: NaiveDate, language: Language) -> String {
    match language {
        Language::En => date.format("%d/%m/%Y").to_string(),
        Language::Hi => date.format("%-d/%-m/%Y").to_string(),
    }
}

/// Parse and render a stored date; unparseable input is returned verbatim.
pub fn display_stored_date(raw: &str, language: Language) -> String {
    match parse_calendar_date(raw) {
        Some(date) => format_date(date, language),
        None => {
            warn!(date = raw, "unparseable case date, rendering as stored");
            raw.to_string()
        }
    }
}

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The date line written on a fresh draft (`DD/MM/YYYY`).
pub fn draft_date(today: NaiveDate) -> String {
    format_date(today, Language::En)
}
