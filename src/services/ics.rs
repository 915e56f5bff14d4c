//! iCalendar export for agenda events (RFC 5545 subset).

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::models::event::Event;

const PRODID: &str = "-//L Ecole du Belier//Agenda//FR";
const UID_DOMAIN: &str = "lecoledubelier.beer";

#[derive(Debug, thiserror::Error)]
pub enum IcsError {
    #[error("Invalid event date '{date}': {source}")]
    InvalidDate {
        date: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Escape TEXT values: backslash, newline, comma, semicolon.
fn escape_text(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace(',', "\\,")
        .replace(';', "\\;")
}

/// "2026-05-10" + "18:30" → "20260510T183000" (floating local time).
fn date_time_token(date: &str, time: &str) -> String {
    format!("{}T{}00", date.replace('-', ""), time.replacen(':', "", 1))
}

fn stamp(now: DateTime<Utc>) -> String {
    now.format("%Y%m%dT%H%M%SZ").to_string()
}

fn next_day_token(date: &str) -> Result<String, IcsError> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|source| IcsError::InvalidDate {
        date: date.to_string(),
        source,
    })?;
    Ok((day + Duration::days(1)).format("%Y%m%d").to_string())
}

fn join_lines(lines: &[String]) -> String {
    let mut out = lines.join("\r\n");
    out.push_str("\r\n");
    out
}

pub fn build_event_ics(event: &Event) -> String {
    build_event_ics_at(event, Utc::now())
}

/// Timed event calendar with an explicit DTSTAMP.
pub fn build_event_ics_at(event: &Event, now: DateTime<Utc>) -> String {
    let location = format!("{}, {}, {}", event.venue, event.address, event.city);
    let description = escape_text(&event.description);

    let lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", PRODID),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}@{}", event.id, UID_DOMAIN),
        format!("DTSTAMP:{}", stamp(now)),
        format!("DTSTART:{}", date_time_token(&event.date, &event.start_time)),
        format!("DTEND:{}", date_time_token(&event.date, &event.end_time)),
        format!("SUMMARY:{}", escape_text(&event.title)),
        format!("DESCRIPTION:{}", description),
        format!("LOCATION:{}", escape_text(&location)),
        format!("X-ALT-DESC;FMTTYPE=text/plain:{}", description),
        "STATUS:CONFIRMED".to_string(),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ];

    join_lines(&lines)
}

pub fn build_all_day_placeholder_ics(event: &Event) -> Result<String, IcsError> {
    build_all_day_placeholder_ics_at(event, Utc::now())
}

/// All-day calendar entry, used when the event times are not final.
pub fn build_all_day_placeholder_ics_at(
    event: &Event,
    now: DateTime<Utc>,
) -> Result<String, IcsError> {
    let lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", PRODID),
        "CALSCALE:GREGORIAN".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}-all-day@{}", event.id, UID_DOMAIN),
        format!("DTSTAMP:{}", stamp(now)),
        format!("DTSTART;VALUE=DATE:{}", event.date.replace('-', "")),
        format!("DTEND;VALUE=DATE:{}", next_day_token(&event.date)?),
        format!("SUMMARY:{}", escape_text(&event.title)),
        format!("DESCRIPTION:{}", escape_text(&event.description)),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ];

    Ok(join_lines(&lines))
}
