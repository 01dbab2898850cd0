//! iCalendar output for resolved openings.
//!
//! This is deliberately a small RFC 5545 subset: one `VEVENT` per opening
//! with localized start and end timestamps, enough for calendar clients to
//! subscribe to. Line folding is not implemented.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::enumerator::Opening;

const ICAL_VERSION: &str = "2.0";
const LOCAL_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S";
const UTC_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// A calendar document holding a list of events.
#[derive(Clone, Debug)]
pub struct Calendar {
    prod_id: String,
    name: String,
    description: String,
    events: Vec<CalendarEvent>,
}

impl Calendar {
    /// Create an empty calendar with the given metadata.
    pub fn new(prod_id: &str, name: &str, description: &str) -> Self {
        Self {
            prod_id: prod_id.to_owned(),
            name: name.to_owned(),
            description: description.to_owned(),
            events: Vec::new(),
        }
    }

    /// Append an event to the calendar.
    pub fn push(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }

    /// Number of events in the calendar.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the calendar holds no event.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Serialize the calendar to an iCalendar document.
    pub fn to_ical(&self) -> String {
        let mut out = String::new();
        push_line(&mut out, "BEGIN:VCALENDAR");
        push_prop(&mut out, "PRODID", &self.prod_id);
        push_prop(&mut out, "VERSION", ICAL_VERSION);
        push_prop(&mut out, "NAME", &self.name);
        push_prop(&mut out, "X-WR-CALNAME", &self.name);
        push_prop(&mut out, "DESCRIPTION", &self.description);
        push_prop(&mut out, "X-WR-CALDESC", &self.description);

        for event in &self.events {
            event.write_ical(&mut out);
        }

        push_line(&mut out, "END:VCALENDAR");
        out
    }

    /// Serialize the calendar into a writer.
    pub fn write_to(&self, mut writer: impl Write) -> io::Result<()> {
        writer.write_all(self.to_ical().as_bytes())
    }
}

/// A single timed event, built from an [`Opening`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CalendarEvent {
    pub uid: String,
    pub summary: String,
    pub location: String,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub stamp: DateTime<Utc>,
}

impl CalendarEvent {
    /// Build an event from a resolved opening.
    ///
    /// The UID is derived from the facility identifier and the date, so that
    /// a regenerated calendar updates events in place instead of duplicating
    /// them. `stamp` is the document generation time; passing a fixed value
    /// makes the output reproducible.
    pub fn from_opening(opening: &Opening, uid_domain: &str, stamp: DateTime<Utc>) -> Self {
        Self {
            uid: format!("{}-{}@{}", opening.facility.id, opening.date, uid_domain),
            summary: opening.facility.name.clone().unwrap_or_default(),
            location: opening.facility.location_line(),
            start: opening.start,
            end: opening.end,
            stamp,
        }
    }

    fn write_ical(&self, out: &mut String) {
        push_line(out, "BEGIN:VEVENT");
        push_prop(out, "UID", &self.uid);
        push_prop(
            out,
            "DTSTAMP",
            &self.stamp.format(UTC_TIMESTAMP_FORMAT).to_string(),
        );
        push_local_timestamp(out, "DTSTART", &self.start);
        push_local_timestamp(out, "DTEND", &self.end);
        push_prop(out, "SUMMARY", &self.summary);
        push_prop(out, "LOCATION", &self.location);
        push_line(out, "END:VEVENT");
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push_str("\r\n");
}

fn push_prop(out: &mut String, key: &str, value: &str) {
    out.push_str(key);
    out.push(':');
    out.push_str(&escape_text(value));
    out.push_str("\r\n");
}

fn push_local_timestamp(out: &mut String, key: &str, value: &DateTime<Tz>) {
    out.push_str(key);
    out.push_str(";TZID=");
    out.push_str(value.timezone().name());
    out.push(':');
    out.push_str(&value.format(LOCAL_TIMESTAMP_FORMAT).to_string());
    out.push_str("\r\n");
}

/// Escape a text property value as required by RFC 5545.
fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for chr in value.chars() {
        match chr {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(chr),
        }
    }

    escaped
}
