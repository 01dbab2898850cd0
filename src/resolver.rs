//! The opening-hours resolution core.
//!
//! Resolution is a pure function of a facility's [`BusinessHours`] and a
//! calendar date. The override tier is consulted first; if any override entry
//! is valid for the date, the regular tier is never looked at, whatever the
//! override yields.

use chrono::{Datelike, NaiveDate};

use crate::model::{BusinessHours, RuleEntry};

/// The effective state of a facility on one calendar date.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResolvedDay {
    /// The facility does not open that day, or no schedule applies.
    Closed,
    /// The facility opens with the given time window.
    Open(OpenWindow),
}

impl ResolvedDay {
    /// Check whether this day resolved to an open window.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

/// The raw open and close times of a resolved open day.
///
/// Times are kept as the source's time-of-day strings. Turning them into
/// concrete timestamps, including rejecting values that don't parse, is the
/// enumerator's job; a missing close time in the source is carried through
/// as an empty string and rejected there as well.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OpenWindow {
    pub start: String,
    pub end: String,
}

/// Find the first rule entry whose validity range contains `date`.
///
/// Entries with unparsable validity bounds are treated as non-matching; a
/// bad entry never fails the lookup. Both bounds are inclusive.
///
/// ```
/// use facility_hours::model::{RuleEntry, Validity};
/// use facility_hours::resolver::matching_rule;
///
/// let entry = RuleEntry {
///     validity: Validity { from: "2024-06-10".into(), to: "2024-06-20".into() },
///     ..Default::default()
/// };
///
/// let date = chrono::NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
/// assert!(matching_rule(std::slice::from_ref(&entry), date).is_some());
///
/// let date = chrono::NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
/// assert!(matching_rule(std::slice::from_ref(&entry), date).is_none());
/// ```
pub fn matching_rule(rules: &[RuleEntry], date: NaiveDate) -> Option<&RuleEntry> {
    rules.iter().find(|entry| match entry.validity.range() {
        Some(range) => range.contains(&date),
        None => {
            log::debug!(validity:% = entry.validity; "skipping rule entry with unparsable validity");
            false
        }
    })
}

/// Resolve the effective open/closed state of a facility for one date.
///
/// The override tier wins whenever one of its entries is valid for the date:
/// an explicit closed flag, a day window, or the *absence* of a day window
/// all terminate resolution there. An active override that neither closes
/// explicitly nor states hours for the weekday counts as a holiday closure,
/// it is not a signal to fall back to the regular schedule.
///
/// ```
/// use facility_hours::model::{BusinessHours, DayWindow, RuleEntry, Validity};
/// use facility_hours::resolver::{resolve, ResolvedDay};
///
/// let hours = BusinessHours {
///     regular: vec![RuleEntry {
///         validity: Validity { from: "2024-01-01".into(), to: "2024-12-31".into() },
///         monday: Some(DayWindow { from: Some("06:30".into()), to: Some("21:00".into()) }),
///         ..Default::default()
///     }],
///     ..Default::default()
/// };
///
/// // A Monday within the validity range.
/// let date = chrono::NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
/// assert!(resolve(&hours, date).is_open());
///
/// // No window for Tuesday.
/// let date = chrono::NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();
/// assert_eq!(resolve(&hours, date), ResolvedDay::Closed);
/// ```
pub fn resolve(hours: &BusinessHours, date: NaiveDate) -> ResolvedDay {
    if let Some(entry) = matching_rule(&hours.overrides, date) {
        if entry.closed {
            return ResolvedDay::Closed;
        }

        return match open_window(entry, date) {
            Some(window) => ResolvedDay::Open(window),
            None => ResolvedDay::Closed,
        };
    }

    let Some(entry) = matching_rule(&hours.regular, date) else {
        // No applicable schedule at all.
        return ResolvedDay::Closed;
    };

    match open_window(entry, date) {
        Some(window) => ResolvedDay::Open(window),
        None => ResolvedDay::Closed,
    }
}

/// Extract the open window of an entry for the date's weekday. `None` covers
/// both "no sub-record for this weekday" and "sub-record without an open
/// time", which resolve identically within a single tier.
fn open_window(entry: &RuleEntry, date: NaiveDate) -> Option<OpenWindow> {
    let window = entry.day_window(date.weekday())?;
    let start = window.from.clone()?;

    Some(OpenWindow {
        start,
        end: window.to.clone().unwrap_or_default(),
    })
}
