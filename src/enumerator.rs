//! Drives the resolver over a facility collection and a forward date window.
//!
//! Output order is deterministic: facility-major in input order, then
//! strictly ascending by date. Bad time-of-day strings only skip the single
//! day they belong to; the skip is reported back to the caller instead of
//! aborting the run.

use std::fmt;

use chrono::{DateTime, Days, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::model::Facility;
use crate::resolver::{resolve, OpenWindow, ResolvedDay};

/// A concrete opening of one facility on one date, localized to the civil
/// timezone the schedule is published in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Opening<'a> {
    pub facility: &'a Facility,
    pub date: NaiveDate,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

/// A (facility, date) pair that resolved to open but could not be turned
/// into timestamps.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SkippedDay {
    pub facility_id: String,
    pub date: NaiveDate,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "skipping {} on {}: {}",
            self.facility_id, self.date, self.reason
        )
    }
}

/// Why a single resolved day was dropped from the output.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SkipReason {
    #[error("invalid time of day `{0}`")]
    InvalidTime(String),
    #[error("open time without a close time")]
    MissingCloseTime,
    #[error("local time does not exist in this timezone")]
    NonexistentLocalTime,
}

/// The outcome of [`enumerate`]: all openings, plus the days that had to be
/// skipped because of malformed source data.
#[derive(Clone, Debug, Default)]
pub struct Enumeration<'a> {
    pub openings: Vec<Opening<'a>>,
    pub skipped: Vec<SkippedDay>,
}

/// Resolve every (facility, date) pair of the window lazily.
///
/// Yields one triple per facility per day, including closed days, grouped by
/// facility in input order and date-ascending within a facility.
pub fn resolved_days(
    facilities: &[Facility],
    start: NaiveDate,
    num_days: u64,
) -> impl Iterator<Item = (&Facility, NaiveDate, ResolvedDay)> {
    facilities.iter().flat_map(move |facility| {
        (0..num_days).filter_map(move |offset| {
            let date = start.checked_add_days(Days::new(offset))?;
            Some((facility, date, resolve(&facility.business_hours, date)))
        })
    })
}

/// Enumerate all concrete openings over `num_days` days starting at `start`.
///
/// Closed days are dropped. Open days whose time strings don't parse, or
/// which fall into a DST gap, are reported in [`Enumeration::skipped`] and do
/// not affect any other day or facility. When the close time precedes the
/// open time the interval rolls over into the next civil day.
pub fn enumerate<'a>(
    facilities: &'a [Facility],
    start: NaiveDate,
    num_days: u64,
    tz: Tz,
) -> Enumeration<'a> {
    let mut result = Enumeration::default();

    for (facility, date, resolved) in resolved_days(facilities, start, num_days) {
        let ResolvedDay::Open(window) = resolved else {
            continue;
        };

        match localize(&window, date, tz) {
            Ok((start, end)) => {
                result
                    .openings
                    .push(Opening { facility, date, start, end });
            }
            Err(reason) => {
                let skip = SkippedDay {
                    facility_id: facility.id.clone(),
                    date,
                    reason,
                };

                log::warn!(
                    facility = skip.facility_id.as_str(), date:% = skip.date;
                    "{}", skip.reason
                );
                result.skipped.push(skip);
            }
        }
    }

    result
}

/// Combine a resolved window with its calendar date in the given timezone,
/// applying the next-day rollover when the close time is not after the open
/// time.
fn localize(
    window: &OpenWindow,
    date: NaiveDate,
    tz: Tz,
) -> Result<(DateTime<Tz>, DateTime<Tz>), SkipReason> {
    if window.end.is_empty() {
        return Err(SkipReason::MissingCloseTime);
    }

    let start = local_datetime(date, parse_time(&window.start)?, tz)?;
    let mut end = local_datetime(date, parse_time(&window.end)?, tz)?;

    if end <= start {
        end = end + Duration::days(1);
    }

    Ok((start, end))
}

fn parse_time(raw: &str) -> Result<NaiveTime, SkipReason> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| SkipReason::InvalidTime(raw.to_owned()))
}

fn local_datetime(date: NaiveDate, time: NaiveTime, tz: Tz) -> Result<DateTime<Tz>, SkipReason> {
    match tz.from_local_datetime(&NaiveDateTime::new(date, time)) {
        LocalResult::Single(datetime) => Ok(datetime),
        // DST fold: resolve to the earlier instant so reruns stay stable.
        LocalResult::Ambiguous(earlier, _) => Ok(earlier),
        LocalResult::None => Err(SkipReason::NonexistentLocalTime),
    }
}
