//! Data model for the external facility document.
//!
//! The shapes here mirror the upstream JSON contract: a facility carries a
//! `businesshours` record made of two rule pools, `holiday_bhpool` (overrides)
//! and `usually_bhpool` (the regular weekly pattern). Validity bounds and
//! time-of-day values are kept as raw strings so that a malformed entry
//! degrades to "never matches" instead of failing the whole document.

use std::fmt;
use std::ops::RangeInclusive;

use chrono::{NaiveDate, Weekday};
use serde::de::{self, Deserializer};
use serde::Deserialize;

/// A single facility as found in the source document.
///
/// Address fields and the category tag are opaque to the resolution core;
/// they are only carried through for output formatting and pre-filtering.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct Facility {
    #[serde(default, deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub lookups: Lookups,
    #[serde(default)]
    pub building: Building,
    #[serde(default, rename = "businesshours")]
    pub business_hours: BusinessHours,
}

impl Facility {
    /// Category tag of this facility (eg. `"Hallenbad"`), if the source
    /// document defines one.
    pub fn category(&self) -> Option<&str> {
        self.lookups.kind.as_ref()?.value.as_deref()
    }

    /// Single-line postal address, used as the event location.
    pub fn location_line(&self) -> String {
        format!(
            "{}, {} {}",
            self.building.street, self.building.zip_code, self.building.city
        )
    }
}

/// Lookup values attached to a facility. Only the type lookup is relevant.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct Lookups {
    #[serde(default, rename = "type")]
    pub kind: Option<LookupValue>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct LookupValue {
    #[serde(default)]
    pub value: Option<String>,
}

/// Address fields of a facility, passed through verbatim.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct Building {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub city: String,
}

/// The two schedule tiers of a facility.
///
/// Overrides (holiday or special schedules) always take precedence over the
/// regular weekly pattern. Within a tier the first entry whose validity range
/// contains the target date wins; well-formed data has non-overlapping ranges.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct BusinessHours {
    #[serde(default, rename = "holiday_bhpool")]
    pub overrides: Vec<RuleEntry>,
    #[serde(default, rename = "usually_bhpool")]
    pub regular: Vec<RuleEntry>,
}

/// One schedule record: a validity date range, an explicit closed flag and up
/// to seven per-weekday time windows.
///
/// The weekday fields use the source data's two-letter lowercase German keys.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct RuleEntry {
    #[serde(default)]
    pub validity: Validity,
    #[serde(default)]
    pub closed: bool,
    #[serde(default, rename = "mo")]
    pub monday: Option<DayWindow>,
    #[serde(default, rename = "di")]
    pub tuesday: Option<DayWindow>,
    #[serde(default, rename = "mi")]
    pub wednesday: Option<DayWindow>,
    #[serde(default, rename = "do")]
    pub thursday: Option<DayWindow>,
    #[serde(default, rename = "fr")]
    pub friday: Option<DayWindow>,
    #[serde(default, rename = "sa")]
    pub saturday: Option<DayWindow>,
    #[serde(default, rename = "so")]
    pub sunday: Option<DayWindow>,
}

impl RuleEntry {
    /// Get the time window sub-record for a given weekday, if the entry
    /// defines one.
    pub fn day_window(&self, weekday: Weekday) -> Option<&DayWindow> {
        match weekday {
            Weekday::Mon => self.monday.as_ref(),
            Weekday::Tue => self.tuesday.as_ref(),
            Weekday::Wed => self.wednesday.as_ref(),
            Weekday::Thu => self.thursday.as_ref(),
            Weekday::Fri => self.friday.as_ref(),
            Weekday::Sat => self.saturday.as_ref(),
            Weekday::Sun => self.sunday.as_ref(),
        }
    }
}

/// Fixed table mapping a weekday to the key used in the source data.
///
/// This is deliberately an explicit match and not a formatting call so that
/// the mapping cannot be affected by the process locale.
///
/// ```
/// use chrono::Weekday;
/// use facility_hours::model::weekday_key;
///
/// assert_eq!(weekday_key(Weekday::Mon), "mo");
/// assert_eq!(weekday_key(Weekday::Wed), "mi");
/// assert_eq!(weekday_key(Weekday::Sun), "so");
/// ```
pub fn weekday_key(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "mo",
        Weekday::Tue => "di",
        Weekday::Wed => "mi",
        Weekday::Thu => "do",
        Weekday::Fri => "fr",
        Weekday::Sat => "sa",
        Weekday::Sun => "so",
    }
}

/// Validity bounds of a rule entry, kept as raw ISO date strings.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct Validity {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
}

impl Validity {
    /// Parse the bounds into an inclusive date range. Returns `None` if
    /// either bound is not a valid ISO date, which makes the owning entry
    /// non-matching.
    ///
    /// ```
    /// use facility_hours::model::Validity;
    ///
    /// let validity = Validity { from: "2024-06-10".into(), to: "2024-06-20".into() };
    /// assert!(validity.range().is_some());
    ///
    /// let validity = Validity { from: "not-a-date".into(), to: "2024-06-20".into() };
    /// assert!(validity.range().is_none());
    /// ```
    pub fn range(&self) -> Option<RangeInclusive<NaiveDate>> {
        let from = NaiveDate::parse_from_str(&self.from, "%Y-%m-%d").ok()?;
        let to = NaiveDate::parse_from_str(&self.to, "%Y-%m-%d").ok()?;
        Some(from..=to)
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.from, self.to)
    }
}

/// Open and close time-of-day for one weekday, kept as raw strings.
///
/// An absent `from` means the facility has no hours for that day.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct DayWindow {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

/// Accept both string and numeric ids, since the source document is not
/// consistent about which one it emits.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(i64),
    }

    match StringOrNumber::deserialize(deserializer) {
        Ok(StringOrNumber::String(val)) => Ok(val),
        Ok(StringOrNumber::Number(val)) => Ok(val.to_string()),
        Err(_) => Err(de::Error::custom("facility id must be a string or number")),
    }
}
