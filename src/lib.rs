#![doc = include_str!("../README.md")]

pub mod calendar;
pub mod enumerator;
pub mod error;
pub mod model;
pub mod resolver;
pub mod source;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::calendar::{Calendar, CalendarEvent};
pub use crate::enumerator::{enumerate, resolved_days, Enumeration, Opening, SkipReason, SkippedDay};
pub use crate::error::Error;
pub use crate::model::{BusinessHours, DayWindow, Facility, RuleEntry, Validity};
pub use crate::resolver::{matching_rule, resolve, OpenWindow, ResolvedDay};
