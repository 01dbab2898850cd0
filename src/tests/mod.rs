
use crate::model::{BusinessHours, DayWindow, Facility, RuleEntry, Validity};

#[macro_export]
macro_rules! date {
    ( $date:expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

#[macro_export]
macro_rules! datetime {
    ( $date:expr, $tz:expr ) => {{
        use chrono::{NaiveDateTime, TimeZone};

        let naive = NaiveDateTime::parse_from_str($date, "%Y-%m-%d %H:%M")
            .expect("invalid datetime literal");

        $tz.from_local_datetime(&naive)
            .single()
            .expect("ambiguous input datetime")
    }};
}

fn validity(from: &str, to: &str) -> Validity {
    Validity { from: from.into(), to: to.into() }
}

fn window(from: &str, to: &str) -> DayWindow {
    DayWindow { from: Some(from.into()), to: Some(to.into()) }
}

fn entry(from: &str, to: &str) -> RuleEntry {
    RuleEntry { validity: validity(from, to), ..Default::default() }
}

fn facility(id: &str, business_hours: BusinessHours) -> Facility {
    Facility {
        id: id.into(),
        name: Some(format!("Facility {id}")),
        business_hours,
        ..Default::default()
    }
}
