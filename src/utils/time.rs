//! Time utilities: parsing trip timestamps, weekday names, hour/day conversions.

use chrono::{NaiveDateTime, Weekday};

const TIMESTAMP_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Parse a "Start Time" cell (`2017-01-01 00:07:57`, seconds optional).
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Full English weekday name ("Monday", ...).
pub fn weekday_name(d: Weekday) -> &'static str {
    match d {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn seconds_to_hours(secs: f64) -> f64 {
    secs / 3600.0
}

pub fn seconds_to_minutes(secs: f64) -> f64 {
    secs / 60.0
}

/// Split an hour total into whole days and the remaining hours.
pub fn hours_to_days(hours: f64) -> (f64, f64) {
    ((hours / 24.0).floor(), hours.rem_euclid(24.0))
}
