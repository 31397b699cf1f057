use crate::utils::time::weekday_name;
use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};
use serde::Deserialize;

pub const COL_START_TIME: &str = "Start Time";
pub const COL_END_TIME: &str = "End Time";
pub const COL_TRIP_DURATION: &str = "Trip Duration";
pub const COL_START_STATION: &str = "Start Station";
pub const COL_END_STATION: &str = "End Station";
pub const COL_USER_TYPE: &str = "User Type";
pub const COL_GENDER: &str = "Gender";
pub const COL_BIRTH_YEAR: &str = "Birth Year";

/// Columns every city file must provide.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    COL_START_TIME,
    COL_TRIP_DURATION,
    COL_START_STATION,
    COL_END_STATION,
];

/// One CSV row as deserialized by header name.
/// Gender / Birth Year are absent from the Washington file.
#[derive(Debug, Deserialize)]
pub struct TripRecord {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "Trip Duration", default)]
    pub trip_duration: Option<f64>,
    #[serde(rename = "Start Station", default)]
    pub start_station: Option<String>,
    #[serde(rename = "End Station", default)]
    pub end_station: Option<String>,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// A trip with its derived time columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub index: usize,            // row position in the original file
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime, // mirrors start_time, as the data loader always did
    pub trip_duration: Option<f64>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
    pub month: Month,
    pub day: Weekday,
}

impl Trip {
    pub fn from_record(index: usize, start_time: NaiveDateTime, rec: TripRecord) -> Self {
        let month = month_of(&start_time);
        Self {
            index,
            start_time,
            end_time: start_time,
            trip_duration: rec.trip_duration,
            start_station: non_blank(rec.start_station),
            end_station: non_blank(rec.end_station),
            user_type: non_blank(rec.user_type),
            gender: non_blank(rec.gender),
            birth_year: rec.birth_year,
            month,
            day: start_time.weekday(),
        }
    }

    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }

    pub fn day_name(&self) -> &'static str {
        weekday_name(self.day)
    }

    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }

    /// "<start> to <end>", only when both stations are known.
    pub fn route(&self) -> Option<String> {
        match (&self.start_station, &self.end_station) {
            (Some(start), Some(end)) => Some(format!("{start} to {end}")),
            _ => None,
        }
    }
}

fn month_of(ts: &NaiveDateTime) -> Month {
    // month() is always 1..=12
    Month::try_from(ts.month() as u8).unwrap_or(Month::January)
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}
