//! Month / day filter selection chosen once per session cycle.

use super::city::City;
use crate::errors::AppError;
use crate::utils::time::weekday_name;
use chrono::{Month, Weekday};
use std::fmt;

/// Answer selecting every month or every day.
pub const ALL: &str = "all";

/// Months covered by the datasets, as accepted from the user (lower-case).
pub const VALID_MONTHS: [(&str, Month); 6] = [
    ("january", Month::January),
    ("february", Month::February),
    ("march", Month::March),
    ("april", Month::April),
    ("may", Month::May),
    ("june", Month::June),
];

/// Accepted week days (lower-case). "thursday" is not part of the set.
pub const VALID_DAYS: [(&str, Weekday); 6] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

/// Either "all" (no filtering) or a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl fmt::Display for Selection<Month> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("all"),
            Selection::Only(m) => f.write_str(m.name()),
        }
    }
}

impl fmt::Display for Selection<Weekday> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("all"),
            Selection::Only(d) => f.write_str(weekday_name(*d)),
        }
    }
}

pub type MonthSelection = Selection<Month>;
pub type DaySelection = Selection<Weekday>;

/// Look `input` up in `table`, "all" selecting everything.
fn parse_selection<T: Copy>(input: &str, table: &[(&str, T)]) -> Option<Selection<T>> {
    let answer = input.trim().to_lowercase();
    if answer == ALL {
        return Some(Selection::All);
    }
    table
        .iter()
        .find(|(name, _)| *name == answer)
        .map(|(_, v)| Selection::Only(*v))
}

/// Accepted answers of `table` plus "all", for error messages.
fn accepted<T>(table: &[(&str, T)]) -> String {
    table
        .iter()
        .map(|(name, _)| *name)
        .chain([ALL])
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a month answer against [`VALID_MONTHS`].
pub fn parse_month(input: &str) -> Option<MonthSelection> {
    parse_selection(input, &VALID_MONTHS)
}

/// Parse a day answer against [`VALID_DAYS`].
pub fn parse_day(input: &str) -> Option<DaySelection> {
    parse_selection(input, &VALID_DAYS)
}

/// clap value parser for `--month`.
pub fn parse_month_arg(s: &str) -> Result<MonthSelection, String> {
    parse_month(s).ok_or_else(|| {
        AppError::InvalidMonth(format!("'{}' (expected one of: {})", s, accepted(&VALID_MONTHS)))
            .to_string()
    })
}

/// clap value parser for `--day`.
pub fn parse_day_arg(s: &str) -> Result<DaySelection, String> {
    parse_day(s).ok_or_else(|| {
        AppError::InvalidDay(format!("'{}' (expected one of: {})", s, accepted(&VALID_DAYS)))
            .to_string()
    })
}

/// The (city, month, day) triple driving one report cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filters {
    pub city: City,
    pub month: MonthSelection,
    pub day: DaySelection,
}

impl Filters {
    pub fn new(city: City, month: MonthSelection, day: DaySelection) -> Self {
        Self { city, month, day }
    }
}

/// Filter values supplied up front (command line); missing ones are prompted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterPreset {
    pub city: Option<City>,
    pub month: Option<MonthSelection>,
    pub day: Option<DaySelection>,
}
