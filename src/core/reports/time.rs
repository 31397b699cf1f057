use super::{NO_TRIPS, timed};
use crate::core::stats::mode;
use crate::dataset::TripTable;
use crate::errors::AppResult;
use crate::models::{DaySelection, Filters, MonthSelection, Selection};
use crate::utils::time::weekday_name;
use std::io::Write;

/// Outcome of a "most common month/day" question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// The user filtered on this value, so nothing is computed.
    Chosen(&'static str),
    Common(&'static str),
    NoData,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub month: Evaluation,
    pub day: Evaluation,
    pub hour: Option<u32>,
}

impl TimeStats {
    pub fn compute(table: &TripTable, month: MonthSelection, day: DaySelection) -> Self {
        let trips = table.trips();

        let month = match month {
            Selection::Only(m) => Evaluation::Chosen(m.name()),
            Selection::All => mode(trips.iter().map(|t| t.month_name()))
                .map_or(Evaluation::NoData, Evaluation::Common),
        };

        let day = match day {
            Selection::Only(d) => Evaluation::Chosen(weekday_name(d)),
            Selection::All => mode(trips.iter().map(|t| t.day_name()))
                .map_or(Evaluation::NoData, Evaluation::Common),
        };

        let hour = mode(trips.iter().map(|t| t.hour()));

        Self { month, day, hour }
    }
}

/// Most frequent times of travel.
pub fn report(
    out: &mut dyn Write,
    table: &TripTable,
    filters: &Filters,
    separator: &str,
) -> AppResult<()> {
    timed(
        out,
        "Calculating The Most Frequent Times of Travel...",
        separator,
        |out| {
            let stats = TimeStats::compute(table, filters.month, filters.day);

            match stats.month {
                Evaluation::Common(m) => {
                    writeln!(out, "The most common month of bike rental is: {m}")?
                }
                Evaluation::Chosen(m) => writeln!(
                    out,
                    "You chose the month {m}. Therefore, no month evaluation takes place."
                )?,
                Evaluation::NoData => writeln!(out, "{NO_TRIPS}")?,
            }

            match stats.day {
                Evaluation::Common(d) => writeln!(out, "The most common day of bike rental is: {d}")?,
                Evaluation::Chosen(d) => writeln!(
                    out,
                    "You chose the day {d}. Therefore, no day evaluation takes place."
                )?,
                Evaluation::NoData => writeln!(out, "{NO_TRIPS}")?,
            }

            match stats.hour {
                Some(h) => writeln!(
                    out,
                    "The most common hour of bike rental is: between {} o'clock and {} o'clock",
                    h,
                    h + 1
                )?,
                None => writeln!(out, "{NO_TRIPS}")?,
            }
            Ok(())
        },
    )
}
