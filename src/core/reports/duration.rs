use super::{NO_TRIPS, timed};
use crate::core::stats::{mean, sum};
use crate::dataset::TripTable;
use crate::errors::AppResult;
use crate::utils::time::{hours_to_days, seconds_to_hours, seconds_to_minutes};
use std::io::Write;

pub const NO_DURATION_DATA: &str = "None of the selected trips has a trip duration.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total_hours: f64,
    pub mean_minutes: f64,
}

impl DurationStats {
    /// Trips without a duration are skipped. `None` when nothing is left.
    pub fn compute(table: &TripTable) -> Option<Self> {
        let secs: Vec<f64> = table.trips().iter().filter_map(|t| t.trip_duration).collect();
        let mean_secs = mean(&secs)?;

        Some(Self {
            total_hours: seconds_to_hours(sum(&secs)),
            mean_minutes: seconds_to_minutes(mean_secs),
        })
    }
}

/// Total and average trip duration.
pub fn report(out: &mut dyn Write, table: &TripTable, separator: &str) -> AppResult<()> {
    timed(out, "Calculating Trip Duration...", separator, |out| {
        if table.is_empty() {
            return writeln!(out, "{NO_TRIPS}");
        }
        let Some(stats) = DurationStats::compute(table) else {
            return writeln!(out, "{NO_DURATION_DATA}");
        };

        let (days, rest) = hours_to_days(stats.total_hours);
        writeln!(
            out,
            "The total travel time is: {:.2} hours or {:.0} days and {:.2} hours",
            stats.total_hours, days, rest
        )?;
        writeln!(out, "The mean travel time is: {:.2} minutes", stats.mean_minutes)
    })
}
