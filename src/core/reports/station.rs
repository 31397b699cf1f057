use super::{NO_TRIPS, timed};
use crate::core::stats::mode;
use crate::dataset::TripTable;
use crate::errors::AppResult;
use std::io::Write;

pub const NO_STATION_DATA: &str = "no station information";

/// Blank station cells are left out; a field stays `None` when no trip
/// has a value for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    /// "<start> to <end>"
    pub route: Option<String>,
}

impl StationStats {
    /// `None` when the table has no trips.
    pub fn compute(table: &TripTable) -> Option<Self> {
        let trips = table.trips();
        if trips.is_empty() {
            return None;
        }

        Some(Self {
            start_station: mode(trips.iter().filter_map(|t| t.start_station.as_deref()))
                .map(str::to_string),
            end_station: mode(trips.iter().filter_map(|t| t.end_station.as_deref()))
                .map(str::to_string),
            route: mode(trips.iter().filter_map(|t| t.route())),
        })
    }
}

/// Most popular stations and trip.
pub fn report(out: &mut dyn Write, table: &TripTable, separator: &str) -> AppResult<()> {
    timed(
        out,
        "Calculating The Most Popular Stations and Trip...",
        separator,
        |out| {
            let Some(stats) = StationStats::compute(table) else {
                return writeln!(out, "{NO_TRIPS}");
            };

            writeln!(
                out,
                "The most common start station of bike rental is: {}",
                stats.start_station.as_deref().unwrap_or(NO_STATION_DATA)
            )?;
            writeln!(
                out,
                "The most common end station of bike rental is: {}",
                stats.end_station.as_deref().unwrap_or(NO_STATION_DATA)
            )?;
            match stats.route {
                Some(route) => writeln!(out, "The most common route of bike rental is: from {route}"),
                None => writeln!(out, "The most common route of bike rental is: {NO_STATION_DATA}"),
            }
        },
    )
}
