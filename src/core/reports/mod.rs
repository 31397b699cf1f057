//! The four statistics reports printed for every session cycle.
//!
//! Each report reads the filtered table, writes its lines and then the time
//! it took, followed by the section separator.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

use crate::dataset::TripTable;
use crate::errors::AppResult;
use crate::models::Filters;
use std::io::{self, Write};
use std::time::Instant;

pub const NO_TRIPS: &str = "No trips match the selected filters.";

/// Print `title`, run `body`, then report the elapsed time.
pub(crate) fn timed<F>(out: &mut dyn Write, title: &str, separator: &str, body: F) -> AppResult<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    writeln!(out, "\n{title}\n")?;
    let started = Instant::now();

    body(&mut *out)?;

    writeln!(out, "\nThis took {} seconds.", started.elapsed().as_secs_f64())?;
    writeln!(out, "{separator}")?;
    Ok(())
}

/// Run all reports in order.
pub fn run_all(
    out: &mut dyn Write,
    table: &TripTable,
    filters: &Filters,
    separator: &str,
) -> AppResult<()> {
    time::report(out, table, filters, separator)?;
    station::report(out, table, separator)?;
    duration::report(out, table, separator)?;
    user::report(out, table, filters.city, separator)?;
    Ok(())
}
