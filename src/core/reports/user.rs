use super::{NO_TRIPS, timed};
use crate::core::stats::{Summary, describe, value_counts};
use crate::dataset::TripTable;
use crate::errors::AppResult;
use crate::models::City;
use crate::utils::formatting::format_counts;
use std::io::{self, Write};

pub const NO_GENDER_INFO: &str = "The Washington file does not contain any gender information.";
pub const NO_BIRTH_YEAR_INFO: &str =
    "The Washington file does not contain any year of birth information.";

/// A statistic the dataset may not be able to provide.
#[derive(Debug, Clone, PartialEq)]
pub enum Demographic<T> {
    Available(T),
    Unavailable(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub genders: Demographic<Vec<(String, usize)>>,
    pub birth_years: Demographic<Option<Summary>>,
}

impl UserStats {
    pub fn compute(table: &TripTable, city: City) -> Self {
        let trips = table.trips();

        let user_types = owned(value_counts(
            trips.iter().filter_map(|t| t.user_type.as_deref()),
        ));

        if !city.has_demographics() {
            return Self {
                user_types,
                genders: Demographic::Unavailable(NO_GENDER_INFO),
                birth_years: Demographic::Unavailable(NO_BIRTH_YEAR_INFO),
            };
        }

        let genders = owned(value_counts(
            trips.iter().filter_map(|t| t.gender.as_deref()),
        ));
        let years: Vec<f64> = trips.iter().filter_map(|t| t.birth_year).collect();

        Self {
            user_types,
            genders: Demographic::Available(genders),
            birth_years: Demographic::Available(describe(&years)),
        }
    }
}

fn owned(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

fn write_counts(out: &mut dyn Write, counts: &[(String, usize)]) -> io::Result<()> {
    if counts.is_empty() {
        writeln!(out, "{NO_TRIPS}")
    } else {
        writeln!(out, "{}", format_counts(counts))
    }
}

fn write_summary(out: &mut dyn Write, summary: &Option<Summary>) -> io::Result<()> {
    let Some(s) = summary else {
        return writeln!(out, "{NO_TRIPS}");
    };
    let rows = [
        ("count", s.count.to_string()),
        ("mean", format!("{:.2}", s.mean)),
        ("min", format!("{:.2}", s.min)),
        ("25%", format!("{:.2}", s.q25)),
        ("50%", format!("{:.2}", s.median)),
        ("75%", format!("{:.2}", s.q75)),
        ("max", format!("{:.2}", s.max)),
    ];
    writeln!(out, "{}", format_counts(&rows))
}

/// User type counts, and gender / birth year where the city records them.
pub fn report(out: &mut dyn Write, table: &TripTable, city: City, separator: &str) -> AppResult<()> {
    timed(out, "Calculating User Stats...", separator, |out| {
        let stats = UserStats::compute(table, city);

        writeln!(out, "Count of user types:")?;
        write_counts(out, &stats.user_types)?;
        writeln!(out)?;

        writeln!(out, "Count of genders:")?;
        match &stats.genders {
            Demographic::Available(counts) => write_counts(out, counts)?,
            Demographic::Unavailable(msg) => writeln!(out, "{msg}")?,
        }
        writeln!(out)?;

        writeln!(out, "Year of birth information:")?;
        match &stats.birth_years {
            Demographic::Available(summary) => write_summary(out, summary)?,
            Demographic::Unavailable(msg) => writeln!(out, "{msg}")?,
        }
        writeln!(out)
    })
}
