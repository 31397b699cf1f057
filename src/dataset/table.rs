//! In-memory tables: the untouched file contents and the typed, filtered trips.

use crate::errors::{AppError, AppResult};
use crate::models::trip::{
    COL_BIRTH_YEAR, COL_END_STATION, COL_END_TIME, COL_GENDER, COL_START_STATION,
    COL_START_TIME, COL_TRIP_DURATION, COL_USER_TYPE, REQUIRED_COLUMNS, TripRecord,
};
use crate::models::{City, DaySelection, MonthSelection, Selection, Trip};
use crate::utils::formatting::format_float;
use crate::utils::time::parse_timestamp;
use csv::StringRecord;
use std::path::{Path, PathBuf};

const TIMESTAMP_DISPLAY: &str = "%Y-%m-%d %H:%M:%S";

/// Anything the table viewer can page through.
pub trait TabularView {
    /// Column headers, index column excluded.
    fn columns(&self) -> Vec<String>;

    fn row_count(&self) -> usize;

    /// Index label and cells of the row at position `pos`.
    fn row(&self, pos: usize) -> Option<(usize, Vec<String>)>;
}

/// A city file exactly as read from disk.
#[derive(Debug, Clone)]
pub struct RawTable {
    path: PathBuf,
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl RawTable {
    pub fn new(path: PathBuf, headers: StringRecord, records: Vec<StringRecord>) -> Self {
        Self {
            path,
            headers,
            records,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn records(&self) -> &[StringRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }
}

impl TabularView for RawTable {
    fn columns(&self) -> Vec<String> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if h.is_empty() {
                    format!("Unnamed: {i}")
                } else {
                    h.to_string()
                }
            })
            .collect()
    }

    fn row_count(&self) -> usize {
        self.records.len()
    }

    fn row(&self, pos: usize) -> Option<(usize, Vec<String>)> {
        self.records
            .get(pos)
            .map(|r| (pos, r.iter().map(str::to_string).collect()))
    }
}

/// Trips with derived time columns, possibly restricted to a month and/or day.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    city: City,
    trips: Vec<Trip>,
}

impl TripTable {
    /// Parse every raw record into a [`Trip`].
    pub fn from_raw(raw: &RawTable, city: City) -> AppResult<Self> {
        for column in REQUIRED_COLUMNS {
            if !raw.has_column(column) {
                return Err(AppError::MissingColumn {
                    path: raw.path().to_path_buf(),
                    column: column.to_string(),
                });
            }
        }

        let mut trips = Vec::with_capacity(raw.len());
        for (index, record) in raw.records().iter().enumerate() {
            let mut rec: TripRecord =
                record
                    .deserialize(Some(raw.headers()))
                    .map_err(|source| AppError::Csv {
                        path: raw.path().to_path_buf(),
                        source,
                    })?;

            if !city.has_demographics() {
                rec.gender = None;
                rec.birth_year = None;
            }

            let start = parse_timestamp(&rec.start_time).ok_or_else(|| {
                AppError::InvalidTimestamp {
                    value: rec.start_time.clone(),
                    row: index,
                }
            })?;

            trips.push(Trip::from_record(index, start, rec));
        }

        Ok(Self { city, trips })
    }

    /// Keep trips of the given month and day. `All` leaves that dimension alone.
    pub fn filter(&self, month: MonthSelection, day: DaySelection) -> TripTable {
        let trips = self
            .trips
            .iter()
            .filter(|t| match month {
                Selection::All => true,
                Selection::Only(m) => t.month_name() == m.name(),
            })
            .filter(|t| match day {
                Selection::All => true,
                Selection::Only(d) => t.day == d,
            })
            .cloned()
            .collect();

        TripTable {
            city: self.city,
            trips,
        }
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Original row positions of the kept trips.
    pub fn indices(&self) -> Vec<usize> {
        self.trips.iter().map(|t| t.index).collect()
    }
}

impl TabularView for TripTable {
    fn columns(&self) -> Vec<String> {
        let mut cols = vec![
            COL_START_TIME,
            COL_END_TIME,
            COL_TRIP_DURATION,
            COL_START_STATION,
            COL_END_STATION,
            COL_USER_TYPE,
        ];
        if self.city.has_demographics() {
            cols.push(COL_GENDER);
            cols.push(COL_BIRTH_YEAR);
        }
        cols.push("Month");
        cols.push("Day");
        cols.into_iter().map(String::from).collect()
    }

    fn row_count(&self) -> usize {
        self.trips.len()
    }

    fn row(&self, pos: usize) -> Option<(usize, Vec<String>)> {
        let t = self.trips.get(pos)?;
        let missing = || "NaN".to_string();

        let mut cells = vec![
            t.start_time.format(TIMESTAMP_DISPLAY).to_string(),
            t.end_time.format(TIMESTAMP_DISPLAY).to_string(),
            t.trip_duration.map(format_float).unwrap_or_else(missing),
            t.start_station.clone().unwrap_or_else(missing),
            t.end_station.clone().unwrap_or_else(missing),
            t.user_type.clone().unwrap_or_else(missing),
        ];
        if self.city.has_demographics() {
            cells.push(t.gender.clone().unwrap_or_else(missing));
            cells.push(t.birth_year.map(format_float).unwrap_or_else(missing));
        }
        cells.push(t.month_name().to_string());
        cells.push(t.day_name().to_string());

        Some((t.index, cells))
    }
}
