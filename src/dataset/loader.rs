//! City CSV loading and month/day filtering.

use super::table::{RawTable, TripTable};
use crate::errors::{AppError, AppResult};
use crate::models::{City, DaySelection, MonthSelection};
use std::path::PathBuf;
use tracing::{debug, info};

/// Both tables of one report cycle.
#[derive(Debug, Clone)]
pub struct LoadedData {
    pub filtered: TripTable,
    pub original: RawTable,
}

pub struct DatasetLoader {
    data_dir: PathBuf,
}

impl DatasetLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the CSV file backing `city`.
    pub fn path_for(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }

    /// Read a city's file without touching its contents.
    pub fn read_original(&self, city: City) -> AppResult<RawTable> {
        let path = self.path_for(city);
        if !path.is_file() {
            return Err(AppError::DataFileMissing(path));
        }

        let csv_err = |source: csv::Error| AppError::Csv {
            path: path.clone(),
            source,
        };

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_path(&path)
            .map_err(csv_err)?;

        let headers = rdr.headers().map_err(csv_err)?.clone();

        let mut records = Vec::new();
        for record in rdr.records() {
            records.push(record.map_err(csv_err)?);
        }

        debug!("read {} rows from {}", records.len(), path.display());
        Ok(RawTable::new(path, headers, records))
    }

    /// Load `city` and restrict it to `month` / `day`.
    ///
    /// Returns the filtered trips together with the untouched original table.
    pub fn load(
        &self,
        city: &str,
        month: MonthSelection,
        day: DaySelection,
    ) -> AppResult<LoadedData> {
        let city = City::lookup(city)?;
        let original = self.read_original(city)?;

        let all_trips = TripTable::from_raw(&original, city)?;
        let filtered = all_trips.filter(month, day);

        info!(
            city = city.key(),
            %month,
            %day,
            "kept {} of {} trips",
            filtered.len(),
            original.len()
        );

        Ok(LoadedData { filtered, original })
    }
}
