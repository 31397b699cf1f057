use crate::errors::{AppError, AppResult};
use std::fmt;

/// City key → backing CSV file name.
pub const CITY_DATA: [(&str, &str); 3] = [
    ("chicago", "chicago.csv"),
    ("new york city", "new_york_city.csv"),
    ("washington", "washington.csv"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lower-case lookup key, as typed at the prompt.
    pub fn key(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// Name of the CSV file holding this city's trips.
    pub fn file_name(&self) -> &'static str {
        CITY_DATA
            .iter()
            .find(|(key, _)| *key == self.key())
            .map(|(_, file)| *file)
            .unwrap_or_default()
    }

    /// The Washington dataset carries no Gender / Birth Year columns.
    pub fn has_demographics(&self) -> bool {
        !matches!(self, City::Washington)
    }

    /// Helper: convert user input (any case, surrounding blanks) to a city
    pub fn from_input(input: &str) -> Option<Self> {
        let key = input.trim().to_lowercase();
        City::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Like [`City::from_input`], but unknown names are a lookup error.
    pub fn lookup(name: &str) -> AppResult<Self> {
        City::from_input(name).ok_or_else(|| AppError::UnknownCity(name.to_string()))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// clap value parser for `--city`.
pub fn parse_city_arg(s: &str) -> Result<City, String> {
    City::from_input(s).ok_or_else(|| {
        format!(
            "unknown city '{}' (expected one of: {})",
            s,
            CITY_DATA
                .iter()
                .map(|(k, _)| *k)
                .collect::<Vec<_>>()
                .join(", ")
        )
    })
}
