//! Unified application error type.
//! All modules (dataset, core, cli, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// The user pressed Ctrl-C (or closed stdin) at a prompt.
    #[error("Program cancelled")]
    Cancelled,

    // ---------------------------
    // Dataset-related
    // ---------------------------
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    #[error("Data file not found: {}", .0.display())]
    DataFileMissing(PathBuf),

    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Missing column '{column}' in {}", .path.display())]
    MissingColumn { path: PathBuf, column: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp '{value}' at row {row}")]
    InvalidTimestamp { value: String, row: usize },

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid day: {0}")]
    InvalidDay(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

impl AppError {
    /// Errors raised while loading a city dataset. The session reports them
    /// and moves on to the restart question instead of aborting.
    pub fn is_dataset_error(&self) -> bool {
        matches!(
            self,
            AppError::DataFileMissing(_)
                | AppError::Csv { .. }
                | AppError::MissingColumn { .. }
                | AppError::InvalidTimestamp { .. }
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
