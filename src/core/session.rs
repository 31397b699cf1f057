//! The interactive loop: collect filters, report, browse tables, maybe restart.

use crate::config::Config;
use crate::core::reports;
use crate::core::viewer::{MODIFIED_LABEL, ORIGINAL_LABEL, TableViewer};
use crate::dataset::DatasetLoader;
use crate::errors::AppResult;
use crate::models::{FilterPreset, Filters};
use crate::ui::messages;
use crate::ui::{Console, LineReader};
use std::io::Write;
use tracing::{debug, warn};

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
pub const RESTART_PROMPT: &str = "\nWould you like to restart? Enter \"yes\" or \"no\":\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Collecting,
    DecidingRestart,
    Terminated,
}

pub struct Session<'a, R, W> {
    console: Console<R, W>,
    cfg: &'a Config,
    loader: DatasetLoader,
    preset: FilterPreset,
    cycles: usize,
}

impl<'a, R: LineReader, W: Write> Session<'a, R, W> {
    pub fn new(console: Console<R, W>, cfg: &'a Config, preset: FilterPreset) -> Self {
        Self {
            console,
            cfg,
            loader: DatasetLoader::new(cfg.data_path()),
            preset,
            cycles: 0,
        }
    }

    /// Number of completed report cycles.
    pub fn cycles(&self) -> usize {
        self.cycles
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run until the user declines to restart.
    /// Cancellation at any prompt comes back as `AppError::Cancelled`.
    pub fn run(&mut self) -> AppResult<()> {
        let mut state = SessionState::Collecting;

        while state != SessionState::Terminated {
            state = match state {
                SessionState::Collecting => {
                    let filters = self.collect_filters()?;
                    self.run_cycle(&filters)?;
                    self.cycles += 1;
                    SessionState::DecidingRestart
                }
                SessionState::DecidingRestart => {
                    let answer = self.console.prompt(RESTART_PROMPT)?;
                    if answer.trim().eq_ignore_ascii_case("yes") {
                        writeln!(self.console.out(), "\nRestart:")?;
                        SessionState::Collecting
                    } else {
                        SessionState::Terminated
                    }
                }
                SessionState::Terminated => SessionState::Terminated,
            };
        }

        self.console.out().flush()?;
        Ok(())
    }

    /// Ask for city, month and day. Preset values are used once, then cleared.
    fn collect_filters(&mut self) -> AppResult<Filters> {
        let preset = std::mem::take(&mut self.preset);

        writeln!(self.console.out(), "{GREETING}")?;

        let city = match preset.city {
            Some(c) => c,
            None => self.console.ask_city()?,
        };
        let month = match preset.month {
            Some(m) => m,
            None => self.console.ask_month()?,
        };
        let day = match preset.day {
            Some(d) => d,
            None => self.console.ask_day()?,
        };

        writeln!(self.console.out(), "{}", self.cfg.separator())?;

        let filters = Filters::new(city, month, day);
        debug!(?filters, "filters collected");
        Ok(filters)
    }

    /// Load, report and offer both tables for one filter selection.
    fn run_cycle(&mut self, filters: &Filters) -> AppResult<()> {
        let data = match self
            .loader
            .load(filters.city.key(), filters.month, filters.day)
        {
            Ok(data) => data,
            Err(e) if e.is_dataset_error() => {
                warn!("could not load {}: {}", filters.city, e);
                messages::error(self.console.out(), &e)?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        if data.filtered.is_empty() {
            messages::warning(
                self.console.out(),
                format!(
                    "No {} trips for month {} and day {}.",
                    filters.city, filters.month, filters.day
                ),
            )?;
        }

        let separator = self.cfg.separator();
        reports::run_all(self.console.out(), &data.filtered, filters, &separator)?;

        let viewer = TableViewer::new(self.cfg.page_size);
        viewer.show(&mut self.console, &data.original, ORIGINAL_LABEL, filters.city)?;
        viewer.show(&mut self.console, &data.filtered, MODIFIED_LABEL, filters.city)?;

        Ok(())
    }
}
