//! Line-oriented prompting.
//!
//! A [`LineReader`] fetches one answer (from the terminal line editor or from
//! any buffered stream). [`Console`] pairs it with the output and adds the
//! validated questions used by the session.

use crate::errors::{AppError, AppResult};
use crate::models::filters::{parse_day, parse_month};
use crate::models::{City, DaySelection, MonthSelection};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};

pub const CANCELLED_NOTICE: &str = " Program cancelled.";

pub const CITY_PROMPT: &str = "Please enter a city (Chicago, New York City, Washington) that you would like to get evaluations from: ";
pub const MONTH_PROMPT: &str = "Please enter a month (full word) that you would like to get evaluations from (from January to June).\nAlternatively type \"all\": ";
pub const DAY_PROMPT: &str = "Please enter a week day (full word) that you would like to get evaluations from.\nAlternatively type \"all\": ";

const ACCEPTED: &str = "Thank you for the input.\n";

/// Source of user answers.
pub trait LineReader {
    /// Show `prompt` and return the next line without its terminator.
    /// Ctrl-C and end of input yield [`AppError::Cancelled`].
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> AppResult<String>;
}

/// Interactive terminal input through rustyline.
pub struct TerminalReader {
    editor: DefaultEditor,
}

impl TerminalReader {
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineReader for TerminalReader {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> AppResult<String> {
        // the editor only redraws the last prompt line
        let (head, last) = match prompt.rsplit_once('\n') {
            Some((head, last)) => (Some(head), last),
            None => (None, prompt),
        };
        if let Some(head) = head {
            writeln!(out, "{head}")?;
        }
        out.flush()?;

        match self.editor.readline(last) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(line)
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Err(AppError::Cancelled),
            Err(e) => Err(e.into()),
        }
    }
}

/// Reads answers line by line from a buffered stream (pipes, scripted tests).
pub struct StreamReader<B> {
    input: B,
}

impl<B: BufRead> StreamReader<B> {
    pub fn new(input: B) -> Self {
        Self { input }
    }
}

impl<B: BufRead> LineReader for StreamReader<B> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> AppResult<String> {
        write!(out, "{prompt}")?;
        out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::Cancelled);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Input and output of one interactive run.
pub struct Console<R, W> {
    reader: R,
    out: W,
}

impl<R: LineReader, W: Write> Console<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Ask once. On cancellation the notice is printed before the error
    /// is handed back to the caller.
    pub fn prompt(&mut self, message: &str) -> AppResult<String> {
        match self.reader.read_line(message, &mut self.out) {
            Err(AppError::Cancelled) => {
                writeln!(self.out, "{CANCELLED_NOTICE}")?;
                self.out.flush()?;
                Err(AppError::Cancelled)
            }
            other => other,
        }
    }

    /// Ask until `parse` accepts the lower-cased answer.
    fn ask_until<T>(
        &mut self,
        message: &str,
        field: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> AppResult<T> {
        loop {
            let answer = self.prompt(message)?.trim().to_lowercase();
            match parse(&answer) {
                Some(value) => {
                    writeln!(self.out, "{ACCEPTED}")?;
                    return Ok(value);
                }
                None => {
                    tracing::debug!(field, answer = answer.as_str(), "rejected input");
                    writeln!(self.out, "No valid {field} was entered. Please try again.")?;
                }
            }
        }
    }

    pub fn ask_city(&mut self) -> AppResult<City> {
        self.ask_until(CITY_PROMPT, "city", City::from_input)
    }

    pub fn ask_month(&mut self) -> AppResult<MonthSelection> {
        self.ask_until(MONTH_PROMPT, "month", parse_month)
    }

    pub fn ask_day(&mut self) -> AppResult<DaySelection> {
        self.ask_until(DAY_PROMPT, "day", parse_day)
    }

    /// `true` only for a literal "yes".
    pub fn confirm(&mut self, message: &str) -> AppResult<bool> {
        Ok(self.prompt(message)?.trim() == "yes")
    }
}
