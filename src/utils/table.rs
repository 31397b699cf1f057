//! Table rendering utilities for CLI outputs.

use super::formatting::{pad_left, pad_right};
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table whose column widths fit the headers.
    /// Widths grow as rows are added.
    pub fn with_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        let columns = headers
            .iter()
            .map(|h| Column {
                header: h.as_ref().to_string(),
                width: h.as_ref().width(),
            })
            .collect();
        Self::new(columns)
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(row.iter()) {
            col.width = col.width.max(cell.width());
        }
        self.rows.push(row);
    }

    /// The first column is the index and is right-aligned, the rest are left-aligned.
    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for (i, col) in self.columns.iter().enumerate() {
            out.push_str(&cell(&col.header, col.width, i == 0));
        }
        out.truncate(out.trim_end().len());
        out.push('\n');

        // Rows
        for row in &self.rows {
            let mut line = String::new();
            for (i, col) in self.columns.iter().enumerate() {
                let value = row.get(i).map(String::as_str).unwrap_or("");
                line.push_str(&cell(value, col.width, i == 0));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }
}

fn cell(value: &str, width: usize, right: bool) -> String {
    if right {
        format!("{}  ", pad_left(value, width))
    } else {
        format!("{}  ", pad_right(value, width))
    }
}
