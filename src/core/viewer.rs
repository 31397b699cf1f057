//! Page-by-page display of a table, driven by yes/no answers.

use crate::dataset::TabularView;
use crate::errors::AppResult;
use crate::models::City;
use crate::ui::{Console, LineReader};
use crate::utils::table::Table;
use std::io::Write;

pub const ORIGINAL_LABEL: &str = "ORIGINAL";
pub const MODIFIED_LABEL: &str = "MODIFIED (filtered, additional functional columns)";

/// Render rows `[offset, offset + size)`. Past the end an empty table is shown.
pub fn render_page(table: &dyn TabularView, offset: usize, size: usize) -> String {
    let columns = table.columns();
    let end = offset.saturating_add(size).min(table.row_count());

    if offset >= end {
        return format!(
            "Empty table\nColumns: [{}]\nIndex: []\n",
            columns.join(", ")
        );
    }

    let mut headers = vec![String::new()];
    headers.extend(columns);

    let mut page = Table::with_headers(&headers);
    for pos in offset..end {
        if let Some((index, cells)) = table.row(pos) {
            let mut row = Vec::with_capacity(cells.len() + 1);
            row.push(index.to_string());
            row.extend(cells);
            page.add_row(row);
        }
    }
    page.render()
}

pub struct TableViewer {
    page_size: usize,
}

impl TableViewer {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    /// Offer `table` page by page until the answer is not "yes".
    /// Returns the number of pages printed.
    pub fn show<R: LineReader, W: Write>(
        &self,
        console: &mut Console<R, W>,
        table: &dyn TabularView,
        label: &str,
        city: City,
    ) -> AppResult<usize> {
        let n = self.page_size;
        let first = format!(
            "\nDo you want to see the first {n} rows of the {label} DataFrame for {city}?\nEnter \"yes\" or \"no\": "
        );
        let more = format!("\nDo you want to see {n} more rows?\n");

        let mut offset = 0;
        let mut pages = 0;
        let mut wanted = console.confirm(&first)?;

        while wanted {
            write!(console.out(), "{}", render_page(table, offset, n))?;
            offset += n;
            pages += 1;
            wanted = console.confirm(&more)?;
        }

        Ok(pages)
    }
}
