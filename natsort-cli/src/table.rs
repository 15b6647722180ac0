//! Line and table-row sorting
//!
//! Each input line is a row. With `column = 0` the whole line is the sort
//! value; otherwise the value is the 1-based cell after splitting on the
//! delimiter (runs of whitespace when the delimiter is empty). Rows without
//! that cell sort as missing values.

use natsort::natural::{SortType, Value};
use natsort_config::TableConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    pub delimiter: String,
    pub column: usize,
    pub header: bool,
}

impl TableLayout {
    pub fn from_config(config: &TableConfig) -> Self {
        TableLayout {
            delimiter: config.delimiter.clone(),
            column: config.column,
            header: config.header,
        }
    }

    /// The sort value of a row.
    pub fn cell<'a>(&self, line: &'a str) -> Option<&'a str> {
        let index = match self.column {
            0 => return Some(line),
            column => column - 1,
        };
        if self.delimiter.is_empty() {
            line.split_whitespace().nth(index)
        } else {
            line.split(self.delimiter.as_str()).nth(index)
        }
    }
}

/// Input rows, with the header (if any) held apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<'a> {
    header: Option<&'a str>,
    rows: Vec<&'a str>,
}

impl<'a> Table<'a> {
    pub fn parse(source: &'a str, layout: &TableLayout) -> Self {
        let mut lines = source.lines();
        let header = if layout.header { lines.next() } else { None };
        Table {
            header,
            rows: lines.collect(),
        }
    }

    pub fn rows(&self) -> &[&'a str] {
        &self.rows
    }

    /// Stable sort of the data rows; the header stays first.
    pub fn sort(&mut self, layout: &TableLayout, sort_type: &dyn SortType) {
        let cells: Vec<Value<'a>> = self
            .rows
            .iter()
            .map(|row| Value::from(layout.cell(*row)))
            .collect();
        let sorted: Vec<&'a str> = sort_type
            .sort_order(&cells)
            .into_iter()
            .map(|index| self.rows[index])
            .collect();
        self.rows = sorted;
    }

    /// All output lines: header first, then rows.
    pub fn lines(&self) -> Vec<&'a str> {
        self.header.iter().chain(self.rows.iter()).copied().collect()
    }
}
