//! In-memory table and its comma-separated text form.
//!
//! Cells are `Option<String>`; the `NA` sentinel exists only in text. The
//! format has no quoting: a comma inside a value cannot be represented.

use std::io::{self, Write};

/// Text sentinel for an absent value.
pub const NA: &str = "NA";

pub type Cell = Option<String>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TableError {
    #[error("table text has no header row")]
    Empty,

    #[error("row {line} has {found} fields, header has {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Header plus rows of cells.
///
/// Every row is exactly `header.len()` cells wide. The fields are public for
/// reading and for the query operations that build tables column by column;
/// anything assembling rows from outside input should go through
/// [`Table::with_rows`] or [`Table::push_row`], which enforce the width.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// Table with `rows`, rejecting any row whose width differs from the
    /// header's. `line` in the error counts the header as line 1.
    pub fn with_rows(header: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self, TableError> {
        let mut table = Self::new(header);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<(), TableError> {
        if row.len() != self.header.len() {
            return Err(TableError::RaggedRow {
                line: self.rows.len() + 2,
                expected: self.header.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.header.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first header equal to `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// Parses comma-separated text; `NA` becomes `None`. Only the final line
    /// terminator is dropped, so an empty line inside the text is a row of
    /// one empty cell.
    pub fn from_csv_str(text: &str) -> Result<Self, TableError> {
        let body = text.strip_suffix('\n').unwrap_or(text);
        if body.is_empty() {
            return Err(TableError::Empty);
        }
        let mut lines = body
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .enumerate();
        let header: Vec<String> = match lines.next() {
            Some((_, line)) => line.split(',').map(str::to_string).collect(),
            None => return Err(TableError::Empty),
        };

        let mut rows = Vec::new();
        for (idx, line) in lines {
            let row: Vec<Cell> = line.split(',').map(parse_cell).collect();
            if row.len() != header.len() {
                return Err(TableError::RaggedRow {
                    line: idx + 1,
                    expected: header.len(),
                    found: row.len(),
                });
            }
            rows.push(row);
        }
        Ok(Self { header, rows })
    }

    pub fn write_csv<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{}", self.header.join(","))?;
        for row in &self.rows {
            let fields: Vec<&str> = row.iter().map(cell_text).collect();
            writeln!(out, "{}", fields.join(","))?;
        }
        Ok(())
    }

    pub fn to_csv_string(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_csv(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn parse_cell(raw: &str) -> Cell {
    if raw == NA {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Text form of a cell as it appears in the CSV output.
pub fn cell_text(cell: &Cell) -> &str {
    cell.as_deref().unwrap_or(NA)
}
