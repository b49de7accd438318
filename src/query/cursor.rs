//! Sorted, resumable iteration over table rows.
//!
//! The sort happens once in [`SortedCursor::new`]; the cursor owns the
//! ordered rows and its position, so stepping is cheap and no position value
//! ever shares a namespace with real column names.

use super::columns::resolve_columns;
use super::error::Result;
use super::natural::version_cmp;
use crate::table::{Cell, Table, cell_text};
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq, Eq)]
/// One row as `(column name, value)` pairs in header order.
pub struct Record {
    fields: Vec<(String, Cell)>,
}

impl Record {
    /// First field called `name`; `None` when the column does not exist.
    pub fn get(&self, name: &str) -> Option<&Cell> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Text value for `name`, `NA` for absent cells.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).map(cell_text)
    }

    pub fn fields(&self) -> &[(String, Cell)] {
        &self.fields
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CursorStep {
    Header(Vec<String>),
    Row(Record),
    Exhausted,
}

#[derive(Clone, Debug)]
pub struct SortedCursor {
    header: Vec<String>,
    rows: Vec<Vec<Cell>>,
    position: usize,
}

impl SortedCursor {
    /// Sorts `table` by `sort_by` (every column, left to right, when empty).
    ///
    /// The sort is stable and uses [`version_cmp`] on the cell text; `reverse`
    /// flips the comparison, leaving ties in input order.
    pub fn new<S: AsRef<str>>(table: &Table, sort_by: &[S], reverse: bool) -> Result<Self> {
        let keys = if sort_by.is_empty() {
            (0..table.width()).collect()
        } else {
            resolve_columns(table, sort_by)?
        };

        let mut rows = table.rows.clone();
        rows.sort_by(|a, b| {
            let ord = compare_rows(a, b, &keys);
            if reverse { ord.reverse() } else { ord }
        });

        Ok(Self {
            header: table.header.clone(),
            rows,
            position: 0,
        })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Rows not yet produced.
    pub fn remaining(&self) -> usize {
        (self.rows.len() + 1).saturating_sub(self.position.max(1))
    }

    /// Header first, then each sorted row, then `Exhausted` forever.
    pub fn step(&mut self) -> CursorStep {
        if self.position == 0 {
            self.position = 1;
            return CursorStep::Header(self.header.clone());
        }
        match self.rows.get(self.position - 1) {
            Some(row) => {
                let record = Record {
                    fields: self.header.iter().cloned().zip(row.iter().cloned()).collect(),
                };
                self.position += 1;
                CursorStep::Row(record)
            }
            None => CursorStep::Exhausted,
        }
    }

    /// The sorted rows as a table.
    pub fn into_table(self) -> Table {
        Table {
            header: self.header,
            rows: self.rows,
        }
    }
}

/// Data rows only; the header step is skipped.
impl Iterator for SortedCursor {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        loop {
            match self.step() {
                CursorStep::Header(_) => continue,
                CursorStep::Row(record) => return Some(record),
                CursorStep::Exhausted => return None,
            }
        }
    }
}

fn compare_rows(a: &[Cell], b: &[Cell], keys: &[usize]) -> Ordering {
    keys.iter()
        .map(|&i| version_cmp(cell_text(&a[i]), cell_text(&b[i])))
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}
