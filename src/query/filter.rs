//! Column projection and row filtering.

use super::columns::{resolve_column, resolve_columns};
use super::error::{QueryError, Result};
use crate::table::{Table, cell_text};
use regex::Regex;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Parameters for [`filter`]. An empty spec returns the table unchanged.
pub struct FilterSpec {
    /// Output columns by name or 1-based index; empty keeps all.
    pub columns: Vec<String>,
    /// `(column, regex)` pairs, all of which must find a match in the cell.
    pub predicates: Vec<(String, String)>,
    /// Rows with `NA` in any of these columns are dropped.
    pub drop_na: Vec<String>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(mut self, selector: impl Into<String>) -> Self {
        self.columns.push(selector.into());
        self
    }

    pub fn matching(mut self, column: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.predicates.push((column.into(), pattern.into()));
        self
    }

    pub fn drop_na(mut self, column: impl Into<String>) -> Self {
        self.drop_na.push(column.into());
        self
    }
}

/// Projects and filters `table`.
///
/// Every selector is resolved and every pattern compiled before any row is
/// looked at, so a bad reference yields an error and no partial table.
/// Patterns are searched in the cell text, so `NA` cells match `NA`.
pub fn filter(table: &Table, spec: &FilterSpec) -> Result<Table> {
    let projection = if spec.columns.is_empty() {
        (0..table.width()).collect()
    } else {
        resolve_columns(table, &spec.columns)?
    };

    let predicates = spec
        .predicates
        .iter()
        .map(|(column, pattern)| {
            let idx = resolve_column(table, column)?;
            let regex = Regex::new(pattern).map_err(|err| QueryError::InvalidPattern {
                column: column.clone(),
                pattern: pattern.clone(),
                message: err.to_string(),
            })?;
            Ok((idx, regex))
        })
        .collect::<Result<Vec<_>>>()?;

    let reject_na = resolve_columns(table, &spec.drop_na)?;

    let header = projection.iter().map(|&i| table.header[i].clone()).collect();
    let rows = table
        .rows
        .iter()
        .filter(|row| reject_na.iter().all(|&i| row[i].is_some()))
        .filter(|row| {
            predicates
                .iter()
                .all(|(i, regex)| regex.is_match(cell_text(&row[*i])))
        })
        .map(|row| projection.iter().map(|&i| row[i].clone()).collect())
        .collect();

    Ok(Table { header, rows })
}
