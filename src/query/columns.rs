//! Column selector resolution shared by every query operation.

use super::error::{QueryError, Result};
use crate::table::Table;

/// Resolves `selector` to a zero-based column index.
///
/// An exact header match wins; otherwise a purely numeric selector is read as
/// a 1-based position.
pub fn resolve_column(table: &Table, selector: &str) -> Result<usize> {
    if let Some(idx) = table.column_index(selector) {
        return Ok(idx);
    }
    if !selector.is_empty() && selector.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(position) = selector.parse::<usize>() {
            if position >= 1 && position <= table.width() {
                return Ok(position - 1);
            }
        }
    }
    Err(QueryError::UnknownColumn(selector.to_string()))
}

pub fn resolve_columns<S: AsRef<str>>(table: &Table, selectors: &[S]) -> Result<Vec<usize>> {
    selectors
        .iter()
        .map(|selector| resolve_column(table, selector.as_ref()))
        .collect()
}
