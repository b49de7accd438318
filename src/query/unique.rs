use super::columns::resolve_column;
use super::error::Result;
use crate::table::{Table, cell_text};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniqueOptions {
    /// Keep only the first occurrence of each value.
    pub unique: bool,
    /// Skip `NA` cells before de-duplication.
    pub exclude_na: bool,
}

impl Default for UniqueOptions {
    fn default() -> Self {
        Self {
            unique: true,
            exclude_na: true,
        }
    }
}

/// Cell values of one column in row order, header excluded.
///
/// An unresolvable selector is only an error when there are rows to read.
pub fn column_values(table: &Table, selector: &str, options: UniqueOptions) -> Result<Vec<String>> {
    let idx = match resolve_column(table, selector) {
        Ok(idx) => idx,
        Err(_) if table.is_empty() => return Ok(Vec::new()),
        Err(err) => return Err(err),
    };

    let mut values: Vec<String> = Vec::new();
    for row in &table.rows {
        let cell = &row[idx];
        if options.exclude_na && cell.is_none() {
            continue;
        }
        let text = cell_text(cell);
        if options.unique && values.iter().any(|v| v == text) {
            continue;
        }
        values.push(text.to_string());
    }
    Ok(values)
}
