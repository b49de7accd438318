//! Attaches JSON sidecars to the data files they describe.
//!
//! Rows are grouped by every cell except `extension` and `path`. A JSON row
//! whose group also holds a non-JSON row is folded into that row's
//! `json_path`; a JSON row alone in its group stays and points at itself.
//! When several JSON rows share a group the last one wins.

use super::error::{QueryError, Result};
use crate::catalog::{EXTENSION_COLUMN, PATH_COLUMN};
use crate::table::{Cell, Table};
use std::collections::{HashMap, HashSet};

/// Column appended by [`associate_sidecars`].
pub const JSON_PATH_COLUMN: &str = "json_path";

pub fn associate_sidecars(table: &Table) -> Result<Table> {
    let ext_idx = required_column(table, EXTENSION_COLUMN)?;
    let path_idx = required_column(table, PATH_COLUMN)?;

    let group_key = |row: &[Cell]| -> Vec<Cell> {
        row.iter()
            .enumerate()
            .filter(|(i, _)| *i != ext_idx && *i != path_idx)
            .map(|(_, cell)| cell.clone())
            .collect()
    };

    let mut sidecars: HashMap<Vec<Cell>, Cell> = HashMap::new();
    let mut has_data: HashSet<Vec<Cell>> = HashSet::new();
    for row in &table.rows {
        let key = group_key(row);
        if is_json(&row[ext_idx]) {
            sidecars.insert(key, row[path_idx].clone());
        } else {
            has_data.insert(key);
        }
    }

    let mut header = table.header.clone();
    header.push(JSON_PATH_COLUMN.to_string());

    let mut rows = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let key = group_key(row);
        let json_path = if is_json(&row[ext_idx]) {
            if has_data.contains(&key) {
                continue;
            }
            row[path_idx].clone()
        } else {
            sidecars.get(&key).cloned().flatten()
        };
        let mut out = row.clone();
        out.push(json_path);
        rows.push(out);
    }

    Ok(Table { header, rows })
}

fn required_column(table: &Table, name: &str) -> Result<usize> {
    table
        .column_index(name)
        .ok_or_else(|| QueryError::MissingColumn(name.to_string()))
}

fn is_json(extension: &Cell) -> bool {
    extension
        .as_deref()
        .map(|ext| ext.trim_start_matches('.').eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
