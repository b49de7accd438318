//! Walks a dataset root and materializes the catalog table.
//!
//! Rows come out in traversal order unless [`CatalogBuilder::sorted`] is
//! set; callers that need a stable order should sort with the query cursor.
//! Every row is a fixed-width field array matching [`catalog_header`].

use crate::catalog::{
    DATA_TYPE_COLUMN, DERIVATIVES_COLUMN, EXTENSION_COLUMN, PATH_COLUMN, SUFFIX_COLUMN,
};
use crate::parser::{FileRecord, parse_path};
use crate::pattern::DiscoveryPattern;
use crate::table::{Cell, Table};
use crate::vocabulary::Vocabulary;
use anyhow::{Context, Result, bail};
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug)]
/// Vocabulary plus its compiled discovery pattern.
pub struct CatalogBuilder {
    vocabulary: Vocabulary,
    pattern: DiscoveryPattern,
    sorted: bool,
}

impl CatalogBuilder {
    pub fn new(vocabulary: Vocabulary) -> Result<Self> {
        let pattern = DiscoveryPattern::build(&vocabulary)?;
        Ok(Self {
            vocabulary,
            pattern,
            sorted: false,
        })
    }

    /// Visit directory entries sorted by file name.
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn pattern(&self) -> &DiscoveryPattern {
        &self.pattern
    }

    /// Parsed records for every matching file under `root`.
    pub fn discover(&self, root: &Path) -> Result<Vec<FileRecord>> {
        if !root.is_dir() {
            bail!("dataset root {} is not a directory", root.display());
        }

        let mut walker = WalkDir::new(root).follow_links(false);
        if self.sorted {
            walker = walker.sort_by_file_name();
        }

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for entry in walker {
            let entry =
                entry.with_context(|| format!("walking dataset root {}", root.display()))?;
            // Symlinked files count; symlinked directories are not descended.
            if !entry.path().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if !self.pattern.is_match(&name) {
                skipped += 1;
                continue;
            }
            records.push(parse_path(&self.vocabulary, entry.path()));
        }
        log::debug!(
            "discovered {} files under {} ({} did not match)",
            records.len(),
            root.display(),
            skipped
        );
        Ok(records)
    }

    pub fn build(&self, root: &Path) -> Result<Table> {
        let records = self.discover(root)?;
        let mut table = Table::new(catalog_header(&self.vocabulary));
        table.rows = records
            .iter()
            .map(|record| record_row(&self.vocabulary, record))
            .collect();
        Ok(table)
    }
}

/// `derivatives, data_type, <entity display names>, suffix, extension, path`.
pub fn catalog_header(vocabulary: &Vocabulary) -> Vec<String> {
    let mut header = vec![DERIVATIVES_COLUMN.to_string(), DATA_TYPE_COLUMN.to_string()];
    header.extend(vocabulary.display_names().map(str::to_string));
    header.extend([
        SUFFIX_COLUMN.to_string(),
        EXTENSION_COLUMN.to_string(),
        PATH_COLUMN.to_string(),
    ]);
    header
}

/// One catalog row; absent entities become `None`.
pub fn record_row(vocabulary: &Vocabulary, record: &FileRecord) -> Vec<Cell> {
    let mut row: Vec<Cell> = Vec::with_capacity(vocabulary.entities().len() + 5);
    row.push(record.derivatives.clone());
    row.push(record.data_type.clone());
    row.extend(
        vocabulary
            .entities()
            .iter()
            .map(|entity| record.entity(&entity.code).map(str::to_string)),
    );
    row.push(Some(record.suffix.clone()));
    row.push(Some(record.extension.clone()));
    row.push(Some(record.path.clone()));
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn header_has_fixed_shape() {
        let vocab = Vocabulary::builtin();
        let header = catalog_header(&vocab);
        assert_eq!(header.len(), vocab.entities().len() + 5);
        assert_eq!(header[0], "derivatives");
        assert_eq!(header[1], "data_type");
        assert_eq!(header[2], "subject");
        assert_eq!(&header[header.len() - 3..], &["suffix", "extension", "path"]);
    }

    #[test]
    fn rows_match_header_width() {
        let temp = TempDir::new().unwrap();
        let func = temp.path().join("sub-01/func");
        fs::create_dir_all(&func).unwrap();
        fs::write(func.join("sub-01_task-rest_bold.nii.gz"), "").unwrap();
        fs::write(func.join("README"), "").unwrap();

        let builder = CatalogBuilder::new(Vocabulary::builtin()).unwrap();
        let table = builder.build(temp.path()).unwrap();
        assert_eq!(table.rows.len(), 1);
        let row = &table.rows[0];
        assert_eq!(row.len(), table.width());
        assert_eq!(row[table.column_index("task").unwrap()].as_deref(), Some("task-rest"));
        assert_eq!(row[table.column_index("session").unwrap()], None);
        let path = row[table.column_index("path").unwrap()].as_deref().unwrap();
        assert!(path.ends_with("sub-01/func/sub-01_task-rest_bold.nii.gz"));
    }

    #[test]
    fn missing_root_is_an_error() {
        let temp = TempDir::new().unwrap();
        let builder = CatalogBuilder::new(Vocabulary::builtin()).unwrap();
        assert!(builder.build(&temp.path().join("absent")).is_err());
    }
}
