//! Filename parser: one discovered path in, one [`FileRecord`] out.

use crate::vocabulary::Vocabulary;
use std::collections::BTreeMap;
use std::path::Path;

const DERIVATIVES_DIR: &str = "derivatives";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRecord {
    /// Path as discovered, with repeated separators collapsed.
    pub path: String,
    /// Everything after the first dot of the file name (`nii.gz`).
    pub extension: String,
    /// First modality folder found among the directory components.
    pub data_type: Option<String>,
    /// Pipeline name from a `derivatives/<name>/` segment.
    pub derivatives: Option<String>,
    /// Entity code to full `code-value` token.
    pub entities: BTreeMap<String, String>,
    /// Last underscore-delimited token of the stem, unvalidated.
    pub suffix: String,
}

impl FileRecord {
    /// Full token for `code`, if the file name carried one.
    pub fn entity(&self, code: &str) -> Option<&str> {
        self.entities.get(code).map(String::as_str)
    }

    /// Rebuilds the file name from the entity tokens in canonical order.
    pub fn file_name(&self, vocabulary: &Vocabulary) -> String {
        let mut parts: Vec<&str> = Vec::new();
        let mut seen: Vec<&str> = Vec::new();
        for entity in vocabulary.entities() {
            if seen.contains(&entity.code.as_str()) {
                continue;
            }
            seen.push(entity.code.as_str());
            if let Some(token) = self.entity(&entity.code) {
                parts.push(token);
            }
        }
        parts.push(&self.suffix);
        format!("{}.{}", parts.join("_"), self.extension)
    }
}

/// Decomposes `path` into a [`FileRecord`]. Never fails; unexpected shapes
/// degrade to empty or absent fields.
pub fn parse_path(vocabulary: &Vocabulary, path: &Path) -> FileRecord {
    let normalized = normalize_path(&path.to_string_lossy());
    let (dirs, file_name) = match normalized.rsplit_once('/') {
        Some((dirs, name)) => (dirs, name),
        None => ("", normalized.as_str()),
    };

    let (stem, extension) = match file_name.split_once('.') {
        Some((stem, ext)) => (stem, ext),
        None => (file_name, ""),
    };

    let mut tokens: Vec<&str> = stem.split('_').collect();
    let suffix = tokens.pop().unwrap_or_default().to_string();

    let mut entities = BTreeMap::new();
    for token in tokens {
        if let Some((code, value)) = token.split_once('-') {
            if !code.is_empty() && !value.is_empty() {
                entities.insert(code.to_string(), token.to_string());
            }
        }
    }

    let components: Vec<&str> = dirs.split('/').filter(|c| !c.is_empty()).collect();
    let data_type = components
        .iter()
        .find(|component| vocabulary.is_data_type(component))
        .map(|component| component.to_string());
    let derivatives = derivatives_pipeline(&components);

    FileRecord {
        extension: extension.to_string(),
        data_type,
        derivatives,
        entities,
        suffix,
        path: normalized,
    }
}

/// First `derivatives/<name>` pair among the directory components.
fn derivatives_pipeline(components: &[&str]) -> Option<String> {
    components
        .windows(2)
        .find(|pair| pair[0] == DERIVATIVES_DIR)
        .map(|pair| pair[1].to_string())
}

/// Collapses runs of `/` into one.
pub fn normalize_path(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut previous_slash = false;
    for ch in raw.chars() {
        if ch == '/' {
            if previous_slash {
                continue;
            }
            previous_slash = true;
        } else {
            previous_slash = false;
        }
        out.push(ch);
    }
    out
}
