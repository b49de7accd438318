//! Entity, suffix and extension vocabulary.
//!
//! A [`Vocabulary`] is an immutable value: the built-in BIDS definitions
//! plus any extension documents appended in load order. It is built once and
//! handed to the discovery pattern, the filename parser and the catalog
//! builder by reference.

pub mod builtin;
pub mod extension;
mod schema;

pub use extension::{EntityExtension, VocabularyExtension, load_extension};

use crate::pattern::DiscoveryPattern;
use serde::Serialize;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// One filename entity: `code` is the key used in `code-value` tokens.
pub struct EntityDef {
    pub code: String,
    pub display_name: String,
    /// Regular expression fragment the value part must match.
    pub fragment: String,
}

impl EntityDef {
    pub fn new(code: &str, display_name: &str, fragment: &str) -> Self {
        Self {
            code: code.to_string(),
            display_name: display_name.to_string(),
            fragment: fragment.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    entities: Vec<EntityDef>,
    suffixes: Vec<String>,
    extensions: Vec<String>,
    data_types: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Vocabulary {
    /// The fixed BIDS vocabulary with no extensions.
    pub fn builtin() -> Self {
        Self {
            entities: builtin::ENTITIES
                .iter()
                .map(|(code, name, fragment)| EntityDef::new(code, name, fragment))
                .collect(),
            suffixes: builtin::SUFFIXES.iter().map(|s| s.to_string()).collect(),
            extensions: builtin::EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            data_types: builtin::DATA_TYPES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Built-ins followed by every readable extension document in `sources`.
    ///
    /// Documents that fail to load, or whose merge would leave the discovery
    /// grammar uncompilable, are skipped with a warning; this never fails as
    /// a whole.
    pub fn with_extension_files<P: AsRef<Path>>(sources: &[P]) -> Self {
        let mut vocabulary = Self::builtin();
        for source in sources {
            let path = source.as_ref();
            match load_extension(path) {
                Ok(extension) => {
                    let counts = (
                        extension.entities.len(),
                        extension.suffixes.len(),
                        extension.extensions.len(),
                    );
                    let merged = vocabulary.clone().extend(extension);
                    if let Err(err) = DiscoveryPattern::build(&merged) {
                        log::warn!("skipping vocabulary extension {}: {err:#}", path.display());
                        continue;
                    }
                    log::debug!(
                        "vocabulary extension {}: {} entities, {} suffixes, {} extensions",
                        path.display(),
                        counts.0,
                        counts.1,
                        counts.2
                    );
                    vocabulary = merged;
                }
                Err(err) => {
                    log::warn!("skipping vocabulary extension {}: {err:#}", path.display());
                }
            }
        }
        vocabulary
    }

    /// Appends an already-validated extension. Entries are never
    /// de-duplicated: a reused code produces a second column.
    pub fn extend(mut self, extension: VocabularyExtension) -> Self {
        self.entities.extend(
            extension
                .entities
                .into_iter()
                .map(|entity| EntityDef::new(&entity.name, &entity.display_name, &entity.pattern)),
        );
        self.suffixes.extend(extension.suffixes);
        self.extensions.extend(extension.extensions);
        self
    }

    pub fn entities(&self) -> &[EntityDef] {
        &self.entities
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn data_types(&self) -> &[String] {
        &self.data_types
    }

    pub fn is_data_type(&self, name: &str) -> bool {
        self.data_types.iter().any(|dt| dt == name)
    }

    /// Entity column headers, in canonical order.
    pub fn display_names(&self) -> impl Iterator<Item = &str> {
        self.entities.iter().map(|e| e.display_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_codes_are_unique_and_ordered() {
        let vocab = Vocabulary::builtin();
        let codes: Vec<&str> = vocab.entities().iter().map(|e| e.code.as_str()).collect();
        assert_eq!(&codes[..4], &["sub", "ses", "sample", "task"]);
        assert_eq!(codes.last(), Some(&"desc"));
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), codes.len());
    }

    #[test]
    fn extend_appends_without_dedup() {
        let vocab = Vocabulary::builtin().extend(VocabularyExtension {
            entities: vec![EntityExtension {
                name: "sub".to_string(),
                display_name: "subject_alias".to_string(),
                pattern: "[0-9]+".to_string(),
            }],
            suffixes: vec!["bold".to_string(), "custom".to_string()],
            extensions: Vec::new(),
        });
        let builtin_len = Vocabulary::builtin().entities().len();
        assert_eq!(vocab.entities().len(), builtin_len + 1);
        assert_eq!(vocab.entities()[0].code, "sub");
        assert_eq!(vocab.entities()[builtin_len].display_name, "subject_alias");
        assert_eq!(
            vocab.suffixes().iter().filter(|s| s.as_str() == "bold").count(),
            2
        );
    }

    #[test]
    fn data_type_match_is_case_sensitive() {
        let vocab = Vocabulary::builtin();
        assert!(vocab.is_data_type("func"));
        assert!(!vocab.is_data_type("Func"));
    }
}
