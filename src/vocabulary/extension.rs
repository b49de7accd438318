//! Loader for user-supplied vocabulary extension documents.

use super::schema::validate_extension_document;
use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
/// Additional vocabulary read from one JSON document.
pub struct VocabularyExtension {
    #[serde(default)]
    pub entities: Vec<EntityExtension>,
    #[serde(default)]
    pub suffixes: Vec<String>,
    #[serde(default)]
    pub extensions: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct EntityExtension {
    pub name: String,
    pub display_name: String,
    /// Regular expression fragment for the value part of the token.
    pub pattern: String,
}

/// Reads, schema-validates and deserializes one extension document.
///
/// Entity patterns are checked here so a bad fragment rejects the document
/// instead of poisoning the discovery pattern later.
pub fn load_extension(path: &Path) -> Result<VocabularyExtension> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading vocabulary extension {}", path.display()))?;
    parse_extension(&data)
        .with_context(|| format!("parsing vocabulary extension {}", path.display()))
}

pub(crate) fn parse_extension(data: &str) -> Result<VocabularyExtension> {
    let document: Value = serde_json::from_str(data).context("invalid JSON")?;
    validate_extension_document(&document)?;
    let extension: VocabularyExtension = serde_json::from_value(document)?;
    for entity in &extension.entities {
        check_fragment(&entity.pattern).with_context(|| {
            format!("entity {} has invalid pattern '{}'", entity.name, entity.pattern)
        })?;
    }
    Ok(extension)
}

/// A fragment is spliced into a larger grammar, so it must compile on its
/// own (no unbalanced parentheses escaping its group) and carry no capture
/// groups (named groups would collide across entities).
fn check_fragment(fragment: &str) -> Result<()> {
    let regex = Regex::new(fragment)?;
    if regex.captures_len() > 1 {
        bail!("capture groups are not allowed; use (?:...)");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entities_and_suffixes() {
        let ext = parse_extension(
            r#"{"entities": [{"name": "foo", "display_name": "fooname", "pattern": "[a-z]+"}],
                "suffixes": ["custom"]}"#,
        )
        .unwrap();
        assert_eq!(ext.entities.len(), 1);
        assert_eq!(ext.entities[0].display_name, "fooname");
        assert_eq!(ext.suffixes, vec!["custom".to_string()]);
        assert!(ext.extensions.is_empty());
    }

    #[test]
    fn rejects_invalid_regex_fragment() {
        let err = parse_extension(
            r#"{"entities": [{"name": "foo", "display_name": "foo", "pattern": "[a-z"}]}"#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("invalid pattern"));
    }

    #[test]
    fn rejects_group_breakout_and_captures() {
        for pattern in ["a)|(b", "(?P<v>[a-z]+)", "([0-9]+)"] {
            let doc = format!(
                r#"{{"entities": [{{"name": "foo", "display_name": "foo", "pattern": "{pattern}"}}]}}"#
            );
            assert!(parse_extension(&doc).is_err(), "{pattern} should be rejected");
        }
        assert!(parse_extension(
            r#"{"entities": [{"name": "foo", "display_name": "foo", "pattern": "(?:a|b)[0-9]*"}]}"#
        )
        .is_ok());
    }

    #[test]
    fn rejects_non_json() {
        assert!(parse_extension("entities: []").is_err());
    }
}
