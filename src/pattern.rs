//! Discovery grammar: the vocabulary compiled into a single filename matcher.
//!
//! Shape: zero or more optional `_<code>-<value>` segments in canonical
//! order, then a mandatory `_<suffix>`, then a mandatory `.<extension>`.
//! The matcher runs against the file name with an underscore prepended, so a
//! leading entity (or a bare suffix such as `participants.tsv`) needs no
//! special case. Entities out of canonical order never match.

use crate::vocabulary::Vocabulary;
use anyhow::{Context, Result};
use regex::Regex;

#[derive(Clone, Debug)]
pub struct DiscoveryPattern {
    regex: Regex,
}

impl DiscoveryPattern {
    pub fn build(vocabulary: &Vocabulary) -> Result<Self> {
        let source = grammar_source(vocabulary);
        let regex = Regex::new(&source).context("compiling discovery pattern")?;
        Ok(Self { regex })
    }

    /// Regex source of the compiled grammar.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether `file_name` (no directory part) satisfies the grammar.
    pub fn is_match(&self, file_name: &str) -> bool {
        self.regex.is_match(&format!("_{file_name}"))
    }
}

fn grammar_source(vocabulary: &Vocabulary) -> String {
    let mut source = String::from("^");
    for entity in vocabulary.entities() {
        source.push_str(&format!(
            "(?:_{}-(?:{}))?",
            regex::escape(&entity.code),
            entity.fragment
        ));
    }
    source.push_str("_(?:");
    source.push_str(&alternatives(vocabulary.suffixes()));
    source.push_str(")\\.(?:");
    source.push_str(&alternatives(vocabulary.extensions()));
    source.push_str(")$");
    source
}

fn alternatives(items: &[String]) -> String {
    items
        .iter()
        .map(|item| regex::escape(item))
        .collect::<Vec<_>>()
        .join("|")
}
