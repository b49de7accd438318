//! Embedded JSON Schema for vocabulary extension documents.
//!
//! Documents are validated before deserialization so a malformed entry is
//! reported with the schema's own diagnostics instead of a serde error deep
//! inside the struct tree.

use anyhow::{Context, Result, bail};
use jsonschema::JSONSchema;
use serde_json::{Value, json};
use std::sync::OnceLock;

fn extension_schema() -> &'static Value {
    static SCHEMA: OnceLock<Value> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "vocabulary extension",
            "type": "object",
            "properties": {
                "entities": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "required": ["name", "display_name", "pattern"],
                        "properties": {
                            "name": {"type": "string", "pattern": "^[A-Za-z0-9]+$"},
                            "display_name": {"type": "string", "pattern": "^[^,\\s]+$"},
                            "pattern": {"type": "string", "minLength": 1}
                        }
                    }
                },
                "suffixes": {
                    "type": "array",
                    "items": {"type": "string", "pattern": "^[A-Za-z0-9]+$"}
                },
                "extensions": {
                    "type": "array",
                    "items": {"type": "string", "pattern": "^[A-Za-z0-9]+(\\.[A-Za-z0-9]+)*$"}
                }
            }
        })
    })
}

/// Validates `document` against the extension schema, collecting every
/// violation into one error.
pub(crate) fn validate_extension_document(document: &Value) -> Result<()> {
    let compiled = JSONSchema::compile(extension_schema())
        .context("compiling vocabulary extension schema")?;
    if let Err(errors) = compiled.validate(document) {
        let details = errors
            .map(|err| format!("{}: {err}", err.instance_path))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("extension document failed schema validation:\n{details}");
    }
    Ok(())
}
