//! Flat, type-tagged view of a JSON sidecar.
//!
//! Each top-level key maps to `"<type>:<value>"`. Strings are unquoted;
//! arrays and objects keep their compact JSON text.

use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub fn load_sidecar(path: &Path) -> Result<BTreeMap<String, String>> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading sidecar {}", path.display()))?;
    let value: Value = serde_json::from_str(&data)
        .with_context(|| format!("parsing sidecar {}", path.display()))?;
    flatten_json(&value).with_context(|| format!("flattening sidecar {}", path.display()))
}

pub fn flatten_json(value: &Value) -> Result<BTreeMap<String, String>> {
    let Value::Object(map) = value else {
        bail!("expected a JSON object, got {}", type_name(value));
    };
    Ok(map
        .iter()
        .map(|(key, value)| (key.clone(), tagged(value)))
        .collect())
}

fn tagged(value: &Value) -> String {
    let rendered = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    format!("{}:{rendered}", type_name(value))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
