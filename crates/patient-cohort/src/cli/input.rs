//! Loading patient files and search input

use anyhow::{Context, Result, bail};
use log::{debug, warn};
use patient_cohort_query::RawSearchInput;
use patient_cohort_types::PatientRecord;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Load a JSON array of patient records
pub fn load_patients(path: &Path) -> Result<Vec<PatientRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read patients file: {}", path.display()))?;

    let records: Vec<PatientRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse patients file: {}", path.display()))?;

    debug!("loaded {} patients from {}", records.len(), path.display());
    Ok(records)
}

/// Build search input from an optional JSON filter file overlaid with
/// `name=value` parameters.
///
/// Unknown field names are ignored with a warning. Arrays and objects are
/// not form values and are dropped the same way.
pub fn load_search(filter_file: Option<&Path>, params: &[String]) -> Result<RawSearchInput> {
    let mut fields = match filter_file {
        Some(path) => read_filter_file(path)?,
        None => Map::new(),
    };
    fields.extend(parse_parameters(params)?);

    let known = known_fields()?;
    fields.retain(|name, value| {
        if !known.contains_key(name) {
            warn!("ignoring unknown search field '{name}'");
            return false;
        }
        if value.is_array() || value.is_object() {
            warn!("ignoring non-scalar value for search field '{name}'");
            return false;
        }
        true
    });

    serde_json::from_value(Value::Object(fields)).context("Failed to build search input")
}

fn read_filter_file(path: &Path) -> Result<Map<String, Value>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read filter file: {}", path.display()))?;

    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse filter file: {}", path.display()))?;

    match value {
        Value::Object(fields) => Ok(fields),
        other => bail!(
            "Filter file {} must contain a JSON object, found {}",
            path.display(),
            json_kind(&other)
        ),
    }
}

/// Field names of the search form, in camelCase
fn known_fields() -> Result<Map<String, Value>> {
    match serde_json::to_value(RawSearchInput::default())? {
        Value::Object(fields) => Ok(fields),
        _ => bail!("Search input does not serialize to an object"),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse parameter strings (name=value) into a map.
///
/// `true`, `false` and `null` become JSON literals; everything else stays
/// text so identifiers like `0042` keep their leading zeros. The normalizer
/// parses numeric and date text itself.
pub fn parse_parameters(params: &[String]) -> Result<Map<String, Value>> {
    let mut result = Map::new();

    for param in params {
        let Some((name, value_str)) = param.split_once('=') else {
            bail!("Invalid parameter format: '{}'. Expected 'name=value'", param);
        };

        let name = name.trim();
        if name.is_empty() {
            bail!("Invalid parameter format: '{}'. Missing name", param);
        }

        let value = match value_str.trim() {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            "null" => Value::Null,
            // Untrimmed: whitespace handling belongs to the normalizer
            _ => Value::String(value_str.to_string()),
        };

        result.insert(name.to_string(), value);
    }

    Ok(result)
}
