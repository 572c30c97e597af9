//! Shared YAML helpers.
//!
//! Tables are read as ordered [`Mapping`]s so that document order survives
//! into the typed tables; several lookups are "first match wins".

use serde_yaml::{Mapping, Value};

use crate::error::{Result, StandardsError};

/// Parse a document whose top level is a mapping. Blank or `null` documents
/// yield an empty mapping.
pub(crate) fn parse_mapping(text: &str, origin: &str) -> Result<Mapping> {
    if text.trim().is_empty() {
        return Ok(Mapping::new());
    }
    let value: Value = serde_yaml::from_str(text).map_err(|e| StandardsError::yaml(origin, e))?;
    as_mapping(value, origin)
}

pub(crate) fn as_mapping(value: Value, origin: &str) -> Result<Mapping> {
    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        _ => Err(StandardsError::UnexpectedShape {
            origin: origin.to_string(),
            expected: "a mapping",
        }),
    }
}

/// Render a scalar key or value as a string. Numeric scalars are rendered by
/// value, so codes with leading zeros must be quoted in the data.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Iterate a mapping's entries as `(string key, value)`, rejecting non-scalar keys.
pub(crate) fn string_entries(
    mapping: Mapping,
    origin: &str,
) -> Result<Vec<(String, Value)>> {
    mapping
        .into_iter()
        .map(|(key, value)| {
            scalar_to_string(&key)
                .map(|key| (key, value))
                .ok_or_else(|| StandardsError::UnexpectedShape {
                    origin: origin.to_string(),
                    expected: "scalar keys",
                })
        })
        .collect()
}
