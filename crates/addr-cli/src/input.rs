//! Reading address components from JSON input.

use addr_model::RawComponents;
use anyhow::{Context, Result};
use serde_json::Value;

/// Parse one JSON document or JSON Lines into raw component sets.
///
/// A document may be a single object or an array of objects. When the whole
/// text is not one JSON document, every non-blank line is parsed as its own
/// object. Blank input yields no addresses.
pub fn parse_input(text: &str) -> Result<Vec<RawComponents>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if let Ok(document) = serde_json::from_str::<Value>(trimmed) {
        return match document {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    RawComponents::from_json(item)
                        .with_context(|| format!("array element {}", index + 1))
                })
                .collect(),
            other => Ok(vec![
                RawComponents::from_json(&other).context("input document")?,
            ]),
        };
    }
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_line(index + 1, line))
        .collect()
}

fn parse_line(number: usize, line: &str) -> Result<RawComponents> {
    let value: Value = serde_json::from_str(line)
        .with_context(|| format!("line {number}: invalid JSON"))?;
    RawComponents::from_json(&value).with_context(|| format!("line {number}"))
}
