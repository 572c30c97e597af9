//! Component maps flowing through one compose call.
//!
//! [`RawComponents`] is what the caller hands in: arbitrary keys, insertion
//! order preserved. [`NormalizedComponents`] is what the normalizer hands to
//! the renderer: canonical keys only, plus the alias values templates may still
//! reference by their own name.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::component::Component;
use crate::error::{ModelError, Result};

/// Input key that carries the abbreviation flag instead of an address value.
pub const ABBREVIATE_KEY: &str = "should_abbreviate";

/// Caller-supplied address fields, keyed by arbitrary field name.
///
/// Keys keep their first insertion position; inserting an existing key
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawComponents {
    entries: Vec<(String, String)>,
    should_abbreviate: bool,
}

impl RawComponents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request (or suppress) abbreviation of component values.
    #[must_use]
    pub fn with_abbreviation(mut self, enable: bool) -> Self {
        self.should_abbreviate = enable;
        self
    }

    pub fn should_abbreviate(&self) -> bool {
        self.should_abbreviate
    }

    /// Insert a field. The `should_abbreviate` key sets the flag instead.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if key == ABBREVIATE_KEY {
            self.should_abbreviate = parse_flag(&value);
            return;
        }
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut String> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = (&str, &mut String)> {
        self.entries.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build raw components from a JSON object.
    ///
    /// Values are stringified: strings verbatim, numbers and booleans in their
    /// display form, `null` as an empty string, nested values as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotAnObject`] when `value` is not a JSON object.
    pub fn from_json(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(ModelError::NotAnObject {
                kind: json_kind(value),
            });
        };
        let mut raw = Self::new();
        for (key, value) in map {
            if key == ABBREVIATE_KEY
                && let Value::Bool(flag) = value
            {
                raw.should_abbreviate = *flag;
                continue;
            }
            raw.insert(key.clone(), stringify(value));
        }
        Ok(raw)
    }
}

impl<K, V> FromIterator<(K, V)> for RawComponents
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut raw = Self::new();
        raw.extend(iter);
        raw
    }
}

impl<K, V> Extend<(K, V)> for RawComponents
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
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

/// Canonical address components produced by normalization.
///
/// At most one value per canonical name. Alias values (input keys the schema
/// folds into a canonical name) are kept separately under their own name so
/// that templates referring to them still resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedComponents {
    values: BTreeMap<Component, String>,
    aliases: Vec<(String, String)>,
}

impl NormalizedComponents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, component: Component) -> Option<&str> {
        self.values.get(&component).map(String::as_str)
    }

    pub fn get_mut(&mut self, component: Component) -> Option<&mut String> {
        self.values.get_mut(&component)
    }

    pub fn contains(&self, component: Component) -> bool {
        self.values.contains_key(&component)
    }

    /// Set a component, replacing any previous value.
    pub fn insert(&mut self, component: Component, value: impl Into<String>) {
        self.values.insert(component, value.into());
    }

    /// Set a component only when it has no value yet.
    pub fn insert_if_absent(&mut self, component: Component, value: impl Into<String>) {
        self.values.entry(component).or_insert_with(|| value.into());
    }

    pub fn remove(&mut self, component: Component) -> Option<String> {
        self.values.remove(&component)
    }

    /// Canonical components in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (Component, &str)> {
        self.values.iter().map(|(c, v)| (*c, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn alias(&self, name: &str) -> Option<&str> {
        self.aliases
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn alias_mut(&mut self, name: &str) -> Option<&mut String> {
        self.aliases
            .iter_mut()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    pub fn insert_alias(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.alias_mut(&name) {
            Some(existing) => *existing = value,
            None => self.aliases.push((name, value)),
        }
    }

    /// Alias values in input order.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Resolve a template variable: canonical name first, then alias name.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        match Component::parse(name) {
            Some(component) => self.get(component),
            None => self.alias(name),
        }
    }

    /// Keep only entries (canonical and alias) for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &str) -> bool) {
        self.values.retain(|c, v| keep(c.as_str(), v));
        self.aliases.retain(|(k, v)| keep(k, v));
    }

    /// The `country_code` component, if any.
    pub fn country_code(&self) -> Option<&str> {
        self.get(Component::CountryCode)
    }
}
