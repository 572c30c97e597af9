//! Abbreviation tables (`abbreviations/<lang>.yaml`) and the country to
//! language table (`country2lang.yaml`).

use std::borrow::Cow;
use std::collections::BTreeMap;

use regex::{Captures, Regex};

use crate::error::{Result, StandardsError};
use crate::rules::compile_pattern;
use crate::yaml::{parse_mapping, scalar_to_string, string_entries};

/// A literal word and its abbreviated form.
#[derive(Debug, Clone)]
pub struct Abbreviation {
    pub literal: String,
    pub abbreviation: String,
    pattern: Regex,
}

impl Abbreviation {
    /// Build a rule matching `literal` at the start of the value or after
    /// whitespace, and ending on a word boundary.
    ///
    /// # Errors
    ///
    /// Fails only if the escaped literal does not compile.
    pub fn new(literal: &str, abbreviation: &str, scope: &str) -> Result<Self> {
        let pattern = format!(r"(^|\s){}\b", regex::escape(literal));
        Ok(Self {
            literal: literal.to_string(),
            abbreviation: abbreviation.to_string(),
            pattern: compile_pattern(&pattern, scope)?,
        })
    }

    /// Replace the first occurrence of the literal.
    pub fn apply<'a>(&self, value: &'a str) -> Cow<'a, str> {
        self.pattern.replacen(value, 1, |caps: &Captures<'_>| {
            format!("{}{}", &caps[1], self.abbreviation)
        })
    }
}

/// Abbreviations for one language, keyed by component name.
#[derive(Debug, Clone, Default)]
pub struct AbbreviationTable {
    by_component: Vec<(String, Vec<Abbreviation>)>,
}

impl AbbreviationTable {
    /// Parse one language file.
    ///
    /// # Errors
    ///
    /// Fails on malformed YAML or non-string entries.
    pub fn parse(text: &str, origin: &str) -> Result<Self> {
        let mut by_component = Vec::new();
        for (component, value) in string_entries(parse_mapping(text, origin)?, origin)? {
            let serde_yaml::Value::Mapping(pairs) = value else {
                return Err(StandardsError::UnexpectedShape {
                    origin: origin.to_string(),
                    expected: "a mapping of literal to abbreviation per component",
                });
            };
            let mut rules = Vec::with_capacity(pairs.len());
            for (literal, abbreviation) in string_entries(pairs, origin)? {
                let abbreviation =
                    scalar_to_string(&abbreviation).ok_or_else(|| StandardsError::UnexpectedShape {
                        origin: origin.to_string(),
                        expected: "string abbreviations",
                    })?;
                rules.push(Abbreviation::new(&literal, &abbreviation, origin)?);
            }
            by_component.push((component, rules));
        }
        Ok(Self { by_component })
    }

    /// Component names and their rules, in document order.
    pub fn components(&self) -> impl Iterator<Item = (&str, &[Abbreviation])> {
        self.by_component
            .iter()
            .map(|(name, rules)| (name.as_str(), rules.as_slice()))
    }

    pub fn rule_count(&self) -> usize {
        self.by_component.iter().map(|(_, rules)| rules.len()).sum()
    }
}

/// Parse `country2lang.yaml` into `COUNTRY -> [lang, ...]` in priority order.
///
/// # Errors
///
/// Fails on malformed YAML or non-scalar language lists.
pub fn parse_languages(text: &str, origin: &str) -> Result<BTreeMap<String, Vec<String>>> {
    let mut languages = BTreeMap::new();
    for (country, value) in string_entries(parse_mapping(text, origin)?, origin)? {
        let list = scalar_to_string(&value).ok_or_else(|| StandardsError::UnexpectedShape {
            origin: origin.to_string(),
            expected: "a comma separated language list",
        })?;
        let langs = list
            .split(',')
            .map(|lang| lang.trim().to_lowercase())
            .filter(|lang| !lang.is_empty())
            .collect();
        languages.insert(country.to_uppercase(), langs);
    }
    Ok(languages)
}
