//! State and county code tables (`state_codes.yaml`, `county_codes.yaml`).
//!
//! Both files share one layout, `country -> code -> name`, where a name is
//! either a plain string or a mapping of variants:
//!
//! ```yaml
//! US:
//!     DC: District of Columbia
//! CH:
//!     GE:
//!         default: Genève
//!         alt_de: Genf
//! ```

use std::collections::BTreeMap;

use addr_model::CaseInsensitiveSet;
use serde_yaml::Value;

use crate::error::{Result, StandardsError};
use crate::yaml::{parse_mapping, scalar_to_string, string_entries};

const DEFAULT_VARIANT: &str = "default";

/// Display name plus every spelling a code is known by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeName {
    pub display: String,
    pub variants: Vec<String>,
}

impl CodeName {
    fn matches(&self, candidates: &CaseInsensitiveSet) -> bool {
        self.variants.iter().any(|v| candidates.contains(v))
    }
}

/// One code entry of a country's table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    pub code: String,
    pub name: CodeName,
}

/// Codes for one country, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryCodes {
    entries: Vec<CodeEntry>,
}

impl CountryCodes {
    pub fn entries(&self) -> &[CodeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose code or any name variant is among `candidates`.
    pub fn find_by_code_or_name(&self, candidates: &CaseInsensitiveSet) -> Option<&CodeEntry> {
        self.entries
            .iter()
            .find(|entry| candidates.contains(&entry.code) || entry.name.matches(candidates))
    }

    /// First entry with a name variant equal to `name`, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&CodeEntry> {
        let candidates = CaseInsensitiveSet::new([name]);
        self.entries
            .iter()
            .find(|entry| entry.name.matches(&candidates))
    }
}

/// Per-country code table keyed by uppercase country code.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    countries: BTreeMap<String, CountryCodes>,
}

impl CodeTable {
    /// Parse a code table document.
    ///
    /// # Errors
    ///
    /// Fails on malformed YAML or entries that are neither strings nor
    /// mappings of strings.
    pub fn parse(text: &str, origin: &str) -> Result<Self> {
        let mut countries = BTreeMap::new();
        for (country, value) in string_entries(parse_mapping(text, origin)?, origin)? {
            let Value::Mapping(codes) = value else {
                return Err(shape_error(origin, "a mapping of codes per country"));
            };
            let mut entries = Vec::with_capacity(codes.len());
            for (code, name) in string_entries(codes, origin)? {
                entries.push(CodeEntry {
                    code,
                    name: parse_name(&name, origin)?,
                });
            }
            countries.insert(country.to_uppercase(), CountryCodes { entries });
        }
        Ok(Self { countries })
    }

    pub fn country(&self, country_code: &str) -> Option<&CountryCodes> {
        self.countries.get(&country_code.to_uppercase())
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    pub fn code_count(&self) -> usize {
        self.countries.values().map(CountryCodes::len).sum()
    }
}

fn parse_name(value: &Value, origin: &str) -> Result<CodeName> {
    if let Some(name) = scalar_to_string(value) {
        return Ok(CodeName {
            display: name.clone(),
            variants: vec![name],
        });
    }
    let Value::Mapping(variants) = value else {
        return Err(shape_error(origin, "a name or a mapping of name variants"));
    };
    let mut display = None;
    let mut names = Vec::with_capacity(variants.len());
    for (key, name) in variants {
        let name = scalar_to_string(name)
            .ok_or_else(|| shape_error(origin, "string name variants"))?;
        if display.is_none() && key.as_str() == Some(DEFAULT_VARIANT) {
            display = Some(name.clone());
        }
        names.push(name);
    }
    let display = display
        .or_else(|| names.first().cloned())
        .ok_or_else(|| shape_error(origin, "at least one name variant"))?;
    Ok(CodeName {
        display,
        variants: names,
    })
}

fn shape_error(origin: &str, expected: &'static str) -> StandardsError {
    StandardsError::UnexpectedShape {
        origin: origin.to_string(),
        expected,
    }
}
