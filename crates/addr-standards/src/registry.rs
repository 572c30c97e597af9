//! The configuration store: every lookup table the composer consumes.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Serialize;

use crate::abbreviations::{AbbreviationTable, parse_languages};
use crate::codes::{CodeTable, CountryCodes};
use crate::embedded;
use crate::error::{Result, StandardsError};
use crate::paths::{conf_dir_override, layout};
use crate::rules::{FormattingRule, parse_rules};
use crate::schema::ComponentSchema;
use crate::yaml::{parse_mapping, scalar_to_string, string_entries};

/// Raw text of every configuration file, before parsing.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    pub worldwide: String,
    pub components: String,
    pub state_codes: String,
    pub county_codes: String,
    pub country_to_language: String,
    pub country_names: String,
    /// `(language, contents)` per abbreviation file.
    pub abbreviations: Vec<(String, String)>,
}

impl ConfigSources {
    /// The data compiled into the binary.
    pub fn embedded() -> Self {
        Self {
            worldwide: embedded::WORLDWIDE.to_string(),
            components: embedded::COMPONENTS.to_string(),
            state_codes: embedded::STATE_CODES.to_string(),
            county_codes: embedded::COUNTY_CODES.to_string(),
            country_to_language: embedded::COUNTRY_TO_LANGUAGE.to_string(),
            country_names: embedded::COUNTRY_NAMES.to_string(),
            abbreviations: embedded::ABBREVIATIONS
                .iter()
                .map(|(lang, text)| ((*lang).to_string(), (*text).to_string()))
                .collect(),
        }
    }

    /// Read a configuration directory.
    ///
    /// The rule table and component schema are required; the code tables,
    /// language table, country names and abbreviation directory may be absent.
    ///
    /// # Errors
    ///
    /// Fails when the directory or a required file is missing or unreadable.
    pub fn read_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(StandardsError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }
        Ok(Self {
            worldwide: read_required(&dir.join(layout::WORLDWIDE))?,
            components: read_required(&dir.join(layout::COMPONENTS))?,
            state_codes: read_optional(&dir.join(layout::STATE_CODES))?,
            county_codes: read_optional(&dir.join(layout::COUNTY_CODES))?,
            country_to_language: read_optional(&dir.join(layout::COUNTRY_TO_LANGUAGE))?,
            country_names: read_optional(&dir.join(layout::COUNTRY_NAMES))?,
            abbreviations: read_abbreviations(&dir.join(layout::ABBREVIATIONS_DIR))?,
        })
    }
}

fn read_required(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))
}

fn read_optional(path: &Path) -> Result<String> {
    if path.exists() {
        read_required(path)
    } else {
        tracing::debug!(path = %path.display(), "optional configuration file absent");
        Ok(String::new())
    }
}

fn read_abbreviations(dir: &Path) -> Result<Vec<(String, String)>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| StandardsError::io(dir, e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml"))
        })
        .collect();
    paths.sort();

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let Some(lang) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.split('.').next())
        else {
            continue;
        };
        files.push((lang.to_lowercase(), read_required(&path)?));
    }
    Ok(files)
}

/// Immutable lookup tables shared by every compose call.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    default_rule: FormattingRule,
    rules: BTreeMap<String, FormattingRule>,
    schema: ComponentSchema,
    state_codes: CodeTable,
    county_codes: CodeTable,
    languages: BTreeMap<String, Vec<String>>,
    abbreviations: BTreeMap<String, AbbreviationTable>,
    country_names: BTreeMap<String, String>,
}

impl ConfigStore {
    /// Parse and validate every table.
    ///
    /// # Errors
    ///
    /// Returns the first parse or validation failure, naming its file.
    pub fn from_sources(sources: &ConfigSources) -> Result<Self> {
        let table = parse_rules(&sources.worldwide, layout::WORLDWIDE)?;
        let schema = ComponentSchema::parse(&sources.components, layout::COMPONENTS)?;
        let state_codes = CodeTable::parse(&sources.state_codes, layout::STATE_CODES)?;
        let county_codes = CodeTable::parse(&sources.county_codes, layout::COUNTY_CODES)?;
        let languages = parse_languages(&sources.country_to_language, layout::COUNTRY_TO_LANGUAGE)?;
        let country_names = parse_country_names(&sources.country_names, layout::COUNTRY_NAMES)?;

        let mut abbreviations = BTreeMap::new();
        for (lang, text) in &sources.abbreviations {
            let origin = format!("{}/{lang}.yaml", layout::ABBREVIATIONS_DIR);
            abbreviations.insert(lang.clone(), AbbreviationTable::parse(text, &origin)?);
        }

        let store = Self {
            default_rule: table.default_rule,
            rules: table.rules,
            schema,
            state_codes,
            county_codes,
            languages,
            abbreviations,
            country_names,
        };
        tracing::debug!(
            countries = store.rules.len(),
            languages = store.abbreviations.len(),
            "configuration store loaded"
        );
        Ok(store)
    }

    /// Load the data compiled into the binary.
    pub fn load_embedded() -> Result<Self> {
        Self::from_sources(&ConfigSources::embedded())
    }

    /// Load a configuration directory laid out like the embedded data.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        tracing::info!(dir = %dir.display(), "loading address formatting configuration");
        Self::from_sources(&ConfigSources::read_dir(dir)?)
    }

    /// Load from `ADDRESS_FORMATTING_CONF_DIR` when set, embedded data otherwise.
    pub fn load_default() -> Result<Self> {
        match conf_dir_override() {
            Some(dir) => Self::load_from_dir(dir),
            None => Self::load_embedded(),
        }
    }

    /// Rule for a country code, if the table has one.
    pub fn rule(&self, country_code: &str) -> Option<&FormattingRule> {
        self.rules.get(&country_code.to_uppercase())
    }

    pub fn default_rule(&self) -> &FormattingRule {
        &self.default_rule
    }

    /// Country rules in code order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &FormattingRule)> {
        self.rules.iter().map(|(code, rule)| (code.as_str(), rule))
    }

    pub fn schema(&self) -> &ComponentSchema {
        &self.schema
    }

    pub fn state_codes(&self, country_code: &str) -> Option<&CountryCodes> {
        self.state_codes.country(country_code)
    }

    pub fn county_codes(&self, country_code: &str) -> Option<&CountryCodes> {
        self.county_codes.country(country_code)
    }

    /// Languages for a country, in priority order.
    pub fn languages(&self, country_code: &str) -> Option<&[String]> {
        self.languages
            .get(&country_code.to_uppercase())
            .map(Vec::as_slice)
    }

    pub fn abbreviations(&self, language: &str) -> Option<&AbbreviationTable> {
        self.abbreviations.get(&language.to_lowercase())
    }

    /// Display name for a country code.
    pub fn country_name(&self, country_code: &str) -> Option<&str> {
        self.country_names
            .get(&country_code.to_uppercase())
            .map(String::as_str)
    }

    /// Table sizes, for diagnostics.
    pub fn summary(&self) -> ConfigSummary {
        ConfigSummary {
            countries: self.rules.len(),
            components: self.schema.entries().len(),
            aliases: self.schema.alias_count(),
            state_code_countries: self.state_codes.country_count(),
            state_codes: self.state_codes.code_count(),
            county_code_countries: self.county_codes.country_count(),
            county_codes: self.county_codes.code_count(),
            language_countries: self.languages.len(),
            abbreviation_languages: self.abbreviations.keys().cloned().collect(),
            abbreviation_rules: self
                .abbreviations
                .values()
                .map(AbbreviationTable::rule_count)
                .sum(),
            country_names: self.country_names.len(),
        }
    }
}

/// Table counts of a loaded [`ConfigStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSummary {
    pub countries: usize,
    pub components: usize,
    pub aliases: usize,
    pub state_code_countries: usize,
    pub state_codes: usize,
    pub county_code_countries: usize,
    pub county_codes: usize,
    pub language_countries: usize,
    pub abbreviation_languages: Vec<String>,
    pub abbreviation_rules: usize,
    pub country_names: usize,
}

fn parse_country_names(text: &str, origin: &str) -> Result<BTreeMap<String, String>> {
    let mut names = BTreeMap::new();
    for (code, value) in string_entries(parse_mapping(text, origin)?, origin)? {
        let name = scalar_to_string(&value).ok_or_else(|| StandardsError::UnexpectedShape {
            origin: origin.to_string(),
            expected: "a country name per code",
        })?;
        names.insert(code.to_uppercase(), name);
    }
    Ok(names)
}

static EMBEDDED_STORE: OnceLock<ConfigStore> = OnceLock::new();

/// Process-wide store built from the embedded data on first access.
///
/// The embedded rule table covers the countries listed in
/// `data/countries/worldwide.yaml` (DE, FR, GB, NL, US, their territories and
/// a few more). Any other country code formats with the `default` rule. Load
/// the full upstream `address-formatting` configuration with
/// [`ConfigStore::load_from_dir`] or `ADDRESS_FORMATTING_CONF_DIR` for
/// complete coverage; [`ConfigStore::rule`] tells whether a code is listed.
///
/// # Errors
///
/// Returns the load error if the embedded data fails to parse. A failed load
/// is retried on the next call.
pub fn embedded_store() -> Result<&'static ConfigStore> {
    if let Some(store) = EMBEDDED_STORE.get() {
        return Ok(store);
    }
    let store = ConfigStore::load_embedded()?;
    Ok(EMBEDDED_STORE.get_or_init(|| store))
}
