//! Configuration data compiled into the binary.
//!
//! The files under `data/` follow the same layout as a configuration
//! directory (see [`crate::paths::layout`]).

pub(crate) const WORLDWIDE: &str = include_str!("../data/countries/worldwide.yaml");
pub(crate) const COMPONENTS: &str = include_str!("../data/components.yaml");
pub(crate) const STATE_CODES: &str = include_str!("../data/state_codes.yaml");
pub(crate) const COUNTY_CODES: &str = include_str!("../data/county_codes.yaml");
pub(crate) const COUNTRY_TO_LANGUAGE: &str = include_str!("../data/country2lang.yaml");
pub(crate) const COUNTRY_NAMES: &str = include_str!("../data/country_codes.yaml");

/// Abbreviation files as `(language, contents)`.
pub(crate) const ABBREVIATIONS: &[(&str, &str)] = &[
    ("de", include_str!("../data/abbreviations/de.yaml")),
    ("en", include_str!("../data/abbreviations/en.yaml")),
    ("es", include_str!("../data/abbreviations/es.yaml")),
    ("fr", include_str!("../data/abbreviations/fr.yaml")),
    ("nl", include_str!("../data/abbreviations/nl.yaml")),
];
