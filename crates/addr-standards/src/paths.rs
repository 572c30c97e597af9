//! Configuration directory resolution.

use std::path::PathBuf;

/// Environment variable for overriding the configuration directory.
pub const CONF_DIR_ENV_VAR: &str = "ADDRESS_FORMATTING_CONF_DIR";

/// The configuration directory named by `ADDRESS_FORMATTING_CONF_DIR`, if set.
///
/// When unset, callers fall back to the data embedded in the binary.
///
/// # Example
///
/// ```rust,ignore
/// let store = match addr_standards::conf_dir_override() {
///     Some(dir) => ConfigStore::load_from_dir(&dir)?,
///     None => ConfigStore::load_embedded()?,
/// };
/// ```
pub fn conf_dir_override() -> Option<PathBuf> {
    std::env::var_os(CONF_DIR_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Layout of a configuration directory, relative to its root.
pub mod layout {
    pub const WORLDWIDE: &str = "countries/worldwide.yaml";
    pub const COMPONENTS: &str = "components.yaml";
    pub const STATE_CODES: &str = "state_codes.yaml";
    pub const COUNTY_CODES: &str = "county_codes.yaml";
    pub const COUNTRY_TO_LANGUAGE: &str = "country2lang.yaml";
    pub const COUNTRY_NAMES: &str = "country_codes.yaml";
    pub const ABBREVIATIONS_DIR: &str = "abbreviations";
}
