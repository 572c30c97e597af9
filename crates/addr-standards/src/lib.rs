//! Address formatting configuration: rule tables, component schema, code
//! tables, languages and abbreviations.
//!
//! Every table is parsed and validated once, when a [`ConfigStore`] is built.
//! Templates are parsed into node trees and every pattern is compiled, so a
//! loaded store never fails at compose time.
//!
//! # Configuration Directory Structure
//!
//! ```text
//! conf/
//! ├── countries/
//! │   └── worldwide.yaml   # formatting rules per country code, plus `default`
//! ├── components.yaml      # canonical components and their aliases
//! ├── state_codes.yaml     # country -> code -> name(s)
//! ├── county_codes.yaml    # country -> code -> name(s)
//! ├── country2lang.yaml    # country -> "lang,lang"
//! ├── country_codes.yaml   # country -> display name
//! └── abbreviations/
//!     └── en.yaml          # component -> literal -> abbreviation
//! ```
//!
//! The same layout is compiled into the crate and used unless
//! `ADDRESS_FORMATTING_CONF_DIR` names another directory.
//!
//! # Example
//!
//! ```rust,ignore
//! use addr_standards::ConfigStore;
//!
//! let store = ConfigStore::load_default()?;
//! let rule = store.rule("US").unwrap_or(store.default_rule());
//! ```

pub mod abbreviations;
pub mod codes;
mod embedded;
pub mod error;
pub mod paths;
pub mod registry;
pub mod rules;
pub mod schema;
mod yaml;

pub use abbreviations::{Abbreviation, AbbreviationTable};
pub use codes::{CodeEntry, CodeName, CodeTable, CountryCodes};
pub use error::{Result, StandardsError};
pub use paths::{CONF_DIR_ENV_VAR, conf_dir_override};
pub use registry::{ConfigSources, ConfigStore, ConfigSummary, embedded_store};
pub use rules::{ComponentAssignment, FormattingRule, ReplaceTarget, Replacement};
pub use schema::{ComponentSchema, SchemaEntry};
