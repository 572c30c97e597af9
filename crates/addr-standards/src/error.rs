//! Error types for configuration loading.

use std::path::PathBuf;

use addr_template::TemplateError;
use thiserror::Error;

/// Errors raised while loading the configuration store.
///
/// Every variant is a load-time failure; once a store is built, composing an
/// address never fails.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    /// Configuration directory not found.
    #[error("configuration directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML {origin}: {source}")]
    Yaml {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unexpected structure in {origin}: expected {expected}")]
    UnexpectedShape {
        origin: String,
        expected: &'static str,
    },

    #[error("invalid {field} for {country}: {source}")]
    Template {
        country: String,
        field: &'static str,
        #[source]
        source: TemplateError,
    },

    #[error("invalid pattern {pattern:?} in {scope}: {source}")]
    Pattern {
        scope: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid add_component {value:?} for {country}: expected <component>=<value>")]
    InvalidAssignment { country: String, value: String },

    #[error("unknown component {name:?} in {origin}")]
    UnknownComponent { name: String, origin: String },

    #[error("no default formatting rule in {origin}")]
    MissingDefaultRule { origin: String },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn yaml(origin: impl Into<String>, source: serde_yaml::Error) -> Self {
        Self::Yaml {
            origin: origin.into(),
            source,
        }
    }
}

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, StandardsError>;
