//! Address component model.
//!
//! - [`Component`]: the closed set of canonical component names
//! - [`RawComponents`]: caller-supplied fields, arbitrary keys
//! - [`NormalizedComponents`]: canonical fields produced by normalization
//! - [`CaseInsensitiveSet`]: case-insensitive name matching for code tables

pub mod component;
pub mod components;
pub mod error;
pub mod lookup;

pub use component::Component;
pub use components::{ABBREVIATE_KEY, NormalizedComponents, RawComponents};
pub use error::{ModelError, Result};
pub use lookup::CaseInsensitiveSet;
