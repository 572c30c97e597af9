//! Address template language.
//!
//! A small mustache dialect, as used by the address-formatting rule tables:
//!
//! | syntax | meaning |
//! |--------|---------|
//! | `{{{name}}}`, `{{& name}}` | value of `name`, verbatim |
//! | `{{name}}` | value of `name`, HTML-escaped |
//! | `{{#name}}…{{/name}}` | body only when `name` is non-empty |
//! | `{{^name}}…{{/name}}` | body only when `name` is missing or empty |
//! | `{{#first}} a \|\| b {{/first}}` | first non-empty alternative |
//! | `{{! … }}` | comment |
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use addr_template::Template;
//!
//! let template = Template::parse("{{#first}} {{{town}}} || {{{city}}} {{/first}}").unwrap();
//! let ctx = HashMap::from([("city".to_string(), "Springfield".to_string())]);
//! assert_eq!(template.render(&ctx), "Springfield");
//! ```

pub mod ast;
pub mod error;
pub mod parser;
pub mod render;
pub mod template;

pub use ast::Node;
pub use error::{Result, TemplateError};
pub use render::{TemplateContext, first_alternative};
pub use template::Template;
