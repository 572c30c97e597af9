//! Template syntax tree.

/// Name of the section that selects the first non-empty alternative.
pub const FIRST_SECTION: &str = "first";

/// Separator between alternatives inside a `first` section.
pub const ALTERNATIVE_SEPARATOR: &str = "||";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text copied to the output.
    Text(String),
    /// `{{name}}` (escaped) or `{{{name}}}` / `{{& name}}` (verbatim).
    Variable { name: String, escape: bool },
    /// `{{#name}}...{{/name}}` or, when inverted, `{{^name}}...{{/name}}`.
    Section {
        name: String,
        inverted: bool,
        children: Vec<Node>,
    },
    /// `{{#first}} a || b || c {{/first}}`.
    First(Vec<Node>),
}
