use std::fmt;
use std::str::FromStr;

use crate::ast::Node;
use crate::error::{Result, TemplateError};
use crate::parser;
use crate::render::{TemplateContext, render_nodes};

/// A parsed address template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    nodes: Vec<Node>,
}

impl Template {
    /// Parse template source.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] for malformed tags or unbalanced sections.
    pub fn parse(source: &str) -> Result<Self> {
        Ok(Self {
            source: source.to_string(),
            nodes: parser::parse(source)?,
        })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Render against `ctx`.
    pub fn render<C: TemplateContext + ?Sized>(&self, ctx: &C) -> String {
        let mut out = String::with_capacity(self.source.len());
        render_nodes(&self.nodes, ctx, &mut out);
        out
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
