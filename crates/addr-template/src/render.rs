//! Template rendering.
//!
//! Rendering is a pure function of the node tree and the context: a missing
//! variable renders as the empty string and nothing here can fail.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::ast::{ALTERNATIVE_SEPARATOR, Node};

/// Source of variable values for rendering.
pub trait TemplateContext {
    /// The value bound to `name`, if any.
    fn value(&self, name: &str) -> Option<&str>;

    /// True when `name` is bound to a non-empty value.
    fn is_present(&self, name: &str) -> bool {
        self.value(name).is_some_and(|v| !v.is_empty())
    }
}

impl<S: BuildHasher> TemplateContext for HashMap<String, String, S> {
    fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl TemplateContext for BTreeMap<String, String> {
    fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<T: TemplateContext + ?Sized> TemplateContext for &T {
    fn value(&self, name: &str) -> Option<&str> {
        (**self).value(name)
    }
}

pub(crate) fn render_nodes<C>(nodes: &[Node], ctx: &C, out: &mut String)
where
    C: TemplateContext + ?Sized,
{
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Variable { name, escape } => {
                if let Some(value) = ctx.value(name) {
                    if *escape {
                        escape_html(value, out);
                    } else {
                        out.push_str(value);
                    }
                }
            }
            Node::Section {
                name,
                inverted,
                children,
            } => {
                if ctx.is_present(name) != *inverted {
                    render_nodes(children, ctx, out);
                }
            }
            Node::First(children) => {
                let mut inner = String::new();
                render_nodes(children, ctx, &mut inner);
                out.push_str(first_alternative(&inner));
            }
        }
    }
}

/// Select the first non-empty `||`-separated alternative, trimmed.
pub fn first_alternative(rendered: &str) -> &str {
    rendered
        .trim()
        .split(ALTERNATIVE_SEPARATOR)
        .map(str::trim)
        .find(|alternative| !alternative.is_empty())
        .unwrap_or("")
}

fn escape_html(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_alternative_skips_blank_entries() {
        assert_eq!(first_alternative("  ||  || Springfield || Shelbyville "), "Springfield");
        assert_eq!(first_alternative(" || "), "");
        assert_eq!(first_alternative(""), "");
    }

    #[test]
    fn escapes_markup_characters() {
        let mut out = String::new();
        escape_html("Tom & Jerry's <b>\"", &mut out);
        assert_eq!(out, "Tom &amp; Jerry&#39;s &lt;b&gt;&quot;");
    }
}
